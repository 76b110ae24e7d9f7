use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{DoublyLinkedList, NodePtr};

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // There is no point rewriting all of this when the iterator can just hold the list and remove
    // from either end.
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_from_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_from_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

/// The range of nodes that a borrowing iterator has yet to yield. `front` and `back` are only
/// dereferenced while `len` is non-zero, at which point both are elements rather than sentinels.
pub(crate) struct Remaining<T> {
    pub front: NodePtr<T>,
    pub back: NodePtr<T>,
    pub len: usize,
}

impl<T> Remaining<T> {
    pub fn of(list: &DoublyLinkedList<T>) -> Remaining<T> {
        Remaining {
            front: list.header.next_link(),
            back: list.trailer.prev_link(),
            len: list.len,
        }
    }

    pub fn next_front(&mut self) -> Option<NodePtr<T>> {
        self.len = self.len.checked_sub(1)?;
        let node = self.front;
        self.front = node.next_link();
        Some(node)
    }

    pub fn next_back(&mut self) -> Option<NodePtr<T>> {
        self.len = self.len.checked_sub(1)?;
        let node = self.back;
        self.back = node.prev_link();
        Some(node)
    }
}

impl<T> Clone for Remaining<T> {
    fn clone(&self) -> Self {
        Remaining {
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            remaining: Remaining::of(self),
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    pub(crate) remaining: Remaining<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: Remaining only yields element nodes, each of them once.
        self.remaining.next_front().map(|node| unsafe { node.value_mut() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: Remaining only yields element nodes, each of them once.
        self.remaining.next_back().map(|node| unsafe { node.value_mut() })
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.remaining.len
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            remaining: Remaining::of(self),
            _phantom: PhantomData,
        }
    }
}

/// An iterator over the elements of a [`DoublyLinkedList`], walking from the node after the header
/// up to, but excluding, the trailer.
pub struct Iter<'a, T> {
    pub(crate) remaining: Remaining<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: Remaining only yields element nodes.
        self.remaining.next_front().map(|node| unsafe { node.value() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: Remaining only yields element nodes.
        self.remaining.next_back().map(|node| unsafe { node.value() })
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.remaining.len
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            remaining: self.remaining.clone(),
            _phantom: PhantomData,
        }
    }
}
