use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{CircularLinkedList, NodePtr, RingContents, RingState};

impl<T> IntoIterator for CircularLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    pub(crate) list: CircularLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a CircularLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let start = match self.state {
            RingState::Empty => None,
            RingState::Full(RingContents { tail, .. }) => Some(tail.next()),
        };

        Iter {
            start,
            next: start,
            remaining: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// An iterator making a single revolution of a [`CircularLinkedList`], starting from the head.
///
/// The walk ends when following a link leads back to the starting node. The remaining count is
/// only used to report the iterator's length.
pub struct Iter<'a, T> {
    pub(crate) start: Option<NodePtr<T>>,
    pub(crate) next: Option<NodePtr<T>>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        let following = node.next();
        self.next = (Some(following) != self.start).then_some(following);
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            start: self.start,
            next: self.next,
            remaining: self.remaining,
            _phantom: PhantomData,
        }
    }
}
