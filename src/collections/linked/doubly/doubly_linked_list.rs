use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::MaybeUninit;

use super::{CursorMut, Iter, IterMut, Node, NodePtr};
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// A list with links in both directions, bounded by two permanent sentinel nodes.
///
/// The `header` sentinel sits before the first element and the `trailer` sentinel after the last,
/// so every element always has a node on both sides. This means that insertion and removal never
/// need to special case the ends of the list: adding to the front is inserting between `header`
/// and its successor, and adding to the back is inserting between the predecessor of `trailer` and
/// `trailer` itself. The sentinels never hold a value and are never yielded by iteration.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `add_to_front/back` | `O(1)` |
/// | `remove_from_front/back` | `O(1)` |
/// | `CursorMut::remove_current` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
pub struct DoublyLinkedList<T> {
    pub(crate) header: NodePtr<T>,
    pub(crate) trailer: NodePtr<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements. This allocates both sentinel nodes.
    pub fn new() -> DoublyLinkedList<T> {
        let header = NodePtr::sentinel();
        let trailer = NodePtr::sentinel();
        *header.next_mut() = Some(trailer);
        *trailer.prev_mut() = Some(header);

        DoublyLinkedList {
            header,
            trailer,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: first_node only returns interior nodes.
        self.first_node().map(|node| unsafe { node.value() })
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: first_node only returns interior nodes.
        self.first_node().map(|node| unsafe { node.value_mut() })
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: last_node only returns interior nodes.
        self.last_node().map(|node| unsafe { node.value() })
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: last_node only returns interior nodes.
        self.last_node().map(|node| unsafe { node.value_mut() })
    }

    /// Adds the provided element to the front of the list.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::new();
    /// list.add_to_front(1);
    /// list.add_to_front(2);
    /// list.add_to_front(3);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn add_to_front(&mut self, value: T) {
        let next = self.header.next_link();
        self.insert_between(self.header, next, value);
    }

    /// Adds the provided element to the back of the list.
    pub fn add_to_back(&mut self, value: T) {
        let prev = self.trailer.prev_link();
        self.insert_between(prev, self.trailer, value);
    }

    /// Removes the first element from the list and returns it. Does nothing if the list is empty.
    pub fn remove_from_front(&mut self) -> Option<T> {
        self.unlink(self.header.next_link())
    }

    /// Removes the last element from the list and returns it. Does nothing if the list is empty.
    pub fn remove_from_back(&mut self) -> Option<T> {
        self.unlink(self.trailer.prev_link())
    }

    /// Removes every element from the list, leaving only the sentinels.
    pub fn clear(&mut self) {
        while self.remove_from_front().is_some() {}
    }

    /// Returns a cursor pointing at the first element, or at the trailer if the list is empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            current: self.header.next_link(),
            list: self,
        }
    }

    /// Returns a cursor pointing at the last element, or at the header if the list is empty.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            current: self.trailer.prev_link(),
            list: self,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> DoublyLinkedList<T> {
    /// Returns true if `node` is one of this list's sentinels.
    pub(crate) fn is_sentinel(&self, node: NodePtr<T>) -> bool {
        node == self.header || node == self.trailer
    }

    pub(crate) fn first_node(&self) -> Option<NodePtr<T>> {
        let node = self.header.next_link();
        (node != self.trailer).then_some(node)
    }

    pub(crate) fn last_node(&self) -> Option<NodePtr<T>> {
        let node = self.trailer.prev_link();
        (node != self.header).then_some(node)
    }

    /// Links a new node holding `value` between two adjacent nodes, which may be sentinels.
    ///
    /// # Panics
    /// Panics if the length of the list would exceed [`usize::MAX`].
    pub(crate) fn insert_between(
        &mut self,
        prev: NodePtr<T>,
        next: NodePtr<T>,
        value: T,
    ) -> NodePtr<T> {
        debug_assert!(*prev.next() == Some(next) && *next.prev() == Some(prev));
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value: MaybeUninit::new(value),
            prev: Some(prev),
            next: Some(next),
        });

        *prev.next_mut() = Some(node);
        *next.prev_mut() = Some(node);
        node
    }

    /// Unlinks and frees `node`, returning its value. Sentinels are never removed; passing one is
    /// ignored and returns `None`.
    pub(crate) fn unlink(&mut self, node: NodePtr<T>) -> Option<T> {
        if self.is_sentinel(node) {
            return None;
        }

        let prev = node.prev_link();
        let next = node.next_link();
        *prev.next_mut() = Some(next);
        *next.prev_mut() = Some(prev);
        self.len -= 1;

        // SAFETY: The node isn't a sentinel, so its value is initialized. It is now unreachable.
        Some(unsafe { node.take_node().value.assume_init() })
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_links(&self) {
        assert!(self.header.prev().is_none() && self.trailer.next().is_none());

        let mut count = 0;
        let mut curr = self.header;
        while curr != self.trailer {
            // UNWRAP: This needs to panic if a node before the trailer has no next node.
            let next = curr.next().unwrap();
            assert!(*next.prev() == Some(curr), "Links should be symmetric.");
            curr = next;
            count += 1;
        }
        assert_eq!(count - 1, self.len, "The trailer should be reached in len + 1 steps.");
    }
}

impl<T> NodePtr<T> {
    /// Returns the next node, for nodes which are known to have one: the header or any element.
    pub(crate) fn next_link(&self) -> NodePtr<T> {
        // SAFETY: Only the trailer lacks a next node, and it is never asked for one.
        unsafe { self.next().unwrap_unchecked() }
    }

    /// Returns the previous node, for nodes which are known to have one: the trailer or any
    /// element.
    pub(crate) fn prev_link(&self) -> NodePtr<T> {
        // SAFETY: Only the header lacks a previous node, and it is never asked for one.
        unsafe { self.prev().unwrap_unchecked() }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_to_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
        // The sentinels hold no value, so reclaiming them drops nothing but the nodes.
        drop(self.header.take_node());
        drop(self.trailer.take_node());
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ") <-> (")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ")")
    }
}
