use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use derive_more::IsVariant;

use super::{CursorMut, Iter, IterMut, Link, Node, NodePtr};
use crate::collections::linked::{Length, ONE};
use crate::util::fmt::DebugIter;

/// A list with links in a single direction, from the head towards the tail.
///
/// The list keeps a pointer to both ends, so elements can be added to either end in constant time,
/// but only removed from the front. Insertion and removal relative to a specific node go through a
/// [`CursorMut`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `add_first/last` | `O(1)` |
/// | `remove_first` | `O(1)` |
/// | `CursorMut::insert_after` | `O(1)` |
/// | `CursorMut::remove_after` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
pub struct SinglyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Adds the provided element to the front of the list.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::new();
    /// list.add_first(2);
    /// list.add_first(1);
    /// assert_eq!(list.print().collect::<Vec<_>>(), [&1, &2]);
    /// ```
    pub fn add_first(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => {
                contents.len.increment();
                contents.head = NodePtr::from_node(Node {
                    value,
                    next: Some(contents.head),
                });
            },
        }
    }

    /// Adds the provided element to the back of the list.
    pub fn add_last(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.link_after(contents.tail, value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty. Removing
    /// from an empty list does nothing.
    pub fn remove_first(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = head.take_node();

                match len.decremented() {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        *head = unsafe { node.next.unwrap_unchecked() };
                        *len = new_len;
                    },
                    // The sole element was removed, which clears both head and tail.
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Returns a lazy iterator over the list from head to tail. Each call starts a new pass over
    /// the list.
    pub fn print(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Removes every element from the list, front to back.
    pub fn clear(&mut self) {
        while self.remove_first().is_some() {}
    }

    /// Returns a cursor pointing at the first node of the list, or at no node if the list is empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            current: self.head_link(),
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

impl<T> SinglyLinkedList<T> {
    pub(crate) const fn head_link(&self) -> Link<T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head),
        }
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> ListContents<T> {
    /// Links a new node holding `value` directly after `prev`, moving the tail if `prev` was the
    /// tail.
    pub fn link_after(&mut self, prev: NodePtr<T>, value: T) {
        self.len.increment();

        let node = NodePtr::from_node(Node {
            value,
            next: *prev.next(),
        });

        *prev.next_mut() = Some(node);
        if prev == self.tail {
            self.tail = node;
        }
    }

    /// Unlinks the node directly after `prev`, if there is one. `prev` remains in the list, so the
    /// list can't become empty.
    pub fn unlink_after(&mut self, prev: NodePtr<T>) -> Option<T> {
        let node = (*prev.next())?.take_node();

        *prev.next_mut() = node.next;
        if node.next.is_none() {
            self.tail = prev;
        }
        // SAFETY: Both prev and the removed node were in the list, so the old length was at least 2.
        self.len = unsafe { self.len.decremented().unwrap_unchecked() };

        Some(node.value)
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ")")
    }
}
