use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Iter, NodePtr};
use crate::collections::linked::{Length, ONE};
#[doc(inline)]
pub use crate::util::error::{EmptyStructure, NotFound, RemovalError};
use crate::util::fmt::DebugIter;

/// A singly linked list whose last node links back to the first, forming a ring.
///
/// Only the `tail` of the ring is stored. Its successor is the logical head, so both ends are
/// reachable in constant time: appending places a node between the tail and the head and then makes
/// it the new tail.
///
/// Traversal starts at the head and stops once it arrives back at the node it started from, rather
/// than at a missing link.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the CircularLinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `append` | `O(1)` |
/// | `remove_front` | `O(1)` |
/// | `remove` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
pub struct CircularLinkedList<T> {
    pub(crate) state: RingState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum RingState<T> {
    Empty,
    Full(RingContents<T>),
}

use RingState::*;

pub(crate) struct RingContents<T> {
    pub len: Length,
    pub tail: NodePtr<T>,
}

impl<T> CircularLinkedList<T> {
    /// Creates a new CircularLinkedList with no elements.
    pub const fn new() -> CircularLinkedList<T> {
        CircularLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(RingContents { len, .. }) => len.get(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element of the ring, the successor of the tail.
    pub const fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(RingContents { tail, .. }) => Some(tail.next().value()),
        }
    }

    /// Returns a reference to the tail of the ring, the most recently appended element.
    pub const fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(RingContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Appends `value` after the current tail and makes it the new tail.
    ///
    /// # Panics
    /// Panics if the length of the list would exceed [`usize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::CircularLinkedList;
    /// let mut ring = CircularLinkedList::new();
    /// ring.append(10);
    /// ring.append(20);
    /// assert_eq!(ring.front(), Some(&10));
    /// assert_eq!(ring.back(), Some(&20));
    /// ```
    pub fn append(&mut self, value: T) {
        match &mut self.state {
            Empty => {
                self.state = Full(RingContents {
                    len: ONE,
                    tail: NodePtr::ring_of_one(value),
                })
            },
            Full(RingContents { len, tail }) => {
                len.increment();

                let node = NodePtr::ring_of_one(value);
                *node.next_mut() = tail.next();
                *tail.next_mut() = node;
                *tail = node;
            },
        }
    }

    /// Returns a lazy iterator making exactly one walk around the ring, starting from the head.
    ///
    /// # Errors
    /// Returns [`EmptyStructure`] if the list has no elements, since there is no ring to walk.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::CircularLinkedList;
    /// let ring = CircularLinkedList::from_iter([10, 20, 30]);
    /// assert_eq!(ring.print().unwrap().collect::<Vec<_>>(), [&10, &20, &30]);
    /// assert!(CircularLinkedList::<u8>::new().print().is_err());
    /// ```
    pub fn print(&self) -> Result<Iter<'_, T>, EmptyStructure> {
        match self.state {
            Empty => Err(EmptyStructure),
            Full(_) => Ok(self.iter()),
        }
    }

    /// Removes the head of the ring and returns it, if the list isn't empty.
    pub fn remove_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(RingContents { len, tail }) => {
                let head = tail.next();
                match len.decremented() {
                    Some(new_len) => {
                        *tail.next_mut() = head.next();
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }
                Some(head.take_node().value)
            },
        }
    }

    /// Releases every node with a single walk around the ring, starting from the head. Clearing an
    /// empty list does nothing.
    pub fn clear(&mut self) {
        if let Full(RingContents { tail, .. }) = mem::replace(&mut self.state, Empty) {
            let start = tail.next();
            let mut curr = start;
            loop {
                let next = curr.next();
                drop(curr.take_node());
                if next == start {
                    break;
                }
                curr = next;
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> CircularLinkedList<T> {
    /// Removes the first node, starting from the head, whose value is equal to `value` and returns
    /// the removed value. The ring is walked at most once.
    ///
    /// If the removed node was the tail, its predecessor becomes the new tail. If it was the only
    /// node, the list becomes empty.
    ///
    /// # Errors
    /// - [`RemovalError::EmptyStructure`] if the list is empty.
    /// - [`RemovalError::NotFound`] if no element matched after a full revolution. The list is left
    ///   unchanged.
    pub fn remove(&mut self, value: &T) -> Result<T, RemovalError> {
        let RingContents { len, tail } = match &mut self.state {
            Empty => return Err(EmptyStructure.into()),
            Full(contents) => contents,
        };

        let start = tail.next();
        let mut prev = *tail;
        let mut curr = start;

        loop {
            if curr.value() == value {
                match len.decremented() {
                    Some(new_len) => {
                        if curr == *tail {
                            *tail = prev;
                        }
                        *prev.next_mut() = curr.next();
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }
                return Ok(curr.take_node().value);
            }

            prev = curr;
            curr = curr.next();
            if curr == start {
                return Err(NotFound.into());
            }
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> FromIterator<T> for CircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for CircularLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CircularLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for CircularLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for CircularLinkedList<T> {
    /// Lists are equal if they hold equal elements in the same order, starting from their heads.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularLinkedList<T> {}

impl<T: Debug> Debug for CircularLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularLinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for CircularLinkedList<T> {
    /// Writes one revolution of the ring, marking the link from the tail back to the head.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }
        write!(f, "(")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ") -> ...")
    }
}
