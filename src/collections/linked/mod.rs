//! Linked collection types: [`SinglyLinkedList`], [`DoublyLinkedList`] and [`CircularLinkedList`].
//!
//! Each list owns its nodes through copyable pointer handles, which are created from a [`Box`]
//! and reclaimed exactly once, when the node is unlinked or the list is cleared. Positional
//! insertion and removal, where a list supports it, goes through that list's `CursorMut`.

pub mod circular;
pub mod doubly;
mod length;
pub mod singly;

pub(crate) use length::*;

#[doc(inline)]
pub use circular::CircularLinkedList;
#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
