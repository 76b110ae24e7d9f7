//! Linear and hierarchical collection types.
//!
//! # Purpose
//! Each type here owns its elements outright: the bounded types own a single allocation fixed at
//! construction, while the linked types and the tree own every node reachable from their ends or
//! root. Nothing is shared between two collections, and cloning always produces a deep copy.
//!
//! # Modules
//! Every module is behind a Cargo feature of the same name, all of which are enabled by the
//! default `collections-all` feature.
//! - [`contiguous`]: [`BoundedStack`](contiguous::BoundedStack) and
//!   [`BoundedQueue`](contiguous::BoundedQueue).
//! - [`linked`]: singly, doubly and circular linked lists.
//! - [`binary_tree`]: an unbalanced binary search tree. (Requires `linked`, which backs its
//!   traversals.)

#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;

pub mod error {
    //! Errors returned by the collections in this crate.
    #[doc(inline)]
    pub use crate::util::error::{
        CapacityExceeded, CollectionError, EmptyStructure, NotFound, RemovalError, Underflow,
    };
}
