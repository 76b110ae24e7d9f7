//! This crate is a set of small, generic, in-memory collections: two bounded contiguous types,
//! three flavours of linked list and an unbalanced binary search tree.
//!
//! # Purpose
//! These are the containers that tend to come first when learning data structures. Each of them
//! is written from scratch on top of raw allocations or owning node pointers, so that the
//! invariants each one maintains (its capacity, its links, its ordering) are spelled out in the
//! code rather than borrowed from [`std`].
//!
//! # Method
//! The linked lists hold their nodes through copyable [`NonNull`](std::ptr::NonNull) handles that
//! are created from a [`Box`] and reclaimed exactly once. The bounded types manage a single
//! allocation directly, tracking which slots are initialized. The tree uses plain
//! `Option<Box<_>>` branches. Its traversals, queries, clones and teardown all keep an explicit
//! stack or queue, so a degenerate tree can't overflow the call stack.
//!
//! # Error Handling
//! Failures that a caller is expected to handle, such as pushing to a full
//! [`BoundedStack`](collections::contiguous::BoundedStack) or searching an empty tree, return a
//! [`Result`]. Errors are strongly typed: each condition is its own struct implementing
//! [`Error`](std::error::Error), and enums such as
//! [`CollectionError`](collections::error::CollectionError) combine them for static dispatch.
//! No operation partially applies before failing.
//!
//! Conditions that can't reasonably be handled, like a length overflowing [`usize`], panic
//! instead. Every method which can panic documents it.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error enums, because deriving the conversions is
//! far less repetitive than writing them out.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
