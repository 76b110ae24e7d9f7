//! An unbalanced [`BinarySearchTree`] and its traversal iterators.

mod binary_search_tree;
mod iter;
mod node;

pub use binary_search_tree::*;
pub use iter::*;
pub(crate) use node::*;
