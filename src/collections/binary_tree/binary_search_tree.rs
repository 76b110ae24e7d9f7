use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, LevelOrder, Node, Order, Traverse};
use crate::collections::linked::SinglyLinkedList;
#[doc(inline)]
pub use crate::util::error::EmptyStructure;
use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An unbalanced binary search tree which keeps duplicate values.
///
/// For every node, all values in its left subtree are strictly less than its own value, and all
/// values in its right subtree are greater than or equal to it. Values equal to an existing node
/// are therefore always placed to its right. No rebalancing takes place, so the shape of the tree
/// (and its height) depends entirely on the order of insertion.
///
/// Traversals are lazy iterators backed by an explicit stack or queue. The structural queries
/// ([`height`](BinarySearchTree::height), the counts, [`find_max`] and
/// [`is_equal`](BinarySearchTree::is_equal)), along with cloning, formatting and dropping, keep
/// their own stack of pending nodes too, so none of them are limited by the height of the tree.
///
/// [`find_max`]: BinarySearchTree::find_max
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the BinarySearchTree.
/// - `h`: The height of the BinarySearchTree, which is `n - 1` in the worst case.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `traverse/level_order` | `O(n)` |
/// | `height` | `O(n)` |
/// | `count_leaves/nodes` | `O(n)` |
/// | `find_max` | `O(n)` |
/// | `is_equal` | `O(n)` |
/// | `clear` | `O(n)` |
pub struct BinarySearchTree<T> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new, empty BinarySearchTree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch::empty(),
            len: 0,
        }
    }

    /// Returns the number of values in the tree, including duplicates.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the tree: the number of links on the longest path from the root to a
    /// leaf. An empty tree has a height of `-1` and a tree with a single node has a height of `0`.
    pub fn height(&self) -> isize {
        self.root.height()
    }

    /// Returns the number of nodes with no children.
    pub fn count_leaves(&self) -> usize {
        self.root.count_leaves()
    }

    /// Returns the number of nodes in the tree by visiting every one of them. This is always equal
    /// to [`len`](BinarySearchTree::len).
    pub fn count_nodes(&self) -> usize {
        self.root.count_nodes()
    }

    /// Returns a lazy depth-first iterator over the tree, in the provided [`Order`]. Every call
    /// starts a new traversal from the root.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::binary_tree::{BinarySearchTree, Order};
    /// let tree = BinarySearchTree::from_iter([5, 3, 7]);
    /// assert_eq!(tree.traverse(Order::InOrder).collect::<Vec<_>>(), [&3, &5, &7]);
    /// assert_eq!(tree.traverse(Order::PreOrder).collect::<Vec<_>>(), [&5, &3, &7]);
    /// assert_eq!(tree.traverse(Order::PostOrder).collect::<Vec<_>>(), [&3, &7, &5]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traverse<'_, T> {
        Traverse::new(self, order)
    }

    pub fn in_order(&self) -> Traverse<'_, T> {
        self.traverse(Order::InOrder)
    }

    pub fn pre_order(&self) -> Traverse<'_, T> {
        self.traverse(Order::PreOrder)
    }

    pub fn post_order(&self) -> Traverse<'_, T> {
        self.traverse(Order::PostOrder)
    }

    /// Returns a lazy breadth-first iterator over the tree, visiting each level from left to right.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self)
    }

    /// Returns an iterator over the values of the tree in sorted order.
    pub fn iter(&self) -> Traverse<'_, T> {
        self.in_order()
    }

    /// Removes every value from the tree. Nodes are released in post-order, children before their
    /// parent, using an explicit stack so that deep trees can't overflow the call stack.
    pub fn clear(&mut self) {
        let mut pending: SinglyLinkedList<Box<Node<T>>> = SinglyLinkedList::new();
        if let Some(root) = self.root.take() {
            pending.add_first(root);
        }

        while let Some(mut node) = pending.remove_first() {
            if let Some(left) = node.left.take() {
                pending.add_first(node);
                pending.add_first(left);
            } else if let Some(right) = node.right.take() {
                pending.add_first(node);
                pending.add_first(right);
            } else {
                drop(node);
            }
        }

        self.len = 0;
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value` as a new leaf. Starting from the root, the search moves left when `value`
    /// is strictly less than a node's value and right otherwise, so duplicates end up in the right
    /// subtree of their equal.
    ///
    /// # Panics
    /// Panics if the number of values would exceed [`usize::MAX`]. A panic raised while comparing
    /// `value` leaves the tree and its length as they were.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::binary_tree::BinarySearchTree;
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    /// assert_eq!(tree.height(), 1);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&5, &5]);
    /// ```
    pub fn insert(&mut self, value: T) {
        let len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let mut branch = &mut self.root.0;
        loop {
            match branch {
                Some(node) => {
                    branch = if value < node.value {
                        &mut node.left.0
                    } else {
                        &mut node.right.0
                    };
                },
                None => {
                    *branch = Some(Node::leaf(value));
                    self.len = len;
                    return;
                },
            }
        }
    }

    /// Returns true if any value in the tree is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.root.contains(value)
    }

    /// Returns the greatest value in the tree, found by comparing every node with the greatest
    /// values of both of its subtrees.
    ///
    /// # Errors
    /// Returns [`EmptyStructure`] if the tree has no values.
    pub fn find_max(&self) -> Result<&T, EmptyStructure> {
        self.root.find_max().ok_or(EmptyStructure)
    }
}

impl<T: PartialEq> BinarySearchTree<T> {
    /// Returns true if both trees have exactly the same shape, with equal values at every
    /// position. Trees holding the same values but built in a different order may not be equal.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::binary_tree::BinarySearchTree;
    /// let a = BinarySearchTree::from_iter([5, 3, 7]);
    /// let b = BinarySearchTree::from_iter([5, 7, 3]);
    /// let c = BinarySearchTree::from_iter([3, 5, 7]);
    /// assert!(a.is_equal(&b));
    /// assert!(!a.is_equal(&c));
    /// ```
    pub fn is_equal(&self, other: &BinarySearchTree<T>) -> bool {
        self.len == other.len && self.root.is_equal(&other.root)
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    /// Copies the tree node by node, keeping its exact shape.
    fn clone(&self) -> Self {
        BinarySearchTree {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "BinarySearchTree (len: {})", self.len)?;
        write!(f, "{:?}", self.root)
    }
}

impl<T: Display> Display for BinarySearchTree<T> {
    /// Writes the values of the tree in sorted order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
