use std::iter::FusedIterator;

use derive_more::IsVariant;

use super::{BinarySearchTree, Branch, Node};
use crate::collections::linked::{DoublyLinkedList, SinglyLinkedList};

/// The order in which a depth-first traversal visits each node relative to its subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields the values of a search tree in sorted order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// A pending unit of work for [`Traverse`]: either a subtree which still needs to be expanded, or
/// a value which is ready to be yielded.
enum Step<'a, T> {
    Visit(&'a Node<T>),
    Emit(&'a T),
}

use Step::*;

impl<'a, T> Clone for Step<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Step<'a, T> {}

/// A lazy, depth-first iterator over the values of a [`BinarySearchTree`], in the provided
/// [`Order`].
///
/// The traversal keeps its own stack of pending steps rather than recursing, so the depth of the
/// tree doesn't affect the call stack.
pub struct Traverse<'a, T> {
    order: Order,
    stack: SinglyLinkedList<Step<'a, T>>,
    remaining: usize,
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(tree: &'a BinarySearchTree<T>, order: Order) -> Traverse<'a, T> {
        let mut traverse = Traverse {
            order,
            stack: SinglyLinkedList::new(),
            remaining: tree.len(),
        };
        traverse.push_branch(&tree.root);
        traverse
    }

    /// Returns the order of this traversal.
    pub const fn order(&self) -> Order {
        self.order
    }

    fn push_branch(&mut self, branch: &'a Branch<T>) {
        if let Some(node) = branch.as_deref() {
            self.stack.add_first(Visit(node));
        }
    }

    /// Replaces a node with its value and subtrees, pushed so that they are popped in the order's
    /// sequence.
    fn expand(&mut self, node: &'a Node<T>) {
        match self.order {
            Order::InOrder => {
                self.push_branch(&node.right);
                self.stack.add_first(Emit(&node.value));
                self.push_branch(&node.left);
            },
            Order::PreOrder => {
                self.push_branch(&node.right);
                self.push_branch(&node.left);
                self.stack.add_first(Emit(&node.value));
            },
            Order::PostOrder => {
                self.stack.add_first(Emit(&node.value));
                self.push_branch(&node.right);
                self.push_branch(&node.left);
            },
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.remove_first()? {
                Visit(node) => self.expand(node),
                Emit(value) => {
                    self.remaining -= 1;
                    return Some(value);
                },
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for Traverse<'a, T> {}

impl<'a, T> ExactSizeIterator for Traverse<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> Clone for Traverse<'a, T> {
    fn clone(&self) -> Self {
        Traverse {
            order: self.order,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// A lazy, breadth-first iterator over the values of a [`BinarySearchTree`], yielding each level
/// from left to right before moving on to the next.
pub struct LevelOrder<'a, T> {
    queue: DoublyLinkedList<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(tree: &'a BinarySearchTree<T>) -> LevelOrder<'a, T> {
        let mut queue = DoublyLinkedList::new();
        if let Some(root) = tree.root.as_deref() {
            queue.add_to_back(root);
        }

        LevelOrder {
            queue,
            remaining: tree.len(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.remove_from_front()?;
        for child in [&node.left, &node.right] {
            if let Some(child) = child.as_deref() {
                self.queue.add_to_back(child);
            }
        }

        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for LevelOrder<'a, T> {}

impl<'a, T> ExactSizeIterator for LevelOrder<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Traverse<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Traverse::new(self, Order::InOrder)
    }
}
