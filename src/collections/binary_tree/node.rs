use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

use crate::collections::linked::SinglyLinkedList;

/// An owned, possibly empty subtree.
///
/// None of the structural queries on a Branch recurse. Each keeps its own stack of pending nodes,
/// so a tree degenerated into a chain of any length can be measured, compared, cloned and drawn.
pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Box<Node<T>> {
        Box::new(Node {
            left: Branch::empty(),
            right: Branch::empty(),
            value,
        })
    }

    pub const fn is_leaf(&self) -> bool {
        self.left.0.is_none() && self.right.0.is_none()
    }
}

impl<T> Branch<T> {
    pub const fn empty() -> Branch<T> {
        Branch(None)
    }

    /// Returns an iterator over every node in the branch, in pre-order.
    pub fn nodes(&self) -> Nodes<'_, T> {
        let mut pending = SinglyLinkedList::new();
        if let Some(node) = self.as_deref() {
            pending.add_first(node);
        }
        Nodes { pending }
    }

    /// An empty branch has a height of `-1`, so a lone leaf has a height of `0`.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut pending = SinglyLinkedList::new();
        if let Some(node) = self.as_deref() {
            pending.add_first((node, 0));
        }

        while let Some((node, depth)) = pending.remove_first() {
            height = height.max(depth);
            for child in [&node.left, &node.right] {
                if let Some(child) = child.as_deref() {
                    pending.add_first((child, depth + 1));
                }
            }
        }
        height
    }

    pub fn count_nodes(&self) -> usize {
        self.nodes().count()
    }

    pub fn count_leaves(&self) -> usize {
        self.nodes().filter(|node| node.is_leaf()).count()
    }
}

impl<T: Ord> Branch<T> {
    /// Returns the greatest value anywhere in the branch, comparing every node rather than
    /// following the rightmost path.
    pub fn find_max(&self) -> Option<&T> {
        self.nodes().map(|node| &node.value).max()
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut branch = self;
        while let Some(node) = &branch.0 {
            if *value == node.value {
                return true;
            }
            branch = if *value < node.value {
                &node.left
            } else {
                &node.right
            };
        }
        false
    }
}

impl<T: PartialEq> Branch<T> {
    /// Two branches are equal if both are empty, or both hold equal values with equal left and
    /// right branches. Pairs of branches at the same position are compared until one differs.
    pub fn is_equal(&self, other: &Branch<T>) -> bool {
        let mut pending = SinglyLinkedList::new();
        pending.add_first((self, other));

        while let Some((this, that)) = pending.remove_first() {
            match (this.as_deref(), that.as_deref()) {
                (None, None) => (),
                (Some(this), Some(that)) => {
                    if this.value != that.value {
                        return false;
                    }
                    pending.add_first((&this.right, &that.right));
                    pending.add_first((&this.left, &that.left));
                },
                _ => return false,
            }
        }
        true
    }
}

impl<T: Clone> Clone for Branch<T> {
    /// Copies the branch node by node. Each pending entry pairs a source node with the empty slot
    /// its copy is written into.
    fn clone(&self) -> Self {
        let mut root = Branch::empty();
        {
            let mut pending = SinglyLinkedList::new();
            if let Some(node) = self.as_deref() {
                pending.add_first((node, &mut root));
            }

            while let Some((source, slot)) = pending.remove_first() {
                let copy = slot.insert(Node::leaf(source.value.clone()));
                let Node { left, right, .. } = &mut **copy;
                if let Some(node) = source.right.as_deref() {
                    pending.add_first((node, right));
                }
                if let Some(node) = source.left.as_deref() {
                    pending.add_first((node, left));
                }
            }
        }
        root
    }
}

impl<T> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Option<Box<Node<T>>>> for Branch<T> {
    fn from(value: Option<Box<Node<T>>>) -> Self {
        Branch(value)
    }
}

/// A pre-order iterator over the nodes of a [`Branch`].
pub(crate) struct Nodes<'a, T> {
    pending: SinglyLinkedList<&'a Node<T>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.remove_first()?;
        for child in [&node.right, &node.left] {
            if let Some(child) = child.as_deref() {
                self.pending.add_first(child);
            }
        }
        Some(node)
    }
}

/// A line of the drawing which is still to be written, along with the indentation leading up to
/// it.
enum Draw<'a, T> {
    Branch(&'a Branch<T>, String),
    Value(&'a T, String),
}

impl<T: Debug> Debug for Branch<T> {
    /// Draws the branch on its side: the left subtree above its parent and the right subtree
    /// below, each indented one level further. Missing children are drawn as `-`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut pending = SinglyLinkedList::new();
        pending.add_first(Draw::Branch(self, String::new()));
        let mut first = true;

        while let Some(draw) = pending.remove_first() {
            let line = match draw {
                Draw::Branch(branch, indent) => match branch.as_deref() {
                    Some(node) => {
                        pending.add_first(Draw::Branch(&node.right, indent.clone() + "└    "));
                        pending.add_first(Draw::Value(&node.value, indent.clone()));
                        pending.add_first(Draw::Branch(&node.left, indent + "┌    "));
                        continue;
                    },
                    None => format!("{indent}-"),
                },
                Draw::Value(value, indent) => format!("{indent}({value:?})"),
            };

            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
