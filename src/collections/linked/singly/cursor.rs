use ListState::*;

use super::{Link, ListContents, ListState, SinglyLinkedList};

/// A cursor over a [`SinglyLinkedList`] with mutable access, standing in for a reference to a
/// specific node.
///
/// The cursor either points at a node, or at no node at all (the "ghost" position after the tail).
/// Operations that act relative to the current node are ignored while the cursor points at no
/// node.
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut SinglyLinkedList<T>,
    pub(crate) current: Link<T>,
}

impl<'a, T> CursorMut<'a, T> {
    /// Returns a reference to the value of the current node, or `None` if the cursor points at no
    /// node.
    pub fn current(&self) -> Option<&T> {
        self.current.map(|node| node.value())
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.current.map(|node| node.value_mut())
    }

    /// Returns a reference to the value of the node after the current one.
    pub fn peek_next(&self) -> Option<&T> {
        self.current
            .and_then(|node| *node.next())
            .map(|next| next.value())
    }

    /// Returns true if the cursor points at no node.
    pub const fn is_ghost(&self) -> bool {
        self.current.is_none()
    }

    /// Moves the cursor to the next node. Moving past the tail leaves the cursor pointing at no
    /// node, and moving from there returns it to the head.
    pub fn move_next(&mut self) {
        self.current = match self.current {
            Some(node) => *node.next(),
            None => self.list.head_link(),
        };
    }

    /// Inserts `value` directly after the current node in `O(1)`. If the current node was the
    /// tail, the new node becomes the tail. The cursor doesn't move.
    ///
    /// If the cursor points at no node, the call is ignored and `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::from_iter([1, 3]);
    /// let mut cursor = list.cursor_front_mut();
    /// cursor.insert_after(2);
    /// assert_eq!(list.print().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn insert_after(&mut self, value: T) {
        if let (Some(node), Full(contents)) = (self.current, &mut self.list.state) {
            contents.link_after(node, value);
        }
    }

    /// Removes the node directly after the current node in `O(1)` and returns its value. If the
    /// removed node was the tail, the current node becomes the tail.
    ///
    /// Returns `None` without modifying the list if the cursor points at no node, or if the current
    /// node is the tail.
    pub fn remove_after(&mut self) -> Option<T> {
        match (self.current, &mut self.list.state) {
            (Some(node), Full(contents)) => contents.unlink_after(node),
            _ => None,
        }
    }

    /// Removes the first node of the list. If the cursor pointed at that node, it moves to the
    /// new head.
    pub fn remove_first(&mut self) -> Option<T> {
        let was_head = match self.list.state {
            Empty => false,
            Full(ListContents { head, .. }) => self.current == Some(head),
        };
        if was_head {
            // SAFETY: The cursor pointed at the head, so the list isn't empty.
            self.current = unsafe { *self.current.unwrap_unchecked().next() };
        }
        self.list.remove_first()
    }
}
