use super::{DoublyLinkedList, NodePtr};

/// A cursor over a [`DoublyLinkedList`] with mutable access, standing in for a reference to a
/// specific node.
///
/// Unlike the list's public API, a cursor can point at either sentinel: it rests on the header
/// when moved before the first element and on the trailer when moved past the last. While on a
/// sentinel, the cursor has no current value and removal is ignored.
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut DoublyLinkedList<T>,
    pub(crate) current: NodePtr<T>,
}

impl<'a, T> CursorMut<'a, T> {
    /// Returns true if the cursor is on the header or trailer.
    pub fn is_sentinel(&self) -> bool {
        self.list.is_sentinel(self.current)
    }

    /// Returns a reference to the current element, or `None` if the cursor is on a sentinel.
    pub fn current(&self) -> Option<&T> {
        // SAFETY: The node has been checked not to be a sentinel.
        (!self.is_sentinel()).then(|| unsafe { self.current.value() })
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.is_sentinel() {
            true => None,
            // SAFETY: The node has been checked not to be a sentinel.
            false => Some(unsafe { self.current.value_mut() }),
        }
    }

    /// Moves towards the trailer. Does nothing if the cursor is already on the trailer.
    pub fn move_next(&mut self) {
        if self.current != self.list.trailer {
            self.current = self.current.next_link();
        }
    }

    /// Moves towards the header. Does nothing if the cursor is already on the header.
    pub fn move_prev(&mut self) {
        if self.current != self.list.header {
            self.current = self.current.prev_link();
        }
    }

    /// Inserts `value` directly before the current node. The cursor doesn't move. Ignored if the
    /// cursor is on the header, since nothing can precede it.
    pub fn insert_before(&mut self, value: T) {
        if self.current != self.list.header {
            let prev = self.current.prev_link();
            self.list.insert_between(prev, self.current, value);
        }
    }

    /// Inserts `value` directly after the current node. The cursor doesn't move. Ignored if the
    /// cursor is on the trailer, since nothing can follow it.
    pub fn insert_after(&mut self, value: T) {
        if self.current != self.list.trailer {
            let next = self.current.next_link();
            self.list.insert_between(self.current, next, value);
        }
    }

    /// Removes the current node and returns its value, moving the cursor to the following node.
    ///
    /// Sentinels can't be removed: if the cursor is on one, nothing happens and `None` is returned.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.is_sentinel() {
            return None;
        }
        let next = self.current.next_link();
        let value = self.list.unlink(self.current);
        self.current = next;
        value
    }
}
