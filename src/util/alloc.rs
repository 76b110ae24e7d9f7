//! Helpers for observing how a collection allocates and drops the values it owns.

use std::cell::Cell;
use std::rc::Rc;

/// A value that increments a shared counter when dropped. Clones share the same counter, so
/// filling a collection with clones and then dropping it shows how many elements were released.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    /// Creates a new counter starting at `value`.
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(value)))
    }

    /// Returns the number of drops observed so far, not counting the drop of `self` or the
    /// handles still alive.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A type with a size of zero, for checking that collections never allocate or dereference
/// storage for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSizedType;
