use std::num::NonZero;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The number of nodes in a non-empty linked collection. An empty collection has no nodes to
/// count and is represented by its own state, so a Length is never zero.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    /// Counts one more node.
    ///
    /// # Panics
    /// Panics if the length would exceed [`usize::MAX`].
    pub fn increment(&mut self) {
        self.0 = self.0.checked_add(1).ok_or(CapacityOverflow).throw();
    }

    /// Returns the length after one node is removed, or `None` if that was the last node and the
    /// collection must switch to its empty state.
    pub const fn decremented(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(len) => Some(Length(len)),
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
