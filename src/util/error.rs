use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned when a value is added to a bounded collection that is already full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    /// The capacity of the collection that was full.
    pub cap: usize,
}

impl Display for CapacityExceeded {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity of {} exceeded!", self.cap)
    }
}

impl Error for CapacityExceeded {}

/// Returned when the front or top of an empty bounded collection is accessed or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Underflow;

impl Display for Underflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to access an element of an empty collection!")
    }
}

impl Error for Underflow {}

/// Returned when an operation needs at least one value, but the list or tree is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStructure;

impl Display for EmptyStructure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty collection!")
    }
}

impl Error for EmptyStructure {}

/// Returned when no value in a non-empty list is equal to the one requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl Display for NotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value not found in collection!")
    }
}

impl Error for NotFound {}

/// The ways a value-based removal can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum RemovalError {
    /// There was nothing to remove.
    EmptyStructure(EmptyStructure),
    /// The list had values, but none matched.
    NotFound(NotFound),
}

/// Any of the errors produced by the collections in this crate, so that callers can use `?` on
/// a mix of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CollectionError {
    /// See [`CapacityExceeded`].
    CapacityExceeded(CapacityExceeded),
    /// See [`Underflow`].
    Underflow(Underflow),
    /// See [`EmptyStructure`].
    EmptyStructure(EmptyStructure),
    /// See [`NotFound`].
    NotFound(NotFound),
}

impl From<RemovalError> for CollectionError {
    fn from(value: RemovalError) -> Self {
        match value {
            RemovalError::EmptyStructure(e) => CollectionError::EmptyStructure(e),
            RemovalError::NotFound(e) => CollectionError::NotFound(e),
        }
    }
}

/// Used when a layout for a collection's allocation can't be represented.
#[derive(Debug)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}
