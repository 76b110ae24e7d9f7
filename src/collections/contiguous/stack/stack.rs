use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::collections::contiguous::Buffer;
#[doc(inline)]
pub use crate::util::error::{CapacityExceeded, Underflow};
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// A last-in-first-out collection with a capacity fixed at construction.
///
/// Elements are stored contiguously from the bottom of the stack, so the top of the stack is
/// always the element at index `len - 1`. Once the stack holds `cap` elements, further pushes are
/// rejected with [`CapacityExceeded`] rather than reallocating.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `top` | `O(1)` |
/// | `len` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `clone` | `O(n)` |
pub struct BoundedStack<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> BoundedStack<T> {
    /// The capacity of a stack created with [`BoundedStack::default`].
    pub const DEFAULT_CAP: usize = 100;

    /// Creates a new, empty BoundedStack which can hold at most `cap` elements.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::BoundedStack;
    /// let stack: BoundedStack<u8> = BoundedStack::with_cap(4);
    /// assert_eq!(stack.cap(), 4);
    /// assert!(stack.is_empty());
    /// ```
    pub fn with_cap(cap: usize) -> BoundedStack<T> {
        BoundedStack {
            buf: Buffer::with_cap(cap),
            len: 0,
        }
    }

    /// Returns the number of elements in the stack.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the maximum number of elements the stack can hold.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len == self.buf.cap()
    }

    /// Pushes `value` onto the top of the stack.
    ///
    /// # Errors
    /// Returns [`CapacityExceeded`] if the stack is full, in which case `value` is dropped and the
    /// stack is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::BoundedStack;
    /// let mut stack = BoundedStack::with_cap(1);
    /// assert!(stack.push(1).is_ok());
    /// assert!(stack.push(2).is_err());
    /// assert_eq!(stack.top(), Ok(&1));
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            return Err(CapacityExceeded { cap: self.cap() });
        }

        // SAFETY: len < cap, and the slot at len is uninitialized.
        unsafe { self.buf.write(self.len, value) };
        self.len += 1;
        Ok(())
    }

    /// Removes the top element of the stack, dropping it. Use [`BoundedStack::take`] to receive
    /// the element instead.
    ///
    /// # Errors
    /// Returns [`Underflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<(), Underflow> {
        self.take().map(drop)
    }

    /// Removes the top element of the stack and returns it.
    ///
    /// # Errors
    /// Returns [`Underflow`] if the stack is empty.
    pub fn take(&mut self) -> Result<T, Underflow> {
        match self.len.checked_sub(1) {
            Some(top) => {
                self.len = top;
                // SAFETY: top < old len, so the slot is initialized. Decrementing len first marks
                // it as uninitialized.
                Ok(unsafe { self.buf.read(top) })
            },
            None => Err(Underflow),
        }
    }

    /// Returns a reference to the top element of the stack.
    ///
    /// # Errors
    /// Returns [`Underflow`] if the stack is empty.
    pub fn top(&self) -> Result<&T, Underflow> {
        match self.len.checked_sub(1) {
            // SAFETY: top < len, so the slot is initialized.
            Some(top) => Ok(unsafe { self.buf.get(top) }),
            None => Err(Underflow),
        }
    }

    /// Returns a mutable reference to the top element of the stack.
    ///
    /// # Errors
    /// Returns [`Underflow`] if the stack is empty.
    pub fn top_mut(&mut self) -> Result<&mut T, Underflow> {
        match self.len.checked_sub(1) {
            // SAFETY: top < len, so the slot is initialized.
            Some(top) => Ok(unsafe { self.buf.get_mut(top) }),
            None => Err(Underflow),
        }
    }

    /// Drops every element in the stack, keeping its capacity.
    pub fn clear(&mut self) {
        while let Some(top) = self.len.checked_sub(1) {
            self.len = top;
            // SAFETY: top < old len, so the slot is initialized.
            unsafe { self.buf.drop_in_place(top) };
        }
    }

    /// Returns an iterator over the elements of the stack, from the top down to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> Default for BoundedStack<T> {
    /// Creates an empty stack with a capacity of [`BoundedStack::DEFAULT_CAP`].
    fn default() -> Self {
        BoundedStack::with_cap(Self::DEFAULT_CAP)
    }
}

impl<T> Drop for BoundedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for BoundedStack<T> {
    fn clone(&self) -> Self {
        let mut stack = BoundedStack::with_cap(self.cap());
        for i in 0..self.len {
            // SAFETY: i < self.len, so the source slot is initialized, and the new stack has the
            // same capacity. len is incremented after each write so a panicking clone leaks
            // nothing.
            unsafe { stack.buf.write(i, self.buf.get(i).clone()) };
            stack.len += 1;
        }
        stack
    }
}

impl<T> Extend<T> for BoundedStack<T> {
    /// Pushes every item of `iter` onto the stack, in order.
    ///
    /// # Panics
    /// Panics if the stack becomes full before `iter` is exhausted.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item).throw();
        }
    }
}

impl<T: PartialEq> PartialEq for BoundedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cap() == other.cap() && self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BoundedStack<T> {}

impl<T: Debug> Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for BoundedStack<T> {
    /// Writes the elements from top to bottom, separated by spaces.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
        }
        for item in iter {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}
