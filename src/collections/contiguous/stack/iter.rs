use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::BoundedStack;

impl<'a, T> IntoIterator for &'a BoundedStack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            stack: self,
            bottom: 0,
            top: self.len,
            _phantom: PhantomData,
        }
    }
}

/// An iterator over a [`BoundedStack`], from the top element down.
pub struct Iter<'a, T> {
    pub(crate) stack: &'a BoundedStack<T>,
    // The remaining range of slots is bottom..top.
    pub(crate) bottom: usize,
    pub(crate) top: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bottom == self.top {
            return None;
        }
        self.top -= 1;
        // SAFETY: top is within the initialized range of the stack.
        Some(unsafe { self.stack.buf.get(self.top) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.bottom == self.top {
            return None;
        }
        let index = self.bottom;
        self.bottom += 1;
        // SAFETY: index is within the initialized range of the stack.
        Some(unsafe { self.stack.buf.get(index) })
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.top - self.bottom
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack,
            bottom: self.bottom,
            top: self.top,
            _phantom: PhantomData,
        }
    }
}
