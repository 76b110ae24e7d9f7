use std::iter::FusedIterator;

use super::BoundedQueue;

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            queue: self,
            start: 0,
            end: self.len,
        }
    }
}

/// An iterator over a [`BoundedQueue`], from front to rear.
pub struct Iter<'a, T> {
    pub(crate) queue: &'a BoundedQueue<T>,
    // Logical offsets from the front of the queue, not physical slots.
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let slot = self.queue.slot(self.start);
        self.start += 1;
        // SAFETY: The offset is within the live range of the queue.
        Some(unsafe { self.queue.buf.get(slot) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        let slot = self.queue.slot(self.end);
        // SAFETY: The offset is within the live range of the queue.
        Some(unsafe { self.queue.buf.get(slot) })
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            queue: self.queue,
            start: self.start,
            end: self.end,
        }
    }
}
