use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::collections::contiguous::Buffer;
#[doc(inline)]
pub use crate::util::error::{CapacityExceeded, Underflow};
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// A first-in-first-out collection with a capacity fixed at construction, stored as a ring buffer.
///
/// The queue tracks the physical slot of its `front` and `rear` elements, along with its length.
/// Both indices advance modulo the capacity, so elements are never shifted: once the rear reaches
/// the end of the buffer, the next element wraps around to the first slot, provided it has been
/// vacated by a dequeue.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)` |
/// | `dequeue` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `len` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `eq` | `O(n)` |
pub struct BoundedQueue<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) front: usize,
    pub(crate) rear: usize,
    pub(crate) len: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates a new, empty BoundedQueue which can hold at most `cap` elements.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::BoundedQueue;
    /// let queue: BoundedQueue<u8> = BoundedQueue::with_cap(3);
    /// assert_eq!(queue.cap(), 3);
    /// assert!(queue.is_empty());
    /// ```
    pub fn with_cap(cap: usize) -> BoundedQueue<T> {
        BoundedQueue {
            buf: Buffer::with_cap(cap),
            front: 0,
            rear: Self::initial_rear(cap),
            len: 0,
        }
    }

    // The rear starts one slot "before" the front, so the first enqueue lands in slot 0. With a
    // capacity of 0 the value is never used because every enqueue is rejected.
    const fn initial_rear(cap: usize) -> usize {
        cap.wrapping_sub(1)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len == self.buf.cap()
    }

    /// Adds `value` to the rear of the queue.
    ///
    /// # Errors
    /// Returns [`CapacityExceeded`] if the queue is full, in which case `value` is dropped and the
    /// queue is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::BoundedQueue;
    /// let mut queue = BoundedQueue::with_cap(2);
    /// queue.enqueue('a').unwrap();
    /// queue.enqueue('b').unwrap();
    /// assert!(queue.enqueue('c').is_err());
    /// assert_eq!(queue.front(), Ok(&'a'));
    /// ```
    pub fn enqueue(&mut self, value: T) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            return Err(CapacityExceeded { cap: self.cap() });
        }

        // The queue isn't full, so cap is at least 1.
        let rear = (self.rear.wrapping_add(1)) % self.cap();
        // SAFETY: rear < cap, and because len < cap, the slot after the current rear is vacant.
        unsafe { self.buf.write(rear, value) };
        self.rear = rear;
        self.len += 1;
        Ok(())
    }

    /// Removes the element at the front of the queue, dropping it. Use
    /// [`BoundedQueue::take_front`] to receive the element instead.
    ///
    /// # Errors
    /// Returns [`Underflow`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<(), Underflow> {
        self.take_front().map(drop)
    }

    /// Removes the element at the front of the queue and returns it.
    ///
    /// # Errors
    /// Returns [`Underflow`] if the queue is empty.
    pub fn take_front(&mut self) -> Result<T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }

        let front = self.front;
        self.front = (front + 1) % self.cap();
        self.len -= 1;
        // SAFETY: The queue wasn't empty, so the front slot is initialized. It has now been
        // removed from the live range.
        Ok(unsafe { self.buf.read(front) })
    }

    /// Returns a reference to the element at the front of the queue.
    ///
    /// # Errors
    /// Returns [`Underflow`] if the queue is empty.
    pub fn front(&self) -> Result<&T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }
        // SAFETY: The queue isn't empty, so the front slot is initialized.
        Ok(unsafe { self.buf.get(self.front) })
    }

    /// Returns a reference to the element at the rear of the queue, the most recently enqueued.
    ///
    /// # Errors
    /// Returns [`Underflow`] if the queue is empty.
    pub fn back(&self) -> Result<&T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }
        // SAFETY: The queue isn't empty, so the rear slot is initialized.
        Ok(unsafe { self.buf.get(self.rear) })
    }

    /// Drops every element in the queue and resets both indices to their initial positions.
    pub fn clear(&mut self) {
        while self.dequeue().is_ok() {}
        self.front = 0;
        self.rear = Self::initial_rear(self.cap());
    }

    /// Returns an iterator over the elements of the queue, from front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Maps a logical position, counted from the front, to a physical slot in the buffer.
    pub(crate) const fn slot(&self, offset: usize) -> usize {
        (self.front + offset) % self.buf.cap()
    }
}

impl<T> Drop for BoundedQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for BoundedQueue<T> {
    /// Produces an independent queue with the same capacity, and the elements in the same physical
    /// slots as the original.
    fn clone(&self) -> Self {
        let mut queue = BoundedQueue::with_cap(self.cap());
        queue.front = self.front;
        for offset in 0..self.len {
            let slot = self.slot(offset);
            // SAFETY: slot is within the live range of self, and the same slot in the new queue is
            // vacant. rear and len are only advanced after the write.
            unsafe { queue.buf.write(slot, self.buf.get(slot).clone()) };
            queue.rear = slot;
            queue.len += 1;
        }
        queue.rear = self.rear;
        queue
    }
}

impl<T> Extend<T> for BoundedQueue<T> {
    /// Enqueues every item of `iter`, in order.
    ///
    /// # Panics
    /// Panics if the queue becomes full before `iter` is exhausted.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item).throw();
        }
    }
}

impl<T: PartialEq> PartialEq for BoundedQueue<T> {
    /// Two queues are equal if they have the same capacity and hold equal elements in the same
    /// order, regardless of where those elements sit in the underlying buffer.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.cap() == other.cap() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BoundedQueue<T> {}

impl<T: Debug> Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("contents", &DebugIter(self.iter()))
            .field("front", &self.front)
            .field("rear", &self.rear)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for BoundedQueue<T> {
    /// Writes the elements from front to rear, separated by spaces.
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
