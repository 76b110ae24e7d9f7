use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A fixed-size, uninitialized allocation of `cap` slots of `T`. The Buffer itself never reads,
/// writes or drops a `T`; the owning collection tracks which slots hold a value and is
/// responsible for dropping them before the Buffer is dropped.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Allocates a Buffer with exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Buffer<T> {
        Buffer {
            ptr: Self::make_ptr(Self::make_layout(cap)),
            cap,
            _phantom: PhantomData,
        }
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Writes `value` into the slot at `index`, without dropping any previous contents.
    ///
    /// # Safety
    /// `index` must be less than `cap`. Any value previously stored in the slot is leaked.
    pub unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.cap);
        // SAFETY: The caller guarantees index is within the allocation.
        unsafe { self.ptr.add(index).write(value) }
    }

    /// Moves the value out of the slot at `index`, leaving it logically uninitialized.
    ///
    /// # Safety
    /// `index` must be less than `cap` and the slot must be initialized. The slot must be treated
    /// as uninitialized afterwards.
    pub unsafe fn read(&mut self, index: usize) -> T {
        debug_assert!(index < self.cap);
        // SAFETY: The caller guarantees index is within the allocation and initialized.
        unsafe { self.ptr.add(index).read() }
    }

    /// # Safety
    /// `index` must be less than `cap` and the slot must be initialized.
    pub const unsafe fn get(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees index is within the allocation and initialized.
        unsafe { self.ptr.add(index).as_ref() }
    }

    /// # Safety
    /// `index` must be less than `cap` and the slot must be initialized.
    pub const unsafe fn get_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees index is within the allocation and initialized.
        unsafe { self.ptr.add(index).as_mut() }
    }

    /// Drops the value in the slot at `index` in place.
    ///
    /// # Safety
    /// `index` must be less than `cap` and the slot must be initialized. The slot must be treated
    /// as uninitialized afterwards.
    pub unsafe fn drop_in_place(&mut self, index: usize) {
        debug_assert!(index < self.cap);
        // SAFETY: The caller guarantees index is within the allocation and initialized.
        unsafe { self.ptr.add(index).drop_in_place() }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `cap` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);
        if layout.size() != 0 {
            // SAFETY: The pointer was allocated by the global allocator with this exact layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}
