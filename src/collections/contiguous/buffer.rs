use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A fixed-capacity heap allocation with room for `cap` values of `T`. A Buffer never knows which
/// of its slots are initialized, so it never drops values; it only allocates and releases the
/// memory. Tracking initialization is the job of the owning collection.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a Buffer with capacity 0, which doesn't allocate.
    pub const fn dangling() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a new Buffer with room for exactly `cap` values, all uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Buffer<T> {
        let layout = Buffer::<T>::make_layout(cap);

        Buffer {
            ptr: Buffer::<T>::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Moves the first `count` values into a freshly allocated Buffer with capacity `new_cap`, then
    /// releases the old allocation.
    ///
    /// # Safety
    /// The first `count` slots must be initialized and `count` must be no greater than `new_cap`.
    /// After this call the old slots are considered moved-from.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub unsafe fn relocate(&mut self, count: usize, new_cap: usize) {
        let new_buf = Buffer::with_cap(new_cap);

        // SAFETY: Both allocations are valid for at least count values, as guaranteed by the
        // caller, and a fresh allocation can't overlap an existing one.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_buf.ptr.as_ptr(), count);
        }

        // Dropping the old Buffer only releases its memory, the values now live in new_buf.
        *self = new_buf;
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
        let layout = Buffer::<T>::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}
