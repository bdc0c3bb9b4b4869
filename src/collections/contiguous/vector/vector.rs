use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Buffer;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The capacity allocated by the first push into an empty Vector.
const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// The Vector shrinks once fewer than `1 / SHRINK_RATIO` of its slots are in use.
const SHRINK_RATIO: usize = 4;

/// A variable size contiguous collection, backed by a buffer that doubles when full and halves
/// when less than a quarter full.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)`*, `O(n)` |
/// | `reallocate` | `O(n)` |
///
/// \* Amortized. A push into a full Vector or a pop that leaves it less than a quarter full moves
/// every item into a new buffer.
///
/// Growth is unconditional (the capacity doubles whenever a push would overflow it) while
/// shrinking is gated on the live ratio, so a Vector which alternates between pushing and popping
/// at a capacity boundary doesn't reallocate on every call.
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated by the first push.
    ///
    /// # Examples
    /// ```
    /// # use teaching_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::dangling(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::with_cap(cap),
            len: 0,
        }
    }

    /// Returns the number of items in the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the allocated buffer, which is always at least [`len`](Vector::len).
    ///
    /// # Examples
    /// ```
    /// # use teaching_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// vec.push_back(1_u8);
    /// vec.push_back(2);
    /// vec.push_back(3);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Pushes the provided value onto the end of the Vector, doubling the capacity if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use teaching_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: The capacity has just been adjusted so that the slot at len is within the
        // allocation, and it is uninitialized because it is not below len.
        unsafe { self.buf.ptr.as_ptr().add(self.len).write(value); }
        self.len += 1;
    }

    /// An alias of [`push_back`](Vector::push_back).
    pub fn push(&mut self, value: T) {
        self.push_back(value);
    }

    /// Removes the last value from the Vector and returns it, halving the capacity if less than a
    /// quarter of it remains in use.
    ///
    /// # Panics
    /// Panics if the Vector is empty. See [`try_pop_back`](Vector::try_pop_back) for a
    /// non-panicking version.
    ///
    /// # Examples
    /// ```
    /// # use teaching_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..8).collect();
    /// assert_eq!(vec.cap(), 8);
    /// for _ in 0..6 {
    ///     vec.pop_back();
    /// }
    /// // Two of eight slots is exactly a quarter, which isn't enough to shrink.
    /// assert_eq!(vec.cap(), 8);
    /// vec.pop_back();
    /// assert_eq!(vec.len(), 1);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// An alias of [`pop_back`](Vector::pop_back).
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn pop(&mut self) -> T {
        self.pop_back()
    }

    /// Removes the last value from the Vector and returns it, or an [`EmptyCollection`] error if
    /// there is nothing to remove. The shrinking behavior is the same as
    /// [`pop_back`](Vector::pop_back).
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        let new_len = self.len.checked_sub(1).ok_or(EmptyCollection)?;
        self.len = new_len;

        // SAFETY: The slot at the old last index is initialized. Decrementing len first means the
        // Vector no longer considers it initialized, so the value is moved rather than copied.
        let value = unsafe { self.buf.ptr.as_ptr().add(self.len).read() };

        if self.len.saturating_mul(SHRINK_RATIO) < self.cap() {
            self.shrink();
        }

        Ok(value)
    }

    /// Returns a reference to the first item.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    pub fn try_front(&self) -> Result<&T, EmptyCollection> {
        self.first().ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the first item.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    pub fn try_front_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.first_mut().ok_or(EmptyCollection)
    }

    /// Returns a reference to the last item. Note that this is rarely the last slot of the
    /// buffer.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    pub fn try_back(&self) -> Result<&T, EmptyCollection> {
        self.last().ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the last item.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn back_mut(&mut self) -> &mut T {
        self.try_back_mut().throw()
    }

    pub fn try_back_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.last_mut().ok_or(EmptyCollection)
    }

    /// Returns a reference to the item at `index` after checking that it is in bounds.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use teaching_collections::collections::contiguous::Vector;
    /// let vec: Vector<_> = (10..13).collect();
    /// assert_eq!(*vec.at(2), 12);
    /// assert!(vec.try_at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> &T {
        self.try_at(index).throw()
    }

    pub fn try_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len;
        self.get(index).ok_or(IndexOutOfBounds::unsigned(index, len))
    }

    /// Returns a mutable reference to the item at `index` after checking that it is in bounds.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.try_at_mut(index).throw()
    }

    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds::unsigned(index, len))
    }

    /// Returns a pointer to the first item, which is the start of the live range.
    pub fn begin(&self) -> *const T {
        self.as_ptr_range().start
    }

    /// Returns a pointer one past the last item. Together with [`begin`](Vector::begin), this
    /// describes the live range of the Vector; it is never dereferenced.
    pub fn end(&self) -> *const T {
        self.as_ptr_range().end
    }

    /// Moves all items into a new buffer with exactly `new_cap` slots and releases the old one.
    ///
    /// # Panics
    /// Panics if `new_cap` is less than the current length, or if the memory layout of the new
    /// buffer would have a size that exceeds [`isize::MAX`].
    pub fn reallocate(&mut self, new_cap: usize) {
        assert!(
            new_cap >= self.len,
            "Can't reallocate a Vector with {} items into {} slots!",
            self.len,
            new_cap
        );

        // SAFETY: All values below len are initialized, and len <= new_cap.
        unsafe { self.buf.relocate(self.len, new_cap); }
    }

    /// Drops every item and releases the buffer, returning the Vector to the state produced by
    /// [`new`](Vector::new).
    pub fn clear(&mut self) {
        let len = self.len;
        // Forget the items before dropping them, in case a drop panics.
        self.len = 0;

        // SAFETY: All values below the old len are initialized and are no longer reachable through
        // the Vector.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr.as_ptr(), len));
        }

        self.buf = Buffer::dangling();
    }

    /// Grows the buffer so that the Vector can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let old_cap = self.cap();
        let new_cap = match old_cap {
            0 => MIN_CAP,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
        };

        tracing::trace!(len = self.len, old_cap, new_cap, "growing vector buffer");
        self.reallocate(new_cap);
    }

    /// Halves the capacity of the buffer. Only called once the live ratio has dropped below a
    /// quarter, so the halved buffer always has room for every item.
    pub(crate) fn shrink(&mut self) {
        let old_cap = self.cap();
        let new_cap = old_cap / GROWTH_FACTOR;

        tracing::trace!(len = self.len, old_cap, new_cap, "shrinking vector buffer");
        self.reallocate(new_cap);
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop. The buffer itself is
        // released when self.buf is dropped afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len));
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't mutated due to this function taking a &self.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't accessed due to this function taking a
        // &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            vec.push_back(value.clone());
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
