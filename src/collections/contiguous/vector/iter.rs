use std::iter::FusedIterator;
use std::mem;
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::Buffer;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = mem::replace(&mut self.len, 0);
        // self is left empty and unallocated, so dropping it afterwards is a no-op.
        IntoIter {
            buf: mem::replace(&mut self.buf, Buffer::dangling()),
            start: 0,
            end,
        }
    }
}

/// An owned iterator over the items of a [`Vector`], from front to back. Items which are never
/// yielded are dropped along with the iterator.
pub struct IntoIter<T> {
    pub(crate) buf: Buffer<T>,
    // Slots in start..end are initialized, everything else has been moved out or was never used.
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the items which are yet to be yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The range start..end is initialized and within the buffer.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start is below end and therefore initialized. Incrementing start afterwards
        // marks the value as moved.
        let value = unsafe { self.buf.ptr.as_ptr().add(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: end has just been decremented and is still at least start, so it refers to an
        // initialized value that is no longer tracked.
        Some(unsafe { self.buf.ptr.as_ptr().add(self.end).read() })
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Only the values in start..end remain initialized. The buffer is released when
        // self.buf is dropped afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr.as_ptr().add(self.start),
                self.end - self.start,
            ));
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
