use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Chain, Iter, IterMut, Link, Position, PositionMut};
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in one direction only, owning its first [`Link`] and nothing else.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(n)` |
/// | `front` | `O(1)` |
/// | `back` | `O(n)` |
/// | `push_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(n)` |
/// | `get_link/at` | `O(i)` |
/// | `copy` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// No length or tail pointer is cached, so anything that concerns the back of the list walks the
/// whole chain.
pub struct SinglyLinkedList<T> {
    pub(crate) head: Chain<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList { head: None }
    }

    /// Counts the items in the list by walking it.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// An alias of [`size`](SinglyLinkedList::size). This is still `O(n)`.
    pub fn len(&self) -> usize {
        self.size()
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds the provided element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Link::boxed(value, self.head.take()));
    }

    /// Adds the provided element to the back of the list, walking to the end to do so.
    pub fn push_back(&mut self, value: T) {
        *self.tail_slot() = Some(Link::boxed(value, None));
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().throw()
    }

    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        let link = self.head.take().ok_or(EmptyCollection)?;
        let Link { value, next } = *link;
        self.head = next;
        Ok(value)
    }

    /// Removes the last element from the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        let mut curr = &mut self.head;

        // Stop on the pointer to the last Link, which is owned by the second last one (or the list
        // itself for a single element).
        while curr.as_ref().is_some_and(|link| link.has_next()) {
            if let Some(link) = curr {
                curr = &mut link.next;
            }
        }

        let last = curr.take().ok_or(EmptyCollection)?;
        Ok(last.value)
    }

    /// Returns a reference to the first element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    pub fn try_front(&self) -> Result<&T, EmptyCollection> {
        self.head.as_deref().map(Link::value).ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the first element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    pub fn try_front_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.head.as_deref_mut().map(Link::value_mut).ok_or(EmptyCollection)
    }

    /// Returns a reference to the last element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    pub fn try_back(&self) -> Result<&T, EmptyCollection> {
        self.iter().last().ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the last element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn back_mut(&mut self) -> &mut T {
        self.try_back_mut().throw()
    }

    pub fn try_back_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        let mut link = self.head.as_deref_mut().ok_or(EmptyCollection)?;
        while let Some(next) = link.next.as_deref_mut() {
            link = next;
        }
        Ok(&mut link.value)
    }

    /// Returns the Link at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is negative or not less than the size of the list.
    pub fn get_link(&self, index: isize) -> &Link<T> {
        self.try_get_link(index).throw()
    }

    /// Returns the Link at the provided `index`, or an [`IndexOutOfBounds`] error if it is negative
    /// or not less than the size of the list. The list is only walked once: running off the end is
    /// what determines that the index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use teaching_collections::collections::linked::SinglyLinkedList;
    /// let list: SinglyLinkedList<_> = [10, 20, 30].into_iter().collect();
    /// assert_eq!(*list.get_link(1).value(), 20);
    /// assert!(list.get_link(2).next().is_none());
    ///
    /// let err = list.try_get_link(3).unwrap_err();
    /// assert_eq!(err.len, Some(3));
    /// assert!(list.try_get_link(-1).is_err());
    /// ```
    pub fn try_get_link(&self, index: isize) -> Result<&Link<T>, IndexOutOfBounds> {
        let target = usize::try_from(index).map_err(|_| IndexOutOfBounds { index, len: None })?;
        self.seek(target).map_err(|len| IndexOutOfBounds { index, len: Some(len) })
    }

    /// Returns the Link at the provided `index` mutably, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is negative or not less than the size of the list.
    pub fn get_link_mut(&mut self, index: isize) -> &mut Link<T> {
        self.try_get_link_mut(index).throw()
    }

    pub fn try_get_link_mut(&mut self, index: isize) -> Result<&mut Link<T>, IndexOutOfBounds> {
        let target = usize::try_from(index).map_err(|_| IndexOutOfBounds { index, len: None })?;
        self.seek_mut(target).map_err(|len| IndexOutOfBounds { index, len: Some(len) })
    }

    /// Returns a reference to the element at the provided `index`.
    ///
    /// # Panics
    /// Panics if `index` is negative or not less than the size of the list.
    pub fn at(&self, index: isize) -> &T {
        self.get_link(index).value()
    }

    pub fn try_at(&self, index: isize) -> Result<&T, IndexOutOfBounds> {
        self.try_get_link(index).map(Link::value)
    }

    /// Returns a mutable reference to the element at the provided `index`.
    ///
    /// # Panics
    /// Panics if `index` is negative or not less than the size of the list.
    pub fn at_mut(&mut self, index: isize) -> &mut T {
        self.get_link_mut(index).value_mut()
    }

    pub fn try_at_mut(&mut self, index: isize) -> Result<&mut T, IndexOutOfBounds> {
        self.try_get_link_mut(index).map(Link::value_mut)
    }

    /// Produces an independent list with the same values in the same order. Every Link of the
    /// new list is a new allocation.
    pub fn copy(&self) -> SinglyLinkedList<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Reverses the list in place by redirecting each Link's successor to its predecessor. No
    /// values are moved and nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use teaching_collections::collections::linked::SinglyLinkedList;
    /// let mut list: SinglyLinkedList<_> = (1..=4).collect();
    /// list.reverse();
    /// assert_eq!(list.to_string(), "(4) -> (3) -> (2) -> (1)");
    /// ```
    pub fn reverse(&mut self) {
        let mut prev: Chain<T> = None;
        let mut curr = self.head.take();

        while let Some(mut link) = curr {
            curr = mem::replace(&mut link.next, prev);
            prev = Some(link);
        }

        self.head = prev;
    }

    /// Drops every element in the list, one Link at a time.
    pub fn clear(&mut self) {
        while self.try_pop_front().is_ok() {}
    }

    /// Returns a Position referencing the first element, or the end Position if the list is empty.
    pub fn begin(&self) -> Position<'_, T> {
        Position {
            link: self.head.as_deref(),
        }
    }

    /// Returns the Position one past the last element, which references no Link at all.
    pub const fn end(&self) -> Position<'_, T> {
        Position::END
    }

    /// Returns a Position referencing the first element, which allows the elements to be mutated
    /// in place.
    pub fn begin_mut(&mut self) -> PositionMut<'_, T> {
        PositionMut {
            link: self.head.as_deref_mut(),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> SinglyLinkedList<T> {
    /// Walks to the Link at `index`, returning the size of the list instead if it ends first.
    pub(crate) fn seek(&self, index: usize) -> Result<&Link<T>, usize> {
        let mut curr = self.head.as_deref();
        let mut seen = 0;

        while let Some(link) = curr {
            if seen == index {
                return Ok(link);
            }
            seen += 1;
            curr = link.next();
        }

        Err(seen)
    }

    pub(crate) fn seek_mut(&mut self, index: usize) -> Result<&mut Link<T>, usize> {
        let mut curr = self.head.as_deref_mut();
        let mut seen = 0;

        while let Some(link) = curr {
            if seen == index {
                return Ok(link);
            }
            seen += 1;
            curr = link.next.as_deref_mut();
        }

        Err(seen)
    }

    /// Returns the empty pointer at the very end of the chain, where a new last Link belongs.
    pub(crate) fn tail_slot(&mut self) -> &mut Chain<T> {
        let mut curr = &mut self.head;
        while let Some(link) = curr {
            curr = &mut link.next;
        }
        curr
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.seek(index)
            .map_err(|len| IndexOutOfBounds::unsigned(index, len))
            .throw()
            .value()
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.seek_mut(index)
            .map_err(|len| IndexOutOfBounds::unsigned(index, len))
            .throw()
            .value_mut()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Walk to the end once, then keep hold of the new last pointer while appending.
        let mut tail = self.tail_slot();
        for value in iter {
            tail = &mut tail.insert(Link::boxed(value, None)).next;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Dropping the head Box directly would recurse once per Link.
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for item in self.iter() {
            item.hash(state);
            len += 1;
        }

        // Terminate variable length hashing sequence.
        len.hash(state);
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({item})")?;
        }
        Ok(())
    }
}
