use std::fmt::{self, Debug, Formatter};
use std::ptr;

use super::Link;

/// A forward-only handle to one element of a [`SinglyLinkedList`](super::SinglyLinkedList), or to
/// the end of it.
///
/// Two Positions are equal when they reference the same Link (not merely equal values), and every
/// Position that has run off the end of a list is equal to the one returned by
/// [`end`](super::SinglyLinkedList::end).
///
/// # Examples
/// ```
/// # use teaching_collections::collections::linked::SinglyLinkedList;
/// let list: SinglyLinkedList<_> = (1..=3).collect();
/// let mut pos = list.begin();
/// let mut sum = 0;
/// while pos != list.end() {
///     sum += pos.get().unwrap();
///     pos.advance();
/// }
/// assert_eq!(sum, 6);
/// ```
pub struct Position<'a, T> {
    pub(crate) link: Option<&'a Link<T>>,
}

impl<'a, T> Position<'a, T> {
    pub(crate) const END: Position<'a, T> = Position { link: None };

    /// Returns the referenced element, or `None` at the end.
    pub fn get(&self) -> Option<&'a T> {
        self.link.map(Link::value)
    }

    /// Moves to the following element. Advancing the end Position leaves it at the end.
    pub fn advance(&mut self) {
        self.link = self.link.and_then(Link::next);
    }

    pub const fn is_end(&self) -> bool {
        self.link.is_none()
    }
}

impl<T> PartialEq for Position<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.link, other.link) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Position<'_, T> {}

impl<T> Clone for Position<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<'_, T> {}

impl<T: Debug> Debug for Position<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Position").field(&self.get()).finish()
    }
}

/// A forward-only handle like [`Position`], which gives mutable access to the referenced element
/// in place.
pub struct PositionMut<'a, T> {
    pub(crate) link: Option<&'a mut Link<T>>,
}

impl<'a, T> PositionMut<'a, T> {
    pub fn get(&self) -> Option<&T> {
        self.link.as_deref().map(Link::value)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.link.as_deref_mut().map(Link::value_mut)
    }

    /// Moves to the following element, giving up access to the current one.
    pub fn advance(&mut self) {
        self.link = self.link.take().and_then(|link| link.next.as_deref_mut());
    }

    pub const fn is_end(&self) -> bool {
        self.link.is_none()
    }

    /// Converts the handle into a mutable reference to the element, which lives as long as the
    /// borrow of the list.
    pub fn into_mut(self) -> Option<&'a mut T> {
        self.link.map(Link::value_mut)
    }
}

impl<T> PartialEq<Position<'_, T>> for PositionMut<'_, T> {
    fn eq(&self, other: &Position<'_, T>) -> bool {
        match (self.link.as_deref(), other.link) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Debug> Debug for PositionMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PositionMut").field(&self.get()).finish()
    }
}
