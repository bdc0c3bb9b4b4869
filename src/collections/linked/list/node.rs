use std::fmt::{self, Debug, Formatter};

/// An owning pointer to the rest of a chain, or `None` at the end of it.
pub(crate) type Chain<T> = Option<Box<Link<T>>>;

/// A single node of a [`SinglyLinkedList`](super::SinglyLinkedList), holding one value and owning
/// the rest of the chain.
///
/// Links are only ever handed out by reference, so the value can be read or replaced in place but
/// the chain itself can't be rearranged from outside of the list.
pub struct Link<T> {
    pub(crate) value: T,
    pub(crate) next: Chain<T>,
}

impl<T> Link<T> {
    pub(crate) fn boxed(value: T, next: Chain<T>) -> Box<Link<T>> {
        Box::new(Link { value, next })
    }

    pub const fn value(&self) -> &T {
        &self.value
    }

    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns the following Link, if this isn't the last one.
    pub fn next(&self) -> Option<&Link<T>> {
        self.next.as_deref()
    }

    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl<T: Debug> Debug for Link<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("value", &self.value)
            .field("has_next", &self.has_next())
            .finish()
    }
}
