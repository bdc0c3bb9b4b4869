use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The error produced by bounds-checked indexing. `len` is only known if the collection was
/// measured while looking for the index, which a negative index never requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: isize,
    pub len: Option<usize>,
}

impl IndexOutOfBounds {
    /// Creates the error for an unsigned index into a collection of known length.
    pub fn unsigned(index: usize, len: usize) -> IndexOutOfBounds {
        IndexOutOfBounds {
            // An index this large is out of bounds for any collection anyway.
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len: Some(len),
        }
    }
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.len {
            Some(len) => write!(
                f,
                "Index {} out of bounds for collection with {} elements!",
                self.index, len
            ),
            None => write!(f, "Index {} out of bounds!", self.index),
        }
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty collection!")
    }
}

impl Error for EmptyCollection {}

#[cfg(feature = "contiguous")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

#[cfg(feature = "contiguous")]
impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

#[cfg(feature = "contiguous")]
impl Error for CapacityOverflow {}
