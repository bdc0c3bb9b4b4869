pub mod alloc;
#[cfg(any(feature = "contiguous", feature = "linked"))]
pub mod error;
pub mod panic;
#[cfg(any(feature = "contiguous", feature = "linked"))]
pub mod result;
