//! Contiguous collection types. Namely [`Vector`], a dynamic array which grows and shrinks its
//! buffer as items are pushed and popped.

mod buffer;
pub mod vector;

pub(crate) use buffer::Buffer;
#[doc(inline)]
pub use vector::Vector;
