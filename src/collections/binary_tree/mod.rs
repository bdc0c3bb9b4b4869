//! Tree-shaped collection types. For now, this is just the unbalanced [`BinarySearchTree`] and
//! the iterators for its three depth-first traversals.

pub mod search;

#[doc(inline)]
pub use search::{BinarySearchTree, InOrder, PostOrder, PreOrder};
