//! The three exercise containers, each behind its own Cargo feature.
//!
//! # Purpose
//! These types are small, deliberately simple versions of the classic data structures: a buffer
//! that grows and shrinks, a chain of owned links and an unbalanced search tree. They exist to
//! show how each one manages its memory rather than to compete with [`std::collections`].
//!
//! # Method
//! [`Vector`](contiguous::Vector) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which saves me from writing some of the more repetitive functionality. The linked
//! types can't do that, so they offer explicit positions and iterators instead.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;

mod thing;

pub use thing::Thing;
