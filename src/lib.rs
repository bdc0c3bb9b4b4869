//! A small set of hand-written containers, written to understand how each one owns and moves its
//! memory.
//!
//! # Purpose
//! This crate is a learning exercise with no expectation of being used in production. Each
//! container is the textbook version of itself: [`Vector`](collections::contiguous::Vector) is a
//! buffer which doubles when full and halves when mostly empty,
//! [`SinglyLinkedList`](collections::linked::SinglyLinkedList) is a chain of owned links with no
//! cached length, and [`BinarySearchTree`](collections::binary_tree::BinarySearchTree) is never
//! rebalanced.
//!
//! # Error Handling
//! Every fallible accessor comes in two flavours. The plain one (`at`, `front`, `pop_back`, ...)
//! panics with the message of a strongly typed error, because being forced to handle an error on
//! every index gets old very quickly. The `try_` flavour returns that same error as a [`Result`]
//! instead. The errors themselves are small structs which implement
//! [`Error`](std::error::Error), rather than strings or boxed trait objects.
//!
//! # Dependencies
//! The containers only depend on `std`, plus `tracing` when the `contiguous` feature is enabled
//! (Vector reallocations are traced). The `driver` feature adds the console session for the search tree and the `bst` binary that runs
//! it, which is the only part of the crate that installs a subscriber. Some derive macros are
//! used because they remove the need for some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "driver")]
pub mod driver;

pub(crate) mod util;
