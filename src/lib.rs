//! Classic data-structure exercises, written the hard way: a positional list, a stack with two
//! interchangeable backings and a linked queue that concatenates in constant time.
//!
//! # Purpose
//! These are the containers found at the start of most data-structures courses. Each one is small,
//! but each has a single idea worth getting right:
//! - [`PositionalList`](collections::positional::PositionalList) hands out
//!   [`Position`](collections::positional::Position)s that stay valid while the list changes
//!   around them, and that fail cleanly once their element is gone.
//! - [`Stack`](collections::stack::Stack) is a trait, so [`transfer`](collections::stack::transfer)
//!   works between an [`ArrayStack`](collections::stack::ArrayStack) and a
//!   [`LinkedStack`](collections::stack::LinkedStack) in either direction.
//! - [`LinkedQueue::concatenate`](collections::queue::LinkedQueue::concatenate) splices one chain
//!   of nodes onto another instead of moving elements one at a time.
//!
//! # Error Handling
//! Every operation that can fail comes in two forms. The `try_` form returns a [`Result`] with a
//! strongly typed error, usually a ZST such as
//! [`InvalidPosition`](collections::positional::InvalidPosition) or
//! [`EmptyContainer`](collections::stack::EmptyContainer). The plain form panics with the error's
//! message, which is more ergonomic when misuse is a bug rather than a condition to handle.
//!
//! None of the containers are thread safe. They are plain single-threaded, in-memory structures.
#![feature(box_vec_non_null)]
#![feature(debug_closure_helpers)]

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub mod error {
    //! Errors shared by all of the collections.
    #[doc(inline)]
    pub use crate::util::error::*;
}

pub(crate) mod util;
