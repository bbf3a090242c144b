//! The collection types, each behind a feature of the same name.
//!
//! # Method
//! Linked types manage their own nodes through [`NonNull`](std::ptr::NonNull) pointers, or through
//! [`Box`] where a node only ever has a single owner. Applicable types implement the usual
//! conversion and iteration traits, so they can be built with `collect` and read with `for`.

#[cfg(feature = "positional")]
pub mod positional;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;
