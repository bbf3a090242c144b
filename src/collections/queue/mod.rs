//! A first-in first-out [`LinkedQueue`], supporting `O(1)` concatenation.

mod iter;
mod length;
mod linked_queue;
mod node;

pub use iter::*;
pub(crate) use length::*;
pub use linked_queue::*;
pub(crate) use node::*;
