//! A list addressed by [`Position`] handles rather than indices. See [`PositionalList`].

mod iter;
mod node;
mod position;
mod positional_list;
mod tests;

pub use iter::*;
pub(crate) use node::*;
pub use position::*;
pub use positional_list::*;
