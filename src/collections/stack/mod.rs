//! Last-in first-out collections. [`ArrayStack`] and [`LinkedStack`] both implement the [`Stack`]
//! trait, and [`transfer`] moves elements between any two Stacks.

mod array_stack;
mod linked_stack;
mod stack;
mod tests;

#[doc(inline)]
pub use array_stack::ArrayStack;
#[doc(inline)]
pub use linked_stack::{Iter as LinkedStackIter, LinkedStack};
pub use stack::*;
