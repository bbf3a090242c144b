#[doc(inline)]
pub use crate::util::error::EmptyContainer;
use crate::util::result::ResultExtension;

/// A last-in first-out collection. Implemented by [`ArrayStack`](super::ArrayStack) and
/// [`LinkedStack`](super::LinkedStack), which are interchangeable wherever a `Stack` is expected.
pub trait Stack<T> {
    /// Pushes `value` onto the top of the Stack.
    fn push(&mut self, value: T);

    /// Removes the element on top of the Stack and returns it, or [`EmptyContainer`] if there
    /// isn't one.
    fn try_pop(&mut self) -> Result<T, EmptyContainer>;

    /// Returns a reference to the element on top of the Stack, or [`EmptyContainer`] if there
    /// isn't one.
    fn try_top(&self) -> Result<&T, EmptyContainer>;

    /// Returns the number of elements in the Stack.
    fn len(&self) -> usize;

    /// Returns true if the Stack contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes the element on top of the Stack and returns it.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Returns a reference to the element on top of the Stack.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    fn top(&self) -> &T {
        self.try_top().throw()
    }
}

/// Pops every element off `source` and pushes it onto `target`, leaving `source` empty.
///
/// The transferred elements end up above everything already in `target`, in reverse order: the
/// old bottom of `source` becomes the new top of `target`. The two stacks don't need to share an
/// implementation.
///
/// ```
/// # use positional_collections::collections::stack::{self, ArrayStack, LinkedStack, Stack};
/// let mut source: ArrayStack<_> = ['a', 'b', 'c'].into_iter().collect();
/// let mut target: LinkedStack<_> = ['x', 'y', 'z'].into_iter().collect();
/// stack::transfer(&mut source, &mut target);
///
/// assert!(source.is_empty());
/// assert_eq!(target.iter().collect::<String>(), "abczyx");
/// ```
pub fn transfer<T, S, D>(source: &mut S, target: &mut D)
where
    S: Stack<T> + ?Sized,
    D: Stack<T> + ?Sized,
{
    while let Ok(value) = source.try_pop() {
        target.push(value);
    }
}
