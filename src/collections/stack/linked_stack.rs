use std::fmt::{self, Debug, Formatter};

use super::{EmptyContainer, Stack};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    below: Link<T>,
}

/// A [`Stack`] made of singly linked nodes, with the top of the Stack at the head of the chain.
/// Every operation is `O(1)`.
pub struct LinkedStack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> LinkedStack<T> {
    pub const fn new() -> LinkedStack<T> {
        LinkedStack {
            top: None,
            len: 0,
        }
    }

    /// Returns an iterator over the elements from the top of the LinkedStack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            curr: self.top.as_deref(),
        }
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, value: T) {
        self.top = Some(Box::new(Node {
            value,
            below: self.top.take(),
        }));
        self.len += 1;
    }

    fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        let node = self.top.take().ok_or(EmptyContainer)?;
        self.top = node.below;
        self.len -= 1;
        Ok(node.value)
    }

    fn try_top(&self) -> Result<&T, EmptyContainer> {
        self.top.as_deref().map(|node| &node.value).ok_or(EmptyContainer)
    }

    fn len(&self) -> usize {
        self.len
    }
}

pub struct Iter<'a, T> {
    curr: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.map(|node| {
            self.curr = node.below.as_deref();
            &node.value
        })
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = LinkedStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

// Dropping the chain recursively could overflow the call stack for long Stacks.
impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        let mut curr = self.top.take();
        while let Some(mut node) = curr {
            curr = node.below.take();
        }
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedStack")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .finish()
    }
}
