use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodeRef, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyContainer};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A first-in first-out queue made of singly linked nodes. Elements are enqueued at the tail and
/// dequeued from the head.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedQueue.
/// - `m`: The number of items in the other LinkedQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `first` | `O(1)` |
/// | `enqueue` | `O(1)` |
/// | `dequeue` | `O(1)` |
/// | `concatenate` | `O(1)` |
///
/// `concatenate` splices the other queue's chain of nodes onto the tail rather than moving the
/// elements one by one, so its cost is independent of both `n` and `m`.
pub struct LinkedQueue<T> {
    pub(crate) state: QueueState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum QueueState<T> {
    Empty,
    Full(QueueContents<T>),
}

use QueueState::*;

pub(crate) struct QueueContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> LinkedQueue<T> {
    /// Creates a new LinkedQueue with no elements.
    pub const fn new() -> LinkedQueue<T> {
        LinkedQueue {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the LinkedQueue.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(QueueContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the LinkedQueue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Adds `value` to the back of the LinkedQueue.
    pub fn enqueue(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = QueueState::single(value),
            Full(contents) => contents.enqueue(value),
        }
    }

    /// Removes the element at the front of the LinkedQueue and returns it.
    ///
    /// # Panics
    /// Panics if the LinkedQueue is empty.
    pub fn dequeue(&mut self) -> T {
        self.try_dequeue().throw()
    }

    pub fn try_dequeue(&mut self) -> Result<T, EmptyContainer> {
        match &mut self.state {
            Empty => Err(EmptyContainer),
            Full(QueueContents { len, head, .. }) => {
                let node = head.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the head is followed by at
                        // least one more node.
                        *head = unsafe { node.next.unreachable() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Ok(node.value)
            },
        }
    }

    /// Returns a reference to the element at the front of the LinkedQueue, the next one to be
    /// dequeued.
    ///
    /// # Panics
    /// Panics if the LinkedQueue is empty.
    pub fn first(&self) -> &T {
        self.try_first().throw()
    }

    pub fn try_first(&self) -> Result<&T, EmptyContainer> {
        match &self.state {
            Empty => Err(EmptyContainer),
            Full(QueueContents { head, .. }) => Ok(head.value()),
        }
    }

    /// Moves every element of `other` onto the back of this LinkedQueue, preserving their order
    /// and leaving `other` empty.
    ///
    /// The nodes of `other` are spliced on as a whole, no elements are moved individually.
    ///
    /// # Panics
    /// Panics if the combined length overflows a [`usize`].
    pub fn concatenate(&mut self, other: &mut LinkedQueue<T>) {
        let (other_len, other_head, other_tail) = match &other.state {
            Empty => return,
            Full(QueueContents { len, head, tail }) => (*len, *head, *tail),
        };

        match &mut self.state {
            Empty => mem::swap(&mut self.state, &mut other.state),
            Full(contents) => {
                contents.len = contents.len
                    .checked_add(other_len.get())
                    .ok_or(CapacityOverflow).throw();

                *contents.tail.next_mut() = Some(other_head);
                contents.tail = other_tail;
                other.state = Empty;
            },
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> QueueContents<T> {
    pub fn enqueue(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> QueueContents<T> {
        let node = NodeRef::from_node(Node {
            value,
            next: None,
        });

        QueueContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> QueueState<T> {
    pub fn single(value: T) -> QueueState<T> {
        Full(QueueContents::wrap_one(value))
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = LinkedQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        match self.state {
            Empty => {},
            Full(QueueContents { head, .. }) => {
                let mut curr = Some(head);
                while let Some(ptr) = curr {
                    let node = ptr.take_node();
                    curr = node.next;
                }
            },
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T: Debug> Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedQueue")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ") <- (")?;
            }
            write!(f, "{item:?}")?;
        }
        write!(f, ")")
    }
}
