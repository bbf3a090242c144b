use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use super::{NodeRef, Ticket};

/// An opaque handle to the location of an element within a
/// [`PositionalList`](super::PositionalList).
///
/// A Position stays valid across insertions and removals of other elements, but is invalidated for
/// good once its own element is removed or its list is dropped. The handle only records where the
/// element lives, never its index, so indices are always recalculated by the list.
///
/// Cloning a Position is cheap and produces a handle to the same element. Two Positions are equal
/// if they refer to the same element, even once that element has been removed.
pub struct Position<T> {
    pub(crate) node: NodeRef<T>,
    pub(crate) ticket: Ticket,
}

impl<T> Position<T> {
    /// Creates a handle for an element node that is currently linked into a list.
    pub(crate) fn for_node(node: NodeRef<T>) -> Position<T> {
        Position {
            node,
            ticket: Rc::clone(node.ticket()),
        }
    }

    /// Returns true if the element this Position refers to is still linked into a list. Use
    /// [`PositionalList::contains`](super::PositionalList::contains) to check a specific list.
    pub fn is_linked(&self) -> bool {
        self.ticket.get().is_some()
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        Position {
            node: self.node,
            ticket: Rc::clone(&self.ticket),
        }
    }
}

// The ticket outlives the node for as long as a Position holds it, so comparing tickets can't be
// fooled by the allocator reusing a freed node's address.
impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ticket, &other.ticket)
    }
}

impl<T> Eq for Position<T> {}

impl<T> Hash for Position<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.ticket).hash(state);
    }
}

impl<T> Debug for Position<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("node", &self.node.0)
            .field("linked", &self.is_linked())
            .finish()
    }
}
