use std::cell::Cell;
use std::mem::MaybeUninit;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

pub(crate) type Link<T> = Option<NodeRef<T>>;

/// Shared between a node and every [`Position`](super::Position) that refers to it. Holds the id
/// of the list the node is linked into, or None once the node has been unlinked.
pub(crate) type Ticket = Rc<Cell<Option<ListId>>>;

/// Identifies a single PositionalList for its entire lifetime, regardless of where it is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u64);

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

impl ListId {
    pub fn next() -> ListId {
        ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

// NOTE: Like the other linked collections, nodes are allocated through Box<T> so that the value
// can be moved back out of the heap with take_node.

#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    /// # Safety
    /// The node must not be a sentinel, its value has to be initialized.
    pub unsafe fn value<'a>(&self) -> &'a T {
        // SAFETY: The caller guarantees that this isn't a sentinel.
        unsafe { (*self.0.as_ptr()).value.assume_init_ref() }
    }

    /// # Safety
    /// The node must not be a sentinel, its value has to be initialized.
    pub unsafe fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: The caller guarantees that this isn't a sentinel.
        unsafe { (*self.0.as_ptr()).value.assume_init_mut() }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: A NodeRef is only held while its node is allocated and owned by a list.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: A NodeRef is only held while its node is allocated and owned by a list.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: A NodeRef is only held while its node is allocated and owned by a list.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: A NodeRef is only held while its node is allocated and owned by a list.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn ticket<'a>(&self) -> &'a Ticket {
        // SAFETY: A NodeRef is only held while its node is allocated and owned by a list.
        unsafe { &(*self.0.as_ptr()).ticket }
    }

    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(Box::into_non_null(Box::new(node)))
    }

    /// Allocates a node without a value, for use as a header or trailer.
    pub fn sentinel() -> NodeRef<T> {
        NodeRef::from_node(Node {
            value: MaybeUninit::uninit(),
            prev: None,
            next: None,
            ticket: Rc::new(Cell::new(None)),
        })
    }

    pub fn take_node(self) -> Node<T> {
        // SAFETY: The node was allocated by from_node and taking it consumes the last NodeRef the
        // owning list uses for it.
        unsafe { *Box::from_non_null(self.0) }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}

pub(crate) struct Node<T> {
    /// Uninitialized for the header and trailer sentinels only.
    pub value: MaybeUninit<T>,
    pub prev: Link<T>,
    pub next: Link<T>,
    pub ticket: Ticket,
}
