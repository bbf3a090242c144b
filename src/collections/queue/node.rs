use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodeRef is only held while its node is allocated and owned by a queue.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: A NodeRef is only held while its node is allocated and owned by a queue.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: A NodeRef is only held while its node is allocated and owned by a queue.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: A NodeRef is only held while its node is allocated and owned by a queue.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(Box::into_non_null(Box::new(node)))
    }

    pub fn take_node(self) -> Node<T> {
        // SAFETY: The node was allocated by from_node and the queue drops its last NodeRef to it
        // when taking it.
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

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
