use std::cell::Cell;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::rc::Rc;

use super::{Iter, IterMut, Link, ListId, Node, NodeRef, Position, Positions};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, InvalidPosition};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A doubly linked list which hands out a [`Position`] for every element added to it. Positions
/// remain valid while elements elsewhere in the list are added and removed, and can be used to
/// insert next to, replace, remove or find the index of their element.
///
/// The list is bounded by a header and trailer sentinel, neither of which is ever exposed as a
/// Position.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the PositionalList.
/// - `k`: The index of the Position in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `first/last` | `O(1)` |
/// | `before/after` | `O(1)` |
/// | `add_first/last` | `O(1)` |
/// | `add_before/after` | `O(1)` |
/// | `get/set` | `O(1)` |
/// | `remove` | `O(1)` |
/// | `contains` | `O(1)` |
/// | `index_of` | `O(k)` |
///
/// Indices aren't stored anywhere, because every insertion or removal would shift the indices of
/// all elements after it. `index_of` walks from the header instead.
pub struct PositionalList<T> {
    pub(crate) id: ListId,
    pub(crate) header: NodeRef<T>,
    pub(crate) trailer: NodeRef<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> PositionalList<T> {
    /// Creates a new PositionalList with no elements. Only the sentinels are allocated.
    pub fn new() -> PositionalList<T> {
        let header = NodeRef::sentinel();
        let trailer = NodeRef::sentinel();
        *header.next_mut() = Some(trailer);
        *trailer.prev_mut() = Some(header);

        PositionalList {
            id: ListId::next(),
            header,
            trailer,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the PositionalList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the PositionalList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the Position of the first element, if the list isn't empty.
    pub fn first(&self) -> Option<Position<T>> {
        self.wrap(*self.header.next())
    }

    /// Returns the Position of the last element, if the list isn't empty.
    pub fn last(&self) -> Option<Position<T>> {
        self.wrap(*self.trailer.prev())
    }

    /// Returns the Position directly before `position`, or None if `position` is the first.
    ///
    /// # Panics
    /// Panics if `position` isn't linked into this list.
    pub fn before(&self, position: &Position<T>) -> Option<Position<T>> {
        self.try_before(position).throw()
    }

    pub fn try_before(&self, position: &Position<T>) -> Result<Option<Position<T>>, InvalidPosition> {
        Ok(self.wrap(*self.validate(position)?.prev()))
    }

    /// Returns the Position directly after `position`, or None if `position` is the last.
    ///
    /// # Panics
    /// Panics if `position` isn't linked into this list.
    pub fn after(&self, position: &Position<T>) -> Option<Position<T>> {
        self.try_after(position).throw()
    }

    pub fn try_after(&self, position: &Position<T>) -> Result<Option<Position<T>>, InvalidPosition> {
        Ok(self.wrap(*self.validate(position)?.next()))
    }

    /// Adds `value` to the front of the list, returning its Position.
    pub fn add_first(&mut self, value: T) -> Position<T> {
        // SAFETY: The header is always followed by at least the trailer.
        let next = unsafe { self.header.next().unreachable() };
        self.link_between(value, self.header, next)
    }

    /// Adds `value` to the back of the list, returning its Position.
    pub fn add_last(&mut self, value: T) -> Position<T> {
        // SAFETY: The trailer is always preceded by at least the header.
        let prev = unsafe { self.trailer.prev().unreachable() };
        self.link_between(value, prev, self.trailer)
    }

    /// Adds `value` directly before `position`, returning the new Position.
    ///
    /// # Panics
    /// Panics if `position` isn't linked into this list.
    pub fn add_before(&mut self, position: &Position<T>, value: T) -> Position<T> {
        self.try_add_before(position, value).throw()
    }

    pub fn try_add_before(
        &mut self,
        position: &Position<T>,
        value: T,
    ) -> Result<Position<T>, InvalidPosition> {
        let next = self.validate(position)?;
        // SAFETY: Element nodes are always preceded by another node, at worst the header.
        let prev = unsafe { next.prev().unreachable() };
        Ok(self.link_between(value, prev, next))
    }

    /// Adds `value` directly after `position`, returning the new Position.
    ///
    /// # Panics
    /// Panics if `position` isn't linked into this list.
    pub fn add_after(&mut self, position: &Position<T>, value: T) -> Position<T> {
        self.try_add_after(position, value).throw()
    }

    pub fn try_add_after(
        &mut self,
        position: &Position<T>,
        value: T,
    ) -> Result<Position<T>, InvalidPosition> {
        let prev = self.validate(position)?;
        // SAFETY: Element nodes are always followed by another node, at worst the trailer.
        let next = unsafe { prev.next().unreachable() };
        Ok(self.link_between(value, prev, next))
    }

    /// Returns a reference to the element at `position`.
    ///
    /// # Panics
    /// Panics if `position` isn't linked into this list.
    pub fn get(&self, position: &Position<T>) -> &T {
        self.try_get(position).throw()
    }

    pub fn try_get(&self, position: &Position<T>) -> Result<&T, InvalidPosition> {
        // SAFETY: Sentinels are never handed out as Positions, so a valid one is an element node.
        Ok(unsafe { self.validate(position)?.value() })
    }

    /// Returns a mutable reference to the element at `position`.
    ///
    /// # Panics
    /// Panics if `position` isn't linked into this list.
    pub fn get_mut(&mut self, position: &Position<T>) -> &mut T {
        self.try_get_mut(position).throw()
    }

    pub fn try_get_mut(&mut self, position: &Position<T>) -> Result<&mut T, InvalidPosition> {
        // SAFETY: Sentinels are never handed out as Positions, so a valid one is an element node.
        Ok(unsafe { self.validate(position)?.value_mut() })
    }

    /// Replaces the element at `position` with `value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `position` isn't linked into this list.
    pub fn set(&mut self, position: &Position<T>, value: T) -> T {
        self.try_set(position, value).throw()
    }

    pub fn try_set(&mut self, position: &Position<T>, value: T) -> Result<T, InvalidPosition> {
        Ok(mem::replace(self.try_get_mut(position)?, value))
    }

    /// Removes the element at `position` from the list and returns it. The Position, along with any
    /// clones of it, is invalid from here on.
    ///
    /// # Panics
    /// Panics if `position` isn't linked into this list.
    pub fn remove(&mut self, position: &Position<T>) -> T {
        self.try_remove(position).throw()
    }

    pub fn try_remove(&mut self, position: &Position<T>) -> Result<T, InvalidPosition> {
        let node = self.validate(position)?;
        // SAFETY: The node has just been validated as an element of this list.
        Ok(unsafe { self.unlink(node) })
    }

    /// Returns the index of `position`, counting the elements before it from the front of the
    /// list. A missing Position is never found, so `None` is returned for it.
    ///
    /// # Panics
    /// Panics if `position` is provided but isn't linked into this list.
    pub fn index_of(&self, position: Option<&Position<T>>) -> Option<usize> {
        self.try_index_of(position).throw()
    }

    pub fn try_index_of(
        &self,
        position: Option<&Position<T>>,
    ) -> Result<Option<usize>, InvalidPosition> {
        let Some(position) = position else {
            return Ok(None);
        };
        let target = self.validate(position)?;

        let mut curr = self.header;
        let mut index = 0;
        loop {
            // SAFETY: target is linked into this list, so it is reached before the trailer, which
            // is the only node without a next.
            curr = unsafe { curr.next().unreachable() };
            if curr == target {
                break Ok(Some(index));
            }
            index += 1;
        }
    }

    /// Returns true if `position` is currently linked into this list.
    pub fn contains(&self, position: &Position<T>) -> bool {
        self.validate(position).is_ok()
    }

    /// Returns an iterator over the Positions of all elements, front to back.
    pub fn positions(&self) -> Positions<'_, T> {
        Positions {
            inner: self.nodes(),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> PositionalList<T> {
    pub(crate) fn validate(&self, position: &Position<T>) -> Result<NodeRef<T>, InvalidPosition> {
        if position.ticket.get() == Some(self.id) {
            Ok(position.node)
        } else {
            Err(InvalidPosition)
        }
    }

    /// Wraps a link as a Position, unless it points to one of the sentinels.
    pub(crate) fn wrap(&self, link: Link<T>) -> Option<Position<T>> {
        link.filter(|node| *node != self.header && *node != self.trailer)
            .map(Position::for_node)
    }

    pub(crate) fn link_between(&mut self, value: T, prev: NodeRef<T>, next: NodeRef<T>) -> Position<T> {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value: MaybeUninit::new(value),
            prev: Some(prev),
            next: Some(next),
            ticket: Rc::new(Cell::new(Some(self.id))),
        });

        *prev.next_mut() = Some(node);
        *next.prev_mut() = Some(node);

        Position::for_node(node)
    }

    /// Unlinks `node`, splicing its neighbours together and invalidating all Positions for it.
    ///
    /// # Safety
    /// `node` must be an element node (not a sentinel) that is linked into this list.
    pub(crate) unsafe fn unlink(&mut self, node: NodeRef<T>) -> T {
        let Node { value, prev, next, ticket } = node.take_node();

        // SAFETY: Element nodes always sit between two other nodes, at worst the sentinels.
        let (prev, next) = unsafe { (prev.unreachable(), next.unreachable()) };
        *prev.next_mut() = Some(next);
        *next.prev_mut() = Some(prev);

        ticket.set(None);
        self.len -= 1;

        // SAFETY: Only the sentinels hold uninitialized values, and the caller guarantees that this
        // isn't one of them.
        unsafe { value.assume_init() }
    }

    pub(crate) fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            // SAFETY: The header is always followed by an element or the trailer.
            front: unsafe { self.header.next().unreachable() },
            // SAFETY: The trailer is always preceded by an element or the header.
            back: unsafe { self.trailer.prev().unreachable() },
            len: self.len,
            _phantom: PhantomData,
        }
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        let mut curr = self.header;
        let mut count = 0;
        while let Some(next) = curr.next() {
            // UNWRAP: This needs to panic if prev is None.
            assert!(next.prev().unwrap() == curr);
            curr = *next;
            count += 1;
        }
        assert!(self.trailer == curr);
        assert_eq!(count - 1, self.len);
    }
}

/// A double-ended walk over the element nodes of a list, driven by the remaining length rather
/// than the sentinels.
pub(crate) struct Nodes<'a, T> {
    pub front: NodeRef<T>,
    pub back: NodeRef<T>,
    pub len: usize,
    pub _phantom: PhantomData<&'a PositionalList<T>>,
}

impl<T> Iterator for Nodes<'_, T> {
    type Item = NodeRef<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.front;
        self.len -= 1;
        if self.len > 0 {
            // SAFETY: There are more elements after this one.
            self.front = unsafe { node.next().unreachable() };
        }
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Nodes<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.back;
        self.len -= 1;
        if self.len > 0 {
            // SAFETY: There are more elements before this one.
            self.back = unsafe { node.prev().unreachable() };
        }
        Some(node)
    }
}

impl<T> FromIterator<T> for PositionalList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = PositionalList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for PositionalList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for PositionalList<T> {
    fn drop(&mut self) {
        let mut curr = *self.header.next();
        while let Some(ptr) = curr {
            if ptr == self.trailer {
                break;
            }
            let node = ptr.take_node();
            curr = node.next;
            node.ticket.set(None);
            // SAFETY: Every node between the sentinels holds an initialized value.
            drop(unsafe { node.value.assume_init() });
        }

        // Sentinel values are uninitialized, so dropping the nodes leaves them alone.
        drop(self.header.take_node());
        drop(self.trailer.take_node());
    }
}

impl<T: PartialEq> PartialEq for PositionalList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PositionalList<T> {}

impl<T: Debug> Debug for PositionalList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionalList")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for PositionalList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ") <-> (")?;
            }
            write!(f, "{item:?}")?;
        }
        write!(f, ")")
    }
}
