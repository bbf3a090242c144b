use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Nodes, Position, PositionalList};

impl<T> IntoIterator for PositionalList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owned iterator over the elements of a [`PositionalList`]. Any elements left when it is
/// dropped are dropped along with the list.
pub struct IntoIter<T> {
    pub(crate) list: PositionalList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes().next()?;
        // SAFETY: nodes only yields element nodes of this list.
        Some(unsafe { self.list.unlink(node) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes().next_back()?;
        // SAFETY: nodes only yields element nodes of this list.
        Some(unsafe { self.list.unlink(node) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.nodes(),
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) inner: Nodes<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: nodes only yields element nodes, which hold initialized values.
        self.inner.next().map(|node| unsafe { node.value() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: nodes only yields element nodes, which hold initialized values.
        self.inner.next_back().map(|node| unsafe { node.value() })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a mut PositionalList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            inner: self.nodes(),
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    pub(crate) inner: Nodes<'a, T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: Each node is yielded once, so no two mutable references alias.
        self.inner.next().map(|mut node| unsafe { node.value_mut() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: Each node is yielded once, so no two mutable references alias.
        self.inner.next_back().map(|mut node| unsafe { node.value_mut() })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An iterator over the [`Position`]s of a [`PositionalList`], front to back. See
/// [`PositionalList::positions`].
pub struct Positions<'a, T> {
    pub(crate) inner: Nodes<'a, T>,
}

impl<T> Iterator for Positions<'_, T> {
    type Item = Position<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Position::for_node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Positions<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Position::for_node)
    }
}

impl<T> ExactSizeIterator for Positions<'_, T> {}

impl<T> FusedIterator for Positions<'_, T> {}
