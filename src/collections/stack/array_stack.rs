use std::alloc::{self, Layout};
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::iter::Rev;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::slice;

use super::{EmptyContainer, Stack};
use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A [`Stack`] backed by a single contiguous allocation, which doubles in size whenever it runs out
/// of room. The top of the Stack is the last initialized slot.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayStack.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `top` | `O(1)` |
///
/// \* If the ArrayStack doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct ArrayStack<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> ArrayStack<T> {
    /// Creates a new ArrayStack with capacity 0. Nothing is allocated until the first push.
    pub const fn new() -> ArrayStack<T> {
        ArrayStack {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new ArrayStack with room for exactly `cap` elements before reallocating.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> ArrayStack<T> {
        let mut stack = ArrayStack::new();
        stack.realloc(cap);
        stack
    }

    /// Returns the number of elements the ArrayStack can hold without reallocating.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns an iterator over the elements from the top of the ArrayStack to the bottom.
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.as_slice().iter().rev()
    }

    /// The elements from bottom to top.
    pub(crate) const fn as_slice(&self) -> &[T] {
        // SAFETY: The first len slots are initialized, and ptr is dangling but aligned when len is
        // zero.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            MIN_CAP,
            self.cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
        );
        self.realloc(new_cap);
    }

    /// Moves the allocation to one that holds exactly `new_cap` elements. Zero-sized layouts never
    /// allocate, so a Stack of ZSTs keeps its dangling pointer throughout.
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        let old_layout = ArrayStack::<T>::make_layout(self.cap);
        let new_layout = ArrayStack::<T>::make_layout(new_cap);

        self.ptr = match (old_layout.size(), new_layout.size()) {
            (0, 0) => NonNull::dangling(),
            (0, _) => ArrayStack::<T>::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: The old layout is non-zero, so ptr was allocated with it.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) };
                NonNull::dangling()
            },
            (_, new_size) => NonNull::new(
                // SAFETY: ptr was allocated with old_layout and new_size is non-zero and checked
                // by Layout::array not to exceed isize::MAX.
                unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_size).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(new_layout)),
        };
        self.cap = new_cap;
    }

    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow).throw()
    }

    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        NonNull::new(
            // SAFETY: Zero-sized layouts have been guarded against by the caller.
            unsafe { alloc::alloc(layout).cast() }
        ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to fit the new element, so the slot at len
        // is in bounds and uninitialized.
        unsafe { self.ptr.add(self.len).write(value) };
        self.len += 1;
    }

    fn try_pop(&mut self) -> Result<T, EmptyContainer> {
        if self.len == 0 {
            return Err(EmptyContainer);
        }
        self.len -= 1;
        // SAFETY: The slot at the old top is initialized, and decrementing len means it is never
        // read again, which moves the value out of the buffer.
        Ok(unsafe { self.ptr.add(self.len).read() })
    }

    fn try_top(&self) -> Result<&T, EmptyContainer> {
        self.as_slice().last().ok_or(EmptyContainer)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = ArrayStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

// SAFETY: An ArrayStack uniquely owns its buffer and the elements in it, so it is safe to Send when
// T: Send.
unsafe impl<T: Send> Send for ArrayStack<T> {}
// SAFETY: The safe API only hands out shared references to elements through &ArrayStack and has no
// interior mutability, so it is safe to Sync when T: Sync.
unsafe impl<T: Sync> Sync for ArrayStack<T> {}

impl<T> Drop for ArrayStack<T> {
    fn drop(&mut self) {
        // SAFETY: The first len slots are initialized and are never touched again.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len)) };
        self.len = 0;
        self.realloc(0);
    }
}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish()
    }
}
