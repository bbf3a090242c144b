#![cfg(test)]

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

/// Runs the shared Stack scenarios for a source and target implementation. Each pairing gets its
/// own module so failures name the implementations involved.
macro_rules! stack_suite {
    ($name:ident, $source:ident, $target:ident) => {
        mod $name {
            use super::*;
            use crate::util::panic::assert_panics;

            fn source<T>() -> $source<T> {
                $source::new()
            }

            fn target<T>() -> $target<T> {
                $target::new()
            }

            #[test]
            fn test_push_pop_top() {
                let mut stack = source();
                assert!(stack.is_empty());
                stack.push(1);
                stack.push(2);
                assert_eq!(*stack.top(), 2);
                assert_eq!(stack.len(), 2);
                assert_eq!(stack.pop(), 2);
                assert_eq!(stack.pop(), 1);
                assert!(stack.is_empty());
            }

            #[test]
            fn test_empty_stack_errors() {
                let mut stack = source::<u8>();
                assert_eq!(stack.try_pop(), Err(EmptyContainer));
                assert_eq!(stack.try_top(), Err(EmptyContainer));

                assert_panics!({ source::<u8>().pop() });
                assert_panics!({
                    let stack = source::<u8>();
                    *stack.top()
                });
            }

            #[test]
            fn test_transfer() {
                let mut from = source();
                let mut to = target();
                from.extend(["a", "b", "c"]);
                to.extend(["x", "y", "z"]);

                transfer(&mut from, &mut to);

                assert_eq!(from.len(), 0);
                assert_eq!(to.len(), 6);
                for expected in ["a", "b", "c", "z", "y", "x"] {
                    assert_eq!(to.pop(), expected);
                }
            }

            #[test]
            fn test_transfer_empty_to_empty() {
                let mut from = source::<&str>();
                let mut to = target::<&str>();
                transfer(&mut from, &mut to);
                assert_eq!(from.len(), 0);
                assert_eq!(to.len(), 0);
            }

            #[test]
            fn test_transfer_non_empty_to_empty() {
                let mut from = source();
                let mut to = target();
                from.extend(["a", "b", "c"]);

                transfer(&mut from, &mut to);

                assert_eq!(from.len(), 0);
                assert_eq!(to.len(), 3);
                assert_eq!(to.pop(), "a");
                assert_eq!(to.pop(), "b");
                assert_eq!(to.pop(), "c");
            }

            #[test]
            fn test_transfer_empty_to_non_empty() {
                let mut from = source();
                let mut to = target();
                to.extend(["x", "y", "z"]);

                transfer(&mut from, &mut to);

                assert_eq!(from.len(), 0);
                assert_eq!(to.len(), 3);
                assert_eq!(to.pop(), "z");
                assert_eq!(to.pop(), "y");
                assert_eq!(to.pop(), "x");
            }

            #[test]
            fn test_transfer_through_trait_objects() {
                let mut from = source();
                let mut to = target();
                from.extend(0..100);
                to.extend(100..150);

                let (from_dyn, to_dyn): (&mut dyn Stack<i32>, &mut dyn Stack<i32>) =
                    (&mut from, &mut to);
                transfer(from_dyn, to_dyn);

                assert!(from.is_empty());
                let popped: Vec<_> = (0..to.len()).map(|_| to.pop()).collect();
                let expected: Vec<_> = (0..100).chain((100..150).rev()).collect();
                assert_eq!(popped, expected);
            }
        }
    };
}

stack_suite!(array_to_array, ArrayStack, ArrayStack);
stack_suite!(linked_to_linked, LinkedStack, LinkedStack);
stack_suite!(array_to_linked, ArrayStack, LinkedStack);
stack_suite!(linked_to_array, LinkedStack, ArrayStack);

#[test]
fn test_array_stack_growth() {
    let mut stack = ArrayStack::new();
    assert_eq!(stack.cap(), 0, "A new ArrayStack shouldn't allocate.");

    stack.push(0);
    assert_eq!(stack.cap(), 2);
    for i in 1..5 {
        stack.push(i);
    }
    assert_eq!(stack.cap(), 8, "Capacity should double when full.");
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);

    let stack = ArrayStack::<u64>::with_cap(5);
    assert_eq!(stack.cap(), 5);
    assert!(stack.is_empty());

    assert_panics!({ ArrayStack::<u64>::with_cap(isize::MAX as usize) });
}

#[test]
fn test_array_stack_zst_support() {
    let mut stack = ArrayStack::new();
    for _ in 0..10 {
        stack.push(ZeroSizedType);
    }
    assert_eq!(stack.len(), 10);
    assert_eq!(stack.ptr, std::ptr::NonNull::dangling(), "ZSTs should never allocate.");
    assert_eq!(stack.pop(), ZeroSizedType);
    assert_eq!(stack.len(), 9);
}

#[test]
fn test_linked_stack_iter() {
    let stack: LinkedStack<_> = (1..=3).collect();
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(*stack.top(), 3);
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new();

    let mut array_stack = ArrayStack::new();
    let mut linked_stack = LinkedStack::new();
    for _ in 0..5 {
        array_stack.push(counter.clone());
        linked_stack.push(counter.clone());
    }

    drop(array_stack.pop());
    drop(linked_stack.pop());
    assert_eq!(counter.drops(), 2);

    transfer(&mut array_stack, &mut linked_stack);
    assert_eq!(counter.drops(), 2, "Transferring shouldn't drop anything.");

    drop(array_stack);
    drop(linked_stack);
    assert_eq!(counter.drops(), 10, "Every element should be dropped exactly once.");
}

#[test]
fn test_long_linked_stack_drop() {
    let stack: LinkedStack<_> = (0..1_000_000).collect();
    drop(stack);
}

#[test]
fn test_stacks_are_thread_safe() {
    fn assert_send_sync<S: Send + Sync>() {}
    assert_send_sync::<ArrayStack<i32>>();
    assert_send_sync::<LinkedStack<i32>>();

    let stack: ArrayStack<_> = (0..4).collect();
    let popped = std::thread::spawn(move || {
        let mut stack = stack;
        stack.pop()
    })
    .join();
    assert_eq!(popped.ok(), Some(3), "An ArrayStack should be usable from another thread.");
}

#[test]
fn test_fmt() {
    let stack: ArrayStack<_> = [1, 2].into_iter().collect();
    assert_eq!(
        format!("{stack:?}"),
        "ArrayStack { contents: [2, 1], len: 2, cap: 2 }"
    );

    let stack: LinkedStack<_> = [1, 2].into_iter().collect();
    assert_eq!(format!("{stack:?}"), "LinkedStack { contents: [2, 1], len: 2 }");
}
