#![cfg(test)]

use std::iter;
use std::ptr::NonNull;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{CapacityExceeded, Underflow};
use crate::util::panic::assert_panics;

#[test]
fn test_push_until_full() {
    let mut stack = BoundedStack::with_cap(3);
    for i in 0..3 {
        assert!(!stack.is_full(), "Stack shouldn't be full before the 3rd push.");
        assert_eq!(stack.push(i), Ok(()));
    }
    assert!(stack.is_full(), "Stack should be full after the 3rd push.");
    assert_eq!(
        stack.push(3),
        Err(CapacityExceeded { cap: 3 }),
        "Pushing onto a full stack should fail."
    );
    assert_eq!(stack.len(), 3, "A failed push shouldn't change the length.");
    assert_eq!(stack.top(), Ok(&2), "A failed push shouldn't change the top.");
}

#[test]
fn test_lifo_order() {
    let mut stack = BoundedStack::with_cap(5);
    stack.extend([1, 2, 3]);
    assert_eq!(stack.top(), Ok(&3));

    assert_eq!(stack.pop(), Ok(()));
    assert_eq!(stack.top(), Ok(&2), "Pop should expose the element below the top.");

    assert_eq!(stack.take(), Ok(2));
    assert_eq!(stack.take(), Ok(1));
    assert!(stack.is_empty());
}

#[test]
fn test_empty_underflow() {
    let mut stack = BoundedStack::<u8>::with_cap(2);
    assert_eq!(stack.top(), Err(Underflow));
    assert_eq!(stack.pop(), Err(Underflow));
    assert_eq!(stack.take(), Err(Underflow));
    assert_eq!(stack.len(), 0, "Underflow shouldn't change the length.");

    stack.push(1).unwrap();
    stack.pop().unwrap();
    assert_eq!(stack.pop(), Err(Underflow), "Popping past the bottom should fail.");
}

#[test]
fn test_zero_cap() {
    let mut stack = BoundedStack::with_cap(0);
    assert!(stack.is_empty() && stack.is_full(), "A zero capacity stack is both empty and full.");
    assert_eq!(stack.push(()), Err(CapacityExceeded { cap: 0 }));
}

#[test]
fn test_default_cap() {
    let stack = BoundedStack::<u8>::default();
    assert_eq!(stack.cap(), 100, "A default stack should hold 100 elements.");
    assert_eq!(stack.cap(), BoundedStack::<u8>::DEFAULT_CAP);
    assert!(stack.is_empty());
}

#[test]
fn test_zst_support() {
    let mut stack = BoundedStack::with_cap(4);
    assert_eq!(stack.buf.ptr, NonNull::dangling(), "A ZST shouldn't be allocated.");
    stack.extend(iter::repeat_n(ZeroSizedType, 4));
    assert!(stack.is_full());
    assert_eq!(stack.push(ZeroSizedType), Err(CapacityExceeded { cap: 4 }));
    assert_eq!(stack.iter().count(), 4);
    assert_eq!(stack.top(), Ok(&ZeroSizedType));

    let copy = stack.clone();
    assert_eq!(copy.buf.ptr, NonNull::dangling());
    assert_eq!(copy, stack);

    assert_eq!(stack.take(), Ok(ZeroSizedType));
    assert_eq!(stack.len(), 3);
    stack.clear();
    assert_eq!(stack.pop(), Err(Underflow));
    assert_eq!(copy.len(), 4);
}

#[test]
fn test_top_mut() {
    let mut stack = BoundedStack::with_cap(2);
    stack.push(String::from("a")).unwrap();
    stack.top_mut().unwrap().push('b');
    assert_eq!(stack.top().map(String::as_str), Ok("ab"));
}

#[test]
fn test_iter_order() {
    let mut stack = BoundedStack::with_cap(4);
    stack.extend(1..=4);
    assert_eq!(
        stack.iter().copied().collect::<Vec<_>>(),
        [4, 3, 2, 1],
        "Iteration should run from the top of the stack down."
    );
    assert_eq!(stack.iter().rev().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    assert_eq!(stack.iter().len(), 4);
    assert_eq!(stack.to_string(), "4 3 2 1");
}

#[test]
fn test_clone_is_independent() {
    let mut stack = BoundedStack::with_cap(3);
    stack.extend([1, 2]);

    let mut copy = stack.clone();
    assert_eq!(stack, copy, "A clone should be equal to the original.");

    copy.pop().unwrap();
    copy.push(5).unwrap();
    copy.push(6).unwrap();
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [2, 1], "The original shouldn't change.");
    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), [6, 5, 1]);
    assert_ne!(stack, copy);
}

#[test]
fn test_clear_twice() {
    let mut stack = BoundedStack::with_cap(3);
    stack.extend([1, 2, 3]);
    stack.clear();
    assert!(stack.is_empty());
    stack.clear();
    assert!(stack.is_empty(), "Clearing an empty stack should be a no-op.");
    assert_eq!(stack.cap(), 3, "Clearing shouldn't change the capacity.");
    stack.push(4).unwrap();
    assert_eq!(stack.top(), Ok(&4));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut stack = BoundedStack::with_cap(10);
    stack.extend(iter::repeat_with(|| counter.clone()).take(8));

    stack.pop().unwrap();
    assert_eq!(counter.count(), 1, "Pop should drop the removed element.");

    let taken = stack.take().unwrap();
    assert_eq!(counter.count(), 1, "Take should hand over the element without dropping it.");
    drop(taken);

    drop(stack);
    assert_eq!(counter.count(), 8, "Every element should be dropped exactly once.");
}

#[test]
fn test_extend_overflow_panics() {
    assert_panics!({
        let mut stack = BoundedStack::with_cap(2);
        stack.extend(0..3);
    });
}
