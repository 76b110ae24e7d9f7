#![cfg(test)]

use std::iter;
use std::ptr::NonNull;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{CapacityExceeded, Underflow};
use crate::util::panic::assert_panics;

#[test]
fn test_fifo_order() {
    let mut queue = BoundedQueue::with_cap(4);
    queue.extend([1, 2, 3]);
    assert_eq!(queue.front(), Ok(&1));
    assert_eq!(queue.back(), Ok(&3));

    assert_eq!(queue.dequeue(), Ok(()));
    assert_eq!(queue.front(), Ok(&2), "Dequeue should expose the next oldest element.");
    assert_eq!(queue.take_front(), Ok(2));
    assert_eq!(queue.take_front(), Ok(3));
    assert!(queue.is_empty());
}

#[test]
fn test_enqueue_until_full() {
    let mut queue = BoundedQueue::with_cap(2);
    queue.enqueue('a').unwrap();
    assert!(!queue.is_full());
    queue.enqueue('b').unwrap();
    assert!(queue.is_full());
    assert_eq!(queue.enqueue('c'), Err(CapacityExceeded { cap: 2 }));
    assert_eq!(
        queue.iter().copied().collect::<Vec<_>>(),
        ['a', 'b'],
        "A failed enqueue shouldn't change the queue."
    );
}

#[test]
fn test_empty_underflow() {
    let mut queue = BoundedQueue::<u8>::with_cap(3);
    assert_eq!(queue.front(), Err(Underflow));
    assert_eq!(queue.back(), Err(Underflow));
    assert_eq!(queue.dequeue(), Err(Underflow));
    assert_eq!(queue.take_front(), Err(Underflow));
    assert_eq!((queue.front, queue.len), (0, 0), "Underflow shouldn't move the indices.");
}

#[test]
fn test_wraparound() {
    let mut queue = BoundedQueue::with_cap(3);
    queue.extend([0, 1, 2]);

    for next in 3..20 {
        assert_eq!(queue.take_front(), Ok(next - 3));
        queue.enqueue(next).unwrap();
        assert!(queue.is_full());
        assert_eq!(
            queue.iter().copied().collect::<Vec<_>>(),
            [next - 2, next - 1, next],
            "Logical order should survive wrapping around the buffer."
        );
    }
    assert_eq!(queue.rear, 19 % 3, "The rear index should wrap modulo the capacity.");
}

#[test]
fn test_zst_support() {
    let mut queue = BoundedQueue::with_cap(3);
    assert_eq!(queue.buf.ptr, NonNull::dangling(), "A ZST shouldn't be allocated.");
    queue.extend([ZeroSizedType; 3]);
    assert_eq!(queue.enqueue(ZeroSizedType), Err(CapacityExceeded { cap: 3 }));

    for _ in 0..10 {
        assert_eq!(queue.take_front(), Ok(ZeroSizedType));
        assert_eq!(queue.enqueue(ZeroSizedType), Ok(()));
        assert_eq!(queue.iter().count(), 3);
    }
    assert_eq!(queue.front(), Ok(&ZeroSizedType));
    assert_eq!(queue.back(), Ok(&ZeroSizedType));

    let copy = queue.clone();
    assert_eq!(copy.buf.ptr, NonNull::dangling());
    assert_eq!(copy, queue);

    queue.clear();
    assert_eq!(queue.dequeue(), Err(Underflow));
    assert_eq!(copy.len(), 3);
}

#[test]
fn test_equality_ignores_alignment() {
    let mut a = BoundedQueue::with_cap(3);
    a.extend([1, 2]);

    let mut b = BoundedQueue::with_cap(3);
    b.extend([0, 0, 1]);
    b.dequeue().unwrap();
    b.dequeue().unwrap();
    b.enqueue(2).unwrap();

    assert_ne!(a.front, b.front, "The queues should start at different slots.");
    assert_eq!(a, b, "Queues with the same logical contents should be equal.");

    let mut c = BoundedQueue::with_cap(4);
    c.extend([1, 2]);
    assert_ne!(a, c, "Queues with different capacities shouldn't be equal.");

    b.enqueue(3).unwrap();
    assert_ne!(a, b, "Queues with different lengths shouldn't be equal.");
}

#[test]
fn test_clone_is_independent() {
    let mut queue = BoundedQueue::with_cap(3);
    queue.extend([1, 2, 3]);
    queue.dequeue().unwrap();
    queue.enqueue(4).unwrap();

    let mut copy = queue.clone();
    assert_eq!(queue, copy);
    assert_eq!(
        (copy.front, copy.rear, copy.len),
        (queue.front, queue.rear, queue.len),
        "A clone should keep the same physical layout."
    );

    copy.dequeue().unwrap();
    copy.enqueue(5).unwrap();
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [2, 3, 4]);
    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), [3, 4, 5]);
}

#[test]
fn test_clear_twice() {
    let mut queue = BoundedQueue::with_cap(2);
    queue.extend([1, 2]);
    queue.dequeue().unwrap();
    queue.clear();
    assert!(queue.is_empty());
    queue.clear();
    assert!(queue.is_empty(), "Clearing an empty queue should be a no-op.");
    assert_eq!((queue.front, queue.rear), (0, 1), "Clearing should reset the indices.");
    queue.enqueue(7).unwrap();
    assert_eq!(queue.front(), Ok(&7));
}

#[test]
fn test_iter_and_display() {
    let mut queue = BoundedQueue::with_cap(4);
    queue.extend([1, 2, 3, 4]);
    queue.dequeue().unwrap();
    queue.enqueue(5).unwrap();

    let mut iter = queue.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next(), None);

    assert_eq!(queue.to_string(), "2 3 4 5");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut queue = BoundedQueue::with_cap(4);
    queue.extend(iter::repeat_with(|| counter.clone()).take(4));
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    queue.extend(iter::repeat_with(|| counter.clone()).take(2));
    assert_eq!(counter.count(), 2);

    drop(queue);
    assert_eq!(counter.count(), 6, "Every element should be dropped exactly once.");
}

#[test]
fn test_extend_overflow_panics() {
    assert_panics!({
        let mut queue = BoundedQueue::with_cap(1);
        queue.extend(['a', 'b']);
    });
}
