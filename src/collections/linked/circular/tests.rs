#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;

impl<T> CircularLinkedList<T> {
    pub(crate) fn verify_ring(&self) {
        if let RingState::Full(RingContents { len, tail }) = self.state {
            let mut steps = 1;
            let mut curr = tail.next();
            while curr != tail {
                curr = curr.next();
                steps += 1;
            }
            assert_eq!(steps, len.get(), "The ring should close after exactly len steps.");
        }
    }
}

fn collect<T: Clone>(list: &CircularLinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_append_and_print() {
    let mut list = CircularLinkedList::new();
    list.append(10);
    list.append(20);
    list.append(30);
    list.verify_ring();

    let walk = list.print().expect("A non-empty list should be printable.");
    assert_eq!(walk.len(), 3);
    assert_eq!(
        walk.copied().collect::<Vec<_>>(),
        [10, 20, 30],
        "Printing should make exactly one revolution."
    );
    assert_eq!(
        list.print().unwrap().copied().collect::<Vec<_>>(),
        [10, 20, 30],
        "Printing again should start a new revolution."
    );
    assert_eq!(list.to_string(), "(10) -> (20) -> (30) -> ...");
}

#[test]
fn test_print_empty() {
    let list = CircularLinkedList::<i32>::new();
    assert!(matches!(list.print(), Err(EmptyStructure)));
    assert_eq!(list.iter().next(), None, "Iterating an empty list should yield nothing.");
    assert_eq!(list.to_string(), "()");
}

#[test]
fn test_single_node_ring() {
    let mut list = CircularLinkedList::new();
    list.append('a');
    list.verify_ring();
    assert_eq!(list.front(), list.back(), "A lone node is both head and tail.");
    assert_eq!(collect(&list), ['a']);
}

#[test]
fn test_remove_not_found() {
    let mut list = CircularLinkedList::from_iter([10, 20, 30]);
    assert_eq!(list.remove(&99), Err(RemovalError::NotFound(NotFound)));
    list.verify_ring();
    assert_eq!(collect(&list), [10, 20, 30], "A failed removal shouldn't change the list.");

    let mut empty = CircularLinkedList::<i32>::new();
    assert_eq!(empty.remove(&1), Err(RemovalError::EmptyStructure(EmptyStructure)));
}

#[test]
fn test_remove_tail() {
    let mut list = CircularLinkedList::from_iter([10, 20, 30]);
    assert_eq!(list.remove(&30), Ok(30));
    list.verify_ring();
    assert_eq!(list.back(), Some(&20), "Removing the tail should move it to its predecessor.");
    list.append(40);
    assert_eq!(collect(&list), [10, 20, 40]);
}

#[test]
fn test_remove_head_and_middle() {
    let mut list = CircularLinkedList::from_iter([1, 2, 3, 2]);
    assert_eq!(list.remove(&1), Ok(1));
    assert_eq!(list.front(), Some(&2));
    assert_eq!(list.remove(&2), Ok(2));
    list.verify_ring();
    assert_eq!(collect(&list), [3, 2], "Only the first match should be removed.");
}

#[test]
fn test_remove_only_element() {
    let mut list = CircularLinkedList::from_iter([5]);
    assert_eq!(list.remove(&5), Ok(5));
    assert!(list.is_empty(), "Removing the only element should empty the list.");
    assert!(list.print().is_err());
    list.append(6);
    assert_eq!(collect(&list), [6]);
}

#[test]
fn test_remove_front_and_into_iter() {
    let mut list = CircularLinkedList::from_iter(1..=4);
    assert_eq!(list.remove_front(), Some(1));
    list.verify_ring();
    assert!(list.contains(&4));
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [2, 3, 4]);
}

#[test]
fn test_clear_twice() {
    let mut list = CircularLinkedList::from_iter(0..3);
    list.clear();
    assert!(list.is_empty());
    list.clear();
    assert!(list.is_empty(), "Clearing an empty list should be a no-op.");
    assert_eq!(list.len(), 0);
}

#[test]
fn test_equality_and_clone() {
    let list = CircularLinkedList::from_iter(["x", "y", "z"]);
    let mut copy = list.clone();
    assert_eq!(list, copy);
    copy.remove(&"y").unwrap();
    assert_ne!(list, copy);
    assert_eq!(collect(&list), ["x", "y", "z"]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let list = CircularLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(7));
    drop(list);
    assert_eq!(counter.count(), 7, "Clearing should release every node exactly once.");

    let mut list = CircularLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(3));
    let first = list.front().unwrap().clone();
    list.remove(&first).unwrap();
    drop(first);
    assert_eq!(counter.count(), 9);
    drop(list);
    assert_eq!(counter.count(), 11);
}
