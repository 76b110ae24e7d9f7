#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;

impl<T> SinglyLinkedList<T> {
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_links(&self) {
        match self.state {
            ListState::Empty => {},
            ListState::Full(ListContents { len, head, tail }) => {
                let mut count = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                    count += 1;
                    curr = *next;
                }
                assert!(curr == tail, "The last reachable node should be the tail.");
                assert_eq!(count, len.get(), "The length should match the number of nodes.");
            },
        }
    }
}

fn collect<T: Clone>(list: &SinglyLinkedList<T>) -> Vec<T> {
    list.print().cloned().collect()
}

#[test]
fn test_add_first() {
    let mut list = SinglyLinkedList::new();
    for i in 1..=4 {
        list.add_first(i);
        list.verify_links();
    }
    assert_eq!(collect(&list), [4, 3, 2, 1]);
    assert_eq!(list.len(), 4);
    assert_eq!(list.front(), Some(&4));
    assert_eq!(list.back(), Some(&1), "The first node added should remain the tail.");
}

#[test]
fn test_remove_first() {
    let mut list = SinglyLinkedList::from_iter([1, 2, 3]);
    assert_eq!(list.remove_first(), Some(1));
    list.verify_links();
    assert_eq!(collect(&list), [2, 3]);

    assert_eq!(list.remove_first(), Some(2));
    assert_eq!(list.remove_first(), Some(3));
    assert!(list.state.is_empty(), "Removing the sole element should clear head and tail.");
    assert_eq!(list.remove_first(), None, "Removing from an empty list should do nothing.");
    assert_eq!(list.back(), None);

    list.add_first(5);
    assert_eq!((list.front(), list.back()), (Some(&5), Some(&5)));
}

#[test]
fn test_insert_after() {
    let mut list = SinglyLinkedList::from_iter([1, 3]);

    let mut cursor = list.cursor_front_mut();
    cursor.insert_after(2);
    assert_eq!(cursor.current(), Some(&1), "Inserting shouldn't move the cursor.");
    cursor.move_next();
    cursor.move_next();
    assert_eq!(cursor.current(), Some(&3));
    cursor.insert_after(4);

    list.verify_links();
    assert_eq!(collect(&list), [1, 2, 3, 4]);
    assert_eq!(list.back(), Some(&4), "Inserting after the tail should move the tail.");
}

#[test]
fn test_insert_after_ghost_is_ignored() {
    let mut list = SinglyLinkedList::new();
    let mut cursor = list.cursor_front_mut();
    assert!(cursor.is_ghost());
    cursor.insert_after(1);
    assert!(list.is_empty(), "Inserting after no node should be ignored.");

    let mut list = SinglyLinkedList::from_iter([1]);
    let mut cursor = list.cursor_front_mut();
    cursor.move_next();
    assert!(cursor.is_ghost(), "Moving past the tail should leave the cursor on no node.");
    cursor.insert_after(2);
    assert_eq!(cursor.remove_after(), None);
    cursor.move_next();
    assert_eq!(cursor.current(), Some(&1), "Moving from no node should return to the head.");
    assert_eq!(collect(&list), [1]);
}

#[test]
fn test_remove_after() {
    let mut list = SinglyLinkedList::from_iter([1, 2, 3, 4]);

    let mut cursor = list.cursor_front_mut();
    assert_eq!(cursor.remove_after(), Some(2));
    assert_eq!(cursor.peek_next(), Some(&3));
    cursor.move_next();
    assert_eq!(cursor.remove_after(), Some(4));
    assert_eq!(cursor.remove_after(), None, "Removing after the tail should do nothing.");

    list.verify_links();
    assert_eq!(collect(&list), [1, 3]);
    assert_eq!(list.back(), Some(&3), "Removing the tail should move the tail back.");

    list.add_last(5);
    assert_eq!(collect(&list), [1, 3, 5]);
}

#[test]
fn test_cursor_remove_first() {
    let mut list = SinglyLinkedList::from_iter(['a', 'b']);
    let mut cursor = list.cursor_front_mut();
    assert_eq!(cursor.remove_first(), Some('a'));
    assert_eq!(cursor.current(), Some(&'b'), "The cursor should follow the new head.");
    *cursor.current_mut().unwrap() = 'c';
    assert_eq!(cursor.remove_first(), Some('c'));
    assert!(cursor.is_ghost());
    assert!(list.is_empty());
}

#[test]
fn test_print_is_restartable() {
    let list = SinglyLinkedList::from_iter(0..5);
    let first = list.print();
    let second = list.print();
    assert_eq!(first.len(), 5);
    assert!(first.eq(second), "Each call should produce a fresh pass over the list.");
    assert_eq!(list.to_string(), "(0) -> (1) -> (2) -> (3) -> (4)");
    assert_eq!(SinglyLinkedList::<u8>::new().to_string(), "()");
}

#[test]
fn test_iter_mut_and_into_iter() {
    let mut list = SinglyLinkedList::from_iter(1..=3);
    for i in list.iter_mut() {
        *i *= 10;
    }
    assert!(list.contains(&20));
    assert!(!list.contains(&2));
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [10, 20, 30]);
}

#[test]
fn test_clear_twice() {
    let mut list = SinglyLinkedList::from_iter(0..3);
    list.clear();
    assert!(list.is_empty());
    list.clear();
    assert!(list.is_empty(), "Clearing an empty list should be a no-op.");
    assert_eq!(list.front(), None);
}

#[test]
fn test_equality_clone_and_hash() {
    let list = SinglyLinkedList::from_iter(0..4);
    let copy = list.clone();
    assert_eq!(list, copy);

    let state = RandomState::new();
    assert_eq!(state.hash_one(&list), state.hash_one(&copy), "Equal lists should hash equally.");

    let mut other = copy.clone();
    other.remove_first();
    assert_ne!(list, other);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list = SinglyLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(6));

    list.remove_first();
    list.cursor_front_mut().remove_after();
    assert_eq!(counter.count(), 2, "Removed elements should be dropped when discarded.");

    drop(list);
    assert_eq!(counter.count(), 6, "Every element should be dropped exactly once.");
}
