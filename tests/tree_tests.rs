#![cfg(feature = "binary_tree")]
//! Property-based and table tests for the binary search tree.

use linear_collections::collections::binary_tree::{BinarySearchTree, Order};
use linear_collections::collections::error::EmptyStructure;
use proptest::prelude::*;
use rstest::rstest;

proptest! {
    #[test]
    fn prop_in_order_is_sorted(values in prop::collection::vec(-50_i32..50, 0..200)) {
        let tree = BinarySearchTree::from_iter(values.iter().copied());
        let mut sorted = values.clone();
        sorted.sort();

        prop_assert!(tree.in_order().eq(sorted.iter()));
        prop_assert_eq!(tree.count_nodes(), values.len());
        prop_assert_eq!(tree.find_max().ok(), values.iter().max());
    }

    #[test]
    fn prop_every_order_visits_every_value(values in prop::collection::vec(any::<u8>(), 0..100)) {
        let tree = BinarySearchTree::from_iter(values.iter().copied());
        let mut sorted = values.clone();
        sorted.sort();

        for order in [Order::InOrder, Order::PreOrder, Order::PostOrder] {
            let mut visited: Vec<u8> = tree.traverse(order).copied().collect();
            visited.sort();
            prop_assert_eq!(&visited, &sorted);
        }
        let mut visited: Vec<u8> = tree.level_order().copied().collect();
        visited.sort();
        prop_assert_eq!(&visited, &sorted);
    }

    #[test]
    fn prop_pre_order_rebuilds_the_same_tree(values in prop::collection::vec(any::<i16>(), 0..100)) {
        let tree = BinarySearchTree::from_iter(values);
        let rebuilt = BinarySearchTree::from_iter(tree.pre_order().copied());
        prop_assert!(tree.is_equal(&rebuilt));
    }

    #[test]
    fn prop_height_is_bounded_by_len(values in prop::collection::vec(any::<u32>(), 1..100)) {
        let tree = BinarySearchTree::from_iter(values);
        let len = tree.len() as isize;
        prop_assert!(tree.height() < len);
        prop_assert!(tree.count_leaves() >= 1);
        prop_assert!(tree.count_leaves() <= tree.count_nodes());
    }

    #[test]
    fn prop_clear_is_idempotent(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut tree = BinarySearchTree::from_iter(values);
        tree.clear();
        tree.clear();
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree, BinarySearchTree::new());
    }
}

#[rstest]
fn sample_tree_metrics() {
    let tree = BinarySearchTree::from_iter([5, 3, 7, 2, 4, 6, 8]);
    assert!(tree.in_order().copied().eq(2..=8));
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.count_nodes(), 7);
    assert_eq!(tree.count_leaves(), 4);
}

#[rstest]
#[case(&[], -1)]
#[case(&[1], 0)]
#[case(&[2, 1, 3], 1)]
#[case(&[1, 2, 3], 2)]
#[case(&[3, 3, 3, 3], 3)]
fn height_by_insertion_order(#[case] values: &[i32], #[case] expected: isize) {
    let tree = BinarySearchTree::from_iter(values.iter().copied());
    assert_eq!(tree.height(), expected);
}

#[rstest]
#[case(&[5, 3, 7], &[5, 7, 3], true)]
#[case(&[5, 3, 7], &[3, 5, 7], false)]
#[case(&[], &[], true)]
#[case(&[1], &[], false)]
#[case(&[4, 4], &[4, 4], true)]
fn structural_equality(#[case] a: &[i32], #[case] b: &[i32], #[case] expected: bool) {
    let a = BinarySearchTree::from_iter(a.iter().copied());
    let b = BinarySearchTree::from_iter(b.iter().copied());
    assert_eq!(a.is_equal(&b), expected);
    assert_eq!(b.is_equal(&a), expected);
}

#[rstest]
fn find_max_on_empty_tree() {
    assert_eq!(BinarySearchTree::<i32>::new().find_max(), Err(EmptyStructure));
}
