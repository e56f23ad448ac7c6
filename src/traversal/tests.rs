use super::{
    algorithms::{recursive, PreOrder, PreOrderStack, ThreadedPreOrder, ThreadedState},
    *,
};
// Takes precedence over the proptest trait of the same name
use super::Strategy;
use crate::{binary_tree::BinaryTree, util::init_test_logging};
use arrayvec::ArrayVec;
use core::convert::Infallible;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::panic::{self, AssertUnwindSafe};

type Tree = BinaryTree<i32, i32>;

fn tree_of(keys: &[i32]) -> Tree {
    keys.iter().map(|&key| (key, key * 10)).collect()
}
fn keys_with(strategy: Strategy, tree: &mut Tree) -> Vec<i32> {
    let mut keys = Vec::new();
    strategy.pre_order(tree, |key: &i32, value: &i32| {
        assert_eq!(*value, key * 10, "entry mismatch");
        keys.push(*key);
    });
    keys
}
fn assert_all_strategies(keys: &[i32], expected: &[i32]) {
    init_test_logging();
    let mut tree = tree_of(keys);
    let before = tree.clone();
    for &strategy in Strategy::ALL.iter() {
        assert_eq!(keys_with(strategy, &mut tree), expected, "{:?}", strategy);
        assert_eq!(tree, before, "{:?} changed the tree", strategy);
    }
}

#[test]
fn empty_tree() {
    assert_all_strategies(&[], &[]);
    let mut tree = Tree::new();
    let mut iter = tree.pre_order_threaded();
    assert_eq!(iter.state(), ThreadedState::Uninitialized);
    assert!(iter.advance().is_none());
    assert_eq!(iter.state(), ThreadedState::Exhausted);
    assert!(iter.advance().is_none());
}
#[test]
fn single_node() {
    assert_all_strategies(&[42], &[42]);
    let tree = tree_of(&[42]);
    let mut iter = tree.iter_pre_order();
    assert_eq!(iter.stack_len(), 1);
    assert_eq!(iter.next(), Some((&42, &420)));
    assert_eq!(iter.stack_len(), 0);
    assert_eq!(iter.peak_depth(), 1);
    assert_eq!(iter.next(), None);
}
#[test]
fn left_skewed() {
    assert_all_strategies(&[5, 4, 3, 2, 1], &[5, 4, 3, 2, 1]);
}
#[test]
fn right_skewed() {
    assert_all_strategies(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]);
}
#[test]
fn balanced() {
    assert_all_strategies(&[4, 2, 6, 1, 3, 5, 7], &[4, 2, 1, 3, 6, 5, 7]);
}
#[test]
fn zigzag() {
    assert_all_strategies(&[10, 2, 8, 4, 6, 5], &[10, 2, 8, 4, 6, 5]);
}

#[test]
fn threaded_counts_threads() {
    init_test_logging();
    let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
    let mut iter = tree.pre_order_threaded();
    assert_eq!(iter.advance().map(|(k, _)| *k), Some(4));
    assert_eq!(iter.outstanding_threads(), 1);
    assert_eq!(iter.advance().map(|(k, _)| *k), Some(2));
    assert_eq!(iter.outstanding_threads(), 2);
    assert!(matches!(iter.state(), ThreadedState::Positioned(_)));
    let mut rest = Vec::new();
    while let Some((key, _)) = iter.advance() {
        rest.push(*key);
    }
    assert_eq!(rest, [1, 3, 6, 5, 7]);
    assert_eq!(iter.outstanding_threads(), 0);
    assert_eq!(iter.state(), ThreadedState::Exhausted);
}
#[test]
fn threaded_restores_on_early_drop() {
    init_test_logging();
    let mut tree = tree_of(&[8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7]);
    let before = tree.clone();
    for stop_after in 0..=tree.len() {
        let mut iter = tree.pre_order_threaded();
        for _ in 0..stop_after {
            assert!(iter.advance().is_some());
        }
        drop(iter);
        assert_eq!(tree, before, "stopped after {} nodes", stop_after);
    }
}
#[test]
fn threaded_restores_on_error() {
    init_test_logging();
    let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
    let before = tree.clone();
    let mut visited = Vec::new();
    let result = tree.pre_order_threaded().try_for_each(|key, _| {
        visited.push(*key);
        if *key == 1 {
            Err("found one")
        } else {
            Ok(())
        }
    });
    assert_eq!(result, Err("found one"));
    assert_eq!(visited, [4, 2, 1]);
    assert_eq!(tree, before);
}
#[test]
fn threaded_restores_on_panic() {
    init_test_logging();
    let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
    let before = tree.clone();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        tree.pre_order_threaded().for_each(|key, _| {
            if *key == 3 {
                panic!("visitor gave up at 3");
            }
        })
    }));
    assert!(result.is_err());
    assert_eq!(tree, before);
}
#[test]
fn forgotten_threaded_walk_keeps_its_threads() {
    let mut tree = tree_of(&[4, 2, 6, 1, 3]);
    let before = tree.clone();
    let mut iter = tree.pre_order_threaded();
    assert!(iter.advance().is_some());
    assert!(iter.advance().is_some());
    assert_eq!(iter.outstanding_threads(), 2);
    core::mem::forget(iter);
    assert_ne!(tree, before);
    // Only right links were rewritten, and only to point at live nodes
    assert_eq!(tree.len(), before.len());
    let three = tree.get_node(&3).expect("3 is still reachable").raw_index();
    let one = tree.get_node(&1).expect("1 is still reachable").raw_index();
    assert_eq!(tree.right_of(&three), before.cursor_to_root());
    assert_eq!(tree.right_of(&one), tree.parent_of(&one));
}
#[test]
fn threaded_runs_repeat() {
    let mut tree = tree_of(&[4, 2, 6, 1, 3]);
    let first = keys_with(Strategy::Threaded, &mut tree);
    let second = keys_with(Strategy::Threaded, &mut tree);
    assert_eq!(first, second);
}

#[test]
fn try_forms_stop_at_first_error() {
    init_test_logging();
    let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
    for &strategy in Strategy::ALL.iter() {
        let mut visited = 0;
        let result = tree.try_pre_order_with(strategy, |key, _| {
            visited += 1;
            if *key == 6 {
                Err(*key)
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(6), "{:?}", strategy);
        assert_eq!(visited, 5, "{:?} visited too much", strategy);
    }
}

#[test]
fn explicit_stack_stays_within_node_count() {
    let trees = [
        tree_of(&[5, 4, 3, 2, 1]),
        tree_of(&[1, 2, 3, 4, 5]),
        tree_of(&[4, 2, 6, 1, 3, 5, 7]),
    ];
    for tree in trees.iter() {
        let mut iter = PreOrderStack::new(tree);
        assert_eq!(iter.by_ref().count(), tree.len());
        assert!(iter.peak_depth() <= tree.len());
    }
    // A right-skewed tree never has more than one waiting cursor
    let mut iter = trees[1].iter_pre_order();
    iter.by_ref().for_each(drop);
    assert_eq!(iter.peak_depth(), 1);
}
/// A left spine of `levels` nodes, each of which also has a right leaf. Every level leaves one more cursor waiting on the explicit stack.
fn spine_with_right_leaves(levels: i32) -> Tree {
    (0..levels)
        .rev()
        .flat_map(|level| vec![level * 10, level * 10 + 5])
        .map(|key| (key, key * 10))
        .collect()
}
#[test]
fn explicit_stack_outgrows_inline_size() {
    let tree = spine_with_right_leaves(300);
    let mut iter = tree.iter_pre_order();
    assert_eq!(iter.by_ref().count(), 600);
    assert_eq!(iter.peak_depth(), 300);
}
#[test]
fn fixed_capacity_stack_that_fits() {
    let tree = spine_with_right_leaves(6);
    let mut iter = PreOrderStack::<_, ArrayVec<[usize; 6]>>::with_stack(&tree);
    let keys: Vec<_> = iter.by_ref().map(|(key, _)| *key).collect();
    assert_eq!(keys[..4], [50, 40, 30, 20]);
    assert_eq!(keys.len(), 12);
    assert_eq!(iter.peak_depth(), 6);
}
#[test]
#[should_panic(expected = "explicit traversal stack is full")]
fn fixed_capacity_stack_overflow_panics() {
    let tree = spine_with_right_leaves(6);
    PreOrderStack::<_, ArrayVec<[usize; 5]>>::with_stack(&tree).for_each(drop);
}
#[test]
fn recursion_depth_bounded_by_height() {
    let tree = tree_of(&[8, 4, 12, 2, 6, 1, 3]);
    let mut deepest = 0;
    let result = recursive::recurse(&tree, tree.cursor_to_root(), 1, &mut |depth, _, _| {
        deepest = deepest.max(depth);
        Ok::<(), Infallible>(())
    });
    assert!(result.is_ok());
    assert_eq!(deepest, tree.height());
}

#[test]
fn parent_linked_subtree() {
    let tree = tree_of(&[8, 4, 12, 2, 6, 10, 14, 1, 3]);
    let subtree = tree.get_node(&4).expect("4 is in the tree").raw_index();
    let mut keys = Vec::new();
    let result = tree.traverse_from(
        subtree,
        PreOrder::new(|key: &i32, _: &i32| {
            keys.push(*key);
            Ok::<(), Infallible>(())
        }),
    );
    assert!(result.is_ok());
    assert_eq!(keys, [4, 2, 1, 3, 6]);
}
#[test]
fn parent_linked_visitor_is_never_called_on_empty_tree() {
    let tree = Tree::new();
    let result = tree.traverse(PreOrder::new(|_: &i32, _: &i32| -> Result<(), ()> {
        panic!("nothing to visit")
    }));
    assert_eq!(result, None);
}
#[test]
fn traverse_iter_steps() {
    let tree = tree_of(&[2, 1, 3]);
    let mut count = 0;
    let steps: Vec<_> = TraverseIter::new(
        PreOrder::new(|_: &i32, _: &i32| {
            count += 1;
            Ok::<(), Infallible>(())
        }),
        &tree,
    )
    .collect();
    // 2, 1, back to 2, 3, back to 2 where it stops
    assert_eq!(steps.len(), 5);
    assert!(steps[..4].iter().all(Option::is_none));
    assert_eq!(steps[4], Some(Ok(())));
    assert_eq!(count, 3);

    let empty = Tree::new();
    let mut iter = TraverseIter::new(PreOrder::new(|_: &i32, _: &i32| Ok::<(), ()>(())), &empty);
    assert_eq!(iter.next(), None);
}
#[test]
fn traverse_iter_from_a_subtree() {
    let tree = tree_of(&[4, 2, 6, 1, 3]);
    let two = tree.get_node(&2).expect("2 is in the tree").raw_index();
    let mut keys = Vec::new();
    let last = TraverseIter::starting_at(
        PreOrder::new(|key: &i32, _: &i32| {
            keys.push(*key);
            Ok::<(), Infallible>(())
        }),
        &tree,
        two,
    )
    .last();
    assert_eq!(last, Some(Some(Ok(()))));
    assert_eq!(keys, [2, 1, 3]);

    let visitor = PreOrder::new(|_: &i32, _: &i32| Ok::<(), Infallible>(()));
    let steps = TraverseIter::from((visitor, &tree)).filter(Option::is_some).count();
    assert_eq!(steps, 1);
}
#[test]
fn values_written_through_cursors() {
    let mut tree = tree_of(&[2, 1, 3]);
    let root = tree.cursor_to_root().expect("tree is not empty");
    let left = tree.left_of(&root).expect("2 has a left child");
    *tree.value_mut_of(&left) += 1;
    assert_eq!(tree.value_of(&left), (&1, &11));
    assert_eq!(tree.get(&1), Some(&11));
}
#[test]
fn cursor_directions() {
    let tree = tree_of(&[2, 1]);
    let root = tree.cursor_to_root().expect("tree is not empty");
    let left = tree.left_of(&root).expect("2 has a left child");
    assert_eq!(tree.advance_cursor::<()>(root, VisitorDirection::Left), Ok(left));
    assert_eq!(tree.advance_cursor::<()>(left, VisitorDirection::Parent), Ok(root));
    let error = tree
        .advance_cursor::<()>(root, VisitorDirection::Right)
        .expect_err("2 has no right child");
    assert_eq!(error.recover(), root);
    assert!(tree.advance_cursor::<()>(root, VisitorDirection::Parent).is_err());
    assert!(tree.advance_cursor::<()>(root, VisitorDirection::SetTo(100)).is_err());
    assert_eq!(tree.advance_cursor::<()>(root, VisitorDirection::SetTo(left)), Ok(left));
    assert!(tree.advance_cursor(root, VisitorDirection::Stop(())).is_err());
}
#[test]
fn read_only_strategies() {
    assert!(Strategy::Recursive.is_read_only());
    assert!(Strategy::Iterative.is_read_only());
    assert!(Strategy::ParentLinked.is_read_only());
    assert!(!Strategy::Threaded.is_read_only());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn strategies_agree_and_restore(keys in prop::collection::vec(-500_i32..500, 0..200)) {
        let mut tree = tree_of(&keys);
        let before = tree.clone();
        let expected = keys_with(Strategy::Recursive, &mut tree);
        prop_assert_eq!(expected.len(), tree.len());
        for &strategy in Strategy::ALL.iter() {
            prop_assert_eq!(&keys_with(strategy, &mut tree), &expected, "{:?}", strategy);
            prop_assert_eq!(&tree, &before, "{:?} changed the tree", strategy);
        }
    }

    #[test]
    fn abandoned_threaded_walk_restores(
        keys in prop::collection::vec(-500_i32..500, 1..200),
        stop_after in 0_usize..200,
    ) {
        let mut tree = tree_of(&keys);
        let before = tree.clone();
        let mut iter = ThreadedPreOrder::new(&mut tree);
        for _ in 0..stop_after {
            if iter.advance().is_none() {
                break;
            }
        }
        drop(iter);
        prop_assert_eq!(&tree, &before);
    }
}
