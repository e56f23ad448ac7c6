use super::*;
use arrayvec::ArrayVec;
use pretty_assertions::assert_eq;
use crate::TryInsertError;

fn sample() -> BinaryTree<i32, &'static str> {
    vec![
        (4, "four"),
        (2, "two"),
        (6, "six"),
        (1, "one"),
        (3, "three"),
        (5, "five"),
        (7, "seven"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn basic() {
    let mut tree = BinaryTree::<u64, &str>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.insert(1987, "a"), None);
    assert_eq!(tree.insert(83, "b"), None);
    assert_eq!(tree.insert(2010, "c"), None);

    let left_child_key = tree.root().and_then(|x| x.left_child()).map(|x| *x.key());
    let right_child_key = tree.root().and_then(|x| x.right_child()).map(|x| *x.key());
    assert_eq!(left_child_key, Some(83));
    assert_eq!(right_child_key, Some(2010));
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.height(), 2);
}

#[test]
fn insert_replaces_existing_value() {
    let mut tree = sample();
    let len = tree.len();
    assert_eq!(tree.insert(3, "THREE"), Some("three"));
    assert_eq!(tree.len(), len);
    assert_eq!(tree.get(&3), Some(&"THREE"));
    assert_eq!(tree.get(&8), None);
    assert!(tree.contains_key(&7));
    assert!(!tree.contains_key(&0));

    *tree.get_mut(&7).expect("7 is in the tree") = "SEVEN";
    assert_eq!(tree.get(&7), Some(&"SEVEN"));
}

#[test]
fn try_insert_into_full_storage() {
    type Storage = ArrayVec<[Node<i32, (), usize>; 2]>;
    let mut tree = BinaryTree::<i32, (), usize, Storage>::new();
    assert_eq!(tree.capacity(), 2);
    assert_eq!(tree.try_insert(2, ()), Ok(None));
    assert_eq!(tree.try_insert(1, ()), Ok(None));
    let error = tree.try_insert(3, ()).expect_err("storage holds two nodes");
    assert_eq!(error, TryInsertError { key: 3, value: () });
    assert_eq!(error.into_entry(), (3, ()));
    // Replacing doesn't need a new node
    assert_eq!(tree.try_insert(1, ()), Ok(Some(())));
    assert_eq!(tree.len(), 2);
}

#[test]
fn capacity_management() {
    let mut tree = BinaryTree::<i32, ()>::with_capacity(4);
    assert!(tree.capacity() >= 4);
    tree.reserve(16);
    assert!(tree.capacity() >= 16);
    assert!(tree.is_empty());

    type Storage = ArrayVec<[Node<i32, (), usize>; 4]>;
    let mut fixed = BinaryTree::<i32, (), usize, Storage>::with_capacity(3);
    fixed.extend(vec![(1, ()), (2, ())]);
    fixed.reserve(2);
    assert_eq!(fixed.capacity(), 4);
}

#[test]
fn node_ref_navigation() {
    let tree = sample();
    let root = tree.root().expect("tree is not empty");
    assert!(root.is_root());
    assert_eq!(root.is_left_child(), None);
    assert_eq!(root.num_children(), 2);
    assert_eq!(root.depth(), 0);
    assert_eq!(root.height(), 3);

    let three = tree.get_node(&3).expect("3 is in the tree");
    assert_eq!(three.entry(), (&3, &"three"));
    assert!(three.is_leaf());
    assert_eq!(three.is_right_child(), Some(true));
    assert_eq!(three.depth(), 2);
    assert_eq!(three.height(), 1);

    let two = three.parent().expect("3 has a parent");
    assert_eq!(two.key(), &2);
    assert_eq!(two.is_left_child(), Some(true));
    assert_eq!(two.left_child().map(|x| *x.value()), Some("one"));
    assert_eq!(two.parent().map(|x| x.raw_index()), Some(root.raw_index()));
    assert!(NodeRef::new_raw(&tree, 100).is_none());
}

#[test]
fn node_ref_mut_edits_values() {
    let mut tree = sample();
    let mut root = tree.root_mut().expect("tree is not empty");
    *root.value_mut() = "FOUR";
    {
        let mut left = root.left_child_mut().expect("4 has a left child");
        assert_eq!(left.key(), &2);
        *left.value_mut() = "TWO";
    }
    let right = root.into_right_child().expect("4 has a right child");
    let leaf = right
        .into_right_child()
        .expect("6 has a right child")
        .into_left_child()
        .expect_err("7 is a leaf");
    assert_eq!(leaf.key(), &7);
    assert_eq!(leaf.parent().map(|x| *x.key()), Some(6));
    *leaf.into_value_mut() = "SEVEN";

    let values: Vec<_> = tree.iter_pre_order().map(|(_, v)| *v).collect();
    assert_eq!(values, ["FOUR", "TWO", "one", "three", "six", "five", "SEVEN"]);

    let five = tree.get_node(&5).expect("5 is in the tree").into_raw_index();
    let mut five = NodeRefMut::new_raw(&mut tree, five).expect("index was just looked up");
    assert!(five.is_leaf() && !five.is_root());
    let five_index = five.raw_index();
    let mut parent = five.parent_mut().expect("5 has a parent");
    assert_eq!(parent.value(), &"six");
    *parent.value_mut() = "SIX";
    assert_ne!(parent.into_raw_index(), five_index);
    assert!(NodeRefMut::new_raw(&mut tree, 100).is_none());
    assert_eq!(tree.get(&6), Some(&"SIX"));
}

#[test]
fn degenerate_tree_height() {
    let tree: BinaryTree<_, _> = (0..100).map(|x| (x, ())).collect();
    assert_eq!(tree.height(), 100);
    let deepest = tree.get_node(&99).expect("99 is in the tree");
    assert_eq!(deepest.depth(), 99);
    assert!(deepest.is_leaf());
}

#[test]
fn deep_tree_height_does_not_recurse() {
    // Built by hand, since inserting a sorted run this long is quadratic
    const LEN: usize = 500_000;
    let storage = (0..LEN)
        .map(|i| Node {
            key: i,
            value: (),
            left: None,
            right: if i + 1 < LEN { Some(i + 1) } else { None },
            parent: i.checked_sub(1),
        })
        .collect();
    let tree: BinaryTree<usize, ()> = BinaryTree { storage, root: Some(0) };
    assert_eq!(tree.height(), LEN);
    let middle = tree.get_node(&(LEN / 2)).expect("every key up to LEN is in the tree");
    assert_eq!(middle.height(), LEN - LEN / 2);
    assert_eq!(tree.iter_pre_order().count(), LEN);
}

#[test]
fn height_of_subtrees_with_both_children() {
    let tree = sample();
    let two = tree.get_node(&2).expect("2 is in the tree");
    assert_eq!(two.height(), 2);
    let zigzag: BinaryTree<_, _> = vec![(10, ()), (2, ()), (1, ()), (8, ()), (4, ()), (6, ()), (5, ())]
        .into_iter()
        .collect();
    assert_eq!(zigzag.height(), 6);
}

#[test]
fn alternative_storages() {
    let mut deque = VecDequeBinaryTree::<i32, ()>::new();
    deque.extend(vec![(2, ()), (1, ()), (3, ())]);
    let mut keys = Vec::new();
    deque.pre_order_iterative(|key, _| keys.push(*key));
    assert_eq!(keys, [2, 1, 3]);

    let vec: VecBinaryTree<i32, ()> = vec![(2, ()), (1, ()), (3, ())].into_iter().collect();
    assert_eq!(vec.len(), 3);
}
