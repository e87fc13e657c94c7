use bintree::{array_to_bst, Error, Side, Tree};

use crate::init_logger;

#[test]
fn lca_of_leaves() {
    init_logger();
    let bst = array_to_bst(&[10, 5, 15, 3, 7, 12, 18]).unwrap();
    let (three, seven) = (bst.search(3).unwrap(), bst.search(7).unwrap());
    let tree = bst.tree();

    let lca = tree.lowest_common_ancestor(three, seven).unwrap();
    assert_eq!(tree.key(lca), Some(5));
    assert_eq!(
        tree.lowest_common_ancestor(three, bst.search(18).unwrap()),
        bst.root()
    );
}

#[test]
fn right_child_only_is_not_complete() {
    let mut tree = Tree::new();
    let root = tree.new_node(1).unwrap();
    tree.insert_right(root, 2).unwrap();

    assert!(!tree.is_complete(root).unwrap());
    assert!(!tree.is_full(root));
    assert_eq!(tree.balance_factor(root), -1);
}

#[test]
fn right_child_only_deeper_is_not_complete() {
    let mut tree = Tree::new();
    let root = tree.new_node(1).unwrap();
    let left = tree.insert_left(root, 2).unwrap();
    let right = tree.insert_right(root, 3).unwrap();
    tree.insert_left(left, 4).unwrap();
    tree.insert_right(left, 5).unwrap();
    tree.insert_right(right, 7).unwrap();

    assert!(!tree.is_complete(root).unwrap());
    assert!(!tree.is_heap(root).unwrap());
}

#[test]
fn hand_built_queries() {
    //       1
    //     /   \
    //    2     3
    //   / \
    //  4   5
    let mut tree = Tree::new();
    let one = tree.new_node(1).unwrap();
    let two = tree.insert_left(one, 2).unwrap();
    let three = tree.insert_right(one, 3).unwrap();
    let four = tree.insert_left(two, 4).unwrap();
    let five = tree.insert_right(two, 5).unwrap();

    assert_eq!(tree.height(one), 2);
    assert_eq!(tree.depth(five), 2);
    assert_eq!(tree.size(one), 5);
    assert_eq!(tree.leaf_count(one), 3);
    assert_eq!(tree.branch_node_count(one), 2);
    assert!(tree.is_full(one));
    assert!(!tree.is_perfect(one));
    assert!(tree.is_complete(one).unwrap());
    assert_eq!(tree.sibling(four), Some(five));
    assert_eq!(tree.uncle(four), Some(three));
    assert_eq!(tree.side_of(five), Some(Side::Right));

    let mut keys = Vec::new();
    tree.postorder(one, |k| keys.push(k));
    assert_eq!(keys, [4, 5, 2, 3, 1]);
    keys.clear();
    tree.level_order(one, |k| keys.push(k)).unwrap();
    assert_eq!(keys, [1, 2, 3, 4, 5]);
}

#[test]
fn rotation_needs_a_child() {
    let mut tree = Tree::new();
    let root = tree.new_node(1).unwrap();

    assert!(matches!(
        tree.rotate_left(root),
        Err(Error::InvalidRotation {
            missing: Side::Right,
            ..
        })
    ));
}

#[test]
fn delete_tree_frees_subtree() {
    let mut tree = Tree::new();
    let root = tree.new_node(1).unwrap();
    let left = tree.insert_left(root, 2).unwrap();
    tree.insert_left(left, 3).unwrap();
    tree.delete_tree(left).unwrap();

    assert_eq!(tree.node_count(), 1);
    assert!(tree.is_leaf(root));
    assert!(!tree.contains(left));
}
