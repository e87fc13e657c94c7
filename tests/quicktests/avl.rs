use bintree::{sorted_array_to_avl, Avl, Error};

use quickcheck::quickcheck;

use crate::{init_logger, unique};

#[test]
fn scenario_seven_inserts() {
    init_logger();
    let mut tree = Avl::new();
    for key in [5, 3, 8, 1, 4, 7, 9] {
        tree.insert(key).unwrap();
    }

    assert_eq!(tree.keys(), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.tree().height(tree.root()), 2);
}

#[test]
fn ascending_inserts_stay_logarithmic() {
    init_logger();
    let mut tree = Avl::new();
    for key in 0..1023 {
        tree.insert(key).unwrap();
    }

    assert_eq!(tree.tree().height(tree.root()), 9);
    assert!(tree.tree().is_perfect(tree.root()));
}

#[test]
fn unsorted_input_is_rejected() {
    assert!(matches!(
        sorted_array_to_avl(&[1, 2, 2]),
        Err(Error::NotSorted { index: 2 })
    ));
}

quickcheck! {
    fn every_insert_keeps_balance(xs: Vec<i32>) -> bool {
        let mut tree = Avl::new();
        unique(&xs).into_iter().all(|x| {
            tree.insert(x).is_ok()
                && tree.tree().is_bst(tree.root())
                && tree.tree().is_avl(tree.root())
        })
    }

    fn insert_remove_pairs_net_to_empty(xs: Vec<i32>) -> bool {
        let keys = unique(&xs);
        let mut tree = Avl::new();
        for &key in &keys {
            tree.insert(key).unwrap();
        }
        for &key in &keys {
            tree.remove(key).unwrap();
            if !tree.is_empty() && !tree.tree().is_avl(tree.root()) {
                return false;
            }
        }
        tree.is_empty() && tree.root().is_none()
    }

    fn sorted_round_trip(xs: Vec<i32>) -> bool {
        let mut keys = unique(&xs);
        keys.sort_unstable();
        let tree = sorted_array_to_avl(&keys).unwrap();

        tree.keys() == keys && (keys.is_empty() || tree.tree().is_avl(tree.root()))
    }
}
