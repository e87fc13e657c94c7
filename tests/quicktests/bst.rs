use std::collections::HashSet;

use bintree::{array_to_bst, Bst, Error};

use quickcheck::quickcheck;

use crate::{init_logger, unique};

#[test]
fn duplicate_into_three_nodes() {
    init_logger();
    let mut tree = array_to_bst(&[2, 1, 3]).unwrap();

    assert!(matches!(tree.insert(1), Err(Error::DuplicateKey(1))));
    assert_eq!(tree.len(), 3);
}

#[test]
fn degenerate_chain_survives_deep_walks() {
    let mut tree = Bst::new();
    for key in 0..10_000 {
        tree.insert(key).unwrap();
    }

    assert_eq!(tree.tree().height(tree.root()), 9_999);
    assert!(tree.tree().is_bst(tree.root()));
    assert_eq!(tree.keys().len(), 10_000);
}

quickcheck! {
    fn builder_finds_every_key(xs: Vec<i32>) -> bool {
        let keys = unique(&xs);
        let tree = array_to_bst(&keys).unwrap();

        keys.iter().all(|&k| tree.search(k).is_some())
            && (keys.is_empty() || tree.tree().is_bst(tree.root()))
    }

    fn absent_keys_are_not_found(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let keys: Vec<i32> = xs.iter().map(|&x| i32::from(x)).collect();
        let tree = array_to_bst(&keys).unwrap();
        let added: HashSet<i8> = xs.into_iter().collect();

        nots.iter()
            .filter(|x| !added.contains(x))
            .all(|&x| tree.search(i32::from(x)).is_none())
    }

    fn removals_keep_order(xs: Vec<i16>, removed: Vec<i16>) -> bool {
        let keys: Vec<i32> = xs.iter().map(|&x| i32::from(x)).collect();
        let mut tree = array_to_bst(&keys).unwrap();
        let mut expected: Vec<i32> = unique(&keys);
        for key in removed.into_iter().map(i32::from) {
            let present = expected.contains(&key);
            if tree.remove(key).is_ok() != present {
                return false;
            }
            expected.retain(|&k| k != key);
        }
        expected.sort_unstable();

        tree.keys() == expected
    }
}
