use bintree::{array_to_heap, heap_to_sorted_array, Error, MaxHeap};

use quickcheck::quickcheck;

use crate::init_logger;

#[test]
fn scenario_sorted_array() {
    init_logger();
    let mut heap = array_to_heap(&[3, 1, 4, 1, 5, 9, 2, 6]).unwrap();

    assert_eq!(heap_to_sorted_array(&mut heap).unwrap(), [9, 6, 5, 4, 3, 2, 1, 1]);
}

#[test]
fn extract_from_empty() {
    let mut heap = MaxHeap::new();

    assert!(matches!(heap.extract_max(), Err(Error::EmptyTree)));
    assert_eq!(heap.peek(), None);
}

quickcheck! {
    fn extraction_is_non_increasing(xs: Vec<i32>) -> bool {
        let mut heap = array_to_heap(&xs).unwrap();
        let size = heap.len();
        let mut drained = Vec::new();
        while let Ok(max) = heap.extract_max() {
            drained.push(max);
        }

        drained.len() == size && drained.windows(2).all(|pair| pair[0] >= pair[1])
    }

    fn sequential_inserts_stay_complete(xs: Vec<i32>) -> bool {
        let mut heap = MaxHeap::new();
        xs.into_iter().all(|x| {
            heap.insert(x).is_ok()
                && heap.tree().is_complete(heap.root()).unwrap()
                && heap.tree().is_heap(heap.root()).unwrap()
        })
    }
}
