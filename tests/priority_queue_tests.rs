use std::collections::HashMap;

use graph_center::data_structures::IndexedBinaryHeap;
use graph_center::Error;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(u8, u16),
    Decrease(u8, u16),
    Extract,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..24, 0u16..200).prop_map(|(e, p)| Op::Add(e, p)),
        (0u8..24, 0u16..200).prop_map(|(e, p)| Op::Decrease(e, p)),
        Just(Op::Extract),
    ]
}

#[test]
fn test_empty_queue_errors() {
    let mut heap: IndexedBinaryHeap<u32, f64> = IndexedBinaryHeap::new();
    assert_eq!(heap.min(), Err(Error::EmptyQueue));
    assert_eq!(heap.extract_minimum(), Err(Error::EmptyQueue));

    heap.add(1, 1.0);
    assert_eq!(heap.extract_minimum(), Ok(1));
    assert_eq!(heap.extract_minimum(), Err(Error::EmptyQueue));
}

#[test]
fn test_add_does_not_update_priority() {
    let mut heap = IndexedBinaryHeap::new();
    assert!(heap.add("a", 5.0));
    assert!(heap.add("b", 3.0));
    assert!(!heap.add("a", 1.0));

    assert_eq!(heap.priority(&"a"), Some(5.0));
    assert_eq!(heap.min(), Ok("b"));
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_decrease_priority_only_lowers() {
    let mut heap = IndexedBinaryHeap::new();
    heap.add(1, 4.0);
    heap.add(2, 6.0);

    assert!(!heap.decrease_priority(&2, 6.0));
    assert!(!heap.decrease_priority(&2, 9.0));
    assert!(!heap.decrease_priority(&3, 0.0));
    assert_eq!(heap.min(), Ok(1));

    assert!(heap.decrease_priority(&2, 2.0));
    assert_eq!(heap.priority(&2), Some(2.0));
    assert_eq!(heap.extract_minimum(), Ok(2));
    assert_eq!(heap.extract_minimum(), Ok(1));
    assert!(heap.is_empty());
}

#[test]
fn test_clear_allows_reuse() {
    let mut heap = IndexedBinaryHeap::with_capacity(8);
    for i in 0..20u32 {
        heap.add(i, f64::from(20 - i));
    }
    heap.clear();
    assert!(heap.is_empty());
    assert!(!heap.contains(&19));

    heap.add(19, 1.0);
    assert!(heap.contains(&19));
    assert_eq!(heap.extract_minimum(), Ok(19));
}

proptest! {
    #[test]
    fn extract_minimum_matches_model(ops in proptest::collection::vec(arb_op(), 0..200)) {
        let mut heap: IndexedBinaryHeap<u8, f64> = IndexedBinaryHeap::with_capacity(4);
        let mut model: HashMap<u8, f64> = HashMap::new();

        for op in ops {
            match op {
                Op::Add(element, priority) => {
                    let priority = f64::from(priority);
                    let added = heap.add(element, priority);
                    prop_assert_eq!(added, !model.contains_key(&element));
                    model.entry(element).or_insert(priority);
                }
                Op::Decrease(element, priority) => {
                    let priority = f64::from(priority);
                    let expected = model.get(&element).map_or(false, |&p| priority < p);
                    prop_assert_eq!(heap.decrease_priority(&element, priority), expected);
                    if expected {
                        model.insert(element, priority);
                    }
                }
                Op::Extract => {
                    if model.is_empty() {
                        prop_assert_eq!(heap.extract_minimum(), Err(Error::EmptyQueue));
                    } else {
                        let minimum = model.values().cloned().fold(f64::INFINITY, f64::min);
                        let element = heap.extract_minimum().unwrap();
                        prop_assert_eq!(model.remove(&element), Some(minimum));
                    }
                }
            }

            prop_assert_eq!(heap.len(), model.len());
            for (element, priority) in &model {
                prop_assert!(heap.contains(element));
                prop_assert_eq!(heap.priority(element), Some(*priority));
            }
        }
    }
}
