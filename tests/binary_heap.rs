use chain_heap::{BinaryHeap, Comparator, MaxHeap, MinHeap, DEFAULT_HEAP_CAPACITY};
use std::cmp::Ordering;

#[derive(Debug, PartialEq)]
struct Task {
    name: &'static str,
    priority: u8,
}

/// Higher priority first; ties go to the earlier name.
#[derive(Default)]
struct ByPriority;

impl Comparator<Task> for ByPriority {
    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        b.priority.cmp(&a.priority).then_with(|| a.name.cmp(b.name))
    }
}

#[test]
fn custom_comparator_orders_tasks() {
    let mut h: BinaryHeap<Task, ByPriority> = BinaryHeap::new();
    for (name, priority) in [("write", 2), ("deploy", 9), ("review", 5), ("alert", 9)] {
        h.push(Task { name, priority }).unwrap();
    }
    let order: Vec<&str> = h.into_sorted_vec().into_iter().map(|t| t.name).collect();
    assert_eq!(order, vec!["alert", "deploy", "review", "write"]);
}

/// Elements can be borrowed; the heap never takes ownership of the targets.
#[test]
fn heap_of_references() {
    let scores = vec![71, 3, 99, 42];
    let mut h: MaxHeap<&i32> = MaxHeap::new();
    for s in &scores {
        h.push(s).unwrap();
    }
    assert_eq!(h.max(), Some(&&99));
    assert_eq!(h.pop(), Some(&99));
    assert_eq!(h.len(), 3);
    drop(h);
    assert_eq!(scores.len(), 4);
}

#[test]
fn min_and_max_replace() {
    let mut min: MinHeap<i32> = BinaryHeap::from(vec![5, 1, 9]);
    assert_eq!(min.replace_min(7).unwrap(), Some(1));
    assert_eq!(min.min(), Some(&5));

    let mut max: MaxHeap<i32> = BinaryHeap::from(vec![5, 1, 9]);
    assert_eq!(max.replace_max(0).unwrap(), Some(9));
    assert_eq!(max.max(), Some(&5));
}

#[test]
fn empty_heap_behaviour() {
    let mut h: MinHeap<String> = MinHeap::with_capacity(0);
    assert!(h.capacity() >= DEFAULT_HEAP_CAPACITY);
    assert_eq!(h.pop(), None);
    assert_eq!(h.peek(), None);
    assert!(h.is_valid());
    assert_eq!(h.to_string(), "binary heap, size 0\n  (empty)");
}

#[test]
fn display_shows_levels() {
    let h: MinHeap<i32> = BinaryHeap::from(vec![3, 1, 2, 4]);
    assert_eq!(
        h.to_string(),
        "binary heap, size 4\n  array: [1, 3, 2, 4]\n  level 0: 1\n  level 1: 3 2\n  level 2: 4"
    );
}
