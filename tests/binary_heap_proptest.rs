// BinaryHeap property tests.
//
// Property 1: interleaved push/pop/replace keep the heap valid and agree
// with a sorted model on size and root.
// Property 2: draining yields ascending order for MinHeap and descending
// order for MaxHeap.
// Property 3: build_from produces the same multiset as repeated push and a
// valid heap.
// Property 4: merge empties the source and drains as the sorted union.
use chain_heap::{BinaryHeap, MaxHeap, MinHeap};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(i16),
    Pop,
    Replace(i16),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i16>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => any::<i16>().prop_map(Op::Replace),
    ]
}

proptest! {
    #[test]
    fn prop_interleaved_ops_stay_valid(ops in proptest::collection::vec(arb_op(), 1..150)) {
        let mut h: MinHeap<i16> = MinHeap::new();
        let mut model: Vec<i16> = Vec::new();
        for op in ops {
            match op {
                Op::Push(x) => {
                    h.push(x).unwrap();
                    model.push(x);
                }
                Op::Pop => {
                    model.sort_unstable();
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(h.pop(), expected);
                }
                Op::Replace(x) => {
                    model.sort_unstable();
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    model.push(x);
                    prop_assert_eq!(h.replace(x).unwrap(), expected);
                }
            }
            prop_assert!(h.is_valid());
            prop_assert_eq!(h.len(), model.len());
            prop_assert_eq!(h.peek().copied(), model.iter().copied().min());
        }
    }

    #[test]
    fn prop_drain_order(xs in proptest::collection::vec(any::<i32>(), 0..100)) {
        let mut min: MinHeap<i32> = MinHeap::new();
        let mut max: MaxHeap<i32> = MaxHeap::new();
        for &x in &xs {
            min.push(x).unwrap();
            max.push(x).unwrap();
        }
        let mut asc = xs.clone();
        asc.sort_unstable();
        let desc: Vec<i32> = asc.iter().rev().copied().collect();
        prop_assert_eq!(min.into_sorted_vec(), asc);
        prop_assert_eq!(max.into_sorted_vec(), desc);
    }

    #[test]
    fn prop_build_from_matches_pushes(xs in proptest::collection::vec(any::<i32>(), 0..100)) {
        let mut built: MaxHeap<i32> = MaxHeap::new();
        built.push(12345).unwrap();
        built.build_from(xs.clone()).unwrap();
        prop_assert!(built.is_valid());
        prop_assert_eq!(built.len(), xs.len());

        let mut pushed: MaxHeap<i32> = MaxHeap::new();
        for &x in &xs {
            pushed.push(x).unwrap();
        }
        prop_assert_eq!(built.into_sorted_vec(), pushed.into_sorted_vec());
    }

    #[test]
    fn prop_merge_is_sorted_union(
        a in proptest::collection::vec(any::<i32>(), 0..60),
        b in proptest::collection::vec(any::<i32>(), 0..60),
    ) {
        let mut ha: MinHeap<i32> = BinaryHeap::from(a.clone());
        let mut hb: MinHeap<i32> = BinaryHeap::from(b.clone());
        ha.merge(&mut hb).unwrap();
        prop_assert!(hb.is_empty());
        prop_assert!(ha.is_valid());

        let mut all = a;
        all.extend(b);
        all.sort_unstable();
        prop_assert_eq!(ha.into_sorted_vec(), all);
    }
}
