// HashSet property tests.
//
// Property 1: set algebra agrees with BTreeSet.
//  - Model: two BTreeSets built from the same inputs.
//  - Invariant: union/intersection/difference members equal the model's,
//    operands are left unchanged, and is_subset/is_equal agree.
//
// Property 2: add/remove sequences keep membership and size in step.
//  - Operations: add (reports novelty), remove (reports presence), contains.
use chain_heap::{HashSet, IntPolicy};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn build(xs: &[i32]) -> HashSet<i32, IntPolicy> {
    let mut s = HashSet::new();
    for x in xs {
        s.add(x).unwrap();
    }
    s
}

fn members(s: &HashSet<i32, IntPolicy>) -> BTreeSet<i32> {
    s.iter().copied().collect()
}

proptest! {
    #[test]
    fn prop_algebra_matches_btreeset(
        a in proptest::collection::vec(-20i32..20, 0..40),
        b in proptest::collection::vec(-20i32..20, 0..40),
    ) {
        let (sa, sb) = (build(&a), build(&b));
        let (ma, mb): (BTreeSet<i32>, BTreeSet<i32>) =
            (a.iter().copied().collect(), b.iter().copied().collect());

        prop_assert_eq!(sa.len(), ma.len());
        prop_assert_eq!(members(&sa.union(&sb).unwrap()), &ma | &mb);
        prop_assert_eq!(members(&sa.intersection(&sb).unwrap()), &ma & &mb);
        prop_assert_eq!(members(&sa.difference(&sb).unwrap()), &ma - &mb);
        prop_assert_eq!(members(&sb.difference(&sa).unwrap()), &mb - &ma);
        prop_assert_eq!(sa.is_subset(&sb), ma.is_subset(&mb));
        prop_assert_eq!(sa.is_equal(&sb), ma == mb);

        // Operands are not modified.
        prop_assert_eq!(members(&sa), ma);
        prop_assert_eq!(members(&sb), mb);
    }

    #[test]
    fn prop_add_remove_sequence(ops in proptest::collection::vec((any::<bool>(), -10i32..10), 1..120)) {
        let mut s: HashSet<i32, IntPolicy> = HashSet::with_capacity(8);
        let mut model = BTreeSet::new();
        for (add, x) in ops {
            if add {
                prop_assert_eq!(s.add(&x).unwrap(), model.insert(x));
            } else {
                prop_assert_eq!(s.remove(&x), model.remove(&x));
            }
            prop_assert_eq!(s.len(), model.len());
            prop_assert!(s.contains(&x) == model.contains(&x));
            prop_assert!(s.len() * 4 <= s.capacity() * 3);
        }
    }
}
