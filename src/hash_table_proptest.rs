#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can check
// chain integrity through crate-private helpers.

use crate::hash_table::HashTable;
use crate::policy::{KeyPolicy, TextPolicy};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            2 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Get),
            1 => prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(OpI::Contains),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Iterate),
            1 => Just(OpI::Clear),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Drives one table through `ops`, mirroring every step in a std HashMap.
fn run_state_machine<P: KeyPolicy<str>>(
    mut sut: HashTable<str, i32, P>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();
    let mut last_cap = sut.capacity();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                let k = &pool[i];
                let prev = sut.put(k, v).expect("growth within test sizes");
                prop_assert_eq!(prev, model.insert(k.clone(), v));
                // Load factor bound right after every put.
                prop_assert!(sut.len() * 4 <= sut.capacity() * 3);
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.remove(k), model.remove(k));
                prop_assert!(!sut.contains(k));
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains(&s), model.contains_key(&s));
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.get_mut(k), model.get_mut(k)) {
                    (Some(sv), Some(mv)) => {
                        *sv = sv.saturating_add(d);
                        *mv = mv.saturating_add(d);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "presence diverged for {:?}", k),
                }
            }
            OpI::Iterate => {
                let s_keys: BTreeSet<String> = sut.keys().map(str::to_string).collect();
                let m_keys: BTreeSet<String> = model.keys().cloned().collect();
                prop_assert_eq!(s_keys, m_keys);
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
            }
        }

        // Post-conditions after each op
        // 1) Size parity and chain integrity
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        sut.assert_chain_integrity();
        // 2) Capacity only grows, by doubling
        let cap = sut.capacity();
        prop_assert!(cap == last_cap || cap == last_cap * 2);
        last_cap = cap;
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `get` returns the value from the most recent `put` of an equal key.
// - `len` equals the number of distinct live keys.
// - `len / capacity <= 3/4` immediately after every `put`.
// - Rehash keeps every entry exactly once, in the bucket its key maps to.
// - `remove` reports presence, and the key is gone afterward.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let sut: HashTable<str, i32, TextPolicy> = HashTable::with_capacity(8);
        run_state_machine(sut, &pool, ops)?;
    }
}

// Collision variant: every key lands in bucket 0, so each lookup walks
// one long chain and equality alone resolves the entry.
#[derive(Clone, Default)]
struct OneBucket;
impl KeyPolicy<str> for OneBucket {
    fn bucket(&self, _key: &str, _capacity: usize) -> usize {
        0
    }
    fn key_eq(&self, a: &str, b: &str) -> bool {
        a == b
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        let sut: HashTable<str, i32, OneBucket> = HashTable::with_capacity(8);
        run_state_machine(sut, &pool, ops)?;
    }
}

// Property: with the default hasher policy the same invariants hold.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_default_policy((pool, ops) in arb_scenario()) {
        let sut: HashTable<str, i32> = HashTable::new();
        run_state_machine(sut, &pool, ops)?;
    }
}
