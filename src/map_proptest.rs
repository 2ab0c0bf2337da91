#![cfg(test)]

// Property tests for ProbeMap kept inside the crate so they can check
// internal invariants alongside the public surface.

use crate::ProbeMap;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `insert` returns the previous value exactly when the model holds one.
// - `get`/`contains_key` parity for present and absent keys.
// - `remove` returns the model's value and makes the key absent.
// - `iter` yields each live entry exactly once; the pair set equals the
//   model's.
// - `len`/`is_empty` parity with the model after every op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: ProbeMap<i32> = ProbeMap::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = &pool[i];
                    let old = sut.insert(k, v).expect("insert");
                    prop_assert_eq!(old, model.insert(k.clone(), v));
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(k));
                    prop_assert!(sut.get(k).is_none());
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
                }
                OpI::Mutate(i, d) => {
                    let k = &pool[i];
                    match (sut.get_mut(k), model.get_mut(k)) {
                        (Some(sv), Some(mv)) => {
                            *sv = sv.saturating_add(d);
                            *mv = mv.saturating_add(d);
                        }
                        (None, None) => {}
                        _ => prop_assert!(false, "presence mismatch for {}", k),
                    }
                }
                OpI::Iterate => {
                    let s_pairs: BTreeMap<String, i32> =
                        sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                    let m_pairs: BTreeMap<String, i32> =
                        model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    prop_assert_eq!(s_pairs, m_pairs);
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }
    }
}

// Property: Bulk insertion of distinct keys across several growth steps.
// After inserting N distinct keys, len() == N, every key resolves to its
// value, and iteration yields exactly the inserted pair set.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_growth_retains_entries(
        keys in proptest::collection::btree_set("[a-z0-9]{1,12}", 0..300)
    ) {
        let mut sut: ProbeMap<usize> = ProbeMap::new();
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(sut.insert(k, i).expect("insert"), None);
        }
        prop_assert_eq!(sut.len(), keys.len());
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(sut.get(k), Some(&i));
        }
        let seen: BTreeMap<String, usize> =
            sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        prop_assert_eq!(seen.len(), keys.len());
    }
}

// Property: Remove half the keys, and the survivors must stay reachable
// through whatever tombstones the removals left on their probe chains.
// Reinserting the removed keys restores them without disturbing survivors.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_remove_and_reinsert_round_trip(
        keys in proptest::collection::btree_set("[a-z0-9]{1,12}", 1..200)
    ) {
        let mut sut: ProbeMap<usize> = ProbeMap::new();
        for (i, k) in keys.iter().enumerate() {
            sut.insert(k, i).expect("insert");
        }

        let (removed, kept): (Vec<_>, Vec<_>) = keys
            .iter()
            .enumerate()
            .partition(|(i, _)| i % 2 == 0);
        for (i, k) in &removed {
            prop_assert_eq!(sut.remove(k), Some(*i));
        }
        prop_assert_eq!(sut.len(), kept.len());
        for (_, k) in &removed {
            prop_assert!(!sut.contains_key(k));
        }
        for (i, k) in &kept {
            prop_assert_eq!(sut.get(k), Some(i));
        }

        for (i, k) in &removed {
            prop_assert_eq!(sut.insert(k, i + 1000).expect("reinsert"), None);
        }
        prop_assert_eq!(sut.len(), keys.len());
        for (i, k) in &removed {
            prop_assert_eq!(sut.get(k), Some(&(i + 1000)));
        }
        for (i, k) in &kept {
            prop_assert_eq!(sut.get(k), Some(i));
        }
    }
}
