use std::collections::BTreeMap;

use grove_forest::{AvlTree, BTree, OrderedMap, RbTree, SkipList, TreeMap};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Put(i16, u8),
    Remove(i16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-64i16..64, any::<u8>()).prop_map(|(k, v)| Op::Put(k, v)),
        2 => (-64i16..64).prop_map(Op::Remove),
    ]
}

/// Replays `ops` against `map` and a `std` oracle, validating after each step.
fn replay<M, F>(map: &mut M, ops: &[Op], validate: F) -> Result<(), TestCaseError>
where
    M: OrderedMap<i16, u8>,
    F: Fn(&M) -> Result<(), String>,
{
    let mut oracle = BTreeMap::<i16, u8>::new();
    for op in ops {
        match *op {
            Op::Put(k, v) => prop_assert_eq!(map.put(k, v), oracle.insert(k, v)),
            Op::Remove(k) => prop_assert_eq!(map.remove(&k), oracle.remove(&k)),
        }
        validate(&*map).map_err(TestCaseError::fail)?;
        prop_assert_eq!(map.len(), oracle.len());
    }
    let got: Vec<(i16, u8)> = map.entries().into_iter().map(|(k, v)| (*k, *v)).collect();
    let want: Vec<(i16, u8)> = oracle.into_iter().collect();
    prop_assert_eq!(got, want);
    Ok(())
}

/// Insert then remove of a fresh key leaves the key sequence unchanged.
fn insert_remove_idempotent<M: OrderedMap<i16, u8>>(map: &mut M, k: i16) -> Result<(), TestCaseError> {
    if map.contains(&k) {
        return Ok(());
    }
    let before: Vec<i16> = map.keys().into_iter().copied().collect();
    map.put(k, 0);
    map.remove(&k);
    let after: Vec<i16> = map.keys().into_iter().copied().collect();
    prop_assert_eq!(before, after);
    Ok(())
}

proptest! {
    #[test]
    fn avl_matches_oracle(ops in prop::collection::vec(op(), 0..200), k in -100i16..100) {
        let mut map = AvlTree::<i16, u8>::new();
        replay(&mut map, &ops, AvlTree::assert_valid)?;
        insert_remove_idempotent(&mut map, k)?;
        map.assert_valid().map_err(TestCaseError::fail)?;
    }

    #[test]
    fn red_black_matches_oracle(ops in prop::collection::vec(op(), 0..200), k in -100i16..100) {
        let mut map = RbTree::<i16, u8>::new();
        replay(&mut map, &ops, RbTree::assert_valid)?;
        insert_remove_idempotent(&mut map, k)?;
        map.assert_valid().map_err(TestCaseError::fail)?;
    }

    #[test]
    fn btree_matches_oracle(
        ops in prop::collection::vec(op(), 0..200),
        order in 3usize..9,
        k in -100i16..100,
    ) {
        let mut map = BTree::<i16, u8>::new(order);
        replay(&mut map, &ops, BTree::assert_valid)?;
        insert_remove_idempotent(&mut map, k)?;
        map.assert_valid().map_err(TestCaseError::fail)?;
    }

    #[test]
    fn skiplist_matches_oracle(
        ops in prop::collection::vec(op(), 0..200),
        seed in any::<u64>(),
        k in -100i16..100,
    ) {
        let mut map = SkipList::<i16, u8>::with_seed(seed);
        replay(&mut map, &ops, SkipList::assert_valid)?;
        insert_remove_idempotent(&mut map, k)?;
        for r in 1..=map.len() {
            let by_rank = map.get_by_rank(r).map(|(k, _)| *k);
            let by_iter = map.iter().nth(r - 1).map(|(k, _)| *k);
            prop_assert_eq!(by_rank, by_iter);
        }
    }

    #[test]
    fn tree_map_json_roundtrip(ops in prop::collection::vec(op(), 0..100)) {
        let mut map = TreeMap::<i16, u8>::new();
        replay(&mut map, &ops, |m: &TreeMap<i16, u8>| m.tree().assert_valid())?;
        let text = serde_json::to_string(&map).unwrap();
        let back: TreeMap<i16, u8> = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(back.entries(), map.entries());
    }

    #[test]
    fn range_stops_after_false(len in 1usize..60, stop in 1usize..60) {
        let map: RbTree<usize, ()> = (0..len).map(|k| (k, ())).collect();
        let mut calls = 0;
        map.range(|_, _| {
            calls += 1;
            calls < stop
        });
        prop_assert_eq!(calls, stop.min(len));
    }
}
