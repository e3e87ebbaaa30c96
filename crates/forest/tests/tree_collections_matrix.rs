use grove_forest::{OrderedMap, TreeBidiMap, TreeMap, TreeSet};
use grove_util::comparator::by_key;

#[test]
fn tree_map_matrix() {
    let mut map = TreeMap::new();
    map.put("b", 2);
    map.put("a", 1);
    map.put("c", 3);
    assert_eq!(map.put("b", 20), Some(2));

    assert_eq!(map.keys(), vec![&"a", &"b", &"c"]);
    assert_eq!(map.values(), vec![&1, &20, &3]);
    assert_eq!(map.min(), Some((&"a", &1)));
    assert_eq!(map.max(), Some((&"c", &3)));
    assert_eq!(map.floor(&"bb"), Some((&"b", &20)));
    assert_eq!(map.ceiling(&"bb"), Some((&"c", &3)));
    assert_eq!(map.remove(&"a"), Some(1));
    assert!(!map.contains(&"a"));
    assert_eq!(map.len(), 2);
    map.tree().assert_valid().unwrap();
}

#[test]
fn tree_map_through_trait_matrix() {
    fn fill<M: OrderedMap<u8, u8>>(map: &mut M) {
        for k in [9, 1, 5] {
            map.put(k, k + 1);
        }
    }
    let mut map = TreeMap::new();
    fill(&mut map);
    assert_eq!(map.entries(), vec![(&1, &2), (&5, &6), (&9, &10)]);
    assert!(OrderedMap::contains_all(&map, &[1, 9]));
}

#[test]
fn tree_set_matrix() {
    let mut set = TreeSet::new();
    set.add([3, 1, 2, 3]);
    assert_eq!(set.len(), 3);
    assert!(set.insert(0));
    assert!(!set.insert(0));
    assert!(set.remove(&1));
    assert!(!set.remove(&1));
    assert_eq!(set.values(), vec![&0, &2, &3]);
    assert_eq!(set.min(), Some(&0));
    assert_eq!(set.max(), Some(&3));

    let mut seen = Vec::new();
    set.range(|v| {
        seen.push(*v);
        *v < 2
    });
    assert_eq!(seen, vec![0, 2]);
}

#[test]
fn tree_set_custom_comparator_matrix() {
    let mut set = TreeSet::with_comparator(by_key(|s: &String| s.len()));
    set.add(["aaa".to_string(), "b".to_string(), "cc".to_string(), "dd".to_string()]);
    assert_eq!(set.len(), 3);
    let items: Vec<&str> = set.iter().map(String::as_str).collect();
    assert_eq!(items, vec!["b", "cc", "aaa"]);
}

#[test]
fn tree_bidimap_matrix() {
    let mut map = TreeBidiMap::new();
    map.put("one", 1);
    map.put("two", 2);
    map.put("three", 3);
    assert_eq!(map.get(&"two"), Some(&2));
    assert_eq!(map.get_key(&3), Some(&"three"));

    // Rebinding a value drops the key that held it.
    map.put("uno", 1);
    assert_eq!(map.get(&"one"), None);
    assert_eq!(map.get_key(&1), Some(&"uno"));
    assert_eq!(map.len(), 3);

    // Rebinding a key drops its old value.
    map.put("two", 22);
    assert_eq!(map.get_key(&2), None);
    assert_eq!(map.keys(), vec![&"three", &"two", &"uno"]);
    assert_eq!(map.values(), vec![&3, &22, &1]);
    map.assert_valid().unwrap();

    assert_eq!(map.remove(&"three"), Some(3));
    assert!(!map.contains_value(&3));
    map.clear();
    assert!(map.is_empty());
}

/// Keys and values through the shared trait, with borrowed entry types.
fn shared_keys_and_values<'s, M>(map: &mut M, words: &[&'s str])
where
    M: OrderedMap<&'s str, &'s str>,
{
    for &w in words {
        map.put(w, &w[1..]);
    }
    assert_eq!(OrderedMap::keys(&*map), vec![&"ant", &"bee", &"cat"]);
    assert_eq!(OrderedMap::values(&*map), vec![&"nt", &"ee", &"at"]);
}

#[test]
fn ordered_map_keys_values_matrix() {
    let owned = String::from("cat bee ant");
    let words: Vec<&str> = owned.split(' ').collect();
    shared_keys_and_values(&mut grove_forest::AvlTree::new(), &words);
    shared_keys_and_values(&mut grove_forest::RbTree::new(), &words);
    shared_keys_and_values(&mut grove_forest::BTree::new(3), &words);
    shared_keys_and_values(&mut grove_forest::SkipList::new(), &words);
    shared_keys_and_values(&mut TreeMap::new(), &words);
}
