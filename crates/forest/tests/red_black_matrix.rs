use grove_forest::{OrderedMap, RbTree};

fn scenario() -> RbTree<i32, &'static str> {
    let mut tree = RbTree::new();
    for (k, v) in [
        (5, "e"),
        (6, "f"),
        (7, "g"),
        (3, "c"),
        (4, "d"),
        (1, "x"),
        (2, "b"),
        (1, "a"),
    ] {
        tree.put(k, v);
        tree.assert_valid().unwrap();
    }
    tree
}

#[test]
fn red_black_insert_order_matrix() {
    let tree = scenario();
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.keys(), vec![&1, &2, &3, &4, &5, &6, &7]);
    assert_eq!(tree.get(&1), Some(&"a"));
    assert_eq!(tree.get(&8), None);
    assert!(tree.is_black(tree.root().unwrap()));
}

#[test]
fn red_black_successor_walk_matrix() {
    let tree = scenario();
    let mut forward = Vec::new();
    let mut curr = tree.first();
    while let Some(i) = curr {
        forward.push(*tree.key(i));
        curr = tree.next(i);
    }
    assert_eq!(forward, vec![1, 2, 3, 4, 5, 6, 7]);

    let mut backward = Vec::new();
    let mut curr = tree.last();
    while let Some(i) = curr {
        backward.push(*tree.key(i));
        curr = tree.prev(i);
    }
    assert_eq!(backward, vec![7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn red_black_remove_matrix() {
    let mut tree = scenario();
    for k in [4, 1, 7, 5] {
        assert!(tree.remove(&k).is_some());
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.keys(), vec![&2, &3, &6]);
    assert_eq!(tree.remove(&4), None);

    for k in [2, 3, 6] {
        tree.remove(&k);
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
}

#[test]
fn red_black_sequential_stress_matrix() {
    let mut tree = RbTree::<u32, u32>::new();
    for k in 0..256 {
        tree.put(k, k);
    }
    tree.assert_valid().unwrap();
    // Black height bound: height <= 2 * log2(n + 1).
    assert!(tree.height() <= 16);

    for k in (0..256).filter(|k| k % 3 != 0) {
        assert_eq!(tree.remove(&k), Some(k));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 86);
    assert_eq!(tree.min(), Some((&0, &0)));
    assert_eq!(tree.max(), Some((&255, &255)));
}

#[test]
fn red_black_floor_ceiling_matrix() {
    let tree = scenario();
    assert_eq!(tree.floor(&0), None);
    assert_eq!(tree.floor(&9).map(|i| *tree.key(i)), Some(7));
    assert_eq!(tree.ceiling(&0).map(|i| *tree.key(i)), Some(1));
    assert_eq!(tree.ceiling(&8), None);
}

#[test]
fn red_black_clear_matrix() {
    let mut tree = scenario();
    tree.clear();
    assert_eq!(tree.len(), 0);
    assert_eq!(OrderedMap::keys(&tree), Vec::<&i32>::new());
    tree.put(9, "z");
    tree.assert_valid().unwrap();
    assert_eq!(tree.entries(), vec![(&9, &"z")]);
}
