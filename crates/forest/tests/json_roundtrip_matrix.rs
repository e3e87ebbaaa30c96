use grove_forest::{AvlTree, BTree, RbTree, SkipList, TreeBidiMap, TreeMap, TreeSet};
use serde_json::json;

#[test]
fn ordered_maps_serialize_as_objects_matrix() {
    let pairs = [("b", 2), ("a", 1), ("c", 3)];
    let expected = json!({"a": 1, "b": 2, "c": 3});

    let avl: AvlTree<&str, i32> = pairs.into_iter().collect();
    let rb: RbTree<&str, i32> = pairs.into_iter().collect();
    let bt: BTree<&str, i32> = pairs.into_iter().collect();
    let sl: SkipList<&str, i32> = pairs.into_iter().collect();
    let tm: TreeMap<&str, i32> = pairs.into_iter().collect();

    assert_eq!(serde_json::to_value(&avl).unwrap(), expected);
    assert_eq!(serde_json::to_value(&rb).unwrap(), expected);
    assert_eq!(serde_json::to_value(&bt).unwrap(), expected);
    assert_eq!(serde_json::to_value(&sl).unwrap(), expected);
    assert_eq!(serde_json::to_value(&tm).unwrap(), expected);
}

#[test]
fn ordered_maps_roundtrip_matrix() {
    let text = r#"{"10":"x","2":"y","33":"z"}"#;

    let avl: AvlTree<u32, String> = serde_json::from_str(text).unwrap();
    avl.assert_valid().unwrap();
    assert_eq!(avl.keys(), vec![&2, &10, &33]);

    let bt: BTree<u32, String> = serde_json::from_str(text).unwrap();
    bt.assert_valid().unwrap();
    assert_eq!(bt.order(), 3);
    assert_eq!(serde_json::to_string(&bt).unwrap(), r#"{"2":"y","10":"x","33":"z"}"#);

    let sl: SkipList<u32, String> = serde_json::from_str(text).unwrap();
    sl.assert_valid().unwrap();
    assert_eq!(sl.get_by_rank(3), Some((&33, &"z".to_string())));

    let tm: TreeMap<u32, String> = serde_json::from_str(text).unwrap();
    let back: TreeMap<u32, String> =
        serde_json::from_str(&serde_json::to_string(&tm).unwrap()).unwrap();
    assert_eq!(back.keys(), tm.keys());
    assert_eq!(back.values(), tm.values());
}

#[test]
fn tree_set_roundtrip_matrix() {
    let set: TreeSet<i64> = serde_json::from_str("[5, -1, 3, 5]").unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(serde_json::to_value(&set).unwrap(), json!([-1, 3, 5]));
}

#[test]
fn tree_bidimap_roundtrip_matrix() {
    let map: TreeBidiMap<String, i32> = serde_json::from_str(r#"{"b": 2, "a": 1}"#).unwrap();
    map.assert_valid().unwrap();
    assert_eq!(map.get_key(&2), Some(&"b".to_string()));
    assert_eq!(serde_json::to_value(&map).unwrap(), json!({"a": 1, "b": 2}));
}

#[test]
fn tree_bidimap_rejects_duplicate_values_matrix() {
    let err = serde_json::from_str::<TreeBidiMap<String, i32>>(r#"{"a": 1, "b": 1}"#)
        .err()
        .expect("duplicate values must be rejected");
    assert!(err.to_string().contains("duplicate value"));
}

#[test]
fn malformed_input_surfaces_parser_error_matrix() {
    assert!(serde_json::from_str::<RbTree<String, i32>>("[1, 2]").is_err());
    assert!(serde_json::from_str::<TreeSet<i32>>(r#"{"a": 1}"#).is_err());
    assert!(serde_json::from_str::<SkipList<String, i32>>(r#"{"a": "x"}"#).is_err());
}
