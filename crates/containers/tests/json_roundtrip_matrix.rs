use grove_containers::{
    ArrayList, ArrayStack, BinaryHeap, CircularQueue, Deque, DoublyLinkedList, HashBidiMap,
    HashMap, HashSet, LinkedRing, PriorityQueue, RingBuffer, Synced,
};
use serde_json::json;

#[test]
fn sequences_serialize_in_natural_order() {
    let list: ArrayList<i32> = (1..=3).collect();
    assert_eq!(serde_json::to_value(&list).unwrap(), json!([1, 2, 3]));

    let linked: DoublyLinkedList<&str> = ["x", "y"].into_iter().collect();
    assert_eq!(serde_json::to_value(&linked).unwrap(), json!(["x", "y"]));

    let mut stack = ArrayStack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(serde_json::to_value(&stack).unwrap(), json!([1, 2]));

    let mut deque = Deque::new();
    deque.push_back(2);
    deque.push_front(1);
    assert_eq!(serde_json::to_string(&deque).unwrap(), "[1,2]");

    let mut ring: LinkedRing<i32> = (0..4).collect();
    ring.next();
    assert_eq!(serde_json::to_value(&ring).unwrap(), json!([1, 2, 3, 0]));
}

#[test]
fn heap_serializes_storage_order() {
    let heap: BinaryHeap<i32> = [3, 1, 2].into_iter().collect();
    let text = serde_json::to_string(&heap).unwrap();
    assert_eq!(text, "[1,3,2]");
    let back: BinaryHeap<i32> = serde_json::from_str(&text).unwrap();
    assert_eq!(back.as_slice(), heap.as_slice());

    let queue: PriorityQueue<i32> = serde_json::from_str("[5,4,6]").unwrap();
    assert_eq!(queue.peek(), Some(&4));
}

#[test]
fn bounded_sequences_restore_capacity_from_length() {
    let mut queue = CircularQueue::new(2);
    queue.enqueue('a');
    queue.enqueue('b');
    queue.enqueue('c');
    let text = serde_json::to_string(&queue).unwrap();
    assert_eq!(text, r#"["b","c"]"#);
    let back: CircularQueue<char> = serde_json::from_str(&text).unwrap();
    assert_eq!(back.capacity(), 2);
    assert!(back.is_full());

    let ring: RingBuffer<u8> = serde_json::from_str("[7,8,9]").unwrap();
    assert_eq!(ring.capacity(), 3);
    assert_eq!(ring.peek(), Some(&7));
}

#[test]
fn hash_maps_serialize_as_objects() {
    let map: HashMap<String, i32> = [("k".to_string(), 1)].into_iter().collect();
    assert_eq!(serde_json::to_value(&map).unwrap(), json!({"k": 1}));

    let back: HashMap<u32, bool> = serde_json::from_str(r#"{"1":true,"2":false}"#).unwrap();
    assert_eq!(back.get(&2), Some(&false));

    let set: HashSet<i32> = serde_json::from_str("[1,1,2]").unwrap();
    assert_eq!(set.len(), 2);

    let synced = Synced::new(map);
    assert_eq!(serde_json::to_string(&synced).unwrap(), r#"{"k":1}"#);
}

#[test]
fn bidimap_rejects_duplicate_values() {
    let ok: HashBidiMap<String, i32> = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
    assert_eq!(ok.get_key(&2).map(String::as_str), Some("b"));

    let err = serde_json::from_str::<HashBidiMap<String, i32>>(r#"{"a":1,"b":1}"#)
        .unwrap_err()
        .to_string();
    assert!(err.contains("duplicate value"), "{err}");
}
