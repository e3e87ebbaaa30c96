use std::collections::VecDeque;

use grove_containers::{BinaryHeap, Deque, DoublyLinkedList, HashMap, RingBuffer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn heap_pops_sorted(items in proptest::collection::vec(any::<i32>(), 0..200)) {
        let heap: BinaryHeap<i32> = items.iter().copied().collect();
        let mut want = items;
        want.sort_unstable();
        prop_assert_eq!(heap.into_sorted_vec(), want);
    }

    #[test]
    fn deque_follows_vecdeque(ops in proptest::collection::vec((0u8..4, any::<i16>()), 0..200)) {
        let mut deque = Deque::new();
        let mut oracle = VecDeque::new();
        for (op, v) in ops {
            match op {
                0 => { deque.push_back(v); oracle.push_back(v); }
                1 => { deque.push_front(v); oracle.push_front(v); }
                2 => prop_assert_eq!(deque.pop_back(), oracle.pop_back()),
                _ => prop_assert_eq!(deque.pop_front(), oracle.pop_front()),
            }
            prop_assert_eq!(deque.len(), oracle.len());
        }
        prop_assert!(deque.iter().eq(oracle.iter()));
    }

    #[test]
    fn linked_list_insert_remove_idempotent(
        items in proptest::collection::vec(any::<u8>(), 0..50),
        index in 0usize..60,
        value: u8,
    ) {
        let mut list: DoublyLinkedList<u8> = items.iter().copied().collect();
        let index = index.min(list.len());
        prop_assert!(list.insert(index, value));
        prop_assert_eq!(list.remove(index), Some(value));
        prop_assert!(list.iter().eq(items.iter()));
    }

    #[test]
    fn ring_buffer_never_exceeds_capacity(
        capacity in 1usize..8,
        ops in proptest::collection::vec(any::<bool>(), 0..100),
    ) {
        let mut ring = RingBuffer::new(capacity);
        let mut oracle = VecDeque::new();
        for (i, push) in ops.into_iter().enumerate() {
            if push {
                let accepted = ring.push(i).is_ok();
                prop_assert_eq!(accepted, oracle.len() < capacity);
                if accepted {
                    oracle.push_back(i);
                }
            } else {
                prop_assert_eq!(ring.pop(), oracle.pop_front());
            }
            prop_assert!(ring.len() <= capacity);
        }
    }

    #[test]
    fn hash_map_put_remove(keys in proptest::collection::vec(0u8..32, 0..100)) {
        let mut map = HashMap::new();
        let mut oracle = std::collections::HashMap::new();
        for k in keys {
            if k % 3 == 0 {
                prop_assert_eq!(map.remove(&(k / 3)), oracle.remove(&(k / 3)));
            } else {
                prop_assert_eq!(map.put(k, k), oracle.insert(k, k));
            }
        }
        prop_assert_eq!(map.len(), oracle.len());
    }
}
