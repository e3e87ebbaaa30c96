//! Serde support. Sequences serialize as arrays in their natural order
//! (storage order for stacks and heaps, oldest first for queues and
//! rings, cursor first for the linked ring); hash maps serialize as
//! objects.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::{
    ArrayList, ArrayQueue, ArrayStack, BinaryHeap, CircularQueue, Deque, DoublyLinkedList,
    HashBidiMap, HashMap, HashSet, LinkedRing, PriorityQueue, RingBuffer, SinglyLinkedList,
};

macro_rules! impl_seq_serde {
    ($ty:ident, |$this:ident| $items:expr) => {
        impl<T: Serialize> Serialize for $ty<T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let $this = self;
                serializer.collect_seq($items)
            }
        }

        impl<'de, T: Deserialize<'de>> Deserialize<'de> for $ty<T> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                Vec::<T>::deserialize(deserializer).map(|items| items.into_iter().collect())
            }
        }
    };
}

impl_seq_serde!(ArrayList, |list| list.iter());
impl_seq_serde!(DoublyLinkedList, |list| list.iter());
impl_seq_serde!(SinglyLinkedList, |list| list.iter());
impl_seq_serde!(ArrayStack, |stack| stack.as_slice());
impl_seq_serde!(ArrayQueue, |queue| queue.iter());
impl_seq_serde!(Deque, |deque| deque.iter());
impl_seq_serde!(LinkedRing, |ring| ring.iter());

/// Bounded sequences come back with a capacity equal to their length.
macro_rules! impl_bounded_serde {
    ($ty:ident, $push:ident) => {
        impl<T: Serialize> Serialize for $ty<T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_seq(self.iter())
            }
        }

        impl<'de, T: Deserialize<'de>> Deserialize<'de> for $ty<T> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let items = Vec::<T>::deserialize(deserializer)?;
                let mut out = $ty::new(items.len());
                for item in items {
                    let _ = out.$push(item);
                }
                Ok(out)
            }
        }
    };
}

impl_bounded_serde!(CircularQueue, enqueue);
impl_bounded_serde!(RingBuffer, push);

impl<T: Serialize, L: Fn(&T, &T) -> bool> Serialize for BinaryHeap<T, L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T: Deserialize<'de> + PartialOrd> Deserialize<'de> for BinaryHeap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|items| items.into_iter().collect())
    }
}

impl<T: Serialize, L: Fn(&T, &T) -> bool> Serialize for PriorityQueue<T, L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.heap().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de> + PartialOrd> Deserialize<'de> for PriorityQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|items| items.into_iter().collect())
    }
}

impl<T: Serialize> Serialize for HashSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de> + Eq + Hash> Deserialize<'de> for HashSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|items| items.into_iter().collect())
    }
}

impl<K: Serialize, V: Serialize> Serialize for HashMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, K, V> Deserialize<'de> for HashMap<K, V>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        std::collections::HashMap::<K, V>::deserialize(deserializer)
            .map(|table| table.into_iter().collect())
    }
}

impl<K: Serialize, V: Serialize> Serialize for HashBidiMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Rejects input that binds one value to two keys.
impl<'de, K, V> Deserialize<'de> for HashBidiMap<K, V>
where
    K: Deserialize<'de> + Eq + Hash + Clone,
    V: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BidiVisitor<K, V>(PhantomData<fn() -> (K, V)>);

        impl<'de, K, V> Visitor<'de> for BidiVisitor<K, V>
        where
            K: Deserialize<'de> + Eq + Hash + Clone,
            V: Deserialize<'de> + Eq + Hash + Clone,
        {
            type Value = HashBidiMap<K, V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with distinct values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<HashBidiMap<K, V>, A::Error> {
                let mut map = HashBidiMap::new();
                while let Some((k, v)) = access.next_entry::<K, V>()? {
                    if map.get_key(&v).is_some_and(|owner| owner != &k) {
                        return Err(de::Error::custom(
                            "duplicate value in bidirectional map",
                        ));
                    }
                    map.put(k, v);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(BidiVisitor(PhantomData))
    }
}
