//! Serde support. JSON shapes: maps serialize as objects, sets as arrays.
//!
//! Deserialization is available for the default comparator and builds a
//! fresh container by inserting every supplied pair in input order.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{AvlTree, BTree, RbTree, SkipList, TreeBidiMap, TreeMap, TreeSet};

struct PairsVisitor<T, K, V> {
    expecting: &'static str,
    marker: PhantomData<fn() -> (T, K, V)>,
}

impl<T, K, V> PairsVisitor<T, K, V> {
    fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            marker: PhantomData,
        }
    }
}

impl<'de, T, K, V> Visitor<'de> for PairsVisitor<T, K, V>
where
    T: Default + Extend<(K, V)>,
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<T, A::Error> {
        let mut out = T::default();
        while let Some(pair) = access.next_entry::<K, V>()? {
            out.extend(Some(pair));
        }
        Ok(out)
    }
}

macro_rules! impl_map_serde {
    ($ty:ident, $expecting:literal) => {
        impl<K, V, C> Serialize for $ty<K, V, C>
        where
            K: Serialize,
            V: Serialize,
            C: Fn(&K, &K) -> i32,
        {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.len()))?;
                for (k, v) in self.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }

        impl<'de, K, V> Deserialize<'de> for $ty<K, V>
        where
            K: Deserialize<'de> + PartialOrd,
            V: Deserialize<'de>,
        {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_map(PairsVisitor::<Self, K, V>::new($expecting))
            }
        }
    };
}

impl_map_serde!(AvlTree, "an object of AVL tree entries");
impl_map_serde!(RbTree, "an object of red-black tree entries");
impl_map_serde!(BTree, "an object of B-tree entries");
impl_map_serde!(SkipList, "an object of skip list entries");
impl_map_serde!(TreeMap, "an object of map entries");

impl<T, C> Serialize for TreeSet<T, C>
where
    T: Serialize,
    C: Fn(&T, &T) -> i32,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for TreeSet<T>
where
    T: Deserialize<'de> + PartialOrd,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ItemsVisitor<T>(PhantomData<fn() -> T>);

        impl<'de, T> Visitor<'de> for ItemsVisitor<T>
        where
            T: Deserialize<'de> + PartialOrd,
        {
            type Value = TreeSet<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an array of set items")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<TreeSet<T>, A::Error> {
                let mut set = TreeSet::new();
                while let Some(item) = access.next_element()? {
                    set.insert(item);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(ItemsVisitor(PhantomData))
    }
}

impl<K, V, CK, CV> Serialize for TreeBidiMap<K, V, CK, CV>
where
    K: Serialize,
    V: Serialize,
    CK: Fn(&K, &K) -> i32,
    CV: Fn(&V, &V) -> i32,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Rejects input that binds one value to two keys.
impl<'de, K, V> Deserialize<'de> for TreeBidiMap<K, V>
where
    K: Deserialize<'de> + PartialOrd + Clone,
    V: Deserialize<'de> + PartialOrd + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BidiVisitor<K, V>(PhantomData<fn() -> (K, V)>);

        impl<'de, K, V> Visitor<'de> for BidiVisitor<K, V>
        where
            K: Deserialize<'de> + PartialOrd + Clone,
            V: Deserialize<'de> + PartialOrd + Clone,
        {
            type Value = TreeBidiMap<K, V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with distinct values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<TreeBidiMap<K, V>, A::Error> {
                let mut map = TreeBidiMap::new();
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
