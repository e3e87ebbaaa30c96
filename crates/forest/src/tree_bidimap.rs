use grove_util::comparator::partial;

use crate::red_black::{Iter, RbTree};

/// Bijective ordered map: a forward `K -> V` tree and an inverse `V -> K`
/// tree kept in lockstep.
pub struct TreeBidiMap<K, V, CK = fn(&K, &K) -> i32, CV = fn(&V, &V) -> i32>
where
    CK: Fn(&K, &K) -> i32,
    CV: Fn(&V, &V) -> i32,
{
    forward: RbTree<K, V, CK>,
    inverse: RbTree<V, K, CV>,
}

impl<K, V> TreeBidiMap<K, V>
where
    K: PartialOrd,
    V: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparators(partial::<K>, partial::<V>)
    }
}

impl<K, V> Default for TreeBidiMap<K, V>
where
    K: PartialOrd,
    V: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for TreeBidiMap<K, V>
where
    K: PartialOrd + Clone,
    V: PartialOrd + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.put(k, v);
        }
        map
    }
}

impl<K, V, CK, CV> TreeBidiMap<K, V, CK, CV>
where
    CK: Fn(&K, &K) -> i32,
    CV: Fn(&V, &V) -> i32,
{
    pub fn with_comparators(key_comparator: CK, value_comparator: CV) -> Self {
        Self {
            forward: RbTree::with_comparator(key_comparator),
            inverse: RbTree::with_comparator(value_comparator),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.forward.get(key)
    }

    pub fn get_key(&self, value: &V) -> Option<&K> {
        self.inverse.get(value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.forward.contains(key)
    }

    pub fn contains_value(&self, value: &V) -> bool {
        self.inverse.contains(value)
    }

    /// Removes the pair keyed by `key` from both directions.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.forward.remove(key)?;
        self.inverse.remove(&value);
        Some(value)
    }

    /// Removes the pair holding `value` from both directions.
    pub fn remove_value(&mut self, value: &V) -> Option<K> {
        let key = self.inverse.remove(value)?;
        self.forward.remove(&key);
        Some(key)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn clear(&mut self) {
        self.forward.clear();
        self.inverse.clear();
    }

    /// Pairs in key order.
    pub fn iter(&self) -> Iter<'_, K, V, CK> {
        self.forward.iter()
    }

    pub fn range<F: FnMut(&K, &V) -> bool>(&self, f: F) {
        self.forward.range(f);
    }

    pub fn keys(&self) -> Vec<&K> {
        self.forward.keys()
    }

    /// Values in key order.
    pub fn values(&self) -> Vec<&V> {
        self.forward.values()
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        self.forward.assert_valid()?;
        self.inverse.assert_valid()?;
        if self.forward.len() != self.inverse.len() {
            return Err("Forward and inverse sizes differ".to_string());
        }
        for (k, v) in self.forward.iter() {
            match self.inverse.get(v) {
                Some(back) if (self.forward.comparator())(back, k) == 0 => {}
                _ => return Err("Inverse does not mirror forward".to_string()),
            }
        }
        Ok(())
    }
}

impl<K, V, CK, CV> TreeBidiMap<K, V, CK, CV>
where
    K: Clone,
    V: Clone,
    CK: Fn(&K, &K) -> i32,
    CV: Fn(&V, &V) -> i32,
{
    /// Binds `key` to `value`, evicting any pair that used either of them.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(old) = self.forward.remove(&key) {
            self.inverse.remove(&old);
        }
        if let Some(old) = self.inverse.remove(&value) {
            self.forward.remove(&old);
        }
        self.forward.put(key.clone(), value.clone());
        self.inverse.put(value, key);
    }
}
