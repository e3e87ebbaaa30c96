use std::collections::hash_map;
use std::hash::Hash;

/// Unordered bijective map: a forward and an inverse table kept in lockstep.
#[derive(Clone, Debug)]
pub struct HashBidiMap<K, V> {
    forward: hash_map::HashMap<K, V>,
    inverse: hash_map::HashMap<V, K>,
}

impl<K, V> Default for HashBidiMap<K, V> {
    fn default() -> Self {
        Self {
            forward: hash_map::HashMap::new(),
            inverse: hash_map::HashMap::new(),
        }
    }
}

impl<K, V> HashBidiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `key` to `value`, evicting any pair that used either of them.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(old) = self.forward.remove(&key) {
            self.inverse.remove(&old);
        }
        if let Some(old) = self.inverse.remove(&value) {
            self.forward.remove(&old);
        }
        self.forward.insert(key.clone(), value.clone());
        self.inverse.insert(value, key);
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.forward.get(key)
    }

    pub fn get_key(&self, value: &V) -> Option<&K> {
        self.inverse.get(value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }

    pub fn contains_value(&self, value: &V) -> bool {
        self.inverse.contains_key(value)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.forward.remove(key)?;
        self.inverse.remove(&value);
        Some(value)
    }

    pub fn remove_value(&mut self, value: &V) -> Option<K> {
        let key = self.inverse.remove(value)?;
        self.forward.remove(&key);
        Some(key)
    }

    pub fn keys(&self) -> Vec<&K> {
        self.forward.keys().collect()
    }

    pub fn values(&self) -> Vec<&V> {
        self.forward.values().collect()
    }
}

impl<K, V> HashBidiMap<K, V> {
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

    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.forward.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for HashBidiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.put(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_evicts_both_directions() {
        let mut map = HashBidiMap::new();
        map.put("a", 1);
        map.put("b", 2);
        map.put("a", 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_key(&2), Some(&"a"));
        assert_eq!(map.get(&"b"), None);
        assert_eq!(map.get_key(&1), None);
        assert_eq!(map.remove_value(&2), Some("a"));
        assert!(map.is_empty());
    }
}
