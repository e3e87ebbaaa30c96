use std::collections::hash_map;
use std::hash::Hash;

/// Unordered map. Iteration order is unspecified.
#[derive(Clone, Debug)]
pub struct HashMap<K, V> {
    table: hash_map::HashMap<K, V>,
}

impl<K, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self {
            table: hash_map::HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> HashMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.table.insert(key, value)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.table.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.table.get_mut(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.table.remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.table.contains_key(key)
    }

    pub fn keys(&self) -> Vec<&K> {
        self.table.keys().collect()
    }

    pub fn values(&self) -> Vec<&V> {
        self.table.values().collect()
    }
}

impl<K, V> HashMap<K, V> {
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.table.iter()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for HashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for HashMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.table.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_replaces() {
        let mut map = HashMap::new();
        assert_eq!(map.put("a", 1), None);
        assert_eq!(map.put("a", 2), Some(1));
        assert_eq!(map.get(&"a"), Some(&2));
        assert_eq!(map.len(), 1);
        assert_eq!(map.remove(&"a"), Some(2));
        assert!(map.is_empty());
    }
}
