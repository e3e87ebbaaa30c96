use grove_util::comparator::partial;

use crate::map::impl_ordered_map;
use crate::red_black::{Iter, RbTree};

/// Ordered map backed by a red-black tree.
pub struct TreeMap<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    tree: RbTree<K, V, C>,
}

impl<K, V> TreeMap<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(partial::<K>)
    }
}

impl<K, V> Default for TreeMap<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for TreeMap<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<K, V, C> Extend<(K, V)> for TreeMap<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<K, V, C> TreeMap<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RbTree::with_comparator(comparator),
        }
    }

    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.tree.put(key, value)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        self.tree.min()
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        self.tree.max()
    }

    /// Entry with the largest key `<= key`.
    pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.floor(key).map(|i| self.tree.entry(i))
    }

    /// Entry with the smallest key `>= key`.
    pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.ceiling(key).map(|i| self.tree.entry(i))
    }

    pub fn iter(&self) -> Iter<'_, K, V, C> {
        self.tree.iter()
    }

    pub fn range<F: FnMut(&K, &V) -> bool>(&self, f: F) {
        self.tree.range(f);
    }

    pub fn keys(&self) -> Vec<&K> {
        self.tree.keys()
    }

    pub fn values(&self) -> Vec<&V> {
        self.tree.values()
    }

    /// Backing tree.
    pub fn tree(&self) -> &RbTree<K, V, C> {
        &self.tree
    }
}

impl_ordered_map!(TreeMap);
