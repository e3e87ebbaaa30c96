use grove_util::comparator::partial;

use crate::map::impl_ordered_map;
use crate::types::{Arena, KvNode, Node};
use crate::util::{
    find, find_or_next_higher, find_or_next_lower, first, in_order, last, level_order,
    post_order, pre_order, InOrder,
};

use super::types::AvlNode;
use super::util::{self, Insertion};

/// Height-balanced binary search tree.
///
/// Nodes live in an arena; [`search`](Self::search), [`floor`](Self::floor)
/// and friends return `u32` handles that stay valid until the next mutation.
pub struct AvlTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Arena<AvlNode<K, V>>,
    root: Option<u32>,
    comparator: C,
}

impl<K, V> AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(partial::<K>)
    }
}

impl<K, V> Default for AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C> Extend<(K, V)> for AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V, C> AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Inserts `key`, or overwrites the value of an equal key in place.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let mut outcome = None;
        let root = util::insert(
            &mut self.arena,
            self.root,
            key,
            value,
            &self.comparator,
            &mut outcome,
        );
        self.root = Some(root);
        match outcome {
            Some(Insertion::Replaced(_, old)) => Some(old),
            _ => None,
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let mut removed = None;
        self.root = util::remove(
            &mut self.arena,
            self.root,
            key,
            &self.comparator,
            &mut removed,
        );
        removed.map(|i| self.arena.remove(i as usize).into_entry().1)
    }

    pub fn search(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.search(key).map(|i| self.value(i))
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = self.search(key)?;
        Some(self.arena[i as usize].value_mut())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Largest node whose key is `<= key`.
    pub fn floor(&self, key: &K) -> Option<u32> {
        find_or_next_lower(&self.arena, self.root, key, &self.comparator)
    }

    /// Smallest node whose key is `>= key`.
    pub fn ceiling(&self, key: &K) -> Option<u32> {
        find_or_next_higher(&self.arena, self.root, key, &self.comparator)
    }

    pub fn first(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        self.first().map(|i| self.entry(i))
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        self.last().map(|i| self.entry(i))
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn left(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].l()
    }

    pub fn right(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].r()
    }

    pub fn key(&self, idx: u32) -> &K {
        self.arena[idx as usize].key()
    }

    pub fn value(&self, idx: u32) -> &V {
        self.arena[idx as usize].value()
    }

    pub fn entry(&self, idx: u32) -> (&K, &V) {
        let n = &self.arena[idx as usize];
        (&n.k, &n.v)
    }

    /// Cached height of the node at `idx` (leaves are 0).
    pub fn node_height(&self, idx: u32) -> i32 {
        self.arena[idx as usize].h
    }

    /// Height of the whole tree; -1 when empty.
    pub fn height(&self) -> i32 {
        util::height(&self.arena, self.root)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        InOrder::new(&self.arena, self.root).map(move |i| self.entry(i))
    }

    /// In-order visit; stops as soon as `f` returns `false`.
    pub fn range<F: FnMut(&K, &V) -> bool>(&self, mut f: F) {
        for (k, v) in self.iter() {
            if !f(k, v) {
                break;
            }
        }
    }

    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(k, _)| k).collect()
    }

    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    pub fn level_order(&self) -> (Vec<&K>, Vec<&V>) {
        self.unzip(level_order(&self.arena, self.root))
    }

    pub fn pre_order(&self) -> (Vec<&K>, Vec<&V>) {
        self.unzip(pre_order(&self.arena, self.root))
    }

    pub fn in_order(&self) -> (Vec<&K>, Vec<&V>) {
        self.unzip(in_order(&self.arena, self.root))
    }

    pub fn post_order(&self) -> (Vec<&K>, Vec<&V>) {
        self.unzip(post_order(&self.arena, self.root))
    }

    fn unzip(&self, handles: Vec<u32>) -> (Vec<&K>, Vec<&V>) {
        handles.into_iter().map(|i| self.entry(i)).unzip()
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_avl_tree(&self.arena, self.root, &self.comparator)
    }
}

impl_ordered_map!(AvlTree);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_heavy_insertion_rotates_left() {
        let mut tree = AvlTree::<i32, ()>::new();
        for k in [3, 4, 5] {
            tree.put(k, ());
        }
        let root = tree.root().unwrap();
        assert_eq!(*tree.key(root), 4);
        assert_eq!(*tree.key(tree.left(root).unwrap()), 3);
        assert_eq!(*tree.key(tree.right(root).unwrap()), 5);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn left_right_case() {
        let mut tree = AvlTree::<i32, ()>::new();
        for k in [5, 3, 4] {
            tree.put(k, ());
        }
        let root = tree.root().unwrap();
        assert_eq!(*tree.key(root), 4);
        assert_eq!(tree.node_height(root), 1);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn slots_are_recycled() {
        let mut tree = AvlTree::<i32, i32>::new();
        for k in 0..10 {
            tree.put(k, k);
        }
        for k in 0..10 {
            assert_eq!(tree.remove(&k), Some(k));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        tree.put(1, 1);
        assert_eq!(tree.len(), 1);
    }
}
