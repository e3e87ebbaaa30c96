use std::fmt;

use grove_util::comparator::partial;

use crate::map::impl_ordered_map;
use crate::types::{Arena, KvNode, Node, ParentNode};
use crate::util::{
    find, find_or_next_higher, find_or_next_lower, first, height, in_order, last, level_order,
    next, post_order, pre_order, prev, size,
};

use super::types::RbNode;
use super::util;

/// Red-black tree.
///
/// Storage engine of [`TreeMap`](crate::TreeMap), [`TreeSet`](crate::TreeSet)
/// and [`TreeBidiMap`](crate::TreeBidiMap). Handles returned by
/// [`search`](Self::search), [`first`](Self::first), [`next`](Self::next)
/// etc. stay attached to their entry until that entry is removed.
pub struct RbTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Arena<RbNode<K, V>>,
    root: Option<u32>,
    comparator: C,
}

impl<K, V> RbTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(partial::<K>)
    }
}

impl<K, V> Default for RbTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for RbTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C> Extend<(K, V)> for RbTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V, C> RbTree<K, V, C>
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
        let Some(root) = self.root else {
            let idx = self.arena.insert(RbNode::new(key, value)) as u32;
            self.root = Some(util::insert(&mut self.arena, None, idx, &self.comparator));
            return None;
        };

        let mut curr = root;
        loop {
            let cmp = (self.comparator)(&key, self.arena[curr as usize].key());
            if cmp == 0 {
                return Some(self.arena[curr as usize].set_value(value));
            }
            let next = if cmp < 0 {
                self.arena[curr as usize].l()
            } else {
                self.arena[curr as usize].r()
            };
            match next {
                Some(next) => curr = next,
                None => {
                    let idx = self.arena.insert(RbNode::new(key, value)) as u32;
                    let root = if cmp < 0 {
                        util::insert_left(&mut self.arena, root, idx, curr)
                    } else {
                        util::insert_right(&mut self.arena, root, idx, curr)
                    };
                    self.root = Some(root);
                    return None;
                }
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.search(key)?;
        Some(self.remove_at(idx).1)
    }

    /// Removes the entry behind a handle.
    pub fn remove_at(&mut self, idx: u32) -> (K, V) {
        let root = self.root.expect("tree holding a handle is not empty");
        self.root = util::remove(&mut self.arena, root, idx);
        self.arena.remove(idx as usize).into_entry()
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

    /// In-order successor of `idx`.
    pub fn next(&self, idx: u32) -> Option<u32> {
        next(&self.arena, idx)
    }

    /// In-order predecessor of `idx`.
    pub fn prev(&self, idx: u32) -> Option<u32> {
        prev(&self.arena, idx)
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

    pub fn parent(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].p()
    }

    pub fn left(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].l()
    }

    pub fn right(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].r()
    }

    pub fn is_black(&self, idx: u32) -> bool {
        self.arena[idx as usize].b
    }

    pub fn key(&self, idx: u32) -> &K {
        self.arena[idx as usize].key()
    }

    pub fn value(&self, idx: u32) -> &V {
        self.arena[idx as usize].value()
    }

    pub fn value_mut(&mut self, idx: u32) -> &mut V {
        self.arena[idx as usize].value_mut()
    }

    pub fn entry(&self, idx: u32) -> (&K, &V) {
        let n = &self.arena[idx as usize];
        (&n.k, &n.v)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node. Parent and child links die with the arena.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: self,
            front: self.first(),
            back: self.last(),
            remaining: self.len(),
        }
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
        util::assert_red_black_tree(&self.arena, self.root, &self.comparator)?;
        if size(&self.arena, self.root) != self.arena.len() {
            return Err("Arena holds unreachable nodes".to_string());
        }
        Ok(())
    }
}

impl<K, V, C> fmt::Debug for RbTree<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&util::print(&self.arena, self.root, ""))
    }
}

impl_ordered_map!(RbTree);

/// Double-ended in-order iterator following parent links.
pub struct Iter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    tree: &'a RbTree<K, V, C>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front?;
        self.remaining -= 1;
        self.front = self.tree.next(i);
        Some(self.tree.entry(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, C> DoubleEndedIterator for Iter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.back?;
        self.remaining -= 1;
        self.back = self.tree.prev(i);
        Some(self.tree.entry(i))
    }
}

impl<'a, K, V, C> ExactSizeIterator for Iter<'a, K, V, C> where C: Fn(&K, &K) -> i32 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_survive_two_child_removal() {
        let mut tree = RbTree::<i32, &str>::new();
        for (k, v) in [(2, "b"), (1, "a"), (3, "c"), (4, "d")] {
            tree.put(k, v);
        }
        let h3 = tree.search(&3).unwrap();
        assert_eq!(tree.remove(&2), Some("b"));
        assert_eq!(*tree.key(h3), 3);
        assert_eq!(*tree.value(h3), "c");
        tree.assert_valid().unwrap();
    }

    #[test]
    fn iter_from_both_ends() {
        let tree: RbTree<i32, i32> = (0..5).map(|i| (i, i * 10)).collect();
        let rev: Vec<i32> = tree.iter().rev().map(|(k, _)| *k).collect();
        assert_eq!(rev, vec![4, 3, 2, 1, 0]);
        let mut it = tree.iter();
        assert_eq!(it.next(), Some((&0, &0)));
        assert_eq!(it.next_back(), Some((&4, &40)));
        assert_eq!(it.len(), 3);
    }

    #[test]
    fn debug_output_names_colors() {
        let tree: RbTree<i32, ()> = [(1, ()), (2, ())].into_iter().collect();
        let out = format!("{tree:?}");
        assert!(out.starts_with("Node["));
        assert!(out.contains("black"));
        assert!(out.contains("red"));
    }
}
