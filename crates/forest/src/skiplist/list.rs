use std::collections::HashMap;

use grove_util::comparator::partial;
use grove_util::random::LevelRng;
use tracing::trace;

use crate::map::impl_ordered_map;
use crate::types::Arena;

use super::node::SkipNode;

/// Level cap; safe for up to ~2^64 elements at p = 0.25.
pub const MAX_LEVEL: usize = 32;

/// `P * 2^32` with `P = 0.25`.
const P_THRESHOLD: u32 = u32::MAX / 4;

/// Predecessor at each level; `None` is the sentinel.
type Update = [Option<u32>; MAX_LEVEL];

/// Probabilistic ordered index with O(log n) rank queries.
///
/// Ranks are 1-based. Key ranges are half-open `[k1, k2)`, rank ranges are
/// half-open `[r1, r2)`.
pub struct SkipList<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Arena<SkipNode<K, V>>,
    head: [Option<u32>; MAX_LEVEL],
    head_spans: [usize; MAX_LEVEL],
    tail: Option<u32>,
    level: usize,
    len: usize,
    rng: LevelRng,
    comparator: C,
}

impl<K, V> SkipList<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(partial::<K>)
    }

    /// Reproducible level choice.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(partial::<K>, LevelRng::from_u64(seed))
    }
}

impl<K, V> Default for SkipList<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for SkipList<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<K, V, C> Extend<(K, V)> for SkipList<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V, C> SkipList<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_rng(comparator, LevelRng::default())
    }

    pub fn with_rng(comparator: C, rng: LevelRng) -> Self {
        Self {
            arena: Arena::new(),
            head: [None; MAX_LEVEL],
            head_spans: [0; MAX_LEVEL],
            tail: None,
            level: 1,
            len: 0,
            rng,
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Current highest occupied level (`L_max`), at least 1.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn forward(&self, x: Option<u32>, i: usize) -> Option<u32> {
        match x {
            None => self.head[i],
            Some(n) => self.arena[n as usize].forwards[i],
        }
    }

    #[inline]
    fn span(&self, x: Option<u32>, i: usize) -> usize {
        match x {
            None => self.head_spans[i],
            Some(n) => self.arena[n as usize].spans[i],
        }
    }

    #[inline]
    fn set_forward(&mut self, x: Option<u32>, i: usize, to: Option<u32>) {
        match x {
            None => self.head[i] = to,
            Some(n) => self.arena[n as usize].forwards[i] = to,
        }
    }

    #[inline]
    fn set_span(&mut self, x: Option<u32>, i: usize, span: usize) {
        match x {
            None => self.head_spans[i] = span,
            Some(n) => self.arena[n as usize].spans[i] = span,
        }
    }

    #[inline]
    fn key_at(&self, n: u32) -> &K {
        &self.arena[n as usize].k
    }

    #[inline]
    fn entry(&self, n: u32) -> (&K, &V) {
        let node = &self.arena[n as usize];
        (&node.k, &node.v)
    }

    /// Last node at each level whose key is strictly below `key`.
    fn predecessors(&self, key: &K) -> Update {
        let mut update = [None; MAX_LEVEL];
        let mut x = None;
        for i in (0..self.level).rev() {
            while let Some(nx) = self.forward(x, i) {
                if (self.comparator)(self.key_at(nx), key) >= 0 {
                    break;
                }
                x = Some(nx);
            }
            update[i] = x;
        }
        update
    }

    /// Inserts `key`, or overwrites the value of an equal key in place.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let mut update: Update = [None; MAX_LEVEL];
        let mut rank = [0usize; MAX_LEVEL];
        let mut x = None;

        for i in (0..self.level).rev() {
            rank[i] = if i + 1 == self.level { 0 } else { rank[i + 1] };
            while let Some(nx) = self.forward(x, i) {
                let cmp = (self.comparator)(self.key_at(nx), &key);
                if cmp == 0 {
                    let node = &mut self.arena[nx as usize];
                    return Some(std::mem::replace(&mut node.v, value));
                }
                if cmp > 0 {
                    break;
                }
                rank[i] += self.span(x, i);
                x = Some(nx);
            }
            update[i] = x;
        }

        let level = self.rng.geometric(P_THRESHOLD, MAX_LEVEL);
        if level > self.level {
            for i in self.level..level {
                update[i] = None;
                rank[i] = 0;
                self.head_spans[i] = self.len;
            }
            trace!(from = self.level, to = level, len = self.len, "skip list level grew");
            self.level = level;
        }

        let n = self.arena.insert(SkipNode::new(key, value, level)) as u32;
        for i in 0..level {
            let forward = self.forward(update[i], i);
            let crossed = rank[0] - rank[i];
            let span = self.span(update[i], i);
            let node = &mut self.arena[n as usize];
            node.forwards[i] = forward;
            node.spans[i] = span - crossed;
            self.set_forward(update[i], i, Some(n));
            self.set_span(update[i], i, crossed + 1);
        }
        for i in level..self.level {
            let span = self.span(update[i], i);
            self.set_span(update[i], i, span + 1);
        }

        self.arena[n as usize].backward = update[0];
        match self.arena[n as usize].forwards[0] {
            Some(next) => self.arena[next as usize].backward = Some(n),
            None => self.tail = Some(n),
        }
        self.len += 1;
        None
    }

    /// Unlinks `n` given its predecessors and frees its slot.
    fn unlink(&mut self, n: u32, update: &Update) -> (K, V) {
        for (i, &pred) in update.iter().enumerate().take(self.level) {
            let span = self.span(pred, i);
            if self.forward(pred, i) == Some(n) {
                let node = &self.arena[n as usize];
                let (forward, crossed) = (node.forwards[i], node.spans[i]);
                self.set_span(pred, i, span + crossed - 1);
                self.set_forward(pred, i, forward);
            } else {
                self.set_span(pred, i, span - 1);
            }
        }

        let (next, backward) = {
            let node = &self.arena[n as usize];
            (node.forwards[0], node.backward)
        };
        match next {
            Some(next) => self.arena[next as usize].backward = backward,
            None => self.tail = backward,
        }

        while self.level > 1 && self.head[self.level - 1].is_none() {
            self.head_spans[self.level - 1] = 0;
            self.level -= 1;
        }
        self.len -= 1;

        let node = self.arena.remove(n as usize);
        (node.k, node.v)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let update = self.predecessors(key);
        let n = self.forward(update[0], 0)?;
        if (self.comparator)(self.key_at(n), key) != 0 {
            return None;
        }
        Some(self.unlink(n, &update).1)
    }

    fn search(&self, key: &K) -> Option<u32> {
        let update = self.predecessors(key);
        self.forward(update[0], 0)
            .filter(|&n| (self.comparator)(self.key_at(n), key) == 0)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.search(key).map(|n| &self.arena[n as usize].v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let n = self.search(key)?;
        Some(&mut self.arena[n as usize].v)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Value and 1-based rank of `key`.
    pub fn get_with_rank(&self, key: &K) -> Option<(&V, usize)> {
        let mut rank = 0;
        let mut x = None;
        for i in (0..self.level).rev() {
            while let Some(nx) = self.forward(x, i) {
                if (self.comparator)(self.key_at(nx), key) > 0 {
                    break;
                }
                rank += self.span(x, i);
                x = Some(nx);
            }
            if let Some(n) = x {
                if (self.comparator)(self.key_at(n), key) == 0 {
                    return Some((&self.arena[n as usize].v, rank));
                }
            }
        }
        None
    }

    fn node_by_rank(&self, rank: usize) -> Option<u32> {
        if rank == 0 || rank > self.len {
            return None;
        }
        let mut traversed = 0;
        let mut x = None;
        for i in (0..self.level).rev() {
            while let Some(nx) = self.forward(x, i) {
                let span = self.span(x, i);
                if traversed + span > rank {
                    break;
                }
                traversed += span;
                x = Some(nx);
            }
            if traversed == rank {
                return x;
            }
        }
        None
    }

    /// Entry at 1-based `rank`.
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.node_by_rank(rank).map(|n| self.entry(n))
    }

    /// Entries with keys in `[from, to)`.
    pub fn get_range(&self, from: &K, to: &K) -> Vec<(&K, &V)> {
        let mut out = Vec::new();
        let mut x = self.forward(self.predecessors(from)[0], 0);
        while let Some(n) = x {
            if (self.comparator)(self.key_at(n), to) >= 0 {
                break;
            }
            out.push(self.entry(n));
            x = self.arena[n as usize].forwards[0];
        }
        out
    }

    /// Entries with ranks in `[from, to)`.
    pub fn get_range_by_rank(&self, from: usize, to: usize) -> Vec<(&K, &V)> {
        let from = from.max(1);
        let to = to.min(self.len + 1);
        let mut out = Vec::with_capacity(to.saturating_sub(from));
        let mut x = self.node_by_rank(from);
        for _ in from..to {
            let Some(n) = x else {
                break;
            };
            out.push(self.entry(n));
            x = self.arena[n as usize].forwards[0];
        }
        out
    }

    /// Removes and returns every entry with a key in `[from, to)`.
    pub fn remove_range(&mut self, from: &K, to: &K) -> Vec<(K, V)> {
        let update = self.predecessors(from);
        let mut removed = Vec::new();
        let mut x = self.forward(update[0], 0);
        while let Some(n) = x {
            if (self.comparator)(self.key_at(n), to) >= 0 {
                break;
            }
            x = self.arena[n as usize].forwards[0];
            removed.push(self.unlink(n, &update));
        }
        removed
    }

    /// Removes and returns every entry with a rank in `[from, to)`.
    pub fn remove_range_by_rank(&mut self, from: usize, to: usize) -> Vec<(K, V)> {
        let from = from.max(1);
        let mut update: Update = [None; MAX_LEVEL];
        let mut traversed = 0;
        let mut x = None;
        for i in (0..self.level).rev() {
            while let Some(nx) = self.forward(x, i) {
                let span = self.span(x, i);
                if traversed + span >= from {
                    break;
                }
                traversed += span;
                x = Some(nx);
            }
            update[i] = x;
        }

        let mut removed = Vec::new();
        let mut rank = traversed + 1;
        let mut x = self.forward(update[0], 0);
        while let Some(n) = x {
            if rank >= to {
                break;
            }
            x = self.arena[n as usize].forwards[0];
            removed.push(self.unlink(n, &update));
            rank += 1;
        }
        removed
    }

    /// Smallest entry with a key in `[from, to)`.
    pub fn min_in_range(&self, from: &K, to: &K) -> Option<(&K, &V)> {
        let n = self.forward(self.predecessors(from)[0], 0)?;
        ((self.comparator)(self.key_at(n), to) < 0).then(|| self.entry(n))
    }

    /// Largest entry with a key in `[from, to)`.
    pub fn max_in_range(&self, from: &K, to: &K) -> Option<(&K, &V)> {
        let n = self.predecessors(to)[0]?;
        ((self.comparator)(self.key_at(n), from) >= 0).then(|| self.entry(n))
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        self.head[0].map(|n| self.entry(n))
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        self.tail.map(|n| self.entry(n))
    }

    pub fn pop_min(&mut self) -> Option<(K, V)> {
        let n = self.head[0]?;
        // The first node is preceded by the sentinel on every level.
        Some(self.unlink(n, &[None; MAX_LEVEL]))
    }

    pub fn pop_max(&mut self) -> Option<(K, V)> {
        let n = self.tail?;
        let update = self.predecessors(self.key_at(n));
        Some(self.unlink(n, &update))
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = [None; MAX_LEVEL];
        self.head_spans = [0; MAX_LEVEL];
        self.tail = None;
        self.level = 1;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: &self.arena,
            front: self.head[0],
            back: self.tail,
            remaining: self.len,
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

    pub fn assert_valid(&self) -> Result<(), String> {
        if self.level == 0 || self.level > MAX_LEVEL {
            return Err(format!("Level {} out of range", self.level));
        }
        if self.head[self.level..].iter().any(Option::is_some) {
            return Err("Sentinel links above the current level".to_string());
        }
        if self.level > 1 && self.head[self.level - 1].is_none() {
            return Err(format!("Top level {} is empty", self.level));
        }

        // Base level: order, back links, ranks.
        let mut ranks = HashMap::with_capacity(self.len);
        let mut prev: Option<u32> = None;
        let mut x = self.head[0];
        while let Some(n) = x {
            let node = &self.arena[n as usize];
            if node.backward != prev {
                return Err(format!("Broken backward link on node {n}"));
            }
            if let Some(p) = prev {
                if (self.comparator)(self.key_at(p), &node.k) >= 0 {
                    return Err("Keys are not strictly increasing".to_string());
                }
            }
            ranks.insert(n, ranks.len() + 1);
            prev = x;
            x = node.forwards[0];
        }
        if self.tail != prev {
            return Err("Tail is not the last base node".to_string());
        }
        if ranks.len() != self.len || self.arena.len() != self.len {
            return Err(format!(
                "Length {} but {} linked and {} allocated",
                self.len,
                ranks.len(),
                self.arena.len()
            ));
        }

        for i in 0..self.level {
            let mut x: Option<u32> = None;
            let mut linked = 0;
            loop {
                let from = x.map_or(0, |n| ranks[&n]);
                let target = self.forward(x, i);
                let expected = target.map_or(self.len, |n| ranks[&n]) - from;
                if self.span(x, i) != expected {
                    return Err(format!(
                        "Span {} at level {i} from rank {from}, expected {expected}",
                        self.span(x, i)
                    ));
                }
                match target {
                    Some(n) => {
                        linked += 1;
                        x = Some(n);
                    }
                    None => break,
                }
            }
            let tall = self.arena.iter().filter(|(_, n)| n.level() > i).count();
            if linked != tall {
                return Err(format!("Level {i} links {linked} of {tall} nodes"));
            }
        }

        let top = self.arena.iter().map(|(_, n)| n.level()).max().unwrap_or(1);
        if top != self.level {
            return Err(format!("Level {} but tallest node has {top}", self.level));
        }
        Ok(())
    }
}

impl_ordered_map!(SkipList);

/// Double-ended iterator over the base level.
pub struct Iter<'a, K, V> {
    arena: &'a Arena<SkipNode<K, V>>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.arena[self.front? as usize];
        self.front = node.forwards[0];
        self.remaining -= 1;
        Some((&node.k, &node.v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.arena[self.back? as usize];
        self.back = node.backward;
        self.remaining -= 1;
        Some((&node.k, &node.v))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_spans_track_length() {
        let mut list = SkipList::<i32, ()>::with_seed(1);
        for k in 0..100 {
            list.put(k, ());
            list.assert_valid().unwrap();
        }
        for k in (0..100).step_by(3) {
            list.remove(&k);
            list.assert_valid().unwrap();
        }
        assert_eq!(list.len(), 66);
    }

    #[test]
    fn pop_both_ends() {
        let mut list: SkipList<i32, i32> = (0..5).map(|k| (k, -k)).collect();
        assert_eq!(list.pop_min(), Some((0, 0)));
        assert_eq!(list.pop_max(), Some((4, -4)));
        list.assert_valid().unwrap();
        assert_eq!(list.keys(), vec![&1, &2, &3]);
        assert_eq!(list.iter().rev().next(), Some((&3, &-3)));
    }

    #[test]
    fn level_collapses_when_emptied() {
        let mut list = SkipList::<i32, ()>::with_seed(9);
        for k in 0..64 {
            list.put(k, ());
        }
        for k in 0..64 {
            list.remove(&k);
        }
        assert_eq!(list.level(), 1);
        assert!(list.is_empty());
        list.assert_valid().unwrap();
    }
}
