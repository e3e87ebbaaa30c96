use std::collections::VecDeque;
use std::mem;

use grove_util::comparator::partial;
use tracing::trace;

use crate::map::impl_ordered_map;
use crate::types::Arena;

use super::node::BNode;

/// Order used by `new()`, `Default` and deserialization.
pub const DEFAULT_ORDER: usize = 3;

/// Smallest order a tree accepts; lower values are raised to it.
pub const MIN_ORDER: usize = 3;

/// B-tree of order `m`: every node holds at most `m - 1` entries and every
/// non-root node at least `ceil(m / 2) - 1`.
pub struct BTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Arena<BNode<K, V>>,
    root: Option<u32>,
    order: usize,
    len: usize,
    comparator: C,
}

impl<K, V> BTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new(order: usize) -> Self {
        Self::with_comparator(order, partial::<K>)
    }
}

impl<K, V> Default for BTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new(DEFAULT_ORDER)
    }
}

impl<K, V> FromIterator<(K, V)> for BTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C> Extend<(K, V)> for BTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V, C> BTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(order: usize, comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            order: order.max(MIN_ORDER),
            len: 0,
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    fn max_entries(&self) -> usize {
        self.order - 1
    }

    #[inline]
    fn min_entries(&self) -> usize {
        self.order.div_ceil(2) - 1
    }

    /// Inserts `key`, or overwrites the value of an equal key in place.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let Some(mut n) = self.root else {
            let root = self.arena.insert(BNode::leaf(vec![(key, value)], None)) as u32;
            self.root = Some(root);
            self.len = 1;
            return None;
        };

        loop {
            let node = &mut self.arena[n as usize];
            match node.search(&key, &self.comparator) {
                Ok(i) => return Some(mem::replace(&mut node.entries[i].1, value)),
                Err(i) if node.is_leaf() => {
                    node.entries.insert(i, (key, value));
                    break;
                }
                Err(i) => n = node.children[i],
            }
        }

        self.len += 1;
        self.split(n);
        None
    }

    /// Splits `n` while it overflows, cascading into its ancestors.
    fn split(&mut self, mut n: u32) {
        let pivot = (self.order - 1) / 2;
        while self.arena[n as usize].entries.len() > self.max_entries() {
            let node = &mut self.arena[n as usize];
            let right_entries = node.entries.split_off(pivot + 1);
            let mid = node.entries.pop().expect("overfull node has a pivot");
            let right_children = if node.is_leaf() {
                Vec::new()
            } else {
                node.children.split_off(pivot + 1)
            };
            let parent = node.p;

            let right = self.arena.insert(BNode {
                entries: right_entries,
                children: right_children,
                p: parent,
            }) as u32;
            for i in 0..self.arena[right as usize].children.len() {
                let c = self.arena[right as usize].children[i];
                self.arena[c as usize].p = Some(right);
            }

            match parent {
                None => {
                    let root = self.arena.insert(BNode {
                        entries: vec![mid],
                        children: vec![n, right],
                        p: None,
                    }) as u32;
                    self.arena[n as usize].p = Some(root);
                    self.arena[right as usize].p = Some(root);
                    self.root = Some(root);
                    trace!(order = self.order, len = self.len, "b-tree root split");
                    return;
                }
                Some(p) => {
                    let parent = &mut self.arena[p as usize];
                    let idx = parent.child_index(n);
                    parent.entries.insert(idx, mid);
                    parent.children.insert(idx + 1, right);
                    n = p;
                }
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let (n, i) = self.search(key)?;

        let (removed, leaf) = if self.arena[n as usize].is_leaf() {
            (self.arena[n as usize].entries.remove(i), n)
        } else {
            // Trade places with the maximum of the left subtree.
            let mut leaf = self.arena[n as usize].children[i];
            while let Some(&c) = self.arena[leaf as usize].children.last() {
                leaf = c;
            }
            let pred = self.arena[leaf as usize]
                .entries
                .pop()
                .expect("leaf holds at least one entry");
            (mem::replace(&mut self.arena[n as usize].entries[i], pred), leaf)
        };

        self.len -= 1;
        self.rebalance(leaf);
        Some(removed.1)
    }

    /// Restores the minimum fill of `n` and its ancestors after a removal.
    ///
    /// Merged-away nodes are freed before the walk moves to the parent, so no
    /// node is visited after it has been merged.
    fn rebalance(&mut self, mut n: u32) {
        let min = self.min_entries();
        loop {
            let Some(p) = self.arena[n as usize].p else {
                self.collapse_root(n);
                return;
            };
            if self.arena[n as usize].entries.len() >= min {
                return;
            }

            let idx = self.arena[p as usize].child_index(n);
            let left = idx
                .checked_sub(1)
                .map(|i| self.arena[p as usize].children[i]);
            let right = self.arena[p as usize].children.get(idx + 1).copied();

            if let Some(l) = left.filter(|&l| self.arena[l as usize].entries.len() > min) {
                self.rotate_from_left(p, idx, l, n);
                return;
            }
            if let Some(r) = right.filter(|&r| self.arena[r as usize].entries.len() > min) {
                self.rotate_from_right(p, idx, r, n);
                return;
            }

            match (left, right) {
                (Some(l), _) => self.merge(p, idx - 1, l, n),
                (None, Some(r)) => self.merge(p, idx, n, r),
                (None, None) => unreachable!("non-root node has a sibling"),
            }
            n = p;
        }
    }

    /// Separator `idx - 1` moves down into `n`, the donor's last entry moves up.
    fn rotate_from_left(&mut self, p: u32, idx: usize, donor: u32, n: u32) {
        let up = self.arena[donor as usize]
            .entries
            .pop()
            .expect("donor holds more than the minimum");
        let down = mem::replace(&mut self.arena[p as usize].entries[idx - 1], up);
        self.arena[n as usize].entries.insert(0, down);
        if let Some(c) = self.arena[donor as usize].children.pop() {
            self.arena[n as usize].children.insert(0, c);
            self.arena[c as usize].p = Some(n);
        }
    }

    /// Separator `idx` moves down into `n`, the donor's first entry moves up.
    fn rotate_from_right(&mut self, p: u32, idx: usize, donor: u32, n: u32) {
        let up = self.arena[donor as usize].entries.remove(0);
        let down = mem::replace(&mut self.arena[p as usize].entries[idx], up);
        self.arena[n as usize].entries.push(down);
        if !self.arena[donor as usize].is_leaf() {
            let c = self.arena[donor as usize].children.remove(0);
            self.arena[n as usize].children.push(c);
            self.arena[c as usize].p = Some(n);
        }
    }

    /// Folds `right` and separator `sep` of `p` into `left`; frees `right`.
    fn merge(&mut self, p: u32, sep: usize, left: u32, right: u32) {
        let down = self.arena[p as usize].entries.remove(sep);
        self.arena[p as usize].children.remove(sep + 1);
        let BNode {
            entries, children, ..
        } = self.arena.remove(right as usize);
        let node = &mut self.arena[left as usize];
        node.entries.push(down);
        node.entries.extend(entries);
        node.children.extend_from_slice(&children);
        for c in children {
            self.arena[c as usize].p = Some(left);
        }
    }

    fn collapse_root(&mut self, root: u32) {
        if !self.arena[root as usize].entries.is_empty() {
            return;
        }
        let node = self.arena.remove(root as usize);
        match node.children.first() {
            Some(&child) => {
                self.arena[child as usize].p = None;
                self.root = Some(child);
                trace!(order = self.order, len = self.len, "b-tree root collapsed");
            }
            None => self.root = None,
        }
    }

    /// Node handle and entry index holding `key`.
    pub fn search(&self, key: &K) -> Option<(u32, usize)> {
        let mut n = self.root?;
        loop {
            let node = &self.arena[n as usize];
            match node.search(key, &self.comparator) {
                Ok(i) => return Some((n, i)),
                Err(_) if node.is_leaf() => return None,
                Err(i) => n = node.children[i],
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let (n, i) = self.search(key)?;
        Some(&self.arena[n as usize].entries[i].1)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let (n, i) = self.search(key)?;
        Some(&mut self.arena[n as usize].entries[i].1)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn node_entries(&self, node: u32) -> &[(K, V)] {
        &self.arena[node as usize].entries
    }

    pub fn node_children(&self, node: u32) -> &[u32] {
        &self.arena[node as usize].children
    }

    pub fn node_parent(&self, node: u32) -> Option<u32> {
        self.arena[node as usize].p
    }

    fn left_most(&self) -> Option<&(K, V)> {
        let mut n = self.root?;
        while let Some(&c) = self.arena[n as usize].children.first() {
            n = c;
        }
        self.arena[n as usize].entries.first()
    }

    fn right_most(&self) -> Option<&(K, V)> {
        let mut n = self.root?;
        while let Some(&c) = self.arena[n as usize].children.last() {
            n = c;
        }
        self.arena[n as usize].entries.last()
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        self.left_most().map(|(k, v)| (k, v))
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        self.right_most().map(|(k, v)| (k, v))
    }

    pub fn left_most_key(&self) -> Option<&K> {
        self.left_most().map(|(k, _)| k)
    }

    pub fn right_most_key(&self) -> Option<&K> {
        self.right_most().map(|(k, _)| k)
    }

    /// Number of levels; 0 when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut curr = self.root;
        while let Some(n) = curr {
            height += 1;
            curr = self.arena[n as usize].children.first().copied();
        }
        height
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.arena, self.root, self.len)
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

    /// Entries node by node, breadth first.
    pub fn level_order(&self) -> (Vec<&K>, Vec<&V>) {
        let mut keys = Vec::with_capacity(self.len);
        let mut values = Vec::with_capacity(self.len);
        let mut queue: VecDeque<u32> = self.root.into_iter().collect();
        while let Some(n) = queue.pop_front() {
            let node = &self.arena[n as usize];
            for (k, v) in &node.entries {
                keys.push(k);
                values.push(v);
            }
            queue.extend(node.children.iter().copied());
        }
        (keys, values)
    }

    pub fn in_order(&self) -> (Vec<&K>, Vec<&V>) {
        self.iter().unzip()
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            return if self.len == 0 && self.arena.is_empty() {
                Ok(())
            } else {
                Err("Empty tree holds entries".to_string())
            };
        };
        if self.arena[root as usize].p.is_some() {
            return Err("Root has parent".to_string());
        }
        if self.arena[root as usize].entries.is_empty() {
            return Err("Root is empty".to_string());
        }

        let mut leaf_depth = None;
        let mut entries = 0;
        let mut nodes = 0;
        self.check(root, 1, None, None, &mut leaf_depth, &mut entries, &mut nodes)?;

        if entries != self.len {
            return Err(format!("Length {} but {entries} entries reachable", self.len));
        }
        if nodes != self.arena.len() {
            return Err("Arena holds unreachable nodes".to_string());
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn check(
        &self,
        n: u32,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
        leaf_depth: &mut Option<usize>,
        entries: &mut usize,
        nodes: &mut usize,
    ) -> Result<(), String> {
        let node = &self.arena[n as usize];
        let e = node.entries.len();
        *entries += e;
        *nodes += 1;

        if e > self.max_entries() {
            return Err(format!("Node {n} holds {e} entries, more than {}", self.max_entries()));
        }
        if Some(n) != self.root && e < self.min_entries() {
            return Err(format!("Node {n} holds {e} entries, fewer than {}", self.min_entries()));
        }
        for pair in node.entries.windows(2) {
            if (self.comparator)(&pair[0].0, &pair[1].0) >= 0 {
                return Err(format!("Entries of node {n} are not strictly increasing"));
            }
        }
        if let (Some(lower), Some((first, _))) = (lower, node.entries.first()) {
            if (self.comparator)(lower, first) >= 0 {
                return Err(format!("Node {n} has a key below its separator"));
            }
        }
        if let (Some(upper), Some((last, _))) = (upper, node.entries.last()) {
            if (self.comparator)(last, upper) >= 0 {
                return Err(format!("Node {n} has a key above its separator"));
            }
        }

        if node.is_leaf() {
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(d) if d != depth => {
                    return Err(format!("Leaf {n} at depth {depth}, expected {d}"));
                }
                Some(_) => {}
            }
            return Ok(());
        }

        if node.children.len() != e + 1 {
            return Err(format!(
                "Node {n} has {e} entries but {} children",
                node.children.len()
            ));
        }
        for (i, &c) in node.children.iter().enumerate() {
            if self.arena[c as usize].p != Some(n) {
                return Err(format!("Broken parent link on child {c} of node {n}"));
            }
            let lo = if i == 0 { lower } else { Some(&node.entries[i - 1].0) };
            let hi = if i == e { upper } else { Some(&node.entries[i].0) };
            self.check(c, depth + 1, lo, hi, leaf_depth, entries, nodes)?;
        }
        Ok(())
    }
}

impl_ordered_map!(BTree);

/// In-order iterator over a stack of `(node, next entry)` frames.
pub struct Iter<'a, K, V> {
    arena: &'a Arena<BNode<K, V>>,
    stack: Vec<(u32, usize)>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(arena: &'a Arena<BNode<K, V>>, root: Option<u32>, len: usize) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
            remaining: len,
        };
        iter.descend(root);
        iter
    }

    fn descend(&mut self, mut node: Option<u32>) {
        while let Some(n) = node {
            self.stack.push((n, 0));
            node = self.arena[n as usize].children.first().copied();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        loop {
            let (n, i) = self.stack.last_mut()?;
            let node = &arena[*n as usize];
            if *i < node.entries.len() {
                let at = *i;
                *i += 1;
                self.descend(node.children.get(at + 1).copied());
                self.remaining -= 1;
                let (k, v) = &node.entries[at];
                return Some((k, v));
            }
            self.stack.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
