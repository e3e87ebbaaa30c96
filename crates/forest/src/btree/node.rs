/// B-tree node. Leaves have no children; internal nodes have exactly
/// `entries.len() + 1` of them.
#[derive(Clone, Debug)]
pub struct BNode<K, V> {
    pub entries: Vec<(K, V)>,
    pub children: Vec<u32>,
    pub p: Option<u32>,
}

impl<K, V> BNode<K, V> {
    pub fn leaf(entries: Vec<(K, V)>, p: Option<u32>) -> Self {
        Self {
            entries,
            children: Vec::new(),
            p,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Binary search over the node's keys: `Ok(i)` on a hit, `Err(i)` with
    /// the insertion index (also the child to descend into) on a miss.
    pub fn search<C>(&self, key: &K, comparator: &C) -> Result<usize, usize>
    where
        C: Fn(&K, &K) -> i32,
    {
        let (mut lo, mut hi) = (0, self.entries.len());
        while lo < hi {
            let mid = (lo + hi) / 2;
            let cmp = comparator(key, &self.entries[mid].0);
            if cmp == 0 {
                return Ok(mid);
            }
            if cmp < 0 {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        Err(lo)
    }

    /// Position of `child` in this node's child list.
    pub fn child_index(&self, child: u32) -> usize {
        self.children
            .iter()
            .position(|&c| c == child)
            .expect("child is linked from its parent")
    }
}
