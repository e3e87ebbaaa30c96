/// Skip-list element. `forwards[i]` is `None` when level `i` links back to
/// the sentinel; `spans[i]` counts the base positions that link crosses.
#[derive(Clone, Debug)]
pub struct SkipNode<K, V> {
    pub k: K,
    pub v: V,
    pub forwards: Vec<Option<u32>>,
    pub spans: Vec<usize>,
    pub backward: Option<u32>,
}

impl<K, V> SkipNode<K, V> {
    pub fn new(k: K, v: V, level: usize) -> Self {
        Self {
            k,
            v,
            forwards: vec![None; level],
            spans: vec![0; level],
            backward: None,
        }
    }

    #[inline]
    pub fn level(&self) -> usize {
        self.forwards.len()
    }
}
