use crate::types::{impl_kv_node, ParentNode};

/// Red-black tree node.
#[derive(Clone, Debug)]
pub struct RbNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    /// Node color: `true` = black, `false` = red.
    pub b: bool,
}

impl<K, V> RbNode<K, V> {
    /// New nodes start red.
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            b: false,
        }
    }
}

impl_kv_node!(RbNode);

impl<K, V> ParentNode for RbNode<K, V> {
    #[inline]
    fn p(&self) -> Option<u32> {
        self.p
    }

    #[inline]
    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }
}
