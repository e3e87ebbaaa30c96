use crate::types::impl_kv_node;

/// AVL tree node.
#[derive(Clone, Debug)]
pub struct AvlNode<K, V> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    /// Cached subtree height: leaves are 0, absent children count as -1.
    pub h: i32,
}

impl<K, V> AvlNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            l: None,
            r: None,
            k,
            v,
            h: 0,
        }
    }
}

impl_kv_node!(AvlNode);
