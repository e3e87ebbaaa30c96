//! Node trait definitions.
//!
//! Every tree keeps its nodes in a [`slab::Slab`] arena and links them with
//! `Option<u32>` handles instead of pointers. All tree-manipulation functions
//! take the arena and work with handles.

use slab::Slab;

/// Arena holding the nodes of one container.
pub type Arena<N> = Slab<N>;

/// Binary-tree links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Back reference to the parent. Never owning: the parent owns the child
/// through its `l`/`r` handle, the child only names its parent.
pub trait ParentNode: Node {
    fn p(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
}

/// Key/value node interface used by map-like structures.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn set_value(&mut self, value: V) -> V;
    fn into_entry(self) -> (K, V);
}

/// Implements [`Node`] and [`KvNode`] for a struct with `l`, `r`, `k`, `v`
/// fields.
macro_rules! impl_kv_node {
    ($node:ident) => {
        impl<K, V> $crate::types::Node for $node<K, V> {
            #[inline]
            fn l(&self) -> Option<u32> {
                self.l
            }

            #[inline]
            fn r(&self) -> Option<u32> {
                self.r
            }

            #[inline]
            fn set_l(&mut self, v: Option<u32>) {
                self.l = v;
            }

            #[inline]
            fn set_r(&mut self, v: Option<u32>) {
                self.r = v;
            }
        }

        impl<K, V> $crate::types::KvNode<K, V> for $node<K, V> {
            #[inline]
            fn key(&self) -> &K {
                &self.k
            }

            #[inline]
            fn value(&self) -> &V {
                &self.v
            }

            #[inline]
            fn value_mut(&mut self) -> &mut V {
                &mut self.v
            }

            #[inline]
            fn set_value(&mut self, value: V) -> V {
                std::mem::replace(&mut self.v, value)
            }

            fn into_entry(self) -> (K, V) {
                (self.k, self.v)
            }
        }
    };
}

pub(crate) use impl_kv_node;
