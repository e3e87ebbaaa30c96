//! Arena-based ordered indexes.
//!
//! Every structure keeps its nodes in a [`slab::Slab`] arena owned by the
//! container and links them with `Option<u32>` handles, so parent and
//! sentinel back-references never own anything.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`ParentNode`] and [`KvNode`] traits |
//! [`util`] | `first`, `next`, `find`, traversals and `swap` for binary trees |
//! [`map`] | [`OrderedMap`], the surface shared by every index |
//! [`avl`] | [`AvlTree`] |
//! [`red_black`] | [`RbTree`] |
//! [`btree`] | [`BTree`] |
//! [`skiplist`] | [`SkipList`] with rank spans |
//! [`tree_map`], [`tree_set`], [`tree_bidimap`] | red-black backed collections |

pub mod avl;
pub mod btree;
mod json;
pub mod map;
pub mod red_black;
pub mod skiplist;
pub mod tree_bidimap;
pub mod tree_map;
pub mod tree_set;
pub mod types;
pub mod util;

pub use avl::AvlTree;
pub use btree::BTree;
pub use map::OrderedMap;
pub use red_black::RbTree;
pub use skiplist::SkipList;
pub use tree_bidimap::TreeBidiMap;
pub use tree_map::TreeMap;
pub use tree_set::TreeSet;
pub use types::{Arena, KvNode, Node, ParentNode};
