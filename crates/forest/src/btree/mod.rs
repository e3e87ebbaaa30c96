//! B-tree of configurable order with split, borrow and merge balancing.

pub mod node;
pub mod tree;

pub use node::BNode;
pub use tree::{BTree, Iter, DEFAULT_ORDER};
