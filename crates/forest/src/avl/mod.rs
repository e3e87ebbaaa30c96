//! AVL tree: height-balanced binary search tree with cached subtree heights.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::AvlTree;
pub use types::AvlNode;
pub use util::assert_avl_tree;
