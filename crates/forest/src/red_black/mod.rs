//! Red-black tree with parent back-links.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::{Iter, RbTree};
pub use types::RbNode;
pub use util::assert_red_black_tree;
