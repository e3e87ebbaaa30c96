//! Skip list with rank spans.
//!
//! The sentinel is not an arena slot: the list owns its forward and span
//! arrays directly and a `None` link means "back to the sentinel".

pub mod list;
pub mod node;

pub use list::{Iter, SkipList, MAX_LEVEL};
pub use node::SkipNode;
