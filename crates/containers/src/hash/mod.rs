//! Hash-backed map, set and bidirectional map.
//!
//! None of these lock internally; wrap one in [`Synced`](crate::Synced)
//! to share it between threads.

pub mod hash_bidimap;
pub mod hash_map;
pub mod hash_set;

pub use hash_bidimap::HashBidiMap;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
