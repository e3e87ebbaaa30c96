//! grove-util - helpers shared by the grove collection crates.
//!
//! - [`comparator`]: the `Fn(&T, &T) -> i32` ordering contract and its
//!   `less` cousin.
//! - [`random`]: the per-instance PRNG used for probabilistic structures.

pub mod comparator;
pub mod random;

// Re-exports for convenience
pub use comparator::{
    by_key, compare_from_less, from_ordering, less_from, natural, partial, reverse, to_ordering,
    Comparator,
};
pub use random::LevelRng;
