//! General-purpose containers that sit next to the ordered indexes of
//! `grove-forest`: lists, a stack, queues, a binary heap, rings and hash
//! collections.
//!
//! Linked structures keep their nodes in a [`slab::Slab`] and link them by
//! `u32` handle. Nothing here locks internally; [`Synced`] adds a
//! reader-writer lock around any of them.

pub mod hash;
pub mod heap;
mod json;
pub mod list;
pub mod queue;
pub mod ring;
pub mod stack;
pub mod synced;

pub use hash::{HashBidiMap, HashMap, HashSet};
pub use heap::{heap_with_comparator, BinaryHeap};
pub use list::{ArrayList, DoublyLinkedList, SinglyLinkedList};
pub use queue::{ArrayQueue, CircularQueue, Deque, PriorityQueue};
pub use ring::{LinkedRing, RingBuffer};
pub use stack::ArrayStack;
pub use synced::Synced;
