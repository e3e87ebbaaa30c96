//! Bounded array ring and circular linked ring.

pub mod linked_ring;
pub mod ring_buffer;

pub use linked_ring::LinkedRing;
pub use ring_buffer::RingBuffer;
