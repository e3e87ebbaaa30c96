//! FIFO, bounded, double-ended and priority queues.

pub mod array_queue;
pub mod circular_queue;
pub mod deque;
pub mod priority_queue;

pub use array_queue::ArrayQueue;
pub use circular_queue::CircularQueue;
pub use deque::Deque;
pub use priority_queue::PriorityQueue;
