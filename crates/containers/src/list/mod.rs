//! Sequences: array-backed and linked lists.

pub mod array_list;
pub mod doubly_linked;
pub mod singly_linked;

pub use array_list::ArrayList;
pub use doubly_linked::DoublyLinkedList;
pub use singly_linked::SinglyLinkedList;
