//! Ordered containers built on the [`Item`](crate::types::Item) contract.

pub mod linked_list;
pub mod queue;
pub mod stack;

pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
