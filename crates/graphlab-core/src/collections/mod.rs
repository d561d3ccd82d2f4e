//! Bookkeeping collections used by the graph and its traversals
//!
//! - `Queue`: unbounded FIFO for breadth-first traversal
//! - `Stack`: unbounded LIFO for depth-first traversal
//! - `IdIndex`: string id <-> sequential index mapping

pub mod id_index;
pub mod queue;
pub mod stack;

pub use id_index::IdIndex;
pub use queue::Queue;
pub use stack::Stack;
