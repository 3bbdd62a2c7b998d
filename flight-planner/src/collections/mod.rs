//! Containers driving the route searches.
//!
//! `Queue` backs the breadth-first search; `PriorityQueue` backs the two
//! label-setting searches.

mod heap;
mod queue;

pub use heap::{EmptyHeap, PriorityQueue};
pub use queue::Queue;
