//! FIFO queue used for breadth-first traversal.

use std::collections::VecDeque;

/// First-in, first-out queue.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item at the back.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove the item at the front, or `None` once exhausted.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns true if there is nothing left to dequeue.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items waiting to be dequeued.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
