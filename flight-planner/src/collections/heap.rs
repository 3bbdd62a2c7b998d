//! Binary min-heap ordered by a caller-supplied comparator.

use std::fmt;

/// Error returned when extracting from an empty [`PriorityQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("extract from an empty heap")]
pub struct EmptyHeap;

/// A priority queue backed by a binary heap.
///
/// Ordering comes entirely from `precedes(a, b)`, which must return true
/// when `a` should be extracted before `b`. It must be a strict preorder:
/// irreflexive and transitive. Multi-key orderings are written out by the
/// caller; nothing relies on the element type implementing `Ord`.
///
/// There is no decrease-key. Callers that need it insert a fresh entry and
/// skip stale ones after extraction.
///
/// # Examples
///
/// ```
/// use flight_planner::collections::PriorityQueue;
///
/// let mut heap = PriorityQueue::new(|a: &(u64, usize), b: &(u64, usize)| a.0 < b.0);
/// heap.insert((30, 0));
/// heap.insert((10, 1));
/// heap.insert((20, 2));
///
/// assert_eq!(heap.extract_min(), Ok((10, 1)));
/// assert_eq!(heap.extract_min(), Ok((20, 2)));
/// assert_eq!(heap.extract_min(), Ok((30, 0)));
/// assert!(heap.extract_min().is_err());
/// ```
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    heap: Vec<T>,
    precedes: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty queue ordered by `precedes`.
    pub fn new(precedes: F) -> Self {
        Self {
            heap: Vec::new(),
            precedes,
        }
    }

    /// Create a queue pre-filled with `items`, inserted one at a time.
    pub fn from_iter_with<I>(precedes: F, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::new(precedes);
        for item in items {
            queue.insert(item);
        }
        queue
    }

    /// Number of stored elements, including stale entries the caller has
    /// not yet skipped.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert a value.
    pub fn insert(&mut self, value: T) {
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the minimum element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyHeap`] if the queue is empty.
    pub fn extract_min(&mut self) -> Result<T, EmptyHeap> {
        match self.heap.len() {
            0 => Err(EmptyHeap),
            1 => self.heap.pop().ok_or(EmptyHeap),
            _ => {
                let top = self.heap.swap_remove(0);
                self.sift_down(0);
                Ok(top)
            }
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !(self.precedes)(&self.heap[index], &self.heap[parent]) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && (self.precedes)(&self.heap[left], &self.heap[smallest]) {
                smallest = left;
            }
            if right < len && (self.precedes)(&self.heap[right], &self.heap[smallest]) {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn less(a: &u32, b: &u32) -> bool {
        a < b
    }

    fn drain<T, F: Fn(&T, &T) -> bool>(mut heap: PriorityQueue<T, F>) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(item) = heap.extract_min() {
            out.push(item);
        }
        out
    }

    #[test]
    fn extract_from_empty_fails() {
        let mut heap: PriorityQueue<u32, _> = PriorityQueue::new(less);
        assert_eq!(heap.extract_min(), Err(EmptyHeap));
        assert_eq!(EmptyHeap.to_string(), "extract from an empty heap");
    }

    #[test]
    fn single_element() {
        let mut heap: PriorityQueue<u32, _> = PriorityQueue::new(less);
        heap.insert(7);

        assert_eq!(heap.len(), 1);
        assert_eq!(heap.extract_min(), Ok(7));
        assert!(heap.is_empty());
    }

    #[test]
    fn extracts_in_comparator_order() {
        let heap: PriorityQueue<u32, _> = PriorityQueue::from_iter_with(less, [5, 3, 9, 1, 4, 1, 8]);
        assert_eq!(heap.len(), 7);
        assert_eq!(drain(heap), vec![1, 1, 3, 4, 5, 8, 9]);
    }

    #[test]
    fn reversed_comparator_gives_max_heap() {
        let heap = PriorityQueue::from_iter_with(|a: &u32, b: &u32| a > b, [2, 7, 1, 9]);
        assert_eq!(drain(heap), vec![9, 7, 2, 1]);
    }

    #[test]
    fn lexicographic_pair_comparator() {
        let precedes = |a: &(usize, u64), b: &(usize, u64)| {
            a.0 < b.0 || (a.0 == b.0 && a.1 < b.1)
        };
        let heap = PriorityQueue::from_iter_with(
            precedes,
            [(2, 5), (1, 50), (2, 1), (1, 10), (3, 0)],
        );

        assert_eq!(drain(heap), vec![(1, 10), (1, 50), (2, 1), (2, 5), (3, 0)]);
    }

    #[test]
    fn interleaved_insert_and_extract() {
        let mut heap: PriorityQueue<u32, _> = PriorityQueue::new(less);
        heap.insert(10);
        heap.insert(4);
        assert_eq!(heap.extract_min(), Ok(4));

        heap.insert(2);
        heap.insert(12);
        assert_eq!(heap.extract_min(), Ok(2));
        assert_eq!(heap.extract_min(), Ok(10));
        assert_eq!(heap.extract_min(), Ok(12));
        assert!(heap.is_empty());
    }
}
