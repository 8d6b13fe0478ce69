use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::Distance;

/// A vertex together with its distance at the time it was queued.
#[derive(Clone, Copy, Debug)]
pub struct QueueEntry<V> {
    pub distance: Distance,
    pub vertex: V,
    sequence: u64,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap. Equal distances pop in the order they were pushed.
impl<V> Ord for QueueEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<V> PartialOrd for QueueEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> PartialEq for QueueEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for QueueEntry<V> {}

/// A priority queue that manages vertices and their distances.
///
/// There is no decrease key operation. A vertex may be queued several times;
/// the consumer skips every entry whose vertex has already been finalized.
pub trait VertexDistanceQueue<V> {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: V, distance: Distance);

    /// Removes and returns the entry with the smallest distance from the
    /// priority queue or none if the queue is empty.
    fn pop(&mut self) -> Option<QueueEntry<V>>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// A priority queue implementation using a Binary Heap.
#[derive(Clone, Debug)]
pub struct VertexDistanceQueueBinaryHeap<V> {
    heap: BinaryHeap<QueueEntry<V>>,
    pushed: u64,
}

impl<V> Default for VertexDistanceQueueBinaryHeap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> VertexDistanceQueueBinaryHeap<V> {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<V> VertexDistanceQueue<V> for VertexDistanceQueueBinaryHeap<V> {
    fn clear(&mut self) {
        self.heap.clear();
        self.pushed = 0;
    }

    fn insert(&mut self, vertex: V, distance: Distance) {
        self.heap.push(QueueEntry {
            distance,
            vertex,
            sequence: self.pushed,
        });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<QueueEntry<V>> {
        self.heap.pop()
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap};

    #[test]
    fn pops_smallest_distance_first() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert(1u64, 1.0);
        queue.insert(2u64, 0.25);
        queue.insert(3u64, 2.0);
        queue.insert(4u64, 0.5);

        let order: Vec<_> = std::iter::from_fn(|| queue.pop())
            .map(|entry| entry.vertex)
            .collect();
        assert_eq!(order, vec![2, 4, 1, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn ties_pop_in_push_order() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        for vertex in [5u64, 3, 9, 1] {
            queue.insert(vertex, 0.5);
        }

        let order: Vec<_> = std::iter::from_fn(|| queue.pop())
            .map(|entry| entry.vertex)
            .collect();
        assert_eq!(order, vec![5, 3, 9, 1]);
    }

    #[test]
    fn keeps_stale_entries() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert(7u64, 2.0);
        queue.insert(7u64, 1.0);
        assert_eq!(queue.len(), 2);

        let entry = queue.pop().unwrap();
        assert_eq!((entry.vertex, entry.distance), (7, 1.0));
        let entry = queue.pop().unwrap();
        assert_eq!((entry.vertex, entry.distance), (7, 2.0));

        queue.insert(1u64, 0.0);
        queue.clear();
        assert!(queue.pop().is_none());
    }
}
