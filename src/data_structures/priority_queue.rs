use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(priority, vertex)` entries for shortest path search.
///
/// There is no decrease-key: a vertex whose priority improves is pushed again
/// and the older entry stays in the heap. Callers compare a popped priority
/// against their own distance table to recognise such stale entries.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
    /// Total number of entries ever pushed
    pushes: usize,
    /// Largest number of entries held at once
    peak_len: usize,
}

impl<V, P> Frontier<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            pushes: 0,
            peak_len: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
        self.pushes += 1;
        self.peak_len = self.peak_len.max(self.heap.len());
    }

    /// Removes the entry with the smallest priority; ties pop the smaller vertex first
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap.peek().map(|Reverse((priority, vertex))| (vertex, *priority))
    }

    /// Total number of pushes since creation
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Largest size the frontier reached
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
