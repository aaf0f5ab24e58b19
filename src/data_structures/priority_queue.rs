use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// Capacity used by [`IndexedBinaryHeap::new`]
pub const DEFAULT_CAPACITY: usize = 1024;

/// Smallest capacity a heap is ever created with
pub const MINIMUM_CAPACITY: usize = 16;

/// A heap slot: an element together with its current priority
#[derive(Debug, Clone, Copy)]
struct HeapEntry<E, P> {
    element: E,
    priority: P,
}

/// A binary min-heap with decrease-key, for use as the open set of Dijkstra's algorithm
///
/// Besides the dense array of entries, the heap keeps an index from each element to
/// its current array position. The index is updated on every move, which gives O(1)
/// membership tests and lets [`decrease_priority`](Self::decrease_priority) locate the
/// entry to sift up in O(log n).
///
/// Each element is present at most once. Priorities of present elements only ever go
/// down: [`add`](Self::add) ignores elements that are already queued.
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<E, P>
where
    E: Copy + Eq + Hash + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Heap-ordered entries; `entries[i]` has children `2i + 1` and `2i + 2`
    entries: Vec<HeapEntry<E, P>>,

    /// Position of each queued element in `entries`
    positions: HashMap<E, usize>,
}

impl<E, P> IndexedBinaryHeap<E, P>
where
    E: Copy + Eq + Hash + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty heap with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new empty heap able to hold `capacity` elements before growing
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MINIMUM_CAPACITY);
        IndexedBinaryHeap {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns true if the element is currently queued
    pub fn contains(&self, element: &E) -> bool {
        self.positions.contains_key(element)
    }

    /// Returns the current priority of a queued element
    pub fn priority(&self, element: &E) -> Option<P> {
        self.positions
            .get(element)
            .map(|&position| self.entries[position].priority)
    }

    /// Inserts an element with the given priority
    ///
    /// Does nothing and returns `false` if the element is already queued; its priority
    /// is left untouched in that case.
    pub fn add(&mut self, element: E, priority: P) -> bool {
        if self.positions.contains_key(&element) {
            return false;
        }

        if self.entries.len() == self.entries.capacity() {
            self.grow();
        }

        let position = self.entries.len();
        self.entries.push(HeapEntry { element, priority });
        self.positions.insert(element, position);
        self.sift_up(position);
        true
    }

    /// Lowers the priority of a queued element
    ///
    /// Returns `false` without changing anything if the element is absent or if
    /// `new_priority` is not strictly smaller than its current priority.
    pub fn decrease_priority(&mut self, element: &E, new_priority: P) -> bool {
        let position = match self.positions.get(element) {
            Some(&position) => position,
            None => return false,
        };

        if !(new_priority < self.entries[position].priority) {
            return false;
        }

        self.entries[position].priority = new_priority;
        self.sift_up(position);
        true
    }

    /// Returns the element with the smallest priority without removing it
    pub fn min(&self) -> Result<E> {
        self.entries
            .first()
            .map(|entry| entry.element)
            .ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the element with the smallest priority
    pub fn extract_minimum(&mut self) -> Result<E> {
        if self.entries.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let last = self.entries.len() - 1;
        self.swap_entries(0, last);

        let minimum = match self.entries.pop() {
            Some(entry) => entry.element,
            None => return Err(Error::EmptyQueue),
        };
        self.positions.remove(&minimum);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Ok(minimum)
    }

    /// Empties the heap while keeping its allocated storage
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Grows the backing storage by half of its current capacity
    fn grow(&mut self) {
        let additional = (self.entries.capacity() / 2).max(1);
        self.entries.reserve_exact(additional);
        self.positions.reserve(additional);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !(self.entries[position].priority < self.entries[parent].priority) {
                break;
            }
            self.swap_entries(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * position + 1;
            if left >= len {
                break;
            }

            // Prefer the right child only when it is strictly smaller
            let right = left + 1;
            let smaller_child = if right < len
                && self.entries[right].priority < self.entries[left].priority
            {
                right
            } else {
                left
            };

            if !(self.entries[smaller_child].priority < self.entries[position].priority) {
                break;
            }
            self.swap_entries(position, smaller_child);
            position = smaller_child;
        }
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.positions.insert(self.entries[a].element, a);
        self.positions.insert(self.entries[b].element, b);
    }
}

impl<E, P> Default for IndexedBinaryHeap<E, P>
where
    E: Copy + Eq + Hash + Debug,
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap_invariants(heap: &IndexedBinaryHeap<u32, f64>) {
        for (position, entry) in heap.entries.iter().enumerate() {
            assert_eq!(heap.positions.get(&entry.element), Some(&position));
            for child in [2 * position + 1, 2 * position + 2] {
                if child < heap.entries.len() {
                    assert!(entry.priority <= heap.entries[child].priority);
                }
            }
        }
        assert_eq!(heap.positions.len(), heap.entries.len());
    }

    #[test]
    fn invariants_hold_across_mixed_operations() {
        let mut heap = IndexedBinaryHeap::with_capacity(4);
        for (element, priority) in [(1, 9.0), (2, 4.0), (3, 7.0), (4, 1.0), (5, 8.0), (6, 3.0)] {
            heap.add(element, priority);
            assert_heap_invariants(&heap);
        }

        assert!(heap.decrease_priority(&5, 0.5));
        assert_heap_invariants(&heap);
        assert_eq!(heap.extract_minimum(), Ok(5));
        assert_heap_invariants(&heap);

        assert!(heap.decrease_priority(&1, 2.0));
        assert_heap_invariants(&heap);
        assert_eq!(heap.extract_minimum(), Ok(4));
        assert_eq!(heap.extract_minimum(), Ok(1));
        assert_heap_invariants(&heap);
    }

    #[test]
    fn capacity_has_a_floor_and_grows_by_half() {
        let mut heap: IndexedBinaryHeap<u32, f64> = IndexedBinaryHeap::with_capacity(2);
        assert!(heap.capacity() >= MINIMUM_CAPACITY);

        let initial = heap.capacity();
        for element in 0..=initial as u32 {
            heap.add(element, f64::from(element));
        }
        assert!(heap.capacity() >= initial + initial / 2);
        assert_eq!(heap.len(), initial + 1);
        assert_heap_invariants(&heap);
    }

    #[test]
    fn clear_keeps_storage() {
        let mut heap = IndexedBinaryHeap::with_capacity(64);
        for element in 0..50u32 {
            heap.add(element, f64::from(element));
        }
        let capacity = heap.capacity();
        heap.clear();
        assert!(heap.is_empty());
        assert!(!heap.contains(&3));
        assert_eq!(heap.capacity(), capacity);
    }
}
