use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// An insertion-ordered set without duplicates
///
/// Elements are kept in a dense vector (iteration order) and mirrored in a hash set
/// so membership queries stay O(1). Removal preserves the relative order of the
/// remaining elements.
#[derive(Debug, Clone)]
pub struct OrderedSet<T>
where
    T: Eq + Hash + Copy + Debug,
{
    /// Elements in insertion order
    order: Vec<T>,

    /// Membership index
    members: HashSet<T>,
}

impl<T> OrderedSet<T>
where
    T: Eq + Hash + Copy + Debug,
{
    /// Creates a new empty set
    pub fn new() -> Self {
        OrderedSet {
            order: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Returns true if the element is present
    pub fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }

    /// Appends the element unless it is already present; returns whether it was added
    pub fn insert(&mut self, value: T) -> bool {
        if !self.members.insert(value) {
            return false;
        }
        self.order.push(value);
        true
    }

    /// Removes the element if present; returns whether it was removed
    pub fn remove(&mut self, value: &T) -> bool {
        if !self.members.remove(value) {
            return false;
        }
        if let Some(position) = self.order.iter().position(|v| v == value) {
            self.order.remove(position);
        }
        true
    }

    /// Returns the elements in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.order
    }
}

impl<T> Default for OrderedSet<T>
where
    T: Eq + Hash + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
