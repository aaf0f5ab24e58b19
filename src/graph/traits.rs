use std::fmt::{self, Debug, Display};

use serde::{Serialize, Serializer};

use crate::Result;

/// Handle of a node inside a graph arena
///
/// A handle records the node's position in the arena and the graph that issued it.
/// Handles are only valid for that graph (and its clones); any other graph rejects
/// them with [`Error::InvalidNode`](crate::Error::InvalidNode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) graph: usize,
    pub(crate) index: usize,
}

impl NodeId {
    /// Returns the arena index of this node
    pub fn index(self) -> usize {
        self.index
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

// Serialized as the bare arena index
impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.index as u64)
    }
}

/// Trait representing read-only adjacency of a directed graph
///
/// Every edge is visible from both endpoints: `child` appears in `children(parent)`
/// exactly when `parent` appears in `parents(child)`.
pub trait Adjacency: Debug {
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the node belongs to the graph
    fn contains_node(&self, node: NodeId) -> bool;

    /// Returns the targets of the node's outgoing edges, in insertion order
    fn children(&self, node: NodeId) -> Result<&[NodeId]>;

    /// Returns the sources of the node's incoming edges, in insertion order
    fn parents(&self, node: NodeId) -> Result<&[NodeId]>;

    /// Returns true if there's an edge from `parent` to `child`
    fn has_child(&self, parent: NodeId, child: NodeId) -> Result<bool>;
}

/// Trait for mutable adjacency operations
pub trait MutableAdjacency: Adjacency {
    /// Adds a node carrying the caller's identifier and returns its handle
    fn add_node(&mut self, identifier: usize) -> Result<NodeId>;

    /// Adds the edge `parent -> child`; returns false if it already existed
    fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool>;

    /// Removes the edge `parent -> child`; returns false if there was no such edge
    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool>;
}
