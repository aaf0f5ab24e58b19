use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::data_structures::OrderedSet;
use crate::graph::traits::{Adjacency, MutableAdjacency, NodeId};
use crate::{Error, Result};

/// Source of graph tags stamped into every issued `NodeId`
static NEXT_GRAPH_TAG: AtomicUsize = AtomicUsize::new(0);

/// Storage for a single node of the arena
#[derive(Debug, Clone)]
struct NodeEntry {
    /// Caller-supplied identifier
    identifier: usize,

    /// Targets of outgoing edges
    children: OrderedSet<NodeId>,

    /// Sources of incoming edges
    parents: OrderedSet<NodeId>,
}

/// A directed graph whose nodes live in an arena
///
/// The graph owns every node; adjacency is stored as sets of [`NodeId`] handles on
/// both endpoints of each edge. Each node also carries a caller-supplied integer
/// identifier, which must be unique within the graph.
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    /// Tag shared by all handles this graph issues
    tag: usize,

    /// Node storage, indexed by `NodeId`
    nodes: Vec<NodeEntry>,

    /// Caller identifier -> handle
    by_identifier: HashMap<usize, NodeId>,

    /// Number of directed edges
    edge_count: usize,
}

impl DirectedGraph {
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            tag: NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
            by_identifier: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty directed graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            tag: NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::with_capacity(nodes),
            by_identifier: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Looks up the node carrying the given identifier
    pub fn node(&self, identifier: usize) -> Option<NodeId> {
        self.by_identifier.get(&identifier).copied()
    }

    /// Returns the caller identifier of a node
    pub fn identifier(&self, node: NodeId) -> Result<usize> {
        self.entry(node).map(|entry| entry.identifier)
    }

    /// Iterates over all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        let tag = self.tag;
        (0..self.nodes.len()).map(move |index| NodeId { graph: tag, index })
    }

    fn entry(&self, node: NodeId) -> Result<&NodeEntry> {
        if node.graph != self.tag {
            return Err(Error::InvalidNode(node));
        }
        self.nodes.get(node.index).ok_or(Error::InvalidNode(node))
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(Error::InvalidNode(node))
        }
    }
}

impl Default for DirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Adjacency for DirectedGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains_node(&self, node: NodeId) -> bool {
        node.graph == self.tag && node.index < self.nodes.len()
    }

    fn children(&self, node: NodeId) -> Result<&[NodeId]> {
        self.entry(node).map(|entry| entry.children.as_slice())
    }

    fn parents(&self, node: NodeId) -> Result<&[NodeId]> {
        self.entry(node).map(|entry| entry.parents.as_slice())
    }

    fn has_child(&self, parent: NodeId, child: NodeId) -> Result<bool> {
        self.check_node(child)?;
        Ok(self.entry(parent)?.children.contains(&child))
    }
}

impl MutableAdjacency for DirectedGraph {
    fn add_node(&mut self, identifier: usize) -> Result<NodeId> {
        if self.by_identifier.contains_key(&identifier) {
            return Err(Error::DuplicateIdentifier(identifier));
        }

        let node = NodeId {
            graph: self.tag,
            index: self.nodes.len(),
        };
        self.nodes.push(NodeEntry {
            identifier,
            children: OrderedSet::new(),
            parents: OrderedSet::new(),
        });
        self.by_identifier.insert(identifier, node);
        Ok(node)
    }

    fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool> {
        // Both endpoints are validated before either side is touched
        self.check_node(parent)?;
        self.check_node(child)?;

        if !self.nodes[parent.index].children.insert(child) {
            return Ok(false);
        }
        self.nodes[child.index].parents.insert(parent);
        self.edge_count += 1;
        Ok(true)
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool> {
        self.check_node(parent)?;
        self.check_node(child)?;

        if !self.nodes[parent.index].children.remove(&child) {
            return Ok(false);
        }
        self.nodes[child.index].parents.remove(&parent);
        self.edge_count -= 1;
        Ok(true)
    }
}
