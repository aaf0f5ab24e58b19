//! Graph Center - eccentricity and center computation for weighted directed graphs
//!
//! The eccentricity of a node is the largest shortest-path distance from it to any
//! node reachable through outgoing edges. The center of a (weakly) connected
//! component is the set of its nodes with minimum eccentricity.
//!
//! Graphs are stored in an arena ([`DirectedGraph`]) where every node is addressed
//! by a [`NodeId`] handle, and edge weights live in a separate [`WeightFunction`].

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    naive::NaiveCenterFinder, CenterFinder, CenterResult, EccentricityMap, Workspace,
};
/// Re-export main types for convenient use
pub use graph::{directed::DirectedGraph, weight::WeightFunction, NodeId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Node {0} does not belong to this graph")]
    InvalidNode(NodeId),

    #[error("Identifier {0} is already used by another node")]
    DuplicateIdentifier(usize),

    #[error("Negative or undefined edge weight: {0}")]
    NegativeWeight(f64),

    #[error("No weight recorded for edge from {tail} to {head}")]
    MissingWeight { tail: NodeId, head: NodeId },

    #[error("Priority queue is empty")]
    EmptyQueue,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
