use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::Float;
use serde::Serialize;

use crate::algorithm::components::find_connected_component;
use crate::graph::{Adjacency, NodeId, WeightFunction};
use crate::Result;

/// Eccentricity of every node of a component
///
/// Entries are kept in the order the nodes were discovered in the component.
#[derive(Debug, Clone, Serialize)]
pub struct EccentricityMap<W>
where
    W: Float + Debug,
{
    entries: Vec<(NodeId, W)>,
    #[serde(skip)]
    positions: HashMap<NodeId, usize>,
}

impl<W> EccentricityMap<W>
where
    W: Float + Debug,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        EccentricityMap {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, node: NodeId, eccentricity: W) {
        match self.positions.get(&node) {
            Some(&position) => self.entries[position].1 = eccentricity,
            None => {
                self.positions.insert(node, self.entries.len());
                self.entries.push((node, eccentricity));
            }
        }
    }

    /// Returns the eccentricity of a node, or `None` if it is outside the component
    pub fn get(&self, node: NodeId) -> Option<W> {
        self.positions
            .get(&node)
            .map(|&position| self.entries[position].1)
    }

    /// Returns the number of nodes with a recorded eccentricity
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no eccentricity has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(node, eccentricity)` pairs in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, W)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the largest eccentricity in the map
    pub fn max_eccentricity(&self) -> Option<W> {
        self.entries
            .iter()
            .map(|&(_, eccentricity)| eccentricity)
            .fold(None, |max, e| match max {
                Some(m) if m >= e => Some(m),
                _ => Some(e),
            })
    }
}

/// Result of a center finder execution
#[derive(Debug, Clone, Serialize)]
pub struct CenterResult<W>
where
    W: Float + Debug,
{
    /// Eccentricity of every node of the component
    eccentricity_map: EccentricityMap<W>,

    /// Nodes achieving the minimum eccentricity, in discovery order
    center_nodes: Vec<NodeId>,
}

impl<W> CenterResult<W>
where
    W: Float + Debug,
{
    /// Bundles an eccentricity map with the nodes achieving its minimum
    pub fn new(eccentricity_map: EccentricityMap<W>, center_nodes: Vec<NodeId>) -> Self {
        CenterResult {
            eccentricity_map,
            center_nodes,
        }
    }

    /// Eccentricity of every node of the component
    pub fn eccentricity_map(&self) -> &EccentricityMap<W> {
        &self.eccentricity_map
    }

    /// Nodes achieving the minimum eccentricity, in discovery order
    pub fn center_nodes(&self) -> &[NodeId] {
        &self.center_nodes
    }

    /// Minimum eccentricity over the component
    pub fn radius(&self) -> Option<W> {
        self.center_nodes
            .first()
            .and_then(|&node| self.eccentricity_map.get(node))
    }

    /// Number of nodes in the examined component
    pub fn component_size(&self) -> usize {
        self.eccentricity_map.len()
    }
}

/// Trait for graph center algorithms
pub trait CenterFinder<W, G>
where
    W: Float + Debug,
    G: Adjacency,
{
    /// Computes the eccentricities and the center of the component containing
    /// `representative`
    fn find_center_nodes(
        &self,
        graph: &G,
        representative: NodeId,
        weights: &WeightFunction<W>,
    ) -> Result<CenterResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the weakly connected component containing `representative`, in discovery order
    fn find_connected_component(&self, graph: &G, representative: NodeId) -> Result<Vec<NodeId>> {
        find_connected_component(graph, representative)
    }
}
