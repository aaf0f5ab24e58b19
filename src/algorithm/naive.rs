use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Float;

use crate::algorithm::components::find_connected_component;
use crate::algorithm::eccentricity::{compute_eccentricity, Workspace};
use crate::algorithm::{CenterFinder, CenterResult, EccentricityMap};
use crate::data_structures::priority_queue::MINIMUM_CAPACITY;
use crate::graph::{Adjacency, NodeId, WeightFunction};
use crate::Result;

/// Center finder that runs Dijkstra's algorithm from every node of the component,
/// without any pruning
///
/// The whole run costs O(V (E log V)) for a component of V nodes and E edges.
#[derive(Debug, Clone)]
pub struct NaiveCenterFinder {
    /// Lower bound on the initial capacity of the per-run workspace
    heap_capacity: usize,
    /// Whether to check that every edge of the component has a weight before starting
    weight_check: bool,
}

impl NaiveCenterFinder {
    /// Create a new naive center finder with default settings
    pub fn new() -> Self {
        NaiveCenterFinder {
            heap_capacity: MINIMUM_CAPACITY,
            weight_check: false,
        }
    }

    /// Set the minimum initial capacity of the workspace allocated per call
    pub fn with_heap_capacity(mut self, capacity: usize) -> Self {
        self.heap_capacity = capacity.max(MINIMUM_CAPACITY);
        self
    }

    /// Enable or disable the upfront check for missing edge weights
    pub fn with_weight_check(mut self, enabled: bool) -> Self {
        self.weight_check = enabled;
        self
    }

    /// Same as [`CenterFinder::find_center_nodes`], but runs in a caller-owned workspace
    pub fn find_center_nodes_with<W, G>(
        &self,
        graph: &G,
        representative: NodeId,
        weights: &WeightFunction<W>,
        workspace: &mut Workspace<W>,
    ) -> Result<CenterResult<W>>
    where
        W: Float + Debug,
        G: Adjacency,
    {
        let component = find_connected_component(graph, representative)?;
        self.run(graph, representative, &component, weights, workspace)
    }

    fn run<W, G>(
        &self,
        graph: &G,
        representative: NodeId,
        component: &[NodeId],
        weights: &WeightFunction<W>,
        workspace: &mut Workspace<W>,
    ) -> Result<CenterResult<W>>
    where
        W: Float + Debug,
        G: Adjacency,
    {
        debug!(
            "Component of {} has {} nodes",
            representative,
            component.len()
        );

        if self.weight_check {
            weights.check_covers(graph, component.iter().copied())?;
        }

        let mut minimum_eccentricity = W::infinity();
        let mut center_nodes = Vec::new();
        let mut eccentricity_map = EccentricityMap::with_capacity(component.len());

        for &node in component {
            let eccentricity = compute_eccentricity(graph, node, weights, workspace)?;
            trace!("Eccentricity of {} is {:?}", node, eccentricity);

            eccentricity_map.insert(node, eccentricity);

            if eccentricity < minimum_eccentricity {
                minimum_eccentricity = eccentricity;
                center_nodes.clear();
                center_nodes.push(node);
            } else if eccentricity == minimum_eccentricity {
                center_nodes.push(node);
            }
        }

        debug!(
            "Found {} center node(s) with eccentricity {:?}",
            center_nodes.len(),
            minimum_eccentricity
        );

        Ok(CenterResult::new(eccentricity_map, center_nodes))
    }
}

impl Default for NaiveCenterFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> CenterFinder<W, G> for NaiveCenterFinder
where
    W: Float + Debug,
    G: Adjacency,
{
    fn name(&self) -> &'static str {
        "Naive"
    }

    fn find_center_nodes(
        &self,
        graph: &G,
        representative: NodeId,
        weights: &WeightFunction<W>,
    ) -> Result<CenterResult<W>> {
        let component = find_connected_component(graph, representative)?;
        let mut workspace = Workspace::with_capacity(component.len().max(self.heap_capacity));
        self.run(graph, representative, &component, weights, &mut workspace)
    }
}
