use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use num_traits::Float;

use crate::data_structures::IndexedBinaryHeap;
use crate::graph::{Adjacency, NodeId, WeightFunction};
use crate::Result;

/// Scratch state for repeated single-source Dijkstra runs
///
/// One workspace can serve any number of runs; it is cleared at the start of each run
/// and keeps its allocations between them.
#[derive(Debug, Clone)]
pub struct Workspace<W>
where
    W: Float + Debug,
{
    /// Open set, keyed by tentative distance
    open: IndexedBinaryHeap<NodeId, W>,

    /// Nodes whose distance is final
    closed: HashSet<NodeId>,

    /// Best distance found so far for every seen node
    distances: HashMap<NodeId, W>,
}

impl<W> Workspace<W>
where
    W: Float + Debug,
{
    /// Creates a workspace sized for a component of `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        Workspace {
            open: IndexedBinaryHeap::with_capacity(nodes),
            closed: HashSet::with_capacity(nodes),
            distances: HashMap::with_capacity(nodes),
        }
    }

    /// Forgets the state of the previous run without releasing storage
    pub fn clear(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.distances.clear();
    }

    /// Finalized or tentative distance from the last run's source, if the node was seen
    pub fn distance(&self, node: NodeId) -> Option<W> {
        self.distances.get(&node).copied()
    }
}

impl<W> Default for Workspace<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Workspace {
            open: IndexedBinaryHeap::new(),
            closed: HashSet::new(),
            distances: HashMap::new(),
        }
    }
}

/// Computes the eccentricity of `source` by running Dijkstra's algorithm over outgoing
/// edges
///
/// The returned value is the largest tentative distance assigned to any node during the
/// run, whether on first discovery or on a later decrease. It is never lowered again, so
/// a node first reached over a long edge and later over a shorter path still counts with
/// the long distance.
///
/// Nodes that cannot be reached from `source` are ignored, so a node without outgoing
/// edges has eccentricity zero. Every traversed edge must have a non-negative weight in
/// `weights`; a missing weight aborts the run with [`Error::MissingWeight`].
///
/// After the call, `workspace` holds the shortest distances of every reached node.
///
/// [`Error::MissingWeight`]: crate::Error::MissingWeight
pub fn compute_eccentricity<W, G>(
    graph: &G,
    source: NodeId,
    weights: &WeightFunction<W>,
    workspace: &mut Workspace<W>,
) -> Result<W>
where
    W: Float + Debug,
    G: Adjacency + ?Sized,
{
    workspace.clear();
    let Workspace {
        open,
        closed,
        distances,
    } = workspace;

    open.add(source, W::zero());
    distances.insert(source, W::zero());

    let mut eccentricity = W::zero();

    while !open.is_empty() {
        let current = open.extract_minimum()?;
        closed.insert(current);

        let current_distance = distances
            .get(&current)
            .copied()
            .unwrap_or_else(W::zero);

        for &child in graph.children(current)? {
            if closed.contains(&child) {
                continue;
            }

            let tentative = current_distance + weights.get(current, child)?;

            if !open.contains(&child) {
                open.add(child, tentative);
                distances.insert(child, tentative);
            } else if distances.get(&child).map_or(false, |&known| known > tentative) {
                distances.insert(child, tentative);
                open.decrease_priority(&child, tentative);
            } else {
                continue;
            }

            if tentative > eccentricity {
                eccentricity = tentative;
            }
        }
    }

    Ok(eccentricity)
}
