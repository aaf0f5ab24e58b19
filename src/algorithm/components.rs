use std::collections::{HashSet, VecDeque};

use crate::graph::{Adjacency, NodeId};
use crate::{Error, Result};

/// Returns the weakly connected component containing `start`, in discovery order
///
/// Runs a breadth-first search that follows edges in both directions: at each node the
/// children are enqueued first, then the parents. `start` is always the first element.
pub fn find_connected_component<G>(graph: &G, start: NodeId) -> Result<Vec<NodeId>>
where
    G: Adjacency + ?Sized,
{
    if !graph.contains_node(start) {
        return Err(Error::InvalidNode(start));
    }

    let mut component = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        component.push(current);

        let neighbours = graph
            .children(current)?
            .iter()
            .chain(graph.parents(current)?.iter());

        for &next in neighbours {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Ok(component)
}
