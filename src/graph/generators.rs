use ordered_float::OrderedFloat;
use rand::Rng;

use crate::graph::{DirectedGraph, MutableAdjacency, NodeId, WeightFunction};
use crate::Result;

/// A generated graph together with the weights of all its edges
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    pub graph: DirectedGraph,
    pub weights: WeightFunction<OrderedFloat<f64>>,
    /// Handles in creation order; node `i` carries identifier `i`
    pub nodes: Vec<NodeId>,
}

impl WeightedGraph {
    fn with_nodes(n: usize) -> Result<Self> {
        let mut graph = DirectedGraph::with_capacity(n);
        let nodes = (0..n)
            .map(|identifier| graph.add_node(identifier))
            .collect::<Result<Vec<_>>>()?;
        Ok(WeightedGraph {
            graph,
            weights: WeightFunction::new(),
            nodes,
        })
    }

    fn connect(&mut self, tail: usize, head: usize, weight: f64) -> Result<()> {
        let (tail, head) = (self.nodes[tail], self.nodes[head]);
        self.graph.add_child(tail, head)?;
        self.weights.put(tail, head, OrderedFloat(weight))?;
        Ok(())
    }
}

/// Generates a random directed graph with about `edge_factor * n` edges
///
/// A directed path `0 -> 1 -> ... -> n-1` is always included so the whole graph forms a
/// single weakly connected component. Extra edges get weights in `[1, 100)`.
pub fn generate_random<R: Rng>(n: usize, edge_factor: f64, rng: &mut R) -> Result<WeightedGraph> {
    let mut generated = WeightedGraph::with_nodes(n)?;

    for v in 1..n {
        let weight = rng.gen_range(1.0..100.0);
        generated.connect(v - 1, v, weight)?;
    }

    let extra_edges = (edge_factor * n as f64) as usize;
    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            generated.connect(u, v, weight)?;
        }
    }

    Ok(generated)
}

/// Generates a cycle of `n` nodes with edges in both directions, all of the same weight
pub fn generate_bidirectional_cycle(n: usize, weight: f64) -> Result<WeightedGraph> {
    let mut generated = WeightedGraph::with_nodes(n)?;

    if n > 1 {
        for v in 0..n {
            let next = (v + 1) % n;
            generated.connect(v, next, weight)?;
            generated.connect(next, v, weight)?;
        }
    }

    Ok(generated)
}

/// Generates a `width x height` grid with unit-weight edges between 4-neighbours
pub fn generate_grid(width: usize, height: usize) -> Result<WeightedGraph> {
    let mut generated = WeightedGraph::with_nodes(width * height)?;

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                generated.connect(current, current + 1, 1.0)?;
                generated.connect(current + 1, current, 1.0)?;
            }
            if y + 1 < height {
                generated.connect(current, current + width, 1.0)?;
                generated.connect(current + width, current, 1.0)?;
            }
        }
    }

    Ok(generated)
}
