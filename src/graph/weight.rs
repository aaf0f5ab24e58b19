use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::Float;

use crate::graph::traits::{Adjacency, NodeId};
use crate::{Error, Result};

/// Weights of directed edges, kept apart from the adjacency structure
///
/// Weights are recorded per ordered `(tail, head)` pair and must be non-negative.
/// Recording a weight does not create an edge; the algorithms only ask for weights of
/// edges the graph actually has.
#[derive(Debug, Clone)]
pub struct WeightFunction<W = f64>
where
    W: Float + Debug,
{
    weights: HashMap<(NodeId, NodeId), W>,
}

impl<W> WeightFunction<W>
where
    W: Float + Debug,
{
    /// Creates a new empty weight function
    pub fn new() -> Self {
        WeightFunction {
            weights: HashMap::new(),
        }
    }

    /// Creates a new empty weight function with room for the given number of edges
    pub fn with_capacity(edges: usize) -> Self {
        WeightFunction {
            weights: HashMap::with_capacity(edges),
        }
    }

    /// Returns the number of recorded weights
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if no weight has been recorded
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Records the weight of `tail -> head`, returning the weight it replaces
    ///
    /// Negative and NaN weights are rejected and leave the function unchanged.
    pub fn put(&mut self, tail: NodeId, head: NodeId, weight: W) -> Result<Option<W>> {
        if weight.is_nan() || weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(self.weights.insert((tail, head), weight))
    }

    /// Returns the weight recorded for `tail -> head`
    pub fn get(&self, tail: NodeId, head: NodeId) -> Result<W> {
        self.weights
            .get(&(tail, head))
            .copied()
            .ok_or(Error::MissingWeight { tail, head })
    }

    /// Returns true if a weight is recorded for `tail -> head`
    pub fn contains(&self, tail: NodeId, head: NodeId) -> bool {
        self.weights.contains_key(&(tail, head))
    }

    /// Forgets the weight of `tail -> head`, returning it if there was one
    pub fn remove(&mut self, tail: NodeId, head: NodeId) -> Option<W> {
        self.weights.remove(&(tail, head))
    }

    /// Checks that every outgoing edge of the given nodes has a recorded weight
    ///
    /// Fails with the first edge found without one, scanning nodes in the given order
    /// and children in insertion order.
    pub fn check_covers<G, I>(&self, graph: &G, nodes: I) -> Result<()>
    where
        G: Adjacency,
        I: IntoIterator<Item = NodeId>,
    {
        for tail in nodes {
            for &head in graph.children(tail)? {
                if !self.contains(tail, head) {
                    return Err(Error::MissingWeight { tail, head });
                }
            }
        }
        Ok(())
    }
}

impl<W> Default for WeightFunction<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
