pub mod traits;
pub mod directed;
pub mod weight;
pub mod generators;

pub use traits::{Adjacency, MutableAdjacency, NodeId};
pub use directed::DirectedGraph;
pub use weight::WeightFunction;
