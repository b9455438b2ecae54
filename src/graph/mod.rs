//! Graph representation and algorithms module

pub mod store;
pub mod builder;
pub mod algorithms;

pub use store::WeightedGraph;
pub use builder::GraphBuilder;
pub use algorithms::{ShortestPathTree, SubgraphEdge};
