//! Graph construction module

use crate::graph::WeightedGraph;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Builder for incrementally constructing a WeightedGraph
pub struct GraphBuilder {
    /// Graph under construction
    graph: UnGraph<String, f64>,

    /// Mapping from string IDs to node indices
    id_to_index: HashMap<String, NodeIndex>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Create a new graph builder with the given capacity
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            id_to_index: HashMap::with_capacity(nodes),
        }
    }

    /// Get or create a node index for the given string ID
    pub fn get_or_create_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.graph.add_node(id.to_string());
        self.id_to_index.insert(id.to_string(), idx);
        idx
    }

    /// Add an undirected edge; a repeated pair overwrites the earlier weight
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) {
        let a_idx = self.get_or_create_node(a);
        let b_idx = self.get_or_create_node(b);
        self.graph.update_edge(a_idx, b_idx, weight);
    }

    /// Build the graph
    pub fn build(self) -> WeightedGraph {
        log::debug!(
            "Built graph with {} nodes and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );

        WeightedGraph {
            graph: self.graph,
            id_to_index: self.id_to_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_edge_keeps_last_weight() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("A", "B", 1.0);
        builder.add_edge("B", "A", 4.0);
        let graph = builder.build();

        assert_eq!(graph.edge_count(), 1);
        let a = graph.node_index("A").unwrap();
        let b = graph.node_index("B").unwrap();
        assert_eq!(graph.edge_weight(a, b), Some(4.0));
    }

    #[test]
    fn nodes_are_created_once() {
        let mut builder = GraphBuilder::with_capacity(4, 4);
        let first = builder.get_or_create_node("X");
        let again = builder.get_or_create_node("X");
        assert_eq!(first, again);
        assert_eq!(builder.build().node_count(), 1);
    }
}
