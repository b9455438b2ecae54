//! Weighted undirected graph keyed by string node ids

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Undirected graph whose edge weights are distances.
///
/// Node ids are opaque strings; internally every id is mapped to a petgraph
/// `NodeIndex`. Once built the graph is read-only and can be shared freely
/// between worker threads.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    /// Underlying petgraph storage, node weight is the string id
    pub(crate) graph: UnGraph<String, f64>,

    /// Mapping from string ids to node indices
    pub(crate) id_to_index: HashMap<String, NodeIndex>,
}

impl WeightedGraph {
    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check whether a node id exists
    pub fn contains_node(&self, id: &str) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Look up the index of a node id
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.id_to_index.get(id).copied()
    }

    /// String id of a node index
    pub fn node_id(&self, index: NodeIndex) -> &str {
        &self.graph[index]
    }

    /// Neighbours of a node together with the connecting edge weight
    pub fn neighbors(&self, index: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph.edges(index).map(move |edge| {
            let other = if edge.source() == index {
                edge.target()
            } else {
                edge.source()
            };
            (other, *edge.weight())
        })
    }

    /// Weight of the edge between two nodes, if any
    pub fn edge_weight(&self, a: NodeIndex, b: NodeIndex) -> Option<f64> {
        self.graph
            .find_edge(a, b)
            .and_then(|edge| self.graph.edge_weight(edge))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::GraphBuilder;

    #[test]
    fn lookups_resolve_ids_and_weights() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("A", "B", 1.5);
        builder.add_edge("B", "C", 2.0);
        let graph = builder.build();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_node("C"));
        assert!(!graph.contains_node("Z"));

        let a = graph.node_index("A").unwrap();
        let b = graph.node_index("B").unwrap();
        assert_eq!(graph.node_id(a), "A");
        assert_eq!(graph.edge_weight(a, b), Some(1.5));
        assert_eq!(graph.edge_weight(b, a), Some(1.5));

        let mut around_b: Vec<(String, f64)> = graph
            .neighbors(b)
            .map(|(n, w)| (graph.node_id(n).to_string(), w))
            .collect();
        around_b.sort_by(|x, y| x.0.cmp(&y.0));
        assert_eq!(around_b, vec![("A".to_string(), 1.5), ("C".to_string(), 2.0)]);
    }

    #[test]
    fn self_loop_is_its_own_neighbour() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("A", "A", 1.0);
        let graph = builder.build();
        let a = graph.node_index("A").unwrap();
        let around: Vec<_> = graph.neighbors(a).collect();
        assert_eq!(around, vec![(a, 1.0)]);
    }
}
