//! Graph algorithms for analysis

use crate::graph::WeightedGraph;
use petgraph::graph::NodeIndex;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first
#[derive(PartialEq)]
struct QueueItem(f64, NodeIndex);

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.partial_cmp(&self.0).unwrap_or(Ordering::Equal)
    }
}

/// Single-source Dijkstra result that keeps every tied predecessor,
/// so all minimum-weight paths to any target can be enumerated.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeIndex,

    /// Distance from the source, `INFINITY` when unreachable
    dist: Vec<f64>,

    /// Every neighbour through which a node is reached at minimum distance
    pred: Vec<Vec<NodeIndex>>,
}

impl ShortestPathTree {
    /// Source node the tree was grown from
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Distance to a target, `None` when unreachable
    pub fn distance(&self, target: NodeIndex) -> Option<f64> {
        let d = self.dist[target.index()];
        d.is_finite().then_some(d)
    }

    /// Enumerate all shortest paths from the source to `target`.
    ///
    /// Each path starts with the source and ends with the target. The result
    /// is empty when the target is unreachable. A target equal to the source
    /// yields the single one-node path.
    pub fn paths_to(&self, target: NodeIndex) -> Vec<Vec<NodeIndex>> {
        if self.distance(target).is_none() {
            return Vec::new();
        }

        let mut paths = Vec::new();
        let mut stack = vec![vec![target]];

        while let Some(partial) = stack.pop() {
            let head = partial[partial.len() - 1];
            if head == self.source {
                let mut path = partial;
                path.reverse();
                paths.push(path);
                continue;
            }

            for &prev in &self.pred[head.index()] {
                // zero-weight edges can make predecessor links cyclic
                if partial.contains(&prev) {
                    continue;
                }
                let mut next = partial.clone();
                next.push(prev);
                stack.push(next);
            }
        }

        paths
    }
}

/// Grow a shortest-path tree from `source` using edge weights as distances
pub fn shortest_path_tree(graph: &WeightedGraph, source: NodeIndex) -> ShortestPathTree {
    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source.index()] = 0.0;
    heap.push(QueueItem(0.0, source));

    while let Some(QueueItem(d, current)) = heap.pop() {
        if settled[current.index()] {
            continue;
        }
        settled[current.index()] = true;

        for (neighbor, weight) in graph.neighbors(current) {
            if neighbor == current {
                continue;
            }
            let candidate = d + weight;
            let known = dist[neighbor.index()];

            if candidate < known {
                dist[neighbor.index()] = candidate;
                pred[neighbor.index()] = vec![current];
                heap.push(QueueItem(candidate, neighbor));
            } else if candidate == known && neighbor != source {
                pred[neighbor.index()].push(current);
            }
        }
    }

    ShortestPathTree { source, dist, pred }
}

/// Edge of an extracted subgraph, endpoints as string ids
#[derive(Debug, Clone, PartialEq)]
pub struct SubgraphEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Edges of the subgraph induced by `seeds`.
///
/// Every undirected edge whose endpoints are both seeds is returned once,
/// self loops included. Seeds missing from the graph are ignored.
pub fn induced_subgraph(graph: &WeightedGraph, seeds: &[String]) -> Vec<SubgraphEdge> {
    let selected: Vec<NodeIndex> = {
        let mut seen = HashSet::new();
        seeds
            .iter()
            .filter_map(|id| graph.node_index(id))
            .filter(|idx| seen.insert(*idx))
            .collect()
    };
    let members: HashSet<NodeIndex> = selected.iter().copied().collect();

    let mut edges = Vec::new();
    for &node in &selected {
        for (neighbor, weight) in graph.neighbors(node) {
            // each edge once: emit from the lower index endpoint
            if !members.contains(&neighbor) || neighbor.index() < node.index() {
                continue;
            }
            edges.push(SubgraphEdge {
                source: graph.node_id(node).to_string(),
                target: graph.node_id(neighbor).to_string(),
                weight,
            });
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn ids(graph: &WeightedGraph, path: &[NodeIndex]) -> Vec<String> {
        path.iter().map(|&n| graph.node_id(n).to_string()).collect()
    }

    fn sorted_paths(graph: &WeightedGraph, from: &str, to: &str) -> Vec<Vec<String>> {
        let tree = shortest_path_tree(graph, graph.node_index(from).unwrap());
        let mut paths: Vec<Vec<String>> = tree
            .paths_to(graph.node_index(to).unwrap())
            .iter()
            .map(|p| ids(graph, p))
            .collect();
        paths.sort();
        paths
    }

    #[test]
    fn single_path_on_a_line() {
        let mut b = GraphBuilder::new();
        b.add_edge("A", "B", 1.0);
        b.add_edge("B", "C", 1.0);
        let g = b.build();

        assert_eq!(sorted_paths(&g, "A", "C"), vec![vec!["A", "B", "C"]]);
        let tree = shortest_path_tree(&g, g.node_index("A").unwrap());
        assert_eq!(tree.distance(g.node_index("C").unwrap()), Some(2.0));
    }

    #[test]
    fn tied_paths_are_all_returned() {
        // A-B-D and A-C-D both weigh 2, the direct edge weighs 5
        let mut b = GraphBuilder::new();
        b.add_edge("A", "B", 1.0);
        b.add_edge("B", "D", 1.0);
        b.add_edge("A", "C", 1.0);
        b.add_edge("C", "D", 1.0);
        b.add_edge("A", "D", 5.0);
        let g = b.build();

        assert_eq!(
            sorted_paths(&g, "A", "D"),
            vec![vec!["A", "B", "D"], vec!["A", "C", "D"]]
        );
    }

    #[test]
    fn weights_beat_hop_count() {
        let mut b = GraphBuilder::new();
        b.add_edge("A", "C", 10.0);
        b.add_edge("A", "B", 1.0);
        b.add_edge("B", "C", 1.0);
        let g = b.build();

        assert_eq!(sorted_paths(&g, "A", "C"), vec![vec!["A", "B", "C"]]);
    }

    #[test]
    fn unreachable_target_has_no_paths() {
        let mut b = GraphBuilder::new();
        b.add_edge("A", "B", 1.0);
        b.add_edge("C", "D", 1.0);
        let g = b.build();

        let tree = shortest_path_tree(&g, g.node_index("A").unwrap());
        let d = g.node_index("D").unwrap();
        assert!(tree.distance(d).is_none());
        assert!(tree.paths_to(d).is_empty());
    }

    #[test]
    fn source_to_itself_is_one_node() {
        let mut b = GraphBuilder::new();
        b.add_edge("A", "B", 1.0);
        let g = b.build();

        assert_eq!(sorted_paths(&g, "A", "A"), vec![vec!["A"]]);
    }

    #[test]
    fn zero_weight_edges_terminate() {
        let mut b = GraphBuilder::new();
        b.add_edge("A", "B", 0.0);
        b.add_edge("B", "C", 0.0);
        b.add_edge("A", "C", 0.0);
        let g = b.build();

        let paths = sorted_paths(&g, "A", "C");
        assert!(paths.contains(&vec!["A".to_string(), "C".to_string()]));
        assert!(paths.iter().all(|p| p.first().unwrap() == "A" && p.last().unwrap() == "C"));
    }

    #[test]
    fn induced_subgraph_keeps_internal_edges_once() {
        let mut b = GraphBuilder::new();
        b.add_edge("A", "B", 1.0);
        b.add_edge("B", "C", 2.0);
        b.add_edge("C", "D", 3.0);
        b.add_edge("B", "B", 0.5);
        let g = b.build();

        let seeds = vec!["B".to_string(), "C".to_string(), "missing".to_string()];
        let mut edges: Vec<(String, String, f64)> = induced_subgraph(&g, &seeds)
            .into_iter()
            .map(|e| (e.source, e.target, e.weight))
            .collect();
        edges.sort_by(|x, y| x.2.partial_cmp(&y.2).unwrap());

        assert_eq!(
            edges,
            vec![
                ("B".to_string(), "B".to_string(), 0.5),
                ("B".to_string(), "C".to_string(), 2.0),
            ]
        );
    }
}
