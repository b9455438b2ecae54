//! Shortest-path expansion of external clusters

use crate::cluster::metrics::average_path_length;
use crate::cluster::{
    Cluster, ClusterExpansion, ClusterPathStats, ExpandedCluster, ExpansionState, PathRecord,
};
use crate::config::ExpansionConfig;
use crate::graph::algorithms::shortest_path_tree;
use crate::graph::{ShortestPathTree, WeightedGraph};
use anyhow::Result;
use itertools::Itertools;
use petgraph::graph::NodeIndex;
use rayon::prelude::*;
use std::collections::HashSet;
use std::ops::ControlFlow;

/// Nodes and paths accumulated while walking the member pairs of one cluster
struct PathClosure<'a> {
    cluster_id: &'a str,
    graph: &'a WeightedGraph,
    nodes: Vec<NodeIndex>,
    seen: HashSet<NodeIndex>,
    paths: Vec<PathRecord>,
    unreachable_pairs: usize,
}

impl<'a> PathClosure<'a> {
    fn new(cluster_id: &'a str, graph: &'a WeightedGraph) -> Self {
        Self {
            cluster_id,
            graph,
            nodes: Vec::new(),
            seen: HashSet::new(),
            paths: Vec::new(),
            unreachable_pairs: 0,
        }
    }

    /// Record every shortest path from the tree's source to `target`.
    ///
    /// Breaks when the pair is unreachable and partial clusters are not allowed.
    fn visit_pair(
        &mut self,
        tree: &ShortestPathTree,
        target: NodeIndex,
        allow_partial: bool,
    ) -> ControlFlow<()> {
        let source_id = self.graph.node_id(tree.source());
        let target_id = self.graph.node_id(target);
        let paths = tree.paths_to(target);

        if paths.is_empty() {
            if allow_partial {
                log::warn!(
                    "No path between {} and {} in cluster {}, pair skipped",
                    source_id,
                    target_id,
                    self.cluster_id
                );
                self.unreachable_pairs += 1;
                return ControlFlow::Continue(());
            }
            log::warn!(
                "No path between {} and {} in cluster {}, expansion stopped",
                source_id,
                target_id,
                self.cluster_id
            );
            return ControlFlow::Break(());
        }

        for path in paths {
            for &node in &path {
                if self.seen.insert(node) {
                    self.nodes.push(node);
                }
            }
            self.paths.push(PathRecord {
                source: source_id.to_string(),
                target: target_id.to_string(),
                length: path.len(),
                nodes: path
                    .iter()
                    .map(|&n| self.graph.node_id(n).to_string())
                    .collect(),
            });
        }

        ControlFlow::Continue(())
    }
}

/// Split members into those present in the graph and those missing from it
fn filter_members(
    cluster_id: &str,
    members: Vec<String>,
    graph: &WeightedGraph,
) -> (Vec<NodeIndex>, Vec<String>) {
    let mut present = Vec::with_capacity(members.len());
    let mut missing = Vec::new();

    for member in members {
        match graph.node_index(&member) {
            Some(idx) => present.push(idx),
            None => {
                log::warn!(
                    "Node {} from cluster {} does not exist in network",
                    member,
                    cluster_id
                );
                missing.push(member);
            }
        }
    }

    (present, missing)
}

/// Expand one cluster into the shortest-path closure of its members.
///
/// Members are compared as unordered pairs `(m[i], m[j])` with `i < j`, so
/// each source is paired with every member after it. One shortest-path tree
/// is grown per source. An unreachable pair is skipped when `allow_partial`
/// is set; otherwise it stops the cluster, keeping the nodes gathered so far
/// but leaving the average path length undefined.
pub fn expand_cluster(
    cluster: Cluster,
    graph: &WeightedGraph,
    allow_partial: bool,
) -> ClusterExpansion {
    let Cluster { id, members } = cluster;
    let (present, missing_members) = filter_members(&id, members, graph);

    if present.len() < 2 {
        log::debug!(
            "Cluster {} has {} member(s) in the network, skipped",
            id,
            present.len()
        );
        return ClusterExpansion {
            state: ExpansionState::Skipped,
            expanded: ExpandedCluster {
                id: id.clone(),
                nodes: Vec::new(),
            },
            stats: ClusterPathStats { id, average: None },
            paths: Vec::new(),
            missing_members,
            unreachable_pairs: 0,
        };
    }

    let mut closure = PathClosure::new(&id, graph);
    let mut tree: Option<ShortestPathTree> = None;

    let flow = present
        .iter()
        .copied()
        .tuple_combinations::<(NodeIndex, NodeIndex)>()
        .try_for_each(|(source, target)| {
            if tree.as_ref().is_some_and(|t| t.source() != source) {
                tree = None;
            }
            let current = tree.get_or_insert_with(|| shortest_path_tree(graph, source));
            closure.visit_pair(current, target, allow_partial)
        });

    let state = if flow.is_break() {
        ExpansionState::Aborted
    } else {
        ExpansionState::Complete
    };

    let average = match state {
        ExpansionState::Complete => average_path_length(&closure.paths),
        _ => None,
    };

    let nodes: Vec<String> = closure
        .nodes
        .iter()
        .map(|&n| graph.node_id(n).to_string())
        .collect();
    let paths = closure.paths;
    let unreachable_pairs = closure.unreachable_pairs;

    log::debug!(
        "Cluster {}: {:?}, {} paths, {} nodes",
        id,
        state,
        paths.len(),
        nodes.len()
    );

    ClusterExpansion {
        state,
        expanded: ExpandedCluster {
            id: id.clone(),
            nodes,
        },
        stats: ClusterPathStats { id, average },
        paths,
        missing_members,
        unreachable_pairs,
    }
}

/// Expand every cluster on a pool of worker threads.
///
/// The graph is shared read-only; results keep the input cluster order.
pub fn expand_clusters(
    clusters: Vec<Cluster>,
    graph: &WeightedGraph,
    config: &ExpansionConfig,
) -> Result<Vec<ClusterExpansion>> {
    let num_threads = config.worker_threads();
    log::info!(
        "Expanding {} clusters on {} worker threads (partial clusters: {})",
        clusters.len(),
        num_threads,
        config.allow_partial
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()?;

    let allow_partial = config.allow_partial;
    let expansions = pool.install(|| {
        clusters
            .into_par_iter()
            .map(|cluster| expand_cluster(cluster, graph, allow_partial))
            .collect::<Vec<_>>()
    });

    Ok(expansions)
}
