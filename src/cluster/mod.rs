//! Cluster loading, expansion and statistics

pub mod loader;
pub mod expansion;
pub mod metrics;

use serde::Serialize;

/// An externally supplied cluster, as read from the clustering file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    /// Cluster identifier from the first column
    pub id: String,

    /// Member node ids in file order, duplicates kept
    pub members: Vec<String>,
}

impl Cluster {
    pub fn new(id: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            id: id.into(),
            members,
        }
    }
}

/// One shortest path between two cluster members
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathRecord {
    pub source: String,
    pub target: String,

    /// Nodes from source to target inclusive
    pub nodes: Vec<String>,

    /// Number of nodes on the path
    pub length: usize,
}

/// Shortest-path closure of a cluster.
///
/// `nodes` holds no duplicates; its order is first-visited and carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedCluster {
    pub id: String,
    pub nodes: Vec<String>,
}

/// Average path length of a cluster, `None` when undefined
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterPathStats {
    pub id: String,
    pub average: Option<f64>,
}

/// Terminal state of a cluster expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpansionState {
    /// Fewer than two members exist in the graph
    Skipped,
    /// Every member pair was evaluated
    Complete,
    /// An unreachable pair stopped the traversal
    Aborted,
}

/// Everything produced for one cluster
#[derive(Debug, Clone)]
pub struct ClusterExpansion {
    pub state: ExpansionState,
    pub expanded: ExpandedCluster,
    pub stats: ClusterPathStats,
    pub paths: Vec<PathRecord>,

    /// Members dropped because the graph does not contain them
    pub missing_members: Vec<String>,

    /// Pairs skipped under the partial policy
    pub unreachable_pairs: usize,
}

impl ClusterExpansion {
    /// Cluster identifier
    pub fn id(&self) -> &str {
        &self.expanded.id
    }

    /// Whether the cluster takes part in the outputs
    pub fn is_reported(&self) -> bool {
        self.state != ExpansionState::Skipped
    }
}
