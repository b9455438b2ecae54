//! Cluster path statistics

use crate::cluster::{ClusterExpansion, ExpansionState, PathRecord};
use serde::Serialize;
use statrs::statistics::Statistics;

/// Marker written in place of an undefined average path length
pub const UNDEFINED_MARKER: &str = "None";

/// Average number of edges on the recorded paths.
///
/// Path lengths are node counts, so the mean is shifted by one to count
/// edges. `None` when nothing was recorded.
pub fn average_path_length(paths: &[PathRecord]) -> Option<f64> {
    if paths.is_empty() {
        return None;
    }
    let total: usize = paths.iter().map(|p| p.length).sum();
    Some(total as f64 / paths.len() as f64 - 1.0)
}

/// Format an average the way the stats file expects it
pub fn format_average(average: Option<f64>) -> String {
    match average {
        // Debug keeps the decimal point on whole numbers ("2.0")
        Some(value) => format!("{:?}", value),
        None => UNDEFINED_MARKER.to_string(),
    }
}

/// Aggregate figures over a whole expansion run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpansionSummary {
    pub clusters_loaded: usize,
    pub clusters_reported: usize,
    pub clusters_skipped: usize,
    pub clusters_complete: usize,
    pub clusters_aborted: usize,
    pub missing_members: usize,
    pub unreachable_pairs: usize,
    pub recorded_paths: usize,
    pub expanded_nodes: usize,
    pub average_path_length: Option<AverageDistribution>,
}

/// Distribution of the defined per-cluster averages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageDistribution {
    pub clusters: usize,
    pub mean: f64,
    /// Sample standard deviation, absent for a single cluster
    pub std_dev: Option<f64>,
    pub min: f64,
    pub max: f64,
}

/// Summarize the result of expanding every cluster
pub fn summarize(expansions: &[ClusterExpansion]) -> ExpansionSummary {
    let count = |state: ExpansionState| expansions.iter().filter(|e| e.state == state).count();

    let averages: Vec<f64> = expansions
        .iter()
        .filter(|e| e.is_reported())
        .filter_map(|e| e.stats.average)
        .collect();

    let average_path_length = if averages.is_empty() {
        None
    } else {
        let std_dev = averages.iter().std_dev();
        Some(AverageDistribution {
            clusters: averages.len(),
            mean: averages.iter().mean(),
            std_dev: (!std_dev.is_nan()).then_some(std_dev),
            min: Statistics::min(averages.iter()),
            max: Statistics::max(averages.iter()),
        })
    };

    ExpansionSummary {
        clusters_loaded: expansions.len(),
        clusters_reported: expansions.iter().filter(|e| e.is_reported()).count(),
        clusters_skipped: count(ExpansionState::Skipped),
        clusters_complete: count(ExpansionState::Complete),
        clusters_aborted: count(ExpansionState::Aborted),
        missing_members: expansions.iter().map(|e| e.missing_members.len()).sum(),
        unreachable_pairs: expansions.iter().map(|e| e.unreachable_pairs).sum(),
        recorded_paths: expansions.iter().map(|e| e.paths.len()).sum(),
        expanded_nodes: expansions.iter().map(|e| e.expanded.nodes.len()).sum(),
        average_path_length,
    }
}
