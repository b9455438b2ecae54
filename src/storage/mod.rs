//! Results persistence module

use crate::cluster::metrics::{format_average, ExpansionSummary};
use crate::cluster::ClusterExpansion;
use crate::config::ExpansionConfig;
use crate::data::seeds::SeedGroup;
use crate::graph::SubgraphEdge;
use anyhow::{Context, Result};
use serde_json::to_string_pretty;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default expanded clusters file
pub const DEFAULT_CLUSTERS_FILE: &str = "clusters.txt";

/// Default per-cluster stats file
pub const DEFAULT_STATS_FILE: &str = "stats_by_cluster.txt";

/// Destinations of an expansion run
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// Expanded clusters, always written
    pub clusters: PathBuf,

    /// Per-cluster stats, written only when stats are requested
    pub cluster_stats: PathBuf,

    /// Every recorded shortest path, if wanted
    pub paths: Option<PathBuf>,

    /// JSON run summary, if wanted
    pub summary: Option<PathBuf>,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            clusters: PathBuf::from(DEFAULT_CLUSTERS_FILE),
            cluster_stats: PathBuf::from(DEFAULT_STATS_FILE),
            paths: None,
            summary: None,
        }
    }
}

impl OutputPaths {
    /// Default file names placed inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            clusters: dir.join(DEFAULT_CLUSTERS_FILE),
            cluster_stats: dir.join(DEFAULT_STATS_FILE),
            paths: None,
            summary: None,
        }
    }
}

/// Save every requested output of an expansion run.
///
/// Called once all clusters are processed, so no file is left half written
/// by an interrupted expansion.
pub fn save_results(
    expansions: &[ClusterExpansion],
    summary: &ExpansionSummary,
    config: &ExpansionConfig,
    outputs: &OutputPaths,
) -> Result<()> {
    if config.cluster_stats {
        save_cluster_stats(expansions, &outputs.cluster_stats)?;
    }
    save_expanded_clusters(expansions, &outputs.clusters)?;
    if let Some(path) = &outputs.paths {
        save_path_records(expansions, path)?;
    }
    if let Some(path) = &outputs.summary {
        save_summary(summary, path)?;
    }
    Ok(())
}

/// Create `path` and hand a buffered writer to `write`, flushing at the end
fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer
        .flush()
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

/// Write `cluster_id<TAB>node_id` for every node of every reported cluster
pub fn write_expanded_clusters<W: Write>(writer: &mut W, expansions: &[ClusterExpansion]) -> Result<()> {
    for expansion in expansions.iter().filter(|e| e.is_reported()) {
        for node in &expansion.expanded.nodes {
            writeln!(writer, "{}\t{}", expansion.id(), node)?;
        }
    }
    Ok(())
}

/// Write `cluster_id<TAB>average` for every reported cluster
pub fn write_cluster_stats<W: Write>(writer: &mut W, expansions: &[ClusterExpansion]) -> Result<()> {
    for expansion in expansions.iter().filter(|e| e.is_reported()) {
        writeln!(
            writer,
            "{}\t{}",
            expansion.stats.id,
            format_average(expansion.stats.average)
        )?;
    }
    Ok(())
}

/// Write `cluster_id<TAB>source<TAB>target<TAB>length<TAB>n1,n2,...` per recorded path
pub fn write_path_records<W: Write>(writer: &mut W, expansions: &[ClusterExpansion]) -> Result<()> {
    for expansion in expansions {
        for path in &expansion.paths {
            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}",
                expansion.id(),
                path.source,
                path.target,
                path.length,
                path.nodes.join(",")
            )?;
        }
    }
    Ok(())
}

/// Write `group<TAB>node_a<TAB>node_b<TAB>weight` for every subgraph edge
pub fn write_subgraph_edges<W: Write>(
    writer: &mut W,
    subgraphs: &[(SeedGroup, Vec<SubgraphEdge>)],
) -> Result<()> {
    for (group, edges) in subgraphs {
        for edge in edges {
            writeln!(
                writer,
                "{}\t{}\t{}\t{:?}",
                group.name, edge.source, edge.target, edge.weight
            )?;
        }
    }
    Ok(())
}

/// Save the expanded clusters file
pub fn save_expanded_clusters(expansions: &[ClusterExpansion], path: &Path) -> Result<()> {
    log::info!("Saving expanded clusters to {}", path.display());
    write_file(path, |w| write_expanded_clusters(w, expansions))
}

/// Save the per-cluster stats file
pub fn save_cluster_stats(expansions: &[ClusterExpansion], path: &Path) -> Result<()> {
    log::info!("Saving cluster stats to {}", path.display());
    write_file(path, |w| write_cluster_stats(w, expansions))
}

/// Save every recorded shortest path
pub fn save_path_records(expansions: &[ClusterExpansion], path: &Path) -> Result<()> {
    log::info!("Saving shortest paths to {}", path.display());
    write_file(path, |w| write_path_records(w, expansions))
}

/// Save extracted subgraphs
pub fn save_subgraphs(subgraphs: &[(SeedGroup, Vec<SubgraphEdge>)], path: &Path) -> Result<()> {
    log::info!("Saving {} subgraphs to {}", subgraphs.len(), path.display());
    write_file(path, |w| write_subgraph_edges(w, subgraphs))
}

/// Save the run summary as pretty JSON
pub fn save_summary(summary: &ExpansionSummary, path: &Path) -> Result<()> {
    log::info!("Saving summary to {}", path.display());
    write_file(path, |w| {
        w.write_all(to_string_pretty(summary)?.as_bytes())?;
        Ok(())
    })
}
