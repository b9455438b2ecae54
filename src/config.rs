//! Configuration management for the cluster path expander

use clap::ValueEnum;

/// On-disk layout of the input graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    /// `node_a<TAB>node_b<TAB>weight` lines
    Edges,
    /// Square whitespace-separated matrix, optional node name file
    Matrix,
    /// Square binary NumPy `.npy` matrix, optional node name file
    Npy,
}

/// Settings for a cluster expansion run
#[derive(Debug, Clone)]
pub struct ExpansionConfig {
    /// Skip unreachable member pairs instead of aborting the cluster
    pub allow_partial: bool,

    /// Compute and write the per-cluster average path length
    pub cluster_stats: bool,

    /// Worker threads for processing clusters (0 = all available cores)
    pub threads: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            allow_partial: false,
            cluster_stats: false,
            threads: 0,
        }
    }
}

impl ExpansionConfig {
    /// Create a new configuration with custom values
    pub fn new(allow_partial: bool, cluster_stats: bool, threads: usize) -> Self {
        Self {
            allow_partial,
            cluster_stats,
            threads,
        }
    }

    /// Number of worker threads actually used
    pub fn worker_threads(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get()
        }
    }
}
