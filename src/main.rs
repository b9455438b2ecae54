use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use cluster_path_expander::cluster::{expansion, loader, metrics};
use cluster_path_expander::config::{ExpansionConfig, GraphFormat};
use cluster_path_expander::data::{self, preprocessing, seeds};
use cluster_path_expander::storage::{self, OutputPaths};

#[derive(Parser, Debug)]
#[clap(
    name = "cluster-path-expander",
    about = "Shortest-path expansion and validation of external clusters on a weighted network"
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Verbose logging
    #[clap(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand clusters with the nodes on shortest paths between their members
    Expand(ExpandArgs),

    /// Extract the subgraph induced by each seed group
    Subgraph(SubgraphArgs),
}

/// Where the network comes from
#[derive(Args, Debug)]
struct GraphArgs {
    /// Network file: weighted edge list or adjacency matrix
    #[clap(long, short)]
    input: String,

    /// Layout of the network file
    #[clap(long, value_enum, default_value_t = GraphFormat::Edges)]
    format: GraphFormat,

    /// Node names for matrix input, one per line
    #[clap(long, short)]
    nodes: Option<String>,
}

#[derive(Args, Debug)]
struct ExpandArgs {
    #[clap(flatten)]
    graph: GraphArgs,

    /// File with external clustering (cluster_id<TAB>node_id)
    #[clap(long, short)]
    external: String,

    /// Expanded clusters output file
    #[clap(long, short, default_value = storage::DEFAULT_CLUSTERS_FILE)]
    output: PathBuf,

    /// Metrics by cluster output file
    #[clap(long, short = 'E', default_value = storage::DEFAULT_STATS_FILE)]
    output_cluster_stats: PathBuf,

    /// Activate metrics by cluster
    #[clap(long, short = 'g')]
    cluster_stats: bool,

    /// Allow expanding clusters with unconnected members
    #[clap(long, short)]
    partial_clusters: bool,

    /// Write every shortest path found to this file
    #[clap(long)]
    output_paths: Option<PathBuf>,

    /// Write a JSON run summary to this file
    #[clap(long)]
    summary: Option<PathBuf>,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,
}

#[derive(Args, Debug)]
struct SubgraphArgs {
    #[clap(flatten)]
    graph: GraphArgs,

    /// Seed groups (name<TAB>seed1,seed2,...)
    #[clap(long, short)]
    seedgroups: String,

    /// Subgraph edges output file
    #[clap(long, short, default_value = "subgraphs.txt")]
    output: PathBuf,
}

fn run_expand(args: ExpandArgs) -> Result<()> {
    let config = ExpansionConfig::new(args.partial_clusters, args.cluster_stats, args.threads);

    // 1. Load inputs
    let graph = data::load_graph(&args.graph.input, args.graph.format, args.graph.nodes.as_deref())?;
    let clusters = loader::load_clusters(&args.external)?;

    // 2. Expand clusters
    let expansions = expansion::expand_clusters(clusters, &graph, &config)?;
    let summary = metrics::summarize(&expansions);
    log::info!(
        "{} clusters reported ({} complete, {} aborted), {} skipped",
        summary.clusters_reported,
        summary.clusters_complete,
        summary.clusters_aborted,
        summary.clusters_skipped
    );

    // 3. Save results
    let outputs = OutputPaths {
        clusters: args.output,
        cluster_stats: args.output_cluster_stats,
        paths: args.output_paths,
        summary: args.summary,
    };
    storage::save_results(&expansions, &summary, &config, &outputs)?;

    Ok(())
}

fn run_subgraph(args: SubgraphArgs) -> Result<()> {
    let graph = data::load_graph(&args.graph.input, args.graph.format, args.graph.nodes.as_deref())?;
    let groups = seeds::load_seed_groups(&args.seedgroups)?;
    log::info!("Loaded {} seed groups", groups.len());

    let subgraphs = preprocessing::extract_seed_subgraphs(&graph, groups);
    storage::save_subgraphs(&subgraphs, &args.output)?;

    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    match args.command {
        Command::Expand(expand) => run_expand(expand)?,
        Command::Subgraph(subgraph) => run_subgraph(subgraph)?,
    }

    log::info!("Done");

    Ok(())
}
