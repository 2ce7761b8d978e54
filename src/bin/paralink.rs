//! Paralink CLI: inspect the relationship graph of a record dump.
//!
//! Usage:
//!   paralink stats <records.json> [--config explorer.yaml]
//!   paralink search <records.json> <text> [--kind project]
//!   paralink neighbors <records.json> <id> [--limit 5]
//!   paralink degrees <records.json>
//!   paralink export <records.json>
//!
//! The dump is a JSON object with `projects`, `tasks`, `notes`, `people`,
//! `goals` and `habits` arrays.

use clap::{Parser, Subcommand};
use paralink::refresh::{fetch_all, RecordSource, StaticSource};
use paralink::stats::degree_table;
use paralink::{
    ExplorerConfig, KindFilter, NodeId, NodeKind, ParalinkResult, PublishedGraph,
    RefreshController, SourceCollections,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "paralink",
    version,
    about = "Cross-entity relationship graph explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Explorer config file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print node/edge counts and the most connected nodes
    Stats {
        /// Path to the JSON record dump
        records: PathBuf,
    },
    /// Search node titles
    Search {
        /// Path to the JSON record dump
        records: PathBuf,
        /// Case-insensitive substring
        text: String,
        /// Restrict to one kind (project, task, note, person, goal, habit, all)
        #[arg(long, default_value = "all")]
        kind: String,
    },
    /// List the resolved references of a node
    Neighbors {
        /// Path to the JSON record dump
        records: PathBuf,
        /// Node id
        id: String,
        /// Maximum neighbors shown (defaults to the config value)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print in/out degrees of every node
    Degrees {
        /// Path to the JSON record dump
        records: PathBuf,
    },
    /// Dump the built snapshot as JSON
    Export {
        /// Path to the JSON record dump
        records: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> ParalinkResult<ExplorerConfig> {
    match path {
        Some(path) => ExplorerConfig::load(path),
        None => Ok(ExplorerConfig::default()),
    }
}

/// Feed the dump through the same fetch → deliver → refresh path the UI uses
async fn load_graph(records: &Path, config: ExplorerConfig) -> ParalinkResult<Arc<PublishedGraph>> {
    let collections = SourceCollections::load(records)?;
    let sources: Vec<Arc<dyn RecordSource>> = NodeKind::ALL
        .into_iter()
        .map(|kind| {
            let records = collections.get(kind).to_vec();
            Arc::new(StaticSource::new(kind, records)) as Arc<dyn RecordSource>
        })
        .collect();

    let outcome = fetch_all(&sources).await;
    if let Some(err) = outcome.failures.into_iter().next() {
        return Err(err);
    }

    let controller = RefreshController::new(config);
    controller.deliver_batch(outcome.updates);
    Ok(controller.current())
}

fn print_node_line(node: &paralink::Node) {
    println!(
        "{:<24}  {:<8}  {:<12}  {}",
        node.id,
        node.kind,
        node.status.as_deref().unwrap_or("-"),
        node.title
    );
}

fn cmd_stats(graph: &PublishedGraph) -> i32 {
    let stats = &graph.stats;
    println!("Nodes: {}", stats.total_nodes);
    println!("Edges: {}", stats.total_edges);
    for (kind, count) in &stats.counts_by_kind {
        println!("  {:<8} {:>6}", kind, count);
    }
    if stats.dangling_references > 0 {
        println!("Dangling references: {}", stats.dangling_references);
    }
    if stats.skipped_records > 0 {
        println!("Skipped records: {}", stats.skipped_records);
    }
    println!();
    println!("Most connected:");
    for node in graph.top_connected_nodes() {
        println!("  {:>3}  {}  ({})", node.degree(), node.title, node.id);
    }
    0
}

fn cmd_search(graph: &PublishedGraph, text: &str, kind: &str) -> i32 {
    let filter: KindFilter = match kind.parse() {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 2;
        }
    };
    let hits = graph.snapshot.search(text, filter);
    if hits.is_empty() {
        println!("No matches.");
        return 0;
    }
    for node in hits {
        print_node_line(node);
    }
    0
}

fn cmd_neighbors(graph: &PublishedGraph, id: &str, limit: usize) -> i32 {
    let id = NodeId::from(id);
    if graph.snapshot.get(&id).is_none() {
        eprintln!("Error: node '{}' not found", id);
        return 1;
    }
    let neighbors = graph.snapshot.neighbors(&id, limit);
    for node in &neighbors.nodes {
        print_node_line(node);
    }
    if neighbors.remaining > 0 {
        println!("+{} more", neighbors.remaining);
    }
    if neighbors.dangling > 0 {
        println!("({} unresolved references)", neighbors.dangling);
    }
    0
}

fn cmd_degrees(graph: &PublishedGraph) -> i32 {
    println!("{:<24}  {:>4}  {:>4}  {:>6}", "ID", "OUT", "IN", "WEIGHT");
    println!("{}", "-".repeat(44));
    for row in degree_table(&graph.snapshot) {
        println!(
            "{:<24}  {:>4}  {:>4}  {:>6}",
            row.id, row.out_degree, row.in_degree, row.weighted_degree
        );
    }
    0
}

fn cmd_export(graph: &PublishedGraph) -> i32 {
    match serde_json::to_string_pretty(&graph.snapshot) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let records = match &cli.command {
        Commands::Stats { records }
        | Commands::Search { records, .. }
        | Commands::Neighbors { records, .. }
        | Commands::Degrees { records }
        | Commands::Export { records } => records.clone(),
    };

    let graph = match load_graph(&records, config).await {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: failed to load {}: {}", records.display(), e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Stats { .. } => cmd_stats(&graph),
        Commands::Search { text, kind, .. } => cmd_search(&graph, &text, &kind),
        Commands::Neighbors { id, limit, .. } => {
            cmd_neighbors(&graph, &id, limit.unwrap_or(config.neighbor_limit))
        }
        Commands::Degrees { .. } => cmd_degrees(&graph),
        Commands::Export { .. } => cmd_export(&graph),
    };
    std::process::exit(code);
}
