use adjacency_matrix_pathfinder::{
    cost::summarize,
    dijkstra::solve,
    labels::{VertexLabels, TERMINAL_LABEL},
    parser::parse_map_file,
    VertexId,
};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Shortest path through a letter-labelled map, with the potion cost of the trip
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the map file
    #[arg(short, long)]
    input: PathBuf,

    /// Label of the starting vertex
    #[arg(short, long, default_value = "A")]
    source: String,

    /// Label of the destination vertex
    #[arg(short, long, default_value = TERMINAL_LABEL)]
    destination: String,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn lookup(labels: &VertexLabels, label: &str) -> anyhow::Result<VertexId> {
    labels
        .index_of(label)
        .ok_or_else(|| anyhow!("vertex `{}` is not in this map", label))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let file_name = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());
    println!("Hello! For file {}: ", file_name);

    let map = parse_map_file(&args.input)
        .with_context(|| format!("failed to load map from {}", args.input.display()))?;
    info!(
        vertices = map.graph.num_vertices(),
        edges = map.graph.num_edges(),
        "map loaded"
    );

    let source = lookup(&map.labels, &args.source)?;
    let destination = lookup(&map.labels, &args.destination)?;

    let start_time = std::time::Instant::now();
    let result = solve(&map.graph, source)?;
    info!(elapsed_us = start_time.elapsed().as_micros() as u64, "solved");

    let summary = summarize(&result, destination);
    println!("{}", summary.render(&map.labels));

    Ok(())
}
