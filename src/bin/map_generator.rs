use adjacency_matrix_pathfinder::{
    cost::summarize,
    dijkstra::solve,
    labels::{render_path, VertexLabels, MAX_LABELLED_VERTICES},
    Graph, Weight,
};
use anyhow::{bail, Context};
use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Map Generator for the pathfinder.
///
/// Produces a map file in the format the pathfinder reads: one line per
/// vertex except the terminal `X`, each listing the source label followed by
/// `destination weight` pairs.
///
/// ```text
/// # comment
/// A B 12 C 40
/// B X 95
/// C
/// ```
///
/// With `--chain` a random route `A -> ... -> X` through every vertex is
/// embedded first, so the terminal is always reachable. The remaining edges
/// are sampled independently with probability `--density`.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random maps for the pathfinder")]
struct Args {
    /// Number of vertices including the terminal X (2..=24)
    #[arg(short, long)]
    vertices: usize,

    /// Probability of an edge between any ordered pair (excluding self-loops)
    #[arg(long, default_value_t = 0.25)]
    density: f64,

    /// Maximum edge weight (weights are uniform in [1, max])
    #[arg(long, default_value_t = 60)]
    max_weight: Weight,

    /// Embed a route from A to X through every vertex
    #[arg(long, default_value_t = false)]
    chain: bool,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
}

/// Build a random weighted adjacency matrix; the terminal row stays empty
fn generate_matrix<R: Rng>(n: usize, density: f64, max_weight: Weight, rng: &mut R) -> Vec<Vec<Weight>> {
    let mut adj = vec![vec![0; n]; n];
    for (i, row) in adj.iter_mut().enumerate().take(n - 1) {
        for (j, val) in row.iter_mut().enumerate() {
            if i == j {
                continue;
            }
            if rng.gen::<f64>() < density {
                *val = rng.gen_range(1..=max_weight);
            }
        }
    }
    adj
}

/// Overlay a route 0 -> (shuffled middle vertices) -> n-1
fn embed_chain<R: Rng>(adj: &mut [Vec<Weight>], max_weight: Weight, rng: &mut R) -> Vec<usize> {
    let n = adj.len();
    let mut middle: Vec<usize> = (1..n - 1).collect();
    // Fisher-Yates shuffle
    for i in (1..middle.len()).rev() {
        let j = rng.gen_range(0..=i);
        middle.swap(i, j);
    }

    let route: Vec<usize> = std::iter::once(0)
        .chain(middle)
        .chain(std::iter::once(n - 1))
        .collect();
    for step in route.windows(2) {
        adj[step[0]][step[1]] = rng.gen_range(1..=max_weight);
    }
    route
}

/// Write one line per non-terminal vertex
fn write_map<W: Write>(writer: &mut W, adj: &[Vec<Weight>], labels: &VertexLabels) -> io::Result<()> {
    writeln!(writer, "# generated map: {} vertices, terminal X", adj.len())?;
    for (i, row) in adj.iter().enumerate().take(adj.len() - 1) {
        write!(writer, "{}", labels.label_or_index(i))?;
        for (j, &w) in row.iter().enumerate() {
            if w > 0 {
                write!(writer, " {} {}", labels.label_or_index(j), w)?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if !(2..=MAX_LABELLED_VERTICES).contains(&args.vertices) {
        bail!("vertices must be between 2 and {}", MAX_LABELLED_VERTICES);
    }
    if !(0.0..=1.0).contains(&args.density) {
        bail!("density must be in [0,1]");
    }
    if args.max_weight == 0 {
        bail!("max_weight must be positive");
    }

    // Initialize RNG
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let labels = VertexLabels::new(args.vertices)?;
    let mut adj = generate_matrix(args.vertices, args.density, args.max_weight, &mut rng);
    let route = if args.chain {
        Some(embed_chain(&mut adj, args.max_weight, &mut rng))
    } else {
        None
    };
    debug!(?route, "generated matrix");

    let mut writer = BufWriter::new(
        File::create(&args.output)
            .with_context(|| format!("failed to create {}", args.output.display()))?,
    );
    write_map(&mut writer, &adj, &labels)?;
    writer.flush()?;

    let graph = Graph::from_adjacency_matrix(adj)?;
    let summary = summarize(&solve(&graph, 0)?, labels.terminal());

    println!("Generated map:");
    println!("  vertices = {}", args.vertices);
    println!("  density = {:.3}", args.density);
    println!("  max_weight = {}", args.max_weight);
    if let Some(seed) = args.seed {
        println!("  seed = {}", seed);
    }
    if let Some(route) = &route {
        println!("  embedded route: {}", render_path(&labels, route));
    }
    println!("  non-zero edges: {}", graph.num_edges());
    match summary.distance() {
        Some(d) => println!("  shortest A -> X distance: {} (cost {})", d, summary.cost()),
        None => println!("  X is unreachable from A"),
    }
    println!("  output file: {:?}", args.output);

    Ok(())
}
