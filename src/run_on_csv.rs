use anyhow::{Context, Result};
use clap::Parser;
use csv::ReaderBuilder;
use school_cover::{input, plan, Cost, Graph, NodeId};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "school-cover-csv")]
#[command(about = "Build a house/school network from a CSV edge list (vertex_a,vertex_b,distance) and pick covering schools.", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: String,

    /// Number of houses. Labels 0..houses are houses.
    #[arg(long)]
    houses: usize,

    /// Number of schools. They follow the houses.
    #[arg(long)]
    schools: usize,

    /// Dump the parsed graph to stderr before planning
    #[arg(long, default_value_t = false)]
    print_graph: bool,
}

fn parse_csv_and_build_graph(path: &str, houses: usize, schools: usize) -> Result<Graph> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true) // important: skip header line
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path))?;

    let mut edges: Vec<(NodeId, NodeId, Cost)> = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("reading row {}", row + 1))?;
        let field = |i: usize| {
            record
                .get(i)
                .with_context(|| format!("row {} has no column {}", row + 1, i))
        };
        let a: NodeId = field(0)?.parse().with_context(|| format!("row {}: vertex_a", row + 1))?;
        let b: NodeId = field(1)?.parse().with_context(|| format!("row {}: vertex_b", row + 1))?;
        let dist: Cost = field(2)?.parse().with_context(|| format!("row {}: distance", row + 1))?;
        edges.push((a, b, dist));
    }
    info!(edges = edges.len(), "read csv edge list");

    input::graph_from_edges(houses, schools, &edges)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut graph = parse_csv_and_build_graph(&cli.csv, cli.houses, cli.schools)?;
    if cli.print_graph {
        eprint!("{graph}");
    }

    let plan = plan(&mut graph).context("ERROR! The input is invalid")?;
    for school in &plan.schools {
        println!("{}", school);
    }

    Ok(())
}
