use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use school_cover::{input, plan};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "school-cover")]
#[command(about = "Read a house/school road network and pick schools that cover every house within the distance bound.", long_about = None)]
struct Cli {
    /// Path to the input file (house count, school count, then `a b distance` lines). Reads stdin if omitted.
    #[arg(short, long)]
    input: Option<String>,

    /// Dump the parsed graph to stderr before planning
    #[arg(long, default_value_t = false)]
    print_graph: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut graph = match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path))?;
            input::read_graph(BufReader::new(file))
                .with_context(|| format!("reading graph from {}", path))?
        }
        None => input::read_graph(io::stdin().lock()).context("reading graph from stdin")?,
    };

    if cli.print_graph {
        eprint!("{graph}");
    }

    let plan = plan(&mut graph).context("ERROR! The input is invalid")?;
    for school in &plan.schools {
        println!("{}", school);
    }

    Ok(())
}
