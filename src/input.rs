use std::io::Read;

use anyhow::{bail, Context, Result};

use crate::graph::{Cost, Graph, NodeId};

/// Builds a graph from an edge list, adding every edge in both directions.
/// Negative or NaN distances are rejected.
pub fn graph_from_edges(
    house_count: usize,
    school_count: usize,
    edges: &[(NodeId, NodeId, Cost)],
) -> Result<Graph> {
    let mut graph = Graph::with_partition(house_count, school_count)?;
    for (i, &(a, b, dist)) in edges.iter().enumerate() {
        if dist.is_nan() || dist < 0.0 {
            bail!(
                "edge {} ({a}, {b}) has negative or undefined distance {dist}",
                i + 1
            );
        }
        graph
            .add_edge(a, b, dist)
            .with_context(|| format!("adding edge {a} -> {b}"))?;
        graph
            .add_edge(b, a, dist)
            .with_context(|| format!("adding edge {b} -> {a}"))?;
    }
    Ok(graph)
}

fn parse_token<T>(token: Option<&str>, what: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let token = token.with_context(|| format!("missing {what}"))?;
    token
        .parse()
        .with_context(|| format!("parsing {what} from {token:?}"))
}

/// Reads the whitespace separated text format: the number of houses, the
/// number of schools, then `vertex_a vertex_b distance` triples up to the end
/// of input.
pub fn read_graph<R: Read>(mut reader: R) -> Result<Graph> {
    let mut text = String::new();
    reader.read_to_string(&mut text).context("reading input")?;

    let mut tokens = text.split_whitespace();
    let house_count: usize = parse_token(tokens.next(), "house count")?;
    let school_count: usize = parse_token(tokens.next(), "school count")?;

    let mut edges = Vec::new();
    while let Some(first) = tokens.next() {
        let n = edges.len() + 1;
        let a: NodeId = parse_token(Some(first), &format!("vertex of edge {n}"))?;
        let b: NodeId = parse_token(tokens.next(), &format!("vertex of edge {n}"))?;
        let dist: Cost = parse_token(tokens.next(), &format!("distance of edge {n}"))?;
        edges.push((a, b, dist));
    }

    graph_from_edges(house_count, school_count, &edges)
}
