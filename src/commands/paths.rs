//! `digraph paths` command

use std::path::Path;

use serde_json::json;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::view::node_views;
use digraph_core::error::Result;
use digraph_core::format::{format_distance, format_node_ids};
use digraph_core::graph::{AdjacencyMatrix, NodeId, PathResult};
use digraph_core::load::parse_weighted;

/// Execute the paths command
pub fn execute(ctx: &CommandContext, file: &Path, pair: Option<(NodeId, NodeId)>) -> Result<()> {
    let input = ctx.read_input(file)?;
    let requests = parse_weighted(&input)?;

    debug!(graphs = requests.len(), "parse_weighted");

    let mut graphs = Vec::with_capacity(requests.len());
    for request in &requests {
        let mut graph = AdjacencyMatrix::new(&ctx.config);
        graph.build(request)?;
        graph.compute_shortest_paths();
        graphs.push(graph);
    }

    match ctx.cli.format {
        OutputFormat::Json => {
            let mut rendered = Vec::with_capacity(graphs.len());
            for graph in &graphs {
                rendered.push(graph_json(graph, pair)?);
            }
            let output = json!({ "graphs": rendered });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for graph in &graphs {
                match pair {
                    Some((from, to)) => print_pair(graph, from, to)?,
                    None => print_all(graph, ctx.cli.quiet)?,
                }
            }
        }
    }

    debug!(elapsed = ?ctx.start.elapsed(), "paths");
    Ok(())
}

fn graph_json(graph: &AdjacencyMatrix, pair: Option<(NodeId, NodeId)>) -> Result<serde_json::Value> {
    let nodes = node_views(graph.labels());
    let paths = match pair {
        Some((from, to)) => vec![graph.distance_and_path(from, to)?],
        None => all_pairs(graph)?,
    };

    Ok(json!({ "nodes": nodes, "paths": paths }))
}

/// Every ordered pair of distinct nodes, row-major by source
fn all_pairs(graph: &AdjacencyMatrix) -> Result<Vec<PathResult>> {
    let mut results = Vec::new();
    for from in graph.node_ids() {
        for to in graph.node_ids().filter(|&to| to != from) {
            results.push(graph.distance_and_path(from, to)?);
        }
    }
    Ok(results)
}

fn pair_line(result: &PathResult) -> String {
    format!(
        "{:<11}{:<9}{:<12}{}",
        result.from,
        result.to,
        format_distance(result.distance),
        format_node_ids(&result.path)
    )
}

fn print_all(graph: &AdjacencyMatrix, quiet: bool) -> Result<()> {
    if !quiet {
        println!(
            "{:<26}{:<11}{:<9}{:<12}{}",
            "Description", "From node", "To node", "Dijkstra's", "Path"
        );
    }

    for from in graph.node_ids() {
        println!("{}", graph.label(from)?);
        for to in graph.node_ids().filter(|&to| to != from) {
            let result = graph.distance_and_path(from, to)?;
            println!("{:<26}{}", "", pair_line(&result));
        }
    }

    if !quiet {
        println!();
    }
    Ok(())
}

fn print_pair(graph: &AdjacencyMatrix, from: NodeId, to: NodeId) -> Result<()> {
    let result = graph.distance_and_path(from, to)?;
    println!("{}", pair_line(&result));
    for &id in &result.path {
        println!("{}", graph.label(id)?);
        println!();
    }
    println!();
    Ok(())
}
