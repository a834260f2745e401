//! `digraph dfs` command

use std::path::Path;

use serde_json::json;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::view::{node_views, EdgeView};
use digraph_core::error::Result;
use digraph_core::format::format_node_ids;
use digraph_core::graph::{AdjacencyList, Traversal};
use digraph_core::load::parse_unweighted;

/// Execute the dfs command
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let input = ctx.read_input(file)?;
    let requests = parse_unweighted(&input)?;

    debug!(graphs = requests.len(), "parse_unweighted");

    let mut results = Vec::with_capacity(requests.len());
    for request in &requests {
        let mut graph = AdjacencyList::new(&ctx.config);
        graph.build(request)?;
        let traversal = graph.depth_first_traversal();
        results.push((graph, traversal));
    }

    match ctx.cli.format {
        OutputFormat::Json => {
            let mut rendered = Vec::with_capacity(results.len());
            for (graph, traversal) in &results {
                rendered.push(graph_json(graph, traversal)?);
            }
            let output = json!({ "graphs": rendered });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for (graph, traversal) in &results {
                if !ctx.cli.quiet {
                    print_graph(graph)?;
                }
                println!("Depth-first ordering: {}", format_node_ids(&traversal.order));
                println!();
            }
        }
    }

    debug!(elapsed = ?ctx.start.elapsed(), "dfs");
    Ok(())
}

fn graph_json(graph: &AdjacencyList, traversal: &Traversal) -> Result<serde_json::Value> {
    let nodes = node_views(graph.labels());

    let mut edges = Vec::with_capacity(graph.edge_count());
    for from in graph.node_ids() {
        for to in graph.neighbors(from)? {
            edges.push(EdgeView { from, to });
        }
    }

    Ok(json!({ "nodes": nodes, "edges": edges, "order": traversal.order }))
}

fn print_graph(graph: &AdjacencyList) -> Result<()> {
    println!("Graph:");
    for id in graph.node_ids() {
        println!("{:<13}{}", format!("Node {id}"), graph.label(id)?);
        println!();
        for to in graph.neighbors(id)? {
            println!("{:>6} {} {:>2}", "edge", id, to);
        }
    }
    println!();
    Ok(())
}
