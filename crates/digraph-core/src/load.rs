//! Text loader for graph description files
//!
//! A file holds any number of graphs back to back. Each graph is:
//!
//! ```text
//! 3              <- node count
//! Aurora         <- label of node 1
//! Borealis       <- label of node 2
//! Cascade        <- label of node 3
//! 1 2 50         <- edges: "from to weight" (or "from to" when unweighted)
//! 2 3 20
//! 0 0 0          <- terminator, first field 0
//! ```
//!
//! Node ids are not range-checked here; `build` does that.

use std::iter::{Enumerate, Peekable};
use std::str::{FromStr, Lines};

use crate::config::DEFAULT_MAX_NODES;
use crate::error::{GraphError, Result};
use crate::graph::types::{BuildRequest, Edge, EdgeTuple, Weight, WeightedEdge, NO_NODE};

/// Parse every weighted graph (`from to weight` edges) in `input`
pub fn parse_weighted(input: &str) -> Result<Vec<BuildRequest<WeightedEdge>>> {
    parse_graphs(input, 3, |line, fields| {
        Ok(WeightedEdge::new(
            parse_field(line, fields[0], "node id")?,
            parse_field(line, fields[1], "node id")?,
            parse_field::<Weight>(line, fields[2], "weight")?,
        ))
    })
}

/// Parse every unweighted graph (`from to` edges) in `input`
pub fn parse_unweighted(input: &str) -> Result<Vec<BuildRequest<Edge>>> {
    parse_graphs(input, 2, |line, fields| {
        Ok(Edge::new(
            parse_field(line, fields[0], "node id")?,
            parse_field(line, fields[1], "node id")?,
        ))
    })
}

/// Line cursor reporting 1-based line numbers
struct LineReader<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
}

impl<'a> LineReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate().peekable(),
        }
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        self.lines
            .next()
            .map(|(index, line)| (index + 1, line.trim_end()))
    }

    /// Skip blank lines; false once the input is exhausted
    fn skip_blank(&mut self) -> bool {
        while let Some((_, line)) = self.lines.peek() {
            if !line.trim().is_empty() {
                return true;
            }
            self.lines.next();
        }
        false
    }
}

fn parse_graphs<E, F>(input: &str, arity: usize, make_edge: F) -> Result<Vec<BuildRequest<E>>>
where
    E: EdgeTuple,
    F: Fn(usize, &[&str]) -> Result<E>,
{
    let mut reader = LineReader::new(input);
    let mut graphs = Vec::new();

    while reader.skip_blank() {
        let Some((line, count)) = reader.next_line() else {
            break;
        };
        let node_count: usize = parse_field(line, count.trim(), "node count")?;

        // The count is untrusted; `build` enforces the node bound
        let mut labels = Vec::with_capacity(node_count.min(DEFAULT_MAX_NODES));
        for id in 1..=node_count {
            let (_, label) = reader.next_line().ok_or_else(|| {
                GraphError::parse(line, format!("missing label for node {id} of {node_count}"))
            })?;
            labels.push(label.to_string());
        }

        let edges = parse_edges(&mut reader, arity, &make_edge)?;
        tracing::trace!(line, nodes = node_count, edges = edges.len(), "parsed_graph");
        graphs.push(BuildRequest {
            node_count,
            labels,
            edges,
        });
    }

    tracing::debug!(graphs = graphs.len(), "parse_graphs");
    Ok(graphs)
}

/// Edge lines up to a terminator line or the end of input
fn parse_edges<E, F>(reader: &mut LineReader<'_>, arity: usize, make_edge: &F) -> Result<Vec<E>>
where
    E: EdgeTuple,
    F: Fn(usize, &[&str]) -> Result<E>,
{
    let mut edges = Vec::new();

    while let Some((line, text)) = reader.next_line() {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != arity {
            return Err(GraphError::parse(
                line,
                format!("expected {arity} fields, found {}", fields.len()),
            ));
        }

        let edge = make_edge(line, &fields)?;
        if edge.source() == NO_NODE {
            break;
        }
        edges.push(edge);
    }

    Ok(edges)
}

fn parse_field<T: FromStr>(line: usize, token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| GraphError::parse(line, format!("invalid {what} '{token}'")))
}
