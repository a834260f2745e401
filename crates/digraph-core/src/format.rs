//! Output format handling for digraph
//!
//! Supports two output formats:
//! - human: the tabular report layout for terminal use
//! - json: Stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::types::Distance;

/// Output format for digraph commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(GraphError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a distance for the human report, `---` when unreachable
pub fn format_distance(distance: Distance) -> String {
    match distance.value() {
        Some(value) => value.to_string(),
        None => "---".to_string(),
    }
}

/// Render a node sequence as space-separated ids
pub fn format_node_ids(ids: &[usize]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("HUMAN".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!(matches!(
            "records".parse::<OutputFormat>(),
            Err(GraphError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(Distance::Finite(8)), "8");
        assert_eq!(format_distance(Distance::Unreachable), "---");
    }

    #[test]
    fn test_format_node_ids() {
        assert_eq!(format_node_ids(&[1, 2, 3]), "1 2 3");
        assert_eq!(format_node_ids(&[]), "");
    }
}
