//! Error types and exit codes for digraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph input, node id out of range)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input, bad node ids (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("node {node} out of range (expected 1..={size})")]
    OutOfRange { node: usize, size: usize },

    #[error("graph has {requested} nodes but this instance allows at most {max}")]
    TooManyNodes { requested: usize, max: usize },

    #[error("expected {expected} node labels, got {actual}")]
    LabelCountMismatch { expected: usize, actual: usize },

    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("shortest paths not computed since the last graph change")]
    NotComputed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a node id outside `1..=size`
    pub fn out_of_range(node: usize, size: usize) -> Self {
        GraphError::OutOfRange { node, size }
    }

    /// Create a loader error for a specific (1-based) input line
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        GraphError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_) | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::OutOfRange { .. }
            | GraphError::TooManyNodes { .. }
            | GraphError::LabelCountMismatch { .. }
            | GraphError::Parse { .. } => ExitCode::Data,

            GraphError::NotComputed
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::OutOfRange { .. } => "out_of_range",
            GraphError::TooManyNodes { .. } => "too_many_nodes",
            GraphError::LabelCountMismatch { .. } => "label_count_mismatch",
            GraphError::Parse { .. } => "parse_error",
            GraphError::NotComputed => "not_computed",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
