//! Graph configuration for digraph
//!
//! Configuration is read from an optional TOML file, e.g. `digraph.toml`:
//!
//! ```toml
//! max_nodes = 256
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_usage;
use crate::error::{GraphError, Result};

pub use types::{GraphConfig, DEFAULT_MAX_NODES};

impl GraphConfig {
    /// Create a configuration with an explicit node bound
    pub fn with_max_nodes(max_nodes: usize) -> Self {
        Self { max_nodes }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GraphConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), max_nodes = config.max_nodes, "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject configurations no graph could be built under
    pub fn validate(&self) -> Result<()> {
        if self.max_nodes == 0 {
            bail_usage!("max_nodes must be at least 1");
        }
        Ok(())
    }
}
