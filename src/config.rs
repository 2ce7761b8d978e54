//! Explorer configuration

use crate::query::DEFAULT_NEIGHBOR_LIMIT;
use crate::ParalinkResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Nodes ranked on the "most connected" dashboard card
pub const DEFAULT_TOP_K: usize = 5;

/// Tunables for the explorer surface
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Neighbors shown before "+N more"
    pub neighbor_limit: usize,
    /// Size of the most-connected ranking published with each snapshot
    pub top_k: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            neighbor_limit: DEFAULT_NEIGHBOR_LIMIT,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl ExplorerConfig {
    pub fn from_yaml_str(yaml: &str) -> ParalinkResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> ParalinkResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_neighbor_limit(mut self, limit: usize) -> Self {
        self.neighbor_limit = limit;
        self
    }
}
