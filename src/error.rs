//! Error types shared across the crate

use crate::graph::NodeKind;
use thiserror::Error;

/// Errors raised at the library boundary.
///
/// Data-quality problems in the source records are never reported through
/// this type; they are counted in the build report and in the stats instead.
#[derive(Debug, Error)]
pub enum ParalinkError {
    #[error("Unknown node kind: {0:?}")]
    UnknownKind(String),

    #[error("Source fetch failed for {kind}: {message}")]
    Source { kind: NodeKind, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for paralink operations
pub type ParalinkResult<T> = Result<T, ParalinkError>;
