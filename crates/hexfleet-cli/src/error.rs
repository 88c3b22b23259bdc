//! Error types for the hexfleet CLI.

use hexfleet_topology::TopologyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad arguments or environment values
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// Config file could not be parsed
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
