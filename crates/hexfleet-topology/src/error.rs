//! Error types for hexfleet-topology.

use thiserror::Error;

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors raised while building coordinates or grids.
///
/// A missing tile is not an error: lookups return `Option` and callers treat
/// `None` as "no tile here".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    /// Cube axes do not sum to zero.
    #[error("invalid cube coordinates ({q}, {r}, {s}): axes must sum to 0")]
    InvalidCoordinate { q: i64, r: i64, s: i64 },

    /// Non-positive radius or tile size.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
