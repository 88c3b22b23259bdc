//! Error types for hexfleet-placement.

use hexfleet_topology::SpiralIndex;
use thiserror::Error;

use crate::ShipId;

/// Result type for placement operations.
pub type Result<T> = std::result::Result<T, PlacementError>;

/// Reasons a ship cannot be placed or removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The run leaves the grid after `placed` segments.
    #[error("ship runs off the grid after {placed} segment(s) from {origin}")]
    OutOfBounds { origin: SpiralIndex, placed: usize },

    /// A tile in the run already holds a ship.
    #[error("tile {index} is already occupied by ship {by}")]
    Occupied { index: SpiralIndex, by: ShipId },

    /// No ship with this id is in the fleet.
    #[error("unknown ship {0}")]
    UnknownShip(ShipId),
}
