//! Hexfleet Grid Topology
//!
//! A hexagon-shaped grid of hex tiles addressed by a single flat index that
//! spirals outward from the center tile.
//!
//! # Spiral Indexing
//!
//! Tiles are arranged in concentric rings ("layers"). Layer 0 is the center
//! tile; layer L holds 6L tiles. The flat index enumerates rings in order:
//!
//! - Index 0: center
//! - Indices 1-6: layer 1
//! - Indices 3L(L-1)+1 ..= 3L(L+1): layer L
//!
//! Every index maps to exactly one cube coordinate (q, r, s) with
//! q + r + s = 0, and back. Neighbor lookup and pixel picking both go through
//! that one mapping.
//!
//! ```
//! use hexfleet_topology::{Direction, HexGrid, SpiralIndex};
//!
//! let grid = HexGrid::new(2, 50.0).unwrap();
//! assert_eq!(grid.len(), 7);
//!
//! let east = grid.get_neighbor(SpiralIndex::ORIGIN, Direction::East).unwrap();
//! assert_eq!(east.index(), SpiralIndex(2));
//! assert_eq!(grid.point_to_index(east.offset()), Some(SpiralIndex(2)));
//! ```

mod config;
mod cube;
mod direction;
mod error;
mod grid;
pub mod spiral;

pub use config::{GridConfig, DEFAULT_RADIUS, DEFAULT_TILE_SIZE, MAX_RADIUS};
pub use cube::{CubeCoord, FractionalCube};
pub use direction::Direction;
pub use error::{Result, TopologyError};
pub use grid::{HexGrid, OccupantId, Tile};
pub use spiral::{
    first_index, index_of, is_corner, layer_of, layer_size, modulo, position_of, tiles_through,
    RingSlot, SlotKind, Spiral, SpiralIndex, MAX_SPIRAL_LAYER,
};

/// Neighbors per tile.
pub const NEIGHBOR_COUNT: usize = 6;

const _: () = assert!(Direction::ALL.len() == NEIGHBOR_COUNT);
