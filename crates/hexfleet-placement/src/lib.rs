//! Ship placement on a hexfleet grid.
//!
//! The placement rule only asks the grid two things: does a tile exist, and
//! which tile lies next to it in a given direction. A ship of length N fits
//! when N tiles in a straight line from its origin all exist and are free.
//!
//! ```
//! use hexfleet_placement::{Fleet, NavalUnit};
//! use hexfleet_topology::{Direction, HexGrid, SpiralIndex};
//!
//! let mut grid = HexGrid::new(3, 50.0).unwrap();
//! let mut fleet = Fleet::new();
//!
//! let id = fleet
//!     .place(&mut grid, NavalUnit::Battleship, SpiralIndex(5), Direction::East)
//!     .unwrap();
//! assert_eq!(fleet.ship_at(&grid, SpiralIndex::ORIGIN).unwrap().id, id);
//! ```

mod error;
mod fleet;
mod unit;

pub use error::{PlacementError, Result};
pub use fleet::{Fleet, Ship, ShipId};
pub use unit::NavalUnit;
