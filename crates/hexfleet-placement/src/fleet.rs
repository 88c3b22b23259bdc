//! Placing ships on a grid.
//!
//! A ship covers a straight run of tiles starting at its origin and stepping
//! in one direction. The run is valid only if every tile exists and is free.
//! The fleet owns the ships; tiles only carry the ship's id as an
//! [`OccupantId`] so a tile can be resolved back to its ship.

use std::collections::BTreeMap;

use hexfleet_topology::{Direction, HexGrid, OccupantId, SpiralIndex};

use crate::{NavalUnit, PlacementError, Result};

/// Identifies a ship within its fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub u64);

impl From<ShipId> for OccupantId {
    fn from(id: ShipId) -> Self {
        OccupantId(id.0)
    }
}

impl From<OccupantId> for ShipId {
    fn from(id: OccupantId) -> Self {
        ShipId(id.0)
    }
}

impl std::fmt::Display for ShipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A placed ship.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    pub id: ShipId,
    pub unit: NavalUnit,
    pub origin: SpiralIndex,
    pub direction: Direction,
    /// Covered tiles, origin first.
    pub segments: Vec<SpiralIndex>,
}

/// All ships placed on one grid.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    ships: BTreeMap<ShipId, Ship>,
    next_id: u64,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiles a ship would cover, or why it can't go there.
    pub fn plan(
        grid: &HexGrid,
        unit: NavalUnit,
        origin: SpiralIndex,
        direction: Direction,
    ) -> Result<Vec<SpiralIndex>> {
        let length = unit.length();
        let mut segments = Vec::with_capacity(length);
        let mut current = grid.fetch(origin);

        for placed in 0..length {
            let tile = current.ok_or(PlacementError::OutOfBounds { origin, placed })?;
            if let Some(occupant) = tile.occupant() {
                return Err(PlacementError::Occupied {
                    index: tile.index(),
                    by: occupant.into(),
                });
            }
            segments.push(tile.index());
            current = grid.get_neighbor(tile, direction);
        }

        Ok(segments)
    }

    /// Whether `unit` fits at `origin` heading `direction`.
    pub fn can_place(
        grid: &HexGrid,
        unit: NavalUnit,
        origin: SpiralIndex,
        direction: Direction,
    ) -> bool {
        Self::plan(grid, unit, origin, direction).is_ok()
    }

    /// Place a ship, marking every covered tile with its id.
    pub fn place(
        &mut self,
        grid: &mut HexGrid,
        unit: NavalUnit,
        origin: SpiralIndex,
        direction: Direction,
    ) -> Result<ShipId> {
        let segments = Self::plan(grid, unit, origin, direction)?;

        let id = ShipId(self.next_id);
        self.next_id += 1;

        for &index in &segments {
            if let Some(tile) = grid.fetch_mut(index) {
                tile.set_occupant(id.into());
            }
        }

        tracing::debug!("Placed {} {} at {} heading {}", unit, id, origin, direction);

        self.ships.insert(
            id,
            Ship {
                id,
                unit,
                origin,
                direction,
                segments,
            },
        );
        Ok(id)
    }

    /// Remove a ship and free its tiles.
    pub fn remove(&mut self, grid: &mut HexGrid, id: ShipId) -> Result<Ship> {
        let ship = self.ships.remove(&id).ok_or(PlacementError::UnknownShip(id))?;

        for &index in &ship.segments {
            if let Some(tile) = grid.fetch_mut(index) {
                if tile.occupant() == Some(id.into()) {
                    tile.clear_occupant();
                }
            }
        }

        tracing::debug!("Removed {} {}", ship.unit, id);
        Ok(ship)
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(&id)
    }

    /// Resolve the ship occupying a tile.
    pub fn ship_at(&self, grid: &HexGrid, index: SpiralIndex) -> Option<&Ship> {
        let occupant = grid.fetch(index)?.occupant()?;
        self.ships.get(&ShipId::from(occupant))
    }

    /// Ships in placement order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(radius: u32) -> HexGrid {
        HexGrid::new(radius, 50.0).unwrap()
    }

    #[test]
    fn carrier_through_center() {
        let g = grid(4);
        // West edge of ring 3, through the center, to the east
        let origin = SpiralIndex::ORIGIN.neighbor(Direction::West).neighbor(Direction::West);
        let run = Fleet::plan(&g, NavalUnit::Carrier, origin, Direction::East).unwrap();
        assert_eq!(run.len(), 4);
        assert_eq!(run[2], SpiralIndex::ORIGIN);
        assert_eq!(run[3], SpiralIndex(2));
    }

    #[test]
    fn patrol_fits_on_outer_ring() {
        let g = grid(2);
        // Length 1 never needs a neighbor
        assert!(Fleet::can_place(&g, NavalUnit::Patrol, SpiralIndex(1), Direction::NorthEast));
    }

    #[test]
    fn run_off_the_edge_is_rejected() {
        let g = grid(2);
        assert_eq!(
            Fleet::plan(&g, NavalUnit::Destroyer, SpiralIndex(1), Direction::NorthEast),
            Err(PlacementError::OutOfBounds {
                origin: SpiralIndex(1),
                placed: 1
            })
        );
    }

    #[test]
    fn origin_off_grid_is_rejected() {
        let g = grid(2);
        assert_eq!(
            Fleet::plan(&g, NavalUnit::Patrol, SpiralIndex(7), Direction::East),
            Err(PlacementError::OutOfBounds {
                origin: SpiralIndex(7),
                placed: 0
            })
        );
    }

    #[test]
    fn overlapping_ships_are_rejected() {
        let mut g = grid(3);
        let mut fleet = Fleet::new();

        let first = fleet
            .place(&mut g, NavalUnit::Battleship, SpiralIndex(5), Direction::East)
            .unwrap();
        assert_eq!(
            fleet.place(&mut g, NavalUnit::Submarine, SpiralIndex(0), Direction::East),
            Err(PlacementError::Occupied {
                index: SpiralIndex(0),
                by: first
            })
        );
        assert_eq!(fleet.len(), 1);
    }

    #[test]
    fn placed_tiles_resolve_to_ship() {
        let mut g = grid(3);
        let mut fleet = Fleet::new();

        let id = fleet
            .place(&mut g, NavalUnit::Battleship, SpiralIndex(5), Direction::East)
            .unwrap();
        let ship = fleet.get(id).unwrap();
        assert_eq!(ship.segments, [SpiralIndex(5), SpiralIndex(0), SpiralIndex(2)]);

        for &index in &ship.segments {
            assert_eq!(fleet.ship_at(&g, index).map(|s| s.id), Some(id));
        }
        assert!(fleet.ship_at(&g, SpiralIndex(3)).is_none());
    }

    #[test]
    fn remove_frees_tiles() {
        let mut g = grid(3);
        let mut fleet = Fleet::new();

        let id = fleet
            .place(&mut g, NavalUnit::Destroyer, SpiralIndex(0), Direction::SouthEast)
            .unwrap();
        assert!(!Fleet::can_place(&g, NavalUnit::Patrol, SpiralIndex(0), Direction::East));

        let ship = fleet.remove(&mut g, id).unwrap();
        assert_eq!(ship.unit, NavalUnit::Destroyer);
        assert!(fleet.is_empty());
        assert!(g.tiles().iter().all(|t| !t.is_occupied()));
        assert_eq!(fleet.remove(&mut g, id), Err(PlacementError::UnknownShip(id)));
    }

    #[test]
    fn ids_are_not_reused() {
        let mut g = grid(3);
        let mut fleet = Fleet::new();

        let a = fleet.place(&mut g, NavalUnit::Patrol, SpiralIndex(1), Direction::East).unwrap();
        fleet.remove(&mut g, a).unwrap();
        let b = fleet.place(&mut g, NavalUnit::Patrol, SpiralIndex(1), Direction::East).unwrap();
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn plans_are_straight_lines(
            pick in any::<prop::sample::Index>(),
            dir in 0i64..6,
            unit in 0usize..5,
        ) {
            let g = grid(5);
            let origin = SpiralIndex(pick.index(g.len()) as u64);
            let direction = Direction::from_index(dir);
            let unit = NavalUnit::ALL[unit];

            match Fleet::plan(&g, unit, origin, direction) {
                Ok(run) => {
                    prop_assert_eq!(run.len(), unit.length());
                    for pair in run.windows(2) {
                        prop_assert_eq!(pair[0].neighbor(direction), pair[1]);
                    }
                }
                Err(PlacementError::OutOfBounds { placed, .. }) => {
                    prop_assert!(placed < unit.length());
                }
                Err(e) => prop_assert!(false, "unexpected error {}", e),
            }
        }
    }
}
