//! The hex grid: tiles generated along the spiral walk.
//!
//! Tiles are stored densely, so a tile's [`SpiralIndex`] is its position in
//! the backing vector. Each tile caches its cube coordinate and its pixel
//! offset from the center tile. Occupants are opaque handles owned by some
//! outer layer; the grid never sets them itself.

use glam::DVec2;

use crate::spiral::Spiral;
use crate::{CubeCoord, Direction, FractionalCube, GridConfig, Result, SpiralIndex, NEIGHBOR_COUNT};

/// Opaque handle to whatever occupies a tile, resolved by its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupantId(pub u64);

/// A single grid cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    index: SpiralIndex,
    cube: CubeCoord,
    offset: DVec2,
    occupant: Option<OccupantId>,
}

impl Tile {
    fn new(index: SpiralIndex, offset: DVec2) -> Self {
        Self {
            index,
            cube: index.to_cube(),
            offset,
            occupant: None,
        }
    }

    pub fn index(&self) -> SpiralIndex {
        self.index
    }

    pub fn cube(&self) -> CubeCoord {
        self.cube
    }

    /// Pixel offset of the tile center from the center tile.
    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    pub fn occupant(&self) -> Option<OccupantId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Attach an occupant, returning the previous one.
    pub fn set_occupant(&mut self, occupant: OccupantId) -> Option<OccupantId> {
        self.occupant.replace(occupant)
    }

    /// Detach the occupant, returning it.
    pub fn clear_occupant(&mut self) -> Option<OccupantId> {
        self.occupant.take()
    }
}

impl From<&Tile> for SpiralIndex {
    fn from(tile: &Tile) -> Self {
        tile.index
    }
}

/// A hexagon-shaped grid of tiles around a center tile.
#[derive(Debug, Clone)]
pub struct HexGrid {
    config: GridConfig,
    tiles: Vec<Tile>,
}

impl HexGrid {
    /// Generate a grid with `radius` rings of tiles `tile_size` pixels wide.
    pub fn new(radius: u32, tile_size: f64) -> Result<Self> {
        Self::generate(GridConfig::new(radius, tile_size))
    }

    /// Generate a grid by walking the spiral outward from the center.
    ///
    /// Each tile is placed one step from the previous one. The heading turns
    /// clockwise only at corner slots. The last slot of every ring steps
    /// north-east into the next ring, and each new ring starts heading east.
    pub fn generate(config: GridConfig) -> Result<Self> {
        config.validate()?;

        let last_layer = config.radius as u64 - 1;
        let step = config.tile_size / 2.0 * 3f64.sqrt();

        let mut tiles = Vec::with_capacity(config.tile_count() as usize);
        let mut pointer = DVec2::ZERO;
        let mut heading = Direction::NorthEast;

        for slot in Spiral::rings(0, last_layer) {
            let last_in_layer = slot.is_last_in_layer();

            if last_in_layer {
                heading = Direction::NorthEast;
            } else if slot.is_corner() && heading != Direction::NorthEast {
                heading = heading.clockwise();
            }

            tiles.push(Tile::new(slot.index(), pointer));
            pointer += heading.unit() * step;

            if last_in_layer {
                heading = Direction::East;
            }
        }

        debug_assert_eq!(tiles.len() as u64, config.tile_count(), "expected 3r²-3r+1 tiles");
        tracing::debug!("Generated {} tiles for radius {}", tiles.len(), config.radius);

        Ok(Self { config, tiles })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn radius(&self) -> u32 {
        self.config.radius
    }

    pub fn tile_size(&self) -> f64 {
        self.config.tile_size
    }

    /// Number of tiles in the grid.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in spiral order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Whether `index` names a tile in this grid.
    pub fn contains(&self, index: SpiralIndex) -> bool {
        index.value() < self.tiles.len() as u64
    }

    /// Bounds-checked lookup. Out-of-range indices yield `None`.
    pub fn fetch(&self, index: SpiralIndex) -> Option<&Tile> {
        usize::try_from(index.value())
            .ok()
            .and_then(|i| self.tiles.get(i))
    }

    pub fn fetch_mut(&mut self, index: SpiralIndex) -> Option<&mut Tile> {
        usize::try_from(index.value())
            .ok()
            .and_then(move |i| self.tiles.get_mut(i))
    }

    /// The six neighbor indices of `index`, ordered by [`Direction`].
    /// Neighbors outside the grid are `None`, as are all six when `index`
    /// itself is outside.
    pub fn neighbors(&self, index: SpiralIndex) -> [Option<SpiralIndex>; NEIGHBOR_COUNT] {
        if !self.contains(index) {
            return [None; NEIGHBOR_COUNT];
        }
        index
            .neighbors()
            .map(|n| if self.contains(n) { Some(n) } else { None })
    }

    /// The tile adjacent to a tile (or index) in `dir`.
    pub fn get_neighbor(&self, tile: impl Into<SpiralIndex>, dir: Direction) -> Option<&Tile> {
        let index = tile.into();
        self.neighbors(index)[dir.index()].and_then(|n| self.fetch(n))
    }

    /// Cell under a pixel offset relative to the grid's center tile. The cell
    /// may lie outside the grid. `None` for offsets that are not finite or too
    /// far out to name a cell.
    pub fn point_to_cube(&self, point: DVec2) -> Option<CubeCoord> {
        if !point.is_finite() {
            return None;
        }
        CubeCoord::checked_round(FractionalCube::from_pixel(point, self.config.tile_size))
    }

    /// Tile index under a pixel offset, or `None` when it falls off the grid.
    pub fn point_to_index(&self, point: DVec2) -> Option<SpiralIndex> {
        let cube = self.point_to_cube(point)?;
        if cube.layer() >= self.radius() as u64 {
            return None;
        }
        Some(cube.to_spiral())
    }
}
