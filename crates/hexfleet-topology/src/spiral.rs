//! Radial indexing: the bijection between a flat tile index and a
//! (layer, position) pair on concentric hexagonal rings.
//!
//! # Ring Structure
//!
//! - Layer 0: index 0 (the center tile)
//! - Layer 1: indices 1-6
//! - Layer 2: indices 7-18
//! - Layer L: indices `3L(L-1)+1 ..= 3L(L+1)`
//!
//! Within a ring, `position` counts from the first cell of the ring along the
//! spiral walk. Every function here is pure integer arithmetic; the cube
//! coordinate conversions in [`crate::cube`] and the grid's neighbor lookup
//! are both derived from this mapping.

use crate::{CubeCoord, Direction};

/// A spiral index - the flat, zero-based enumeration of all tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralIndex(pub u64);

impl SpiralIndex {
    /// The center tile.
    pub const ORIGIN: Self = Self(0);

    /// Create from raw index.
    #[inline]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Ring this index falls in.
    pub fn layer(&self) -> u64 {
        layer_of(self.0)
    }

    /// Offset within the ring (0 to 6L-1 for layer L > 0).
    pub fn position(&self) -> u64 {
        position_of(self.0, self.layer())
    }

    /// Layer and position together.
    pub fn slot(&self) -> RingSlot {
        let layer = self.layer();
        RingSlot {
            layer,
            position: position_of(self.0, layer),
        }
    }

    /// Corner/edge classification of this tile within its ring.
    pub fn kind(&self) -> SlotKind {
        self.slot().kind()
    }

    /// Cube coordinate of this tile.
    pub fn to_cube(&self) -> CubeCoord {
        CubeCoord::from_spiral(*self)
    }

    /// The six adjacent indices, ordered by [`Direction`].
    ///
    /// No bounds are applied; a grid filters these against its tile count.
    /// The index must lie inside [`MAX_SPIRAL_LAYER`] so its outer neighbors
    /// still fit in a `u64`.
    pub fn neighbors(&self) -> [SpiralIndex; 6] {
        let cube = self.to_cube();
        Direction::ALL.map(|dir| cube.neighbor(dir).to_spiral())
    }

    /// The adjacent index in one direction.
    pub fn neighbor(&self, dir: Direction) -> SpiralIndex {
        self.to_cube().neighbor(dir).to_spiral()
    }
}

impl From<u64> for SpiralIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<SpiralIndex> for u64 {
    fn from(value: SpiralIndex) -> Self {
        value.0
    }
}

impl std::fmt::Display for SpiralIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a tile sits on its ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotKind {
    /// The single tile of layer 0.
    Center,
    /// A hexagon vertex: one inner-ring neighbor, three outer-ring neighbors.
    Corner,
    /// Along a straight side: two inner-ring neighbors, two outer-ring neighbors.
    Edge,
}

/// A (layer, position) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingSlot {
    pub layer: u64,
    pub position: u64,
}

impl RingSlot {
    /// Create a slot. `position` must be below `layer_size(layer)`.
    pub const fn new(layer: u64, position: u64) -> Self {
        Self { layer, position }
    }

    /// Flat index of this slot.
    pub const fn index(&self) -> SpiralIndex {
        SpiralIndex(index_of(self.layer, self.position))
    }

    /// Whether the spiral walk turns at this slot.
    pub const fn is_corner(&self) -> bool {
        is_corner(self.layer, self.position)
    }

    /// Whether this is the final slot of its ring.
    pub const fn is_last_in_layer(&self) -> bool {
        self.position + 1 == layer_size(self.layer)
    }

    pub const fn kind(&self) -> SlotKind {
        if self.layer == 0 {
            SlotKind::Center
        } else if self.is_corner() {
            SlotKind::Corner
        } else {
            SlotKind::Edge
        }
    }
}

/// Number of tiles in a layer.
///
/// - Layer 0: 1 tile (center)
/// - Layer L > 0: 6L tiles
#[inline]
pub const fn layer_size(layer: u64) -> u64 {
    if layer == 0 {
        1
    } else {
        6 * layer
    }
}

/// Total tiles in layers 0 through `layer` inclusive: 1 + 3L(L+1).
#[inline]
pub const fn tiles_through(layer: u64) -> u64 {
    1 + 3 * layer * (layer + 1)
}

/// Index of the first tile of a layer: 3L(L-1)+1, or 0 for the center.
#[inline]
pub const fn first_index(layer: u64) -> u64 {
    if layer == 0 {
        0
    } else {
        3 * layer * (layer - 1) + 1
    }
}

/// Outermost layer whose every index fits in a `u64`.
pub const MAX_SPIRAL_LAYER: u64 = 2_479_700_524;

/// Layer containing `index`.
///
/// Uses the closed form `floor((3 + sqrt(12·index - 3)) / 6)` and then
/// corrects the estimate against the exact ring bounds, since the float can
/// land one off near a ring boundary for large indices.
pub fn layer_of(index: u64) -> u64 {
    if index == 0 {
        return 0;
    }

    let estimate = ((3.0 + (12.0 * index as f64 - 3.0).sqrt()) / 6.0).floor() as u64;
    let index = index as u128;
    let first = |layer: u64| {
        let layer = layer as u128;
        3 * layer * (layer - 1) + 1
    };

    let mut layer = estimate.max(1);
    while layer > 1 && first(layer) > index {
        layer -= 1;
    }
    while first(layer + 1) <= index {
        layer += 1;
    }
    layer
}

/// Offset of `index` within `layer`. `layer` must be `layer_of(index)`.
#[inline]
pub const fn position_of(index: u64, layer: u64) -> u64 {
    if layer == 0 {
        0
    } else {
        index - first_index(layer)
    }
}

/// Flat index of (layer, position).
#[inline]
pub const fn index_of(layer: u64, position: u64) -> u64 {
    if layer == 0 {
        0
    } else {
        first_index(layer) + position
    }
}

/// Mathematical modulo: the result is never negative. `y == 0` yields 0.
#[inline]
pub const fn modulo(x: i64, y: i64) -> i64 {
    if y == 0 {
        0
    } else {
        x.rem_euclid(y)
    }
}

/// Corner test used by the spiral walk.
///
/// Layers 0 and 1 are all corners; otherwise a slot is a corner when it is
/// the last slot of one of the ring's six sides.
#[inline]
pub const fn is_corner(layer: u64, position: u64) -> bool {
    layer <= 1 || position % layer == layer - 1
}

/// Iterator over ring slots in spiral order.
pub struct Spiral {
    current: u64,
    limit: Option<u64>,
}

impl Spiral {
    /// Create an infinite spiral iterator starting from the center.
    pub fn new() -> Self {
        Self {
            current: 0,
            limit: None,
        }
    }

    /// Create a spiral iterator that yields `count` slots.
    pub fn take_slots(count: u64) -> Self {
        Self {
            current: 0,
            limit: Some(count),
        }
    }

    /// Create a spiral iterator over layers `start_layer..=end_layer`.
    pub fn rings(start_layer: u64, end_layer: u64) -> Self {
        Self {
            current: first_index(start_layer),
            limit: Some(tiles_through(end_layer)),
        }
    }
}

impl Default for Spiral {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Spiral {
    type Item = RingSlot;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(limit) = self.limit {
            if self.current >= limit {
                return None;
            }
        }

        let slot = SpiralIndex(self.current).slot();
        self.current += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.current);
                (remaining as usize, Some(remaining as usize))
            }
            None => (usize::MAX, None),
        }
    }
}
