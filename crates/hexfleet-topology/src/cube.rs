//! Hexagonal cube coordinates.
//!
//! Cube coordinates use three axes (q, r, s) at 120 degrees with the
//! constraint q + r + s = 0. See
//! https://www.redblobgames.com/grids/hexagons/#coordinates-cube
//!
//! The conversions to and from [`SpiralIndex`] go through the radial mapping
//! in [`crate::spiral`], which is the single source of truth for tile order.

use std::ops::{Add, Neg, Sub};

use glam::DVec2;

use crate::spiral::{index_of, modulo, MAX_SPIRAL_LAYER};
use crate::{Direction, Result, SpiralIndex, TopologyError};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Largest fractional axis magnitude [`CubeCoord::checked_round`] accepts.
const ROUND_LIMIT: f64 = (1u64 << 62) as f64;

/// A hex cell in 3-axis cube space. The axes always sum to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CubeCoord {
    q: i64,
    r: i64,
    s: i64,
}

impl CubeCoord {
    /// The center cell.
    pub const ORIGIN: Self = Self { q: 0, r: 0, s: 0 };

    /// Create a coordinate, failing if the axes do not sum to zero.
    pub fn new(q: i64, r: i64, s: i64) -> Result<Self> {
        match q.checked_add(r).and_then(|qr| qr.checked_add(s)) {
            Some(0) => Ok(Self { q, r, s }),
            _ => Err(TopologyError::InvalidCoordinate { q, r, s }),
        }
    }

    /// Create from two axes, deriving s = -q - r.
    pub const fn axial(q: i64, r: i64) -> Self {
        Self { q, r, s: -q - r }
    }

    pub const fn q(&self) -> i64 {
        self.q
    }

    pub const fn r(&self) -> i64 {
        self.r
    }

    pub const fn s(&self) -> i64 {
        self.s
    }

    /// Ring number: max(|q|, |r|, |s|).
    pub fn layer(&self) -> u64 {
        self.q
            .unsigned_abs()
            .max(self.r.unsigned_abs())
            .max(self.s.unsigned_abs())
    }

    /// Hex distance between two cells.
    pub fn distance(&self, other: &Self) -> u64 {
        (*self - *other).layer()
    }

    /// The adjacent cell in `dir`.
    pub fn neighbor(&self, dir: Direction) -> Self {
        *self + dir.cube_offset()
    }

    /// All six adjacent cells, ordered by [`Direction`].
    pub fn neighbors(&self) -> [Self; 6] {
        Direction::ALL.map(|dir| self.neighbor(dir))
    }

    /// Convert to the flat spiral index.
    ///
    /// The ring is split into six 60 degree arcs by the signs of the axes;
    /// each arc contributes a closed-form offset, which is then rotated onto
    /// the spiral's starting cell.
    ///
    /// The cell must lie within [`MAX_SPIRAL_LAYER`] rings of the origin;
    /// use [`CubeCoord::checked_to_spiral`] for cells that may not.
    pub fn to_spiral(&self) -> SpiralIndex {
        let layer = self.layer() as i64;
        if layer == 0 {
            return SpiralIndex::ORIGIN;
        }

        let (q, r, s) = (self.q, self.r, self.s);
        let arc = match (q >= 0, r >= 0, s >= 0) {
            (true, true, _) => q,
            (_, false, false) => layer - r,
            (true, _, true) => 2 * layer + s,
            (false, false, _) => 3 * layer - q,
            (_, true, true) => 4 * layer + r,
            (false, _, false) => 5 * layer - s,
        };

        let position = modulo(3 * (layer - 1) + 2 - arc, 6 * layer);
        SpiralIndex(index_of(layer as u64, position as u64))
    }

    /// Like [`CubeCoord::to_spiral`], but `None` when the index would not
    /// fit in a `u64`.
    pub fn checked_to_spiral(&self) -> Option<SpiralIndex> {
        if self.layer() > MAX_SPIRAL_LAYER {
            None
        } else {
            Some(self.to_spiral())
        }
    }

    /// Convert a flat spiral index to its cell.
    pub fn from_spiral(index: SpiralIndex) -> Self {
        if index == SpiralIndex::ORIGIN {
            return Self::ORIGIN;
        }

        let slot = index.slot();
        let layer = slot.layer as i64;
        let position = slot.position as i64 - (layer - 1);

        let sextant = position.div_euclid(layer).rem_euclid(6);
        let j = position.rem_euclid(layer);

        let arcs = [
            (j, layer - j, -layer),
            (layer, -j, j - layer),
            (layer - j, -layer, j),
            (-j, j - layer, layer),
            (-layer, j, layer - j),
            (j - layer, layer, -j),
        ];
        let (x, y, z) = arcs[sextant as usize];

        Self {
            q: -z,
            r: -y,
            s: -x,
        }
    }

    /// Round fractional axes to the nearest cell.
    ///
    /// Each axis is rounded on its own; the axis with the largest rounding
    /// error is then rebuilt from the other two. `q` is rebuilt only when its
    /// error is strictly the largest; otherwise `r` when its error strictly
    /// exceeds `s`'s; otherwise `s`. Exact half ties depend on this order.
    pub fn round(frac: FractionalCube) -> Self {
        let mut q = round_half_up(frac.q);
        let mut r = round_half_up(frac.r);
        let mut s = round_half_up(frac.s);

        let q_diff = (q - frac.q).abs();
        let r_diff = (r - frac.r).abs();
        let s_diff = (s - frac.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        } else {
            s = -q - r;
        }

        Self {
            q: q as i64,
            r: r as i64,
            s: s as i64,
        }
    }

    /// Like [`CubeCoord::round`], but `None` for axes that are not finite or
    /// too large to round into `i64` cube space.
    pub fn checked_round(frac: FractionalCube) -> Option<Self> {
        let in_range = |axis: f64| axis.is_finite() && axis.abs() < ROUND_LIMIT;
        if in_range(frac.q) && in_range(frac.r) && in_range(frac.s) {
            Some(Self::round(frac))
        } else {
            None
        }
    }

    /// Pixel center of this cell relative to the center cell.
    pub fn to_pixel(&self, tile_size: f64) -> DVec2 {
        let size = tile_size / 2.0;
        let (q, r) = (self.q as f64, self.r as f64);
        DVec2::new(
            size * (SQRT_3 * q + SQRT_3 / 2.0 * r),
            size * (1.5 * r),
        )
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CubeCoord {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            q: i64,
            r: i64,
            s: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        CubeCoord::new(raw.q, raw.r, raw.s).map_err(serde::de::Error::custom)
    }
}

/// Rounds halves toward positive infinity, so -0.5 becomes 0.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Real-valued cube axes, the input to [`CubeCoord::round`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FractionalCube {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalCube {
    pub const fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Unproject a pixel offset (relative to the center cell) into fractional
    /// cube space.
    pub fn from_pixel(point: DVec2, tile_size: f64) -> Self {
        let size = tile_size / 2.0;
        let q = (SQRT_3 / 3.0 * point.x - 1.0 / 3.0 * point.y) / size;
        let r = (2.0 / 3.0 * point.y) / size;
        Self { q, r, s: -q - r }
    }
}

impl From<CubeCoord> for FractionalCube {
    fn from(cube: CubeCoord) -> Self {
        Self::new(cube.q as f64, cube.r as f64, cube.s as f64)
    }
}

impl Add for CubeCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
            s: self.s + other.s,
        }
    }
}

impl Sub for CubeCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
            s: self.s - other.s,
        }
    }
}

impl Neg for CubeCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            r: -self.r,
            s: -self.s,
        }
    }
}

impl std::fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}
