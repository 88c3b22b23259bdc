//! The six hex directions.
//!
//! Directions are numbered 0-5 clockwise on screen (y grows downward),
//! starting at north-east. Direction `d` from the center tile lands on
//! spiral index `d + 1`, and `d` and `d + 3` are opposites.

use std::f64::consts::FRAC_PI_3;

use glam::DVec2;

use crate::spiral::modulo;
use crate::CubeCoord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    NorthEast = 0,
    East = 1,
    SouthEast = 2,
    SouthWest = 3,
    West = 4,
    NorthWest = 5,
}

impl Direction {
    /// All six directions in index order.
    pub const ALL: [Self; 6] = [
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Numeric value, 0-5.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for any integer, wrapped mod 6.
    pub const fn from_index(index: i64) -> Self {
        Self::ALL[modulo(index, 6) as usize]
    }

    /// The direction pointing back: `(d + 3) mod 6`.
    pub const fn opposite(self) -> Self {
        Self::from_index(self as i64 + 3)
    }

    /// Next direction, 60 degrees clockwise on screen.
    pub const fn clockwise(self) -> Self {
        Self::from_index(self as i64 + 1)
    }

    /// Next direction, 60 degrees counter-clockwise on screen.
    pub const fn counter_clockwise(self) -> Self {
        Self::from_index(self as i64 - 1)
    }

    /// Screen angle in radians. East is 0 and angles grow clockwise.
    pub fn angle(self) -> f64 {
        (self as i64 - 1) as f64 * FRAC_PI_3
    }

    /// Unit vector in screen space.
    pub fn unit(self) -> DVec2 {
        let angle = self.angle();
        DVec2::new(angle.cos(), angle.sin())
    }

    /// Cube offset to the adjacent cell.
    pub const fn cube_offset(self) -> CubeCoord {
        match self {
            Self::NorthEast => CubeCoord::axial(1, -1),
            Self::East => CubeCoord::axial(1, 0),
            Self::SouthEast => CubeCoord::axial(0, 1),
            Self::SouthWest => CubeCoord::axial(-1, 1),
            Self::West => CubeCoord::axial(-1, 0),
            Self::NorthWest => CubeCoord::axial(0, -1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NorthEast => "north-east",
            Self::East => "east",
            Self::SouthEast => "south-east",
            Self::SouthWest => "south-west",
            Self::West => "west",
            Self::NorthWest => "north-west",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_wraps() {
        assert_eq!(Direction::from_index(0), Direction::NorthEast);
        assert_eq!(Direction::from_index(6), Direction::NorthEast);
        assert_eq!(Direction::from_index(-1), Direction::NorthWest);
        assert_eq!(Direction::from_index(10), Direction::West);
    }

    #[test]
    fn index_round_trip() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(Direction::from_index(i as i64), *dir);
        }
    }

    #[test]
    fn opposites_cancel() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.cube_offset() + dir.opposite().cube_offset(), CubeCoord::ORIGIN);
        }
    }

    #[test]
    fn rotation() {
        assert_eq!(Direction::NorthWest.clockwise(), Direction::NorthEast);
        assert_eq!(Direction::NorthEast.counter_clockwise(), Direction::NorthWest);
        for dir in Direction::ALL {
            assert_eq!(dir.clockwise().counter_clockwise(), dir);
        }
    }

    #[test]
    fn offsets_are_unique_unit_steps() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            assert_eq!(a.cube_offset().layer(), 1);
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.cube_offset(), b.cube_offset());
            }
        }
    }

    #[test]
    fn unit_vectors_match_cube_offsets() {
        // The pixel projection of each offset points the same way as the unit vector
        for dir in Direction::ALL {
            let pixel = dir.cube_offset().to_pixel(2.0).normalize();
            assert!((pixel - dir.unit()).length() < 1e-9, "{} mismatched", dir);
        }
    }

    #[test]
    fn east_is_zero_angle() {
        assert_eq!(Direction::East.angle(), 0.0);
        assert!((Direction::East.unit() - DVec2::X).length() < 1e-12);
    }
}
