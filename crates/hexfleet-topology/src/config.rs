//! Grid configuration.
//!
//! Only two options exist: how many rings to generate and how large a tile is
//! in pixels. Everything else about a grid is derived from these.

use crate::{Result, TopologyError};

/// Default ring count.
pub const DEFAULT_RADIUS: u32 = 6;

/// Default tile size in pixels.
pub const DEFAULT_TILE_SIZE: f64 = 50.0;

/// Largest accepted radius. Keeps tile counts (3r² - 3r + 1) well inside
/// memory and index range.
pub const MAX_RADIUS: u32 = 10_000;

/// Configuration for [`HexGrid`](crate::HexGrid) generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GridConfig {
    /// Number of rings to generate, counting the center tile as ring 0.
    /// A radius of 1 is just the center; 2 adds the first ring (7 tiles).
    pub radius: u32,

    /// Linear pixel size of one tile.
    pub tile_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl GridConfig {
    pub fn new(radius: u32, tile_size: f64) -> Self {
        Self { radius, tile_size }
    }

    /// Check the configuration before generating anything from it.
    pub fn validate(&self) -> Result<()> {
        if self.radius < 1 {
            return Err(TopologyError::InvalidConfiguration(format!(
                "radius must be at least 1, got {}",
                self.radius
            )));
        }
        if self.radius > MAX_RADIUS {
            return Err(TopologyError::InvalidConfiguration(format!(
                "radius must be at most {}, got {}",
                MAX_RADIUS, self.radius
            )));
        }
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(TopologyError::InvalidConfiguration(format!(
                "tile size must be a positive number, got {}",
                self.tile_size
            )));
        }
        Ok(())
    }

    /// Tiles a grid with this config contains.
    pub fn tile_count(&self) -> u64 {
        if self.radius == 0 {
            0
        } else {
            crate::spiral::tiles_through(self.radius as u64 - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GridConfig::default();
        assert_eq!(config.radius, 6);
        assert_eq!(config.tile_size, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_radius_is_rejected() {
        let err = GridConfig::new(0, 50.0).validate().unwrap_err();
        assert!(matches!(err, TopologyError::InvalidConfiguration(_)));
    }

    #[test]
    fn huge_radius_is_rejected() {
        assert!(GridConfig::new(MAX_RADIUS + 1, 50.0).validate().is_err());
        assert!(GridConfig::new(MAX_RADIUS, 50.0).validate().is_ok());
    }

    #[test]
    fn bad_tile_sizes_are_rejected() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(
                GridConfig::new(3, size).validate().is_err(),
                "tile size {} should be rejected",
                size
            );
        }
    }

    #[test]
    fn tile_counts() {
        assert_eq!(GridConfig::new(0, 1.0).tile_count(), 0);
        assert_eq!(GridConfig::new(1, 1.0).tile_count(), 1);
        assert_eq!(GridConfig::new(2, 1.0).tile_count(), 7);
        assert_eq!(GridConfig::new(3, 1.0).tile_count(), 19);
        assert_eq!(GridConfig::new(6, 1.0).tile_count(), 91);
    }
}
