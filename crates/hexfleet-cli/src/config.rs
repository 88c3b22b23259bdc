//! Resolving the grid configuration.
//!
//! Sources, lowest priority first: built-in defaults, environment variables
//! (or a JSON file when `--config` is given), then command-line flags.

use std::path::Path;

use hexfleet_topology::GridConfig;

use crate::error::{CliError, Result};

pub const RADIUS_VAR: &str = "HEXFLEET_RADIUS";
pub const TILE_SIZE_VAR: &str = "HEXFLEET_TILE_SIZE";

/// Flag overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub radius: Option<u32>,
    pub tile_size: Option<f64>,
}

/// Read a JSON config file. Missing fields take their defaults.
pub fn from_file(path: &Path) -> Result<GridConfig> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Build a config from environment-style variables.
pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<GridConfig> {
    let mut config = GridConfig::default();

    if let Some(value) = lookup(RADIUS_VAR) {
        config.radius = value
            .trim()
            .parse()
            .map_err(|_| CliError::Usage(format!("invalid {}: {:?}", RADIUS_VAR, value)))?;
    }
    if let Some(value) = lookup(TILE_SIZE_VAR) {
        config.tile_size = value
            .trim()
            .parse()
            .map_err(|_| CliError::Usage(format!("invalid {}: {:?}", TILE_SIZE_VAR, value)))?;
    }

    Ok(config)
}

pub fn from_env() -> Result<GridConfig> {
    from_vars(|name| std::env::var(name).ok())
}

/// Resolve and validate the final config.
pub fn resolve(base: GridConfig, overrides: &Overrides) -> Result<GridConfig> {
    let config = GridConfig {
        radius: overrides.radius.unwrap_or(base.radius),
        tile_size: overrides.tile_size.unwrap_or(base.tile_size),
    };
    config.validate()?;
    Ok(config)
}
