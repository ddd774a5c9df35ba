//! # World Configuration
//!
//! The static parameters a world is generated from. A `WorldConfig` is supplied once at
//! generation start and never changes for the lifetime of the world.
//!
//! Configurations can be built in code, starting from [`WorldConfig::default`], or loaded
//! from JSON. Missing JSON fields fall back to their defaults:
//!
//! ```
//! use voxel_landscape::config::WorldConfig;
//!
//! let config = WorldConfig::from_json_str(r#"{ "cloud_count": 4 }"#).unwrap();
//! assert_eq!(config.cloud_count, 4);
//! assert_eq!(config.width, 128);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine_state::voxels::features::CAVE_MARGIN;
use crate::error::WorldError;

/// Parameters controlling world size, terrain shape and feature placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Number of voxels along the X axis
    pub width: i32,
    /// Number of voxels along the Y (vertical) axis
    pub height: i32,
    /// Number of voxels along the Z axis
    pub depth: i32,
    /// Amplitude of the terrain heightmap, in voxels
    pub height_scale: i32,
    /// Base surface height; the height bands are measured relative to it
    pub height_offset: i32,
    /// Divisor applied to column coordinates before noise sampling
    pub detail_scale: f64,
    /// Number of cloud clusters scattered across the top layer
    pub cloud_count: u32,
    /// Number of random-walk steps per cloud cluster
    pub cloud_size: u32,
    /// Number of mines carved into the terrain
    pub cave_count: u32,
    /// Number of carving passes per mine
    pub cave_passes: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: 128,
            height: 128,
            depth: 128,
            height_scale: 20,
            height_offset: 100,
            detail_scale: 25.0,
            cloud_count: 20,
            cloud_size: 3,
            cave_count: 20,
            cave_passes: 3,
        }
    }
}

impl WorldConfig {
    /// Checks that the configuration describes a world that can be generated.
    ///
    /// This runs before any grid allocation so a bad configuration fails fast.
    ///
    /// # Errors
    /// Returns [`WorldError::InvalidConfig`] when:
    /// - any dimension is zero or negative, or the grid would not fit in memory indices
    /// - `detail_scale` is not a positive finite number
    /// - `height_scale` or `height_offset` is negative
    /// - the tallest possible surface would not fit below the top of the world
    /// - mines are requested in a world too small to hold their margin
    pub fn validate(&self) -> Result<(), WorldError> {
        if self.width <= 0 || self.height <= 0 || self.depth <= 0 {
            return Err(WorldError::InvalidConfig(format!(
                "dimensions must be positive, got {}x{}x{}",
                self.width, self.height, self.depth
            )));
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|plane| plane.checked_mul(self.depth as usize))
            .ok_or_else(|| WorldError::InvalidConfig("world volume overflows".to_string()))?;

        if !(self.detail_scale.is_finite() && self.detail_scale > 0.0) {
            return Err(WorldError::InvalidConfig(format!(
                "detail_scale must be positive, got {}",
                self.detail_scale
            )));
        }
        if self.height_scale < 0 || self.height_offset < 0 {
            return Err(WorldError::InvalidConfig(format!(
                "height_scale and height_offset must not be negative, got {} and {}",
                self.height_scale, self.height_offset
            )));
        }

        // The noise sample is below 1.0, so the tallest column is offset + scale - 1.
        let tallest_surface = self.height_offset + self.height_scale.max(1) - 1;
        if tallest_surface >= self.height {
            return Err(WorldError::InvalidConfig(format!(
                "surface may reach y={} but the world is only {} tall",
                tallest_surface, self.height
            )));
        }

        if self.cave_count > 0 && self.cave_passes > 0 {
            let smallest = self.width.min(self.height).min(self.depth);
            if smallest <= 2 * CAVE_MARGIN {
                return Err(WorldError::InvalidConfig(format!(
                    "mines need every dimension above {}, smallest is {}",
                    2 * CAVE_MARGIN,
                    smallest
                )));
            }
        }

        Ok(())
    }

    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, WorldError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Total number of cells in the grid described by this configuration.
    pub fn volume(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }
}
