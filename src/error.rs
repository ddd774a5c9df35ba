//! # Error Module
//!
//! Failure kinds for world construction and voxel access.
//!
//! Benign edit rejections (digging the floor, a pointer that hit nothing) are not errors;
//! they are reported through [`crate::engine_state::voxels::editor::EditOutcome::Ignored`].

use cgmath::Point3;
use thiserror::Error;

/// Errors produced by the voxel world.
#[derive(Error, Debug)]
pub enum WorldError {
    /// A coordinate outside the grid dimensions was used to index the grid.
    #[error("position ({x}, {y}, {z}) is outside the world bounds")]
    OutOfBounds {
        /// X coordinate of the rejected access
        x: i32,
        /// Y coordinate of the rejected access
        y: i32,
        /// Z coordinate of the rejected access
        z: i32,
    },

    /// The world configuration cannot produce a valid world.
    #[error("invalid world configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("failed to read world configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// The configuration file is not valid JSON for a `WorldConfig`.
    #[error("failed to parse world configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl WorldError {
    /// Builds an [`WorldError::OutOfBounds`] for the given position.
    pub fn out_of_bounds(position: Point3<i32>) -> Self {
        WorldError::OutOfBounds {
            x: position.x,
            y: position.y,
            z: position.z,
        }
    }
}
