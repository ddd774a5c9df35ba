//! # Editor Module
//!
//! The edit protocol. Each edit is one atomic transition: it either fully applies,
//! including the occlusion re-evaluation of the surrounding cells, or changes nothing.
//!
//! * **Remove** deletes the target voxel and materializes every neighbor it exposed.
//! * **Place** creates a voxel on the struck face of the target and culls every
//!   neighbor the new voxel sealed in.

use cgmath::{Point3, Vector3};
use log::debug;

use super::{
    block::{block_side::BlockSide, block_type::BlockType},
    grid::VoxelGrid,
    occlusion, terrain,
};
use crate::{engine_state::rendering::Renderer, error::WorldError};

/// Why an edit left the world unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Remove targeted the indestructible floor layer.
    IndestructibleTarget,
    /// The pointer did not hit anything within range.
    NoPointerTarget,
    /// Remove targeted an empty cell.
    EmptyTarget,
    /// Place would put the new voxel outside the world.
    OutsideWorld,
    /// Place targeted a cell that already holds a voxel.
    CellOccupied,
}

/// Result of one edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A voxel was deleted.
    Removed {
        /// Where the voxel was
        position: Point3<i32>,
        /// What it was
        block_type: BlockType,
        /// How many neighbors were materialized as a result
        exposed: usize,
    },
    /// A voxel was created.
    Placed {
        /// Where the voxel now is
        position: Point3<i32>,
        /// What it is
        block_type: BlockType,
        /// How many enclosed neighbors were culled as a result
        culled: usize,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl EditOutcome {
    /// Whether the edit changed the world.
    pub fn is_applied(&self) -> bool {
        !matches!(self, EditOutcome::Ignored(_))
    }
}

/// Removes the voxel at `target`.
///
/// The floor layer is indestructible and removing an empty cell does nothing. Otherwise
/// the voxel's handle is released, the voxel is deleted, and each of its 26 neighbors is
/// materialized if it was data-only.
///
/// # Errors
/// Returns [`WorldError::OutOfBounds`] if `target` lies outside the grid.
pub fn remove_block<R: Renderer + ?Sized>(
    grid: &mut VoxelGrid,
    renderer: &mut R,
    target: Point3<i32>,
) -> Result<EditOutcome, WorldError> {
    if !grid.in_bounds(target) {
        return Err(WorldError::out_of_bounds(target));
    }
    if target.y == 0 {
        return Ok(EditOutcome::Ignored(IgnoreReason::IndestructibleTarget));
    }
    let Some(block_type) = occlusion::delete_voxel(grid, renderer, target)? else {
        return Ok(EditOutcome::Ignored(IgnoreReason::EmptyTarget));
    };

    let exposed = VoxelGrid::neighbors(target)
        .filter(|&neighbor| occlusion::materialize_if_exposed(grid, renderer, neighbor))
        .count();

    debug!("removed {block_type} at {target:?}, exposed {exposed}");
    Ok(EditOutcome::Removed {
        position: target,
        block_type,
        exposed,
    })
}

/// Places a voxel against the face of `target` selected by `hit_offset`.
///
/// The new voxel's kind follows the terrain height bands and ore chance for its own
/// height. After placing it, each of its 26 neighbors is culled if now fully enclosed.
///
/// # Arguments
/// * `target` - The voxel the pointer hit
/// * `hit_offset` - Hit point minus the center of `target`
/// * `height_offset` - The world's configured height offset
/// * `rng` - The world's random number generator, used for the ore roll
///
/// # Errors
/// Returns [`WorldError::OutOfBounds`] if `target` lies outside the grid.
pub fn place_block<R: Renderer + ?Sized>(
    grid: &mut VoxelGrid,
    renderer: &mut R,
    target: Point3<i32>,
    hit_offset: Vector3<f32>,
    height_offset: i32,
    rng: &mut fastrand::Rng,
) -> Result<EditOutcome, WorldError> {
    if !grid.in_bounds(target) {
        return Err(WorldError::out_of_bounds(target));
    }
    let position = BlockSide::from_hit_offset(hit_offset).adjacent(target);
    if !grid.in_bounds(position) {
        return Ok(EditOutcome::Ignored(IgnoreReason::OutsideWorld));
    }
    if grid.is_occupied(position) {
        return Ok(EditOutcome::Ignored(IgnoreReason::CellOccupied));
    }

    let block_type = terrain::classify_block(position.y, height_offset, rng);
    occlusion::spawn_materialized(grid, renderer, position, block_type)?;

    let culled = VoxelGrid::neighbors(position)
        .filter(|&neighbor| occlusion::cull_if_enclosed(grid, renderer, neighbor))
        .count();

    debug!("placed {block_type} at {position:?}, culled {culled}");
    Ok(EditOutcome::Placed {
        position,
        block_type,
        culled,
    })
}
