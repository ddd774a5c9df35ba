//! # Occlusion Module
//!
//! Decides which voxels need a rendered representation and keeps that decision correct
//! as the world changes.
//!
//! A voxel is *exposed* when at least one of its 26 neighboring cells is empty, and
//! *enclosed* when all 26 are occupied. Two operations maintain the visible set:
//!
//! * [`materialize_if_exposed`] gives a handle to a present, data-only voxel.
//! * [`cull_if_enclosed`] deletes an interior voxel whose 26 neighbors are all present.
//!
//! Enclosed voxels are deleted outright rather than kept data-only: once sealed in,
//! nothing needs their kind again. Carving and culling follow the same rule.
//!
//! Every deletion returns the voxel's handle to the renderer before the voxel is dropped,
//! so no handle is ever orphaned.

use cgmath::Point3;

use super::{
    block::{block_type::BlockType, Voxel},
    grid::VoxelGrid,
};
use crate::{engine_state::rendering::Renderer, error::WorldError};

/// Returns the voxel's handle, if it owns one, to the renderer.
pub fn release<R: Renderer + ?Sized>(renderer: &mut R, voxel: &mut Voxel) {
    if let Some(handle) = voxel.take_render_handle() {
        renderer.destroy(handle);
    }
}

/// Deletes the voxel at `position`, releasing its handle.
///
/// # Returns
/// The kind of the deleted voxel, or `None` if the cell was already empty.
pub fn delete_voxel<R: Renderer + ?Sized>(
    grid: &mut VoxelGrid,
    renderer: &mut R,
    position: Point3<i32>,
) -> Result<Option<BlockType>, WorldError> {
    let Some(mut voxel) = grid.take(position)? else {
        return Ok(None);
    };
    release(renderer, &mut voxel);
    Ok(Some(voxel.block_type))
}

/// Stores `voxel` at `position`, releasing whatever occupied the cell before.
pub fn replace_voxel<R: Renderer + ?Sized>(
    grid: &mut VoxelGrid,
    renderer: &mut R,
    position: Point3<i32>,
    voxel: Voxel,
) -> Result<(), WorldError> {
    if let Some(mut previous) = grid.set(position, Some(voxel))? {
        release(renderer, &mut previous);
    }
    Ok(())
}

/// Creates a materialized voxel of `block_type` at `position`.
///
/// The bounds check happens before the renderer is asked for a handle.
pub fn spawn_materialized<R: Renderer + ?Sized>(
    grid: &mut VoxelGrid,
    renderer: &mut R,
    position: Point3<i32>,
    block_type: BlockType,
) -> Result<(), WorldError> {
    if !grid.in_bounds(position) {
        return Err(WorldError::out_of_bounds(position));
    }
    let handle = renderer.create(block_type, position);
    replace_voxel(grid, renderer, position, Voxel::materialized(block_type, handle))
}

/// Gives the voxel at `position` a renderer handle if it does not have one yet.
///
/// A no-op for empty cells, out-of-bounds positions and voxels that are already
/// materialized.
///
/// # Returns
/// `true` if a handle was created.
pub fn materialize_if_exposed<R: Renderer + ?Sized>(
    grid: &mut VoxelGrid,
    renderer: &mut R,
    position: Point3<i32>,
) -> bool {
    let Ok(Some(voxel)) = grid.get_mut(position) else {
        return false;
    };
    if voxel.is_materialized() {
        return false;
    }
    voxel.render_handle = Some(renderer.create(voxel.block_type, position));
    true
}

/// Number of occupied cells among the 26 neighbors of `position`.
pub fn neighbor_count(grid: &VoxelGrid, position: Point3<i32>) -> usize {
    VoxelGrid::neighbors(position)
        .filter(|&neighbor| grid.is_occupied(neighbor))
        .count()
}

/// Whether every one of the 26 neighbors of `position` is in bounds and occupied.
pub fn is_enclosed(grid: &VoxelGrid, position: Point3<i32>) -> bool {
    VoxelGrid::neighbors(position).all(|neighbor| grid.is_occupied(neighbor))
}

/// Deletes the voxel at `position` if it is fully enclosed.
///
/// Only applies to the playable interior: voxels on the world edge are never culled,
/// since enclosure is not defined along the boundary.
///
/// # Returns
/// `true` if the voxel was culled.
pub fn cull_if_enclosed<R: Renderer + ?Sized>(
    grid: &mut VoxelGrid,
    renderer: &mut R,
    position: Point3<i32>,
) -> bool {
    if !grid.in_interior(position) || !grid.is_occupied(position) || !is_enclosed(grid, position)
    {
        return false;
    }
    matches!(delete_voxel(grid, renderer, position), Ok(Some(_)))
}

/// Materializes every voxel that faces an empty interior cell.
///
/// Scans the whole interior; for each empty cell, every present but data-only neighbor
/// gets a handle. Run after carving to expose the walls of new cavities.
///
/// # Returns
/// The number of voxels materialized.
pub fn expose_cavity_walls<R: Renderer + ?Sized>(grid: &mut VoxelGrid, renderer: &mut R) -> usize {
    let mut exposed = 0;
    for position in grid.positions() {
        if !grid.in_interior(position) || grid.is_occupied(position) {
            continue;
        }
        for neighbor in VoxelGrid::neighbors(position) {
            if materialize_if_exposed(grid, renderer, neighbor) {
                exposed += 1;
            }
        }
    }
    exposed
}
