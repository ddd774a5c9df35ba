//! # Voxel Grid Module
//!
//! Dense storage for every cell of a bounded world.
//!
//! The grid is a flat vector of `Option<Voxel>` laid out in row-major order
//! (x, then y, then z), the same layout a chunk uses for its solid array. It holds data
//! only; deciding which voxels are drawn is the job of the occlusion module.
//!
//! Every access is bounds-checked. An out-of-bounds coordinate is rejected with
//! [`WorldError::OutOfBounds`] and never clamped.

use cgmath::{Point3, Vector3};

use super::block::{block_type::BlockType, Voxel};
use crate::error::WorldError;

const fn neighbor_offsets() -> [[i32; 3]; 26] {
    let mut offsets = [[0; 3]; 26];
    let mut i = 0;
    let mut dz = -1;
    while dz <= 1 {
        let mut dy = -1;
        while dy <= 1 {
            let mut dx = -1;
            while dx <= 1 {
                if !(dx == 0 && dy == 0 && dz == 0) {
                    offsets[i] = [dx, dy, dz];
                    i += 1;
                }
                dx += 1;
            }
            dy += 1;
        }
        dz += 1;
    }
    offsets
}

/// The 26 offsets from a cell to every cell sharing a face, edge or corner with it.
pub static NEIGHBOR_OFFSETS: [[i32; 3]; 26] = neighbor_offsets();

/// A dense 3D array of optional voxels over fixed bounds.
pub struct VoxelGrid {
    width: i32,
    height: i32,
    depth: i32,
    voxels: Vec<Option<Voxel>>,
}

impl VoxelGrid {
    /// Allocates an empty grid of the given dimensions.
    ///
    /// # Errors
    /// Returns [`WorldError::InvalidConfig`] if any dimension is not positive or the cell
    /// count does not fit in memory indices.
    pub fn new(width: i32, height: i32, depth: i32) -> Result<Self, WorldError> {
        if width <= 0 || height <= 0 || depth <= 0 {
            return Err(WorldError::InvalidConfig(format!(
                "grid dimensions must be positive, got {width}x{height}x{depth}"
            )));
        }
        let volume = (width as usize)
            .checked_mul(height as usize)
            .and_then(|plane| plane.checked_mul(depth as usize))
            .ok_or_else(|| {
                WorldError::InvalidConfig(format!(
                    "grid of {width}x{height}x{depth} cells overflows"
                ))
            })?;
        Ok(VoxelGrid {
            width,
            height,
            depth,
            voxels: std::iter::repeat_with(|| None).take(volume).collect(),
        })
    }

    /// Number of cells along X.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of cells along Y.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells along Z.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Whether `position` lies inside the grid.
    pub fn in_bounds(&self, position: Point3<i32>) -> bool {
        (0..self.width).contains(&position.x)
            && (0..self.height).contains(&position.y)
            && (0..self.depth).contains(&position.z)
    }

    /// Whether `position` lies at least one cell away from every edge of the grid.
    ///
    /// Only interior cells have all 26 neighbors inside the grid.
    pub fn in_interior(&self, position: Point3<i32>) -> bool {
        (1..self.width - 1).contains(&position.x)
            && (1..self.height - 1).contains(&position.y)
            && (1..self.depth - 1).contains(&position.z)
    }

    fn index(&self, position: Point3<i32>) -> Result<usize, WorldError> {
        if !self.in_bounds(position) {
            return Err(WorldError::out_of_bounds(position));
        }
        let (w, h) = (self.width as usize, self.height as usize);
        Ok(position.x as usize + w * (position.y as usize + h * position.z as usize))
    }

    fn position_of(&self, index: usize) -> Point3<i32> {
        let (w, h) = (self.width as usize, self.height as usize);
        Point3::new(
            (index % w) as i32,
            ((index / w) % h) as i32,
            (index / (w * h)) as i32,
        )
    }

    /// The voxel at `position`, or `None` for an empty cell.
    pub fn get(&self, position: Point3<i32>) -> Result<Option<&Voxel>, WorldError> {
        let index = self.index(position)?;
        Ok(self.voxels[index].as_ref())
    }

    /// Mutable access to the voxel at `position`.
    pub fn get_mut(&mut self, position: Point3<i32>) -> Result<Option<&mut Voxel>, WorldError> {
        let index = self.index(position)?;
        Ok(self.voxels[index].as_mut())
    }

    /// Stores `voxel` at `position` and returns the previous occupant.
    ///
    /// The previous occupant may own a renderer handle; the caller must release it.
    pub fn set(
        &mut self,
        position: Point3<i32>,
        voxel: Option<Voxel>,
    ) -> Result<Option<Voxel>, WorldError> {
        let index = self.index(position)?;
        Ok(std::mem::replace(&mut self.voxels[index], voxel))
    }

    /// Empties the cell at `position` and returns what it held.
    pub fn take(&mut self, position: Point3<i32>) -> Result<Option<Voxel>, WorldError> {
        self.set(position, None)
    }

    /// Whether a voxel occupies `position`. Cells outside the grid are never occupied.
    pub fn is_occupied(&self, position: Point3<i32>) -> bool {
        matches!(self.get(position), Ok(Some(_)))
    }

    /// The 26 coordinates surrounding `position`, whether or not they are in bounds.
    pub fn neighbors(position: Point3<i32>) -> impl Iterator<Item = Point3<i32>> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&[dx, dy, dz]| position + Vector3::new(dx, dy, dz))
    }

    /// Every in-bounds coordinate, in storage order.
    ///
    /// The iterator copies the bounds, so the grid may be mutated while walking it.
    pub fn positions(&self) -> impl Iterator<Item = Point3<i32>> {
        let (width, height, depth) = (self.width, self.height, self.depth);
        (0..depth).flat_map(move |z| {
            (0..height).flat_map(move |y| (0..width).map(move |x| Point3::new(x, y, z)))
        })
    }

    /// Every occupied cell together with its voxel.
    pub fn iter(&self) -> impl Iterator<Item = (Point3<i32>, &Voxel)> + '_ {
        self.voxels
            .iter()
            .enumerate()
            .filter_map(|(index, voxel)| voxel.as_ref().map(|v| (self.position_of(index), v)))
    }

    /// Number of occupied cells.
    pub fn count_voxels(&self) -> usize {
        self.voxels.iter().flatten().count()
    }

    /// Number of voxels that currently own a renderer handle.
    pub fn count_materialized(&self) -> usize {
        self.voxels
            .iter()
            .flatten()
            .filter(|voxel| voxel.is_materialized())
            .count()
    }

    /// The kind stored in every cell, in storage order.
    ///
    /// Two grids with equal snapshots hold the same voxel kinds in the same cells.
    pub fn kinds(&self) -> Vec<Option<BlockType>> {
        self.voxels
            .iter()
            .map(|voxel| voxel.as_ref().map(|v| v.block_type))
            .collect()
    }
}
