//! # Block Side Module
//!
//! This module defines the six faces of a voxel and how a pointer hit selects one of
//! them. The Place edit uses the struck face to find the cell adjacent to the target.

use cgmath::{Point3, Vector3};

/// Represents the six possible faces of a voxel.
///
/// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The front face (facing positive Z)
    FRONT = 0,

    /// The back face (facing negative Z)
    BACK = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The left face (facing negative X)
    LEFT = 4,

    /// The right face (facing positive X)
    RIGHT = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::LEFT,
            BlockSide::RIGHT,
        ]
    }

    /// Determines which face of a voxel was struck.
    ///
    /// `hit_offset` is the hit point minus the voxel center. The axis with the largest
    /// magnitude picks the face pair and the sign of that component picks the side.
    /// When no axis strictly dominates, the Z axis is used.
    ///
    /// # Arguments
    /// * `hit_offset` - Offset of the hit point from the center of the struck voxel
    pub fn from_hit_offset(hit_offset: Vector3<f32>) -> BlockSide {
        let ax = hit_offset.x.abs();
        let ay = hit_offset.y.abs();
        let az = hit_offset.z.abs();

        if ax > ay && ax > az {
            if hit_offset.x < 0.0 {
                BlockSide::LEFT
            } else {
                BlockSide::RIGHT
            }
        } else if ay > ax && ay > az {
            if hit_offset.y < 0.0 {
                BlockSide::BOTTOM
            } else {
                BlockSide::TOP
            }
        } else if hit_offset.z < 0.0 {
            BlockSide::BACK
        } else {
            BlockSide::FRONT
        }
    }

    /// Unit vector pointing out of this face.
    pub fn normal(&self) -> Vector3<i32> {
        match self {
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
        }
    }

    /// The cell that shares this face with `position`.
    pub fn adjacent(&self, position: Point3<i32>) -> Point3<i32> {
        position + self.normal()
    }
}
