//! # Block Module
//!
//! This module provides the voxel value stored in the world grid, together with the
//! block type definitions and block face handling.
//!
//! A voxel is either *materialized* (it owns a renderer handle and is drawn) or
//! *data-only* (it exists for occlusion bookkeeping but is not drawn). Air is never a
//! voxel; an empty cell is simply `None` in the grid.

use block_type::BlockType;

use crate::engine_state::rendering::RenderHandle;

pub mod block_side;
pub mod block_type;

/// Represents a single voxel in the world.
///
/// The voxel owns at most one renderer handle. Whether it is materialized is derived
/// from the presence of that handle, so the two can never disagree.
///
/// `Voxel` is deliberately not `Clone`: a handle has exactly one owner, and it must be
/// returned to the renderer before the voxel is dropped.
#[derive(Debug, PartialEq, Eq)]
pub struct Voxel {
    /// The kind of this voxel.
    pub block_type: BlockType,
    pub(crate) render_handle: Option<RenderHandle>,
}

impl Voxel {
    /// Creates a voxel without a renderer handle.
    ///
    /// Used for voxels buried under the surface at generation time.
    pub fn data_only(block_type: BlockType) -> Self {
        Voxel {
            block_type,
            render_handle: None,
        }
    }

    /// Creates a voxel that owns the given renderer handle.
    pub fn materialized(block_type: BlockType, handle: RenderHandle) -> Self {
        Voxel {
            block_type,
            render_handle: Some(handle),
        }
    }

    /// Whether this voxel currently owns a renderer handle.
    pub fn is_materialized(&self) -> bool {
        self.render_handle.is_some()
    }

    /// The renderer handle owned by this voxel, if any.
    pub fn render_handle(&self) -> Option<&RenderHandle> {
        self.render_handle.as_ref()
    }

    /// Detaches the renderer handle, leaving the voxel data-only.
    ///
    /// The caller becomes responsible for returning the handle to the renderer.
    pub fn take_render_handle(&mut self) -> Option<RenderHandle> {
        self.render_handle.take()
    }
}
