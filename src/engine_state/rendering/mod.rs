//! Rendering boundary for the voxel engine.
//!
//! The engine never draws anything itself. It asks a [`Renderer`] for a handle when a
//! voxel becomes visible and gives that handle back when the voxel stops being visible.
//! How a handle maps to GPU resources, scene objects or anything else is entirely up to
//! the renderer implementation.

use cgmath::Point3;

use super::voxels::block::block_type::BlockType;

mod counting_renderer;

pub use counting_renderer::CountingRenderer;

/// Opaque token issued by a [`Renderer`] for one drawn voxel.
///
/// A handle is owned by exactly one materialized voxel. It is neither `Copy` nor
/// `Clone`, so returning it to [`Renderer::destroy`] consumes the only copy.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct RenderHandle(u64);

impl RenderHandle {
    /// Wraps a renderer-specific identifier.
    pub fn new(id: u64) -> Self {
        RenderHandle(id)
    }

    /// The renderer-specific identifier.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Capability for drawing voxels.
///
/// The engine calls [`Renderer::create`] only when materializing a voxel and
/// [`Renderer::destroy`] only when releasing one. It never inspects handle contents.
pub trait Renderer {
    /// Creates the visual representation of a voxel of `block_type` at `position`.
    fn create(&mut self, block_type: BlockType, position: Point3<i32>) -> RenderHandle;

    /// Releases a representation previously returned by [`Renderer::create`].
    fn destroy(&mut self, handle: RenderHandle);
}
