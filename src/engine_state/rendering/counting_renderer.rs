//! Headless renderer that only keeps books.
//!
//! `CountingRenderer` issues sequential handles and remembers which ones are alive. It
//! backs the headless entry point and lets tests check that no handle is ever orphaned
//! or released twice.

use std::collections::HashMap;

use cgmath::Point3;
use log::{trace, warn};

use super::{RenderHandle, Renderer};
use crate::engine_state::voxels::block::block_type::BlockType;

/// A [`Renderer`] that records live handles instead of drawing.
#[derive(Debug, Default)]
pub struct CountingRenderer {
    next_id: u64,
    live: HashMap<u64, (BlockType, Point3<i32>)>,
    created: usize,
    destroyed: usize,
    unknown_releases: usize,
}

impl CountingRenderer {
    /// Creates a renderer with no live handles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles issued and not yet released.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total number of handles ever issued.
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Total number of handles released.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Number of releases of handles this renderer never issued or already released.
    pub fn unknown_release_count(&self) -> usize {
        self.unknown_releases
    }

    /// Whether `handle` is currently alive.
    pub fn is_live(&self, handle: &RenderHandle) -> bool {
        self.live.contains_key(&handle.id())
    }

    /// The block type and position a live handle was created for.
    pub fn describe(&self, handle: &RenderHandle) -> Option<(BlockType, Point3<i32>)> {
        self.live.get(&handle.id()).copied()
    }
}

impl Renderer for CountingRenderer {
    fn create(&mut self, block_type: BlockType, position: Point3<i32>) -> RenderHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.created += 1;
        self.live.insert(id, (block_type, position));
        trace!("create #{id} {block_type} at {position:?}");
        RenderHandle::new(id)
    }

    fn destroy(&mut self, handle: RenderHandle) {
        match self.live.remove(&handle.id()) {
            Some((block_type, position)) => {
                self.destroyed += 1;
                trace!("destroy #{} {block_type} at {position:?}", handle.id());
            }
            None => {
                self.unknown_releases += 1;
                warn!("destroy of unknown render handle #{}", handle.id());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_live_handles() {
        let mut renderer = CountingRenderer::new();
        let a = renderer.create(BlockType::SNOW, Point3::new(1, 2, 3));
        let b = renderer.create(BlockType::ORE, Point3::new(0, 0, 0));
        assert_ne!(a, b);
        assert_eq!(renderer.live_count(), 2);
        assert_eq!(
            renderer.describe(&a),
            Some((BlockType::SNOW, Point3::new(1, 2, 3)))
        );

        renderer.destroy(a);
        assert_eq!(renderer.live_count(), 1);
        assert_eq!(renderer.created_count(), 2);
        assert_eq!(renderer.destroyed_count(), 1);
        assert!(renderer.is_live(&b));
    }

    #[test]
    fn counts_foreign_releases() {
        let mut renderer = CountingRenderer::new();
        renderer.destroy(RenderHandle::new(42));
        assert_eq!(renderer.unknown_release_count(), 1);
        assert_eq!(renderer.destroyed_count(), 0);
    }
}
