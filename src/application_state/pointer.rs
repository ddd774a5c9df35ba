//! # Pointer Input
//!
//! The boundary between whatever turns user input into a world-space aim (a camera ray
//! cast, a scripted test, a network message) and the edit protocol.

use std::collections::VecDeque;

use cgmath::{Point3, Vector3};

/// The two edit actions a user can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Primary action: dig out the aimed-at voxel.
    Remove,
    /// Secondary action: build against the aimed-at face.
    Place,
}

/// Where the pointer hit the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerHit {
    /// The voxel that was hit
    pub voxel: Point3<i32>,
    /// Hit point minus the center of `voxel`; its dominant axis tells which face was struck
    pub hit_offset: Vector3<f32>,
}

impl PointerHit {
    /// Creates a hit on `voxel` at `hit_offset` from its center.
    pub fn new(voxel: Point3<i32>, hit_offset: Vector3<f32>) -> Self {
        PointerHit { voxel, hit_offset }
    }
}

/// Capability for finding the voxel the user is aiming at.
pub trait PointerSource {
    /// The voxel aimed at when `action` was triggered, or `None` if nothing is within
    /// range.
    fn target(&mut self, action: PlayerAction) -> Option<PointerHit>;
}

/// A [`PointerSource`] that replays a fixed sequence of results, one per action.
///
/// Once the script runs out every further action hits nothing.
#[derive(Debug, Default)]
pub struct ScriptedPointer {
    hits: VecDeque<Option<PointerHit>>,
}

impl ScriptedPointer {
    /// Creates a pointer that will answer with `hits` in order.
    pub fn new(hits: impl IntoIterator<Item = Option<PointerHit>>) -> Self {
        ScriptedPointer {
            hits: hits.into_iter().collect(),
        }
    }

    /// Appends one more answer to the script.
    pub fn push(&mut self, hit: Option<PointerHit>) {
        self.hits.push_back(hit);
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.hits.len()
    }
}

impl PointerSource for ScriptedPointer {
    fn target(&mut self, _action: PlayerAction) -> Option<PointerHit> {
        self.hits.pop_front().flatten()
    }
}
