//! # Engine State Module
//!
//! The single-threaded driver of the voxel engine.
//!
//! ## Key Components
//!
//! * `EngineState` - Owns the world and the pointer source, and turns user actions into
//!   edits
//! * `rendering` - The renderer boundary and a headless bookkeeping renderer
//! * `voxels` - Voxel data, world generation, occlusion and the edit protocol
//!
//! ## Architecture
//!
//! Every action is processed to completion, including the occlusion re-evaluation of
//! its neighborhood, before the next one is accepted. Nothing runs in the background.

use log::debug;

use crate::{
    application_state::pointer::{PlayerAction, PointerSource},
    error::WorldError,
};
use rendering::Renderer;
use voxels::{
    editor::{EditOutcome, IgnoreReason},
    world::World,
};

pub mod rendering;
pub mod voxels;

/// The main state container for the voxel engine.
///
/// # Examples
///
/// ```
/// use cgmath::{Point3, Vector3};
/// use voxel_landscape::application_state::pointer::{PlayerAction, PointerHit, ScriptedPointer};
/// use voxel_landscape::config::WorldConfig;
/// use voxel_landscape::engine_state::EngineState;
/// use voxel_landscape::engine_state::rendering::CountingRenderer;
/// use voxel_landscape::engine_state::voxels::terrain::WorldSeed;
/// use voxel_landscape::engine_state::voxels::world::World;
///
/// let config = WorldConfig {
///     width: 8,
///     height: 8,
///     depth: 8,
///     height_scale: 0,
///     height_offset: 4,
///     cloud_count: 0,
///     cave_count: 0,
///     ..WorldConfig::default()
/// };
/// let world = World::generate(config, CountingRenderer::new(), WorldSeed(1)).unwrap();
/// let pointer = ScriptedPointer::new([Some(PointerHit::new(
///     Point3::new(3, 4, 3),
///     Vector3::new(0.0, 0.5, 0.0),
/// ))]);
///
/// let mut engine = EngineState::new(world, pointer);
/// assert!(engine.handle_action(PlayerAction::Remove).unwrap().is_applied());
/// assert!(!engine.handle_action(PlayerAction::Remove).unwrap().is_applied());
/// ```
pub struct EngineState<R: Renderer, P: PointerSource> {
    /// The voxel world being edited
    pub world: World<R>,
    pointer: P,
}

impl<R: Renderer, P: PointerSource> EngineState<R, P> {
    /// Wraps a generated world and the pointer that aims into it.
    pub fn new(world: World<R>, pointer: P) -> Self {
        EngineState { world, pointer }
    }

    /// Processes one user action.
    ///
    /// Asks the pointer source what was aimed at, then runs Remove or Place on it.
    /// Benign rejections (nothing aimed at, digging the floor, building into an occupied
    /// cell) come back as [`EditOutcome::Ignored`] and are only logged.
    ///
    /// # Errors
    /// Returns [`WorldError::OutOfBounds`] if the pointer source reports a voxel outside
    /// the world.
    pub fn handle_action(&mut self, action: PlayerAction) -> Result<EditOutcome, WorldError> {
        let Some(hit) = self.pointer.target(action) else {
            debug!("{action:?} ignored: pointer hit nothing");
            return Ok(EditOutcome::Ignored(IgnoreReason::NoPointerTarget));
        };

        let outcome = match action {
            PlayerAction::Remove => self.world.remove_block(hit.voxel)?,
            PlayerAction::Place => self.world.place_block(hit.voxel, hit.hit_offset)?,
        };

        if let EditOutcome::Ignored(reason) = outcome {
            debug!("{action:?} at {:?} ignored: {reason:?}", hit.voxel);
        }
        Ok(outcome)
    }

    /// The pointer source.
    pub fn pointer_mut(&mut self) -> &mut P {
        &mut self.pointer
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{Point3, Vector3};

    use super::*;
    use crate::{
        application_state::pointer::{PointerHit, ScriptedPointer},
        config::WorldConfig,
        engine_state::{rendering::CountingRenderer, voxels::terrain::WorldSeed},
    };

    fn flat_engine() -> EngineState<CountingRenderer, ScriptedPointer> {
        let config = WorldConfig {
            width: 8,
            height: 8,
            depth: 8,
            height_scale: 0,
            height_offset: 4,
            cloud_count: 0,
            cave_count: 0,
            ..WorldConfig::default()
        };
        let world = World::generate(config, CountingRenderer::new(), WorldSeed(2)).unwrap();
        EngineState::new(world, ScriptedPointer::default())
    }

    #[test]
    fn missing_target_is_ignored() {
        let mut engine = flat_engine();
        let before = engine.world.grid().kinds();
        for action in [PlayerAction::Remove, PlayerAction::Place] {
            assert_eq!(
                engine.handle_action(action).unwrap(),
                EditOutcome::Ignored(IgnoreReason::NoPointerTarget)
            );
        }
        assert_eq!(engine.world.grid().kinds(), before);
    }

    #[test]
    fn actions_dispatch_to_remove_and_place() {
        let mut engine = flat_engine();
        let hit = PointerHit::new(Point3::new(3, 4, 3), Vector3::new(0.0, 0.5, 0.0));
        engine.pointer_mut().push(Some(hit));
        engine.pointer_mut().push(Some(hit));

        let placed = engine.handle_action(PlayerAction::Place).unwrap();
        assert!(matches!(
            placed,
            EditOutcome::Placed { position, .. } if position == Point3::new(3, 5, 3)
        ));

        let removed = engine.handle_action(PlayerAction::Remove).unwrap();
        assert!(matches!(
            removed,
            EditOutcome::Removed { position, .. } if position == Point3::new(3, 4, 3)
        ));
    }

    #[test]
    fn pointer_outside_world_is_an_error() {
        let mut engine = flat_engine();
        engine.pointer_mut().push(Some(PointerHit::new(
            Point3::new(8, 4, 3),
            Vector3::new(0.0, 0.5, 0.0),
        )));
        assert!(matches!(
            engine.handle_action(PlayerAction::Remove),
            Err(WorldError::OutOfBounds { x: 8, y: 4, z: 3 })
        ));
    }
}
