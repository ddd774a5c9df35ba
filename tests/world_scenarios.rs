use cgmath::{Point3, Vector3};
use voxel_landscape::{
    application_state::pointer::{PlayerAction, PointerHit, ScriptedPointer},
    config::WorldConfig,
    engine_state::{
        rendering::CountingRenderer,
        voxels::{
            block::block_type::BlockType,
            editor::{EditOutcome, IgnoreReason},
            grid::VoxelGrid,
            occlusion,
            terrain::WorldSeed,
            world::World,
        },
        EngineState,
    },
};

fn flat_world() -> World<CountingRenderer> {
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
    World::generate(config, CountingRenderer::new(), WorldSeed(4)).unwrap()
}

fn rolling_config() -> WorldConfig {
    WorldConfig {
        width: 40,
        height: 64,
        depth: 40,
        height_scale: 16,
        height_offset: 36,
        detail_scale: 12.0,
        cloud_count: 6,
        cave_count: 4,
        ..WorldConfig::default()
    }
}

fn assert_handles_consistent(world: &World<CountingRenderer>) {
    let renderer = world.renderer();
    assert_eq!(renderer.live_count(), world.grid().count_materialized());
    assert_eq!(renderer.unknown_release_count(), 0);
    for (_, voxel) in world.grid().iter() {
        if let Some(handle) = voxel.render_handle() {
            assert!(renderer.is_live(handle));
        }
    }
}

#[test]
fn flat_world_round_trip() {
    let mut world = flat_world();
    let grid = world.grid();
    for z in 0..8 {
        for x in 0..8 {
            assert!(grid.get(Point3::new(x, 4, z)).unwrap().unwrap().is_materialized());
            for y in 0..4 {
                let voxel = grid.get(Point3::new(x, y, z)).unwrap().unwrap();
                assert!(!voxel.is_materialized());
            }
        }
    }
    assert_eq!(grid.count_voxels(), 8 * 8 * 5);
    assert_eq!(grid.count_materialized(), 64);

    let outcome = world.remove_block(Point3::new(3, 4, 3)).unwrap();
    assert!(outcome.is_applied());
    assert!(!world.grid().is_occupied(Point3::new(3, 4, 3)));
    assert!(world
        .grid()
        .get(Point3::new(3, 3, 3))
        .unwrap()
        .unwrap()
        .is_materialized());

    let before = world.grid().kinds();
    let outcome = world.remove_block(Point3::new(3, 0, 3)).unwrap();
    assert_eq!(outcome, EditOutcome::Ignored(IgnoreReason::IndestructibleTarget));
    assert_eq!(world.grid().kinds(), before);
    assert_handles_consistent(&world);
}

#[test]
fn floor_survives_every_removal_attempt() {
    let mut world = flat_world();
    for z in 0..8 {
        for x in 0..8 {
            let outcome = world.remove_block(Point3::new(x, 0, z)).unwrap();
            assert!(!outcome.is_applied());
        }
    }
    assert_eq!(world.grid().count_voxels(), 8 * 8 * 5);
    assert_eq!(world.renderer().destroyed_count(), 0);
}

#[test]
fn digging_a_shaft_exposes_its_walls() {
    let mut world = flat_world();
    for y in (1..=4).rev() {
        world.remove_block(Point3::new(4, y, 4)).unwrap();
    }
    for y in 0..4 {
        for neighbor in VoxelGrid::neighbors(Point3::new(4, y + 1, 4)) {
            if let Ok(Some(voxel)) = world.grid().get(neighbor) {
                assert!(voxel.is_materialized(), "{neighbor:?} still buried");
            }
        }
    }
    assert_handles_consistent(&world);
}

#[test]
fn generated_world_is_deterministic_per_seed() {
    let a = World::generate(rolling_config(), CountingRenderer::new(), WorldSeed(123)).unwrap();
    let b = World::generate(rolling_config(), CountingRenderer::new(), WorldSeed(123)).unwrap();
    let c = World::generate(rolling_config(), CountingRenderer::new(), WorldSeed(124)).unwrap();
    assert_eq!(a.grid().kinds(), b.grid().kinds());
    assert_ne!(a.grid().kinds(), c.grid().kinds());
}

#[test]
fn generated_world_keeps_handles_consistent() {
    let world = World::generate(rolling_config(), CountingRenderer::new(), WorldSeed(8)).unwrap();
    assert_handles_consistent(&world);

    let clouds = world
        .grid()
        .iter()
        .filter(|(_, voxel)| voxel.block_type == BlockType::CLOUD)
        .count();
    assert!(clouds > 0);
    for (position, voxel) in world.grid().iter() {
        if voxel.block_type == BlockType::CLOUD {
            assert_eq!(position.y, 63);
        }
    }
}

#[test]
fn placing_then_removing_keeps_world_consistent() {
    let mut world = World::generate(rolling_config(), CountingRenderer::new(), WorldSeed(55)).unwrap();
    let faces = [
        Vector3::new(0.5, 0.1, 0.0),
        Vector3::new(-0.5, 0.1, 0.0),
        Vector3::new(0.0, 0.5, 0.1),
        Vector3::new(0.1, 0.0, 0.5),
        Vector3::new(0.1, 0.0, -0.5),
    ];

    for x in (4..36).step_by(5) {
        for z in (4..36).step_by(7) {
            let Some(top) = (1..62)
                .rev()
                .map(|y| Point3::new(x, y, z))
                .find(|&p| world.grid().is_occupied(p))
            else {
                continue;
            };
            for offset in faces {
                if let EditOutcome::Placed { position, .. } = world.place_block(top, offset).unwrap() {
                    for neighbor in VoxelGrid::neighbors(position) {
                        if world.grid().in_interior(neighbor) && world.grid().is_occupied(neighbor) {
                            assert!(!occlusion::is_enclosed(world.grid(), neighbor));
                        }
                    }
                }
            }
            world.remove_block(top).unwrap();
        }
    }
    assert_handles_consistent(&world);
}

#[test]
fn engine_processes_scripted_session() {
    let hit = |x, y, z, offset: Vector3<f32>| Some(PointerHit::new(Point3::new(x, y, z), offset));
    let up = Vector3::new(0.0, 0.5, 0.0);
    let pointer = ScriptedPointer::new([
        hit(2, 4, 2, up),
        None,
        hit(2, 0, 2, up),
        hit(5, 4, 5, up),
    ]);
    let mut engine = EngineState::new(flat_world(), pointer);

    let outcomes: Vec<_> = [
        PlayerAction::Remove,
        PlayerAction::Remove,
        PlayerAction::Remove,
        PlayerAction::Place,
    ]
    .into_iter()
    .map(|action| engine.handle_action(action).unwrap())
    .collect();

    assert!(matches!(outcomes[0], EditOutcome::Removed { .. }));
    assert_eq!(outcomes[1], EditOutcome::Ignored(IgnoreReason::NoPointerTarget));
    assert_eq!(outcomes[2], EditOutcome::Ignored(IgnoreReason::IndestructibleTarget));
    assert!(matches!(
        outcomes[3],
        EditOutcome::Placed { position, block_type: BlockType::SAND, .. } if position == Point3::new(5, 5, 5)
    ));
    assert_handles_consistent(&engine.world);
}

#[test]
fn config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("voxel-landscape-{}.json", std::process::id()));
    let config = rolling_config();
    std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = WorldConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, config);
}
