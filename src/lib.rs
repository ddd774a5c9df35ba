#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Landscape
//!
//! A bounded voxel-world engine: it procedurally generates a 3D block grid, decides which
//! blocks need a visual representation, and supports dig/place edits that keep the
//! visible set consistent with the underlying data.
//!
//! ## Key Modules
//!
//! * `config` - World parameters, defaults and JSON loading
//! * `engine_state` - The world, its generators, occlusion rules and edit protocol
//! * `application_state` - The pointer boundary that feeds edits into the engine
//! * `error` - Failure kinds
//!
//! ## Architecture
//!
//! Drawing and input are external collaborators. The engine talks to a
//! [`engine_state::rendering::Renderer`] to create and release the representation of a
//! voxel, and to a [`application_state::pointer::PointerSource`] to learn what the user
//! is aiming at. Everything else (the grid, terrain, clouds, mines, occlusion and edits)
//! lives in this crate.
//!
//! ## Performance Considerations
//!
//! * Only voxels facing empty space hold a renderer handle
//! * Buried voxels are stored data-only and materialized lazily when exposed
//! * Voxels sealed in by an edit are deleted outright
//!
//! ## Usage
//!
//! ```rust
//! use voxel_landscape::config::WorldConfig;
//! use voxel_landscape::engine_state::rendering::CountingRenderer;
//! use voxel_landscape::engine_state::voxels::terrain::WorldSeed;
//! use voxel_landscape::engine_state::voxels::world::World;
//!
//! let config = WorldConfig {
//!     width: 32,
//!     height: 48,
//!     depth: 32,
//!     height_scale: 12,
//!     height_offset: 24,
//!     ..WorldConfig::default()
//! };
//! let world = World::generate(config, CountingRenderer::new(), WorldSeed(42)).unwrap();
//! assert_eq!(world.renderer().live_count(), world.grid().count_materialized());
//! ```

use log::info;

use config::WorldConfig;
use engine_state::{
    rendering::CountingRenderer,
    voxels::{terrain::WorldSeed, world::World},
};
use error::WorldError;

pub mod application_state;
pub mod config;
pub mod engine_state;
pub mod error;

/// Generates a world headlessly and logs what was built.
///
/// The first command-line argument, if present, is a path to a JSON `WorldConfig`;
/// otherwise the defaults are used. The seed comes from the wall clock.
pub fn run() -> Result<(), WorldError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading world configuration from {path}");
            WorldConfig::from_json_file(path)?
        }
        None => WorldConfig::default(),
    };

    let world = World::generate(config, CountingRenderer::new(), WorldSeed::from_clock())?;
    let renderer = world.renderer();
    info!(
        "World ready: {} voxels, {} drawn, {} handles created, {} released",
        world.grid().count_voxels(),
        renderer.live_count(),
        renderer.created_count(),
        renderer.destroyed_count(),
    );

    Ok(())
}
