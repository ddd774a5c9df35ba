//! # World Module
//!
//! This module provides the `World` struct, which owns everything a generated voxel
//! world consists of: the grid, the renderer that draws it, the seeded random number
//! generator and the configuration it was built from.
//!
//! ## Generation Pipeline
//!
//! 1. Terrain: heightmap columns, surface materialized, everything below data-only
//! 2. Clouds: random walks across the top layer
//! 3. Mines: carved cavities, each pass followed by an expose pass
//!
//! Generation always runs to completion before the world accepts edits. All mutation goes
//! through `&mut self`, so a world is never edited from two places at once.

use cgmath::{Point3, Vector3};
use log::info;
use web_time::Instant;

use super::{
    editor::{self, EditOutcome},
    features::FeatureGenerator,
    grid::VoxelGrid,
    terrain::{TerrainGenerator, WorldSeed},
};
use crate::{config::WorldConfig, engine_state::rendering::Renderer, error::WorldError};

/// A generated, editable voxel world.
///
/// # Examples
///
/// ```
/// use voxel_landscape::config::WorldConfig;
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
/// assert_eq!(world.grid().count_materialized(), 64);
/// ```
pub struct World<R: Renderer> {
    config: WorldConfig,
    seed: WorldSeed,
    grid: VoxelGrid,
    renderer: R,
    rng: fastrand::Rng,
}

impl<R: Renderer> World<R> {
    /// Validates `config` and generates a complete world from `seed`.
    ///
    /// # Errors
    /// Returns [`WorldError::InvalidConfig`] before allocating anything if the
    /// configuration is invalid.
    pub fn generate(config: WorldConfig, mut renderer: R, seed: WorldSeed) -> Result<Self, WorldError> {
        config.validate()?;
        let started = Instant::now();

        let mut grid = VoxelGrid::new(config.width, config.height, config.depth)?;
        let mut rng = fastrand::Rng::with_seed(seed.value() as u64);

        let terrain_voxels =
            TerrainGenerator::new(&config, seed).generate(&mut grid, &mut renderer, &mut rng)?;

        let features = FeatureGenerator::new(&config);
        let clouds = features.scatter_clouds(&mut grid, &mut renderer, &mut rng)?;
        let caves = features.carve_caves(&mut grid, &mut renderer, &mut rng)?;

        info!(
            "generated {}x{}x{} world from seed {} in {:?}: {} terrain voxels, {} clouds, {} carved, {} materialized",
            config.width,
            config.height,
            config.depth,
            seed.value(),
            started.elapsed(),
            terrain_voxels,
            clouds,
            caves.carved,
            grid.count_materialized(),
        );

        Ok(World {
            config,
            seed,
            grid,
            renderer,
            rng,
        })
    }

    /// Removes the voxel at `target`. See [`editor::remove_block`].
    pub fn remove_block(&mut self, target: Point3<i32>) -> Result<EditOutcome, WorldError> {
        editor::remove_block(&mut self.grid, &mut self.renderer, target)
    }

    /// Places a voxel against the struck face of `target`. See [`editor::place_block`].
    pub fn place_block(
        &mut self,
        target: Point3<i32>,
        hit_offset: Vector3<f32>,
    ) -> Result<EditOutcome, WorldError> {
        editor::place_block(
            &mut self.grid,
            &mut self.renderer,
            target,
            hit_offset,
            self.config.height_offset,
            &mut self.rng,
        )
    }

    /// The voxel grid.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// The renderer drawing this world.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The configuration this world was generated from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The seed this world was generated from.
    pub fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// Consumes the world and hands back its grid and renderer.
    ///
    /// Every handle held by the grid is still live in the renderer.
    pub fn into_parts(self) -> (VoxelGrid, R) {
        (self.grid, self.renderer)
    }
}
