//! # Terrain Module
//!
//! Column-based terrain generation from a 2D Perlin heightmap.
//!
//! For every `(x, z)` column the generator samples the noise field once to find the
//! surface height. Only the surface voxel is materialized; everything beneath it is
//! created data-only, since a buried voxel flanked by the neighboring columns is not
//! visible until something digs it out.
//!
//! ## Height Bands
//!
//! Voxel kinds depend only on their height relative to the configured height offset:
//!
//! | y relative to offset | kind  |
//! |----------------------|-------|
//! | more than 15 above   | SNOW  |
//! | more than 5 above    | GRASS |
//! | anything lower       | SAND  |
//!
//! Voxels strictly between 20 and 15 below the offset have a 10% chance of being ORE.

use cgmath::Point3;
use noise::{NoiseFn, Perlin};
use web_time::{SystemTime, UNIX_EPOCH};

use super::{
    block::{block_type::BlockType, Voxel},
    grid::VoxelGrid,
    occlusion,
};
use crate::{config::WorldConfig, engine_state::rendering::Renderer, error::WorldError};

/// Height above the offset beyond which the surface is snow.
pub const SNOW_LINE: i32 = 15;
/// Height above the offset beyond which the surface is grass.
pub const GRASS_LINE: i32 = 5;
/// Lower (exclusive) edge of the ore band, measured below the offset.
pub const ORE_BAND_BOTTOM: i32 = 20;
/// Upper (exclusive) edge of the ore band, measured below the offset.
pub const ORE_BAND_TOP: i32 = 15;
/// Chance, in percent, that a voxel inside the ore band becomes ORE.
pub const ORE_CHANCE_PERCENT: u32 = 10;

/// Keeps clock-derived seeds small enough that `x + seed` stays exact as an `f64`.
const SEED_MODULUS: u128 = 1_000_000;

/// The seed a world is generated from.
///
/// It offsets the noise field and seeds the world's random number generator, so a
/// generation run is fully determined by its seed and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldSeed(pub u32);

impl WorldSeed {
    /// Derives a seed from the wall clock, in tenths of a second.
    pub fn from_clock() -> Self {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        WorldSeed((elapsed.as_millis() / 100 % SEED_MODULUS) as u32)
    }

    /// The raw seed value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// The kind a voxel at height `y` gets from its height band alone.
pub fn height_band(y: i32, height_offset: i32) -> BlockType {
    if y > height_offset + SNOW_LINE {
        BlockType::SNOW
    } else if y > height_offset + GRASS_LINE {
        BlockType::GRASS
    } else {
        BlockType::SAND
    }
}

/// Whether a voxel at height `y` is eligible to become ORE.
pub fn in_ore_band(y: i32, height_offset: i32) -> bool {
    y > height_offset - ORE_BAND_BOTTOM && y < height_offset - ORE_BAND_TOP
}

/// Classifies a new voxel at height `y`: its height band, overridden by a 10% ORE roll
/// inside the ore band.
///
/// The random number generator is only consulted inside the ore band.
pub fn classify_block(y: i32, height_offset: i32, rng: &mut fastrand::Rng) -> BlockType {
    if in_ore_band(y, height_offset) && rng.u32(0..100) < ORE_CHANCE_PERCENT {
        BlockType::ORE
    } else {
        height_band(y, height_offset)
    }
}

/// Generates the base terrain of a world.
pub struct TerrainGenerator {
    perlin: Perlin,
    seed: WorldSeed,
    width: i32,
    depth: i32,
    height_scale: i32,
    height_offset: i32,
    detail_scale: f64,
}

impl TerrainGenerator {
    /// Creates a generator for the given configuration and seed.
    pub fn new(config: &WorldConfig, seed: WorldSeed) -> Self {
        TerrainGenerator {
            perlin: Perlin::new(seed.value()),
            seed,
            width: config.width,
            depth: config.depth,
            height_scale: config.height_scale,
            height_offset: config.height_offset,
            detail_scale: config.detail_scale,
        }
    }

    /// Samples the heightmap noise for a column, remapped into `[0, 1)`.
    pub fn sample_noise(&self, x: i32, z: i32) -> f64 {
        let seed = self.seed.value() as f64;
        let raw = self.perlin.get([
            (x as f64 + seed) / self.detail_scale,
            (z as f64 + seed) / self.detail_scale,
        ]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0 - f64::EPSILON)
    }

    /// The y coordinate of the surface voxel of column `(x, z)`.
    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        (self.sample_noise(x, z) * self.height_scale as f64).floor() as i32 + self.height_offset
    }

    /// Fills every column of `grid` from its surface down to the floor.
    ///
    /// The surface voxel of each column is materialized through `renderer`; the voxels
    /// below it are data-only.
    ///
    /// # Returns
    /// The number of voxels created.
    pub fn generate<R: Renderer + ?Sized>(
        &self,
        grid: &mut VoxelGrid,
        renderer: &mut R,
        rng: &mut fastrand::Rng,
    ) -> Result<usize, WorldError> {
        let mut created = 0;

        for z in 0..self.depth {
            for x in 0..self.width {
                let surface = self.surface_height(x, z);
                let block_type = classify_block(surface, self.height_offset, rng);
                occlusion::spawn_materialized(grid, renderer, Point3::new(x, surface, z), block_type)?;
                created += 1;

                for y in (0..surface).rev() {
                    let block_type = classify_block(y, self.height_offset, rng);
                    grid.set(Point3::new(x, y, z), Some(Voxel::data_only(block_type)))?;
                    created += 1;
                }
            }
        }

        Ok(created)
    }
}
