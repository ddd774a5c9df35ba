//! # Feature Module
//!
//! Post-processing passes that run on a freshly generated terrain:
//!
//! * **Clouds** - short random walks across the top layer of the world.
//! * **Mines** - random walks through the terrain that carve out cubic cavities.
//!
//! Both walks recenter an axis on the grid midline instead of clamping it when a step
//! would leave the allowed range.

use cgmath::Point3;
use log::debug;

use super::{block::block_type::BlockType, grid::VoxelGrid, occlusion};
use crate::{config::WorldConfig, engine_state::rendering::Renderer, error::WorldError};

/// Minimum distance between a mine origin and every world boundary.
pub const CAVE_MARGIN: i32 = 10;
/// Half-width of the cube carved at each mine pass.
pub const CAVE_RADIUS: i32 = 2;

/// What a cave carving run changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CaveReport {
    /// Voxels deleted by carving
    pub carved: usize,
    /// Voxels materialized by the expose passes
    pub exposed: usize,
}

/// Advances `value` by `delta`, recentering on the midline when the result falls outside
/// `[margin, dimension - margin)`.
fn step_or_recenter(value: i32, delta: i32, dimension: i32, margin: i32) -> i32 {
    let next = value + delta;
    if next < margin || next >= dimension - margin {
        dimension / 2
    } else {
        next
    }
}

fn random_step(rng: &mut fastrand::Rng) -> i32 {
    rng.i32(-1..=1)
}

/// Scatters clouds and carves mines into generated terrain.
pub struct FeatureGenerator {
    cloud_count: u32,
    cloud_size: u32,
    cave_count: u32,
    cave_passes: u32,
}

impl FeatureGenerator {
    /// Creates a feature generator from the configured counts.
    pub fn new(config: &WorldConfig) -> Self {
        FeatureGenerator {
            cloud_count: config.cloud_count,
            cloud_size: config.cloud_size,
            cave_count: config.cave_count,
            cave_passes: config.cave_passes,
        }
    }

    /// Places materialized clouds on the top layer of the world.
    ///
    /// Each cluster starts at a random column and takes `cloud_size` steps, placing one
    /// cloud per step. A cloud replaces whatever occupied its cell.
    ///
    /// # Returns
    /// The number of cloud voxels placed, counting repeated cells each time.
    pub fn scatter_clouds<R: Renderer + ?Sized>(
        &self,
        grid: &mut VoxelGrid,
        renderer: &mut R,
        rng: &mut fastrand::Rng,
    ) -> Result<usize, WorldError> {
        let (width, depth) = (grid.width(), grid.depth());
        let y = grid.height() - 1;
        let mut placed = 0;

        for _ in 0..self.cloud_count {
            let mut x = rng.i32(0..width);
            let mut z = rng.i32(0..depth);
            for _ in 0..self.cloud_size {
                occlusion::spawn_materialized(grid, renderer, Point3::new(x, y, z), BlockType::CLOUD)?;
                placed += 1;
                x = step_or_recenter(x, random_step(rng), width, 0);
                z = step_or_recenter(z, random_step(rng), depth, 0);
            }
        }

        debug!("scattered {placed} cloud voxels in {} clusters", self.cloud_count);
        Ok(placed)
    }

    /// Carves mines into the terrain.
    ///
    /// Each mine starts at a random position at least [`CAVE_MARGIN`] from every
    /// boundary. Every pass deletes the cube of radius [`CAVE_RADIUS`] around the current
    /// center (the center itself excluded, the floor layer untouched), steps the center,
    /// and re-runs the expose pass so the new cavity walls become visible.
    ///
    /// # Errors
    /// Returns [`WorldError::InvalidConfig`] if mines are requested in a grid with a
    /// dimension too small to hold the margin on both sides.
    pub fn carve_caves<R: Renderer + ?Sized>(
        &self,
        grid: &mut VoxelGrid,
        renderer: &mut R,
        rng: &mut fastrand::Rng,
    ) -> Result<CaveReport, WorldError> {
        let mut report = CaveReport::default();
        if self.cave_count == 0 || self.cave_passes == 0 {
            return Ok(report);
        }
        let (width, height, depth) = (grid.width(), grid.height(), grid.depth());
        let smallest = width.min(height).min(depth);
        if smallest <= 2 * CAVE_MARGIN {
            return Err(WorldError::InvalidConfig(format!(
                "mines need every dimension above {}, smallest is {}",
                2 * CAVE_MARGIN,
                smallest
            )));
        }

        for _ in 0..self.cave_count {
            let mut center = Point3::new(
                rng.i32(CAVE_MARGIN..width - CAVE_MARGIN),
                rng.i32(CAVE_MARGIN..height - CAVE_MARGIN),
                rng.i32(CAVE_MARGIN..depth - CAVE_MARGIN),
            );

            for _ in 0..self.cave_passes {
                report.carved += carve_cube(grid, renderer, center)?;

                center = Point3::new(
                    step_or_recenter(center.x, random_step(rng), width, CAVE_RADIUS),
                    step_or_recenter(center.y, random_step(rng), height, CAVE_RADIUS),
                    step_or_recenter(center.z, random_step(rng), depth, CAVE_RADIUS),
                );

                report.exposed += occlusion::expose_cavity_walls(grid, renderer);
            }
        }

        debug!(
            "carved {} voxels in {} mines, exposed {}",
            report.carved, self.cave_count, report.exposed
        );
        Ok(report)
    }
}

/// Deletes every voxel within [`CAVE_RADIUS`] of `center`, except the center itself and
/// the floor layer.
fn carve_cube<R: Renderer + ?Sized>(
    grid: &mut VoxelGrid,
    renderer: &mut R,
    center: Point3<i32>,
) -> Result<usize, WorldError> {
    let mut carved = 0;
    for dz in -CAVE_RADIUS..=CAVE_RADIUS {
        for dy in -CAVE_RADIUS..=CAVE_RADIUS {
            for dx in -CAVE_RADIUS..=CAVE_RADIUS {
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }
                let position = Point3::new(center.x + dx, center.y + dy, center.z + dz);
                if position.y == 0 || !grid.in_bounds(position) {
                    continue;
                }
                if occlusion::delete_voxel(grid, renderer, position)?.is_some() {
                    carved += 1;
                }
            }
        }
    }
    Ok(carved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::{rendering::CountingRenderer, voxels::block::Voxel};

    fn config(cloud_count: u32, cave_count: u32) -> WorldConfig {
        WorldConfig {
            width: 32,
            height: 32,
            depth: 32,
            height_scale: 0,
            height_offset: 20,
            cloud_count,
            cave_count,
            ..WorldConfig::default()
        }
    }

    fn filled_grid(size: i32, surface: i32) -> VoxelGrid {
        let mut grid = VoxelGrid::new(size, size, size).unwrap();
        for z in 0..size {
            for y in 0..=surface {
                for x in 0..size {
                    grid.set(Point3::new(x, y, z), Some(Voxel::data_only(BlockType::SAND)))
                        .unwrap();
                }
            }
        }
        grid
    }

    #[test]
    fn step_recenters_instead_of_clamping() {
        assert_eq!(step_or_recenter(5, 1, 10, 0), 6);
        assert_eq!(step_or_recenter(9, 1, 10, 0), 5);
        assert_eq!(step_or_recenter(0, -1, 10, 0), 5);
        assert_eq!(step_or_recenter(2, -1, 32, CAVE_RADIUS), 16);
        assert_eq!(step_or_recenter(29, 1, 32, CAVE_RADIUS), 16);
        assert_eq!(step_or_recenter(28, 1, 32, CAVE_RADIUS), 29);
    }

    #[test]
    fn clouds_sit_on_the_top_layer() {
        let mut grid = VoxelGrid::new(32, 32, 32).unwrap();
        let mut renderer = CountingRenderer::new();
        let mut rng = fastrand::Rng::with_seed(11);
        let features = FeatureGenerator::new(&config(20, 0));

        let placed = features
            .scatter_clouds(&mut grid, &mut renderer, &mut rng)
            .unwrap();
        assert_eq!(placed, 20 * 3);

        assert!(grid.count_voxels() > 0);
        for (position, voxel) in grid.iter() {
            assert_eq!(position.y, 31);
            assert_eq!(voxel.block_type, BlockType::CLOUD);
            assert!(voxel.is_materialized());
        }
        assert_eq!(renderer.live_count(), grid.count_voxels());
    }

    #[test]
    fn carving_deletes_voxels_and_keeps_handles_consistent() {
        let mut grid = filled_grid(32, 20);
        let mut renderer = CountingRenderer::new();
        let mut rng = fastrand::Rng::with_seed(3);
        let before = grid.count_voxels();
        let features = FeatureGenerator::new(&config(0, 4));

        let report = features
            .carve_caves(&mut grid, &mut renderer, &mut rng)
            .unwrap();
        assert!(report.carved > 0);
        assert_eq!(grid.count_voxels(), before - report.carved);
        assert!(report.exposed > 0);
        assert_eq!(renderer.live_count(), grid.count_materialized());

        for x in 0..32 {
            for z in 0..32 {
                assert!(grid.is_occupied(Point3::new(x, 0, z)));
            }
        }
    }

    #[test]
    fn carving_rejects_grids_narrower_than_the_margin() {
        let mut grid = filled_grid(16, 8);
        let mut renderer = CountingRenderer::new();
        let mut rng = fastrand::Rng::with_seed(5);
        let features = FeatureGenerator::new(&WorldConfig {
            width: 16,
            height: 16,
            depth: 16,
            ..WorldConfig::default()
        });

        let result = features.carve_caves(&mut grid, &mut renderer, &mut rng);
        assert!(matches!(result, Err(WorldError::InvalidConfig(_))));
        assert_eq!(grid.count_voxels(), 16 * 16 * 9);
        assert_eq!(renderer.created_count(), 0);

        let idle = FeatureGenerator::new(&WorldConfig {
            cave_count: 0,
            ..WorldConfig::default()
        });
        let report = idle.carve_caves(&mut grid, &mut renderer, &mut rng).unwrap();
        assert_eq!(report, CaveReport::default());
    }

    #[test]
    fn carved_cube_spares_its_center() {
        let mut grid = filled_grid(12, 11);
        let mut renderer = CountingRenderer::new();
        let center = Point3::new(6, 6, 6);

        let carved = carve_cube(&mut grid, &mut renderer, center).unwrap();
        assert_eq!(carved, 124);
        assert!(grid.is_occupied(center));
        assert!(!grid.is_occupied(Point3::new(8, 4, 6)));
        assert!(grid.is_occupied(Point3::new(9, 6, 6)));
    }

    #[test]
    fn exposed_walls_face_the_cavity() {
        let mut grid = filled_grid(32, 25);
        let mut renderer = CountingRenderer::new();
        let mut rng = fastrand::Rng::with_seed(21);
        FeatureGenerator::new(&config(0, 1))
            .carve_caves(&mut grid, &mut renderer, &mut rng)
            .unwrap();

        for (position, voxel) in grid.iter() {
            if voxel.is_materialized() {
                let faces_empty_interior = VoxelGrid::neighbors(position)
                    .any(|n| grid.in_interior(n) && !grid.is_occupied(n));
                assert!(faces_empty_interior, "{position:?} materialized but buried");
            }
        }
    }
}
