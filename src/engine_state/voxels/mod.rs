//! # Voxel World Core
//!
//! This module contains the voxel world itself: its data model, the generators that
//! build it, and the rules that decide which voxels get drawn.
//!
//! ## Architecture
//!
//! * **Block**: voxel kinds, voxel faces, and the voxel value with its renderer handle
//! * **Grid**: dense bounded storage of optional voxels
//! * **Terrain**: the noise heightmap and height-band classification
//! * **Features**: clouds and carved mines
//! * **Occlusion**: materializing exposed voxels and culling enclosed ones
//! * **Editor**: the remove/place protocol
//! * **World**: owns all of the above and runs the generation pipeline
//!
//! ## Data Flow
//!
//! At generation time data flows one way: terrain, then features, with the occlusion
//! rules deciding lazily which buried voxels to materialize. At edit time the editor
//! mutates the grid and then asks the occlusion rules to re-evaluate the 26 cells around
//! the edit.

pub mod block;
pub mod editor;
pub mod features;
pub mod grid;
pub mod occlusion;
pub mod terrain;
pub mod world;
