//! # Voxel Landscape Entry Point
//!
//! Generates a world headlessly by calling into the library's `run()` function.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- [world_config.json]
//! ```

use log::error;

fn main() {
    if let Err(err) = voxel_landscape::run() {
        error!("World generation failed: {err}");
        std::process::exit(1);
    }
}
