//! # Block Type Module
//!
//! This module defines the different kinds of voxels in the world.

use std::fmt;

/// Enumerates every kind of voxel that can occupy a cell.
///
/// Air is not a variant: an empty cell holds no voxel at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Caps the highest terrain, more than 15 above the height offset.
    SNOW,

    /// Covers the middle height band, more than 5 above the height offset.
    GRASS,

    /// Fills everything at or below 5 above the height offset.
    SAND,

    /// Floats on the top layer of the world in small clusters.
    CLOUD,

    /// Rare deposit found in a thin band deep below the height offset.
    ORE,
}

impl BlockType {
    /// Returns every block type in a consistent order.
    pub fn all() -> [BlockType; 5] {
        [
            BlockType::SNOW,
            BlockType::GRASS,
            BlockType::SAND,
            BlockType::CLOUD,
            BlockType::ORE,
        ]
    }

    /// Name of the material a renderer should use to draw this block type.
    pub fn material_name(&self) -> &'static str {
        match self {
            BlockType::SNOW => "snow",
            BlockType::GRASS => "grass",
            BlockType::SAND => "sand",
            BlockType::CLOUD => "cloud",
            BlockType::ORE => "diamond",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.material_name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn material_names_are_distinct() {
        let names: HashSet<_> = BlockType::all()
            .iter()
            .map(BlockType::material_name)
            .collect();
        assert_eq!(names.len(), BlockType::all().len());
        assert_eq!(BlockType::ORE.to_string(), "diamond");
    }
}
