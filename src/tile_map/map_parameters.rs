use serde::{Deserialize, Serialize};

/// Inputs of map generation.
///
/// Default: a 20 × 20 map with a random seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapParameters {
    /// Number of tile columns. Must be positive.
    pub width: u32,
    /// Number of tile rows. Must be positive.
    pub height: u32,
    /// Fixes the terrain assignment when set. When `None` a seed is drawn at generation time
    /// and can be read back from [`TileMap::seed`](crate::tile_map::TileMap::seed).
    pub seed: Option<u64>,
}

impl MapParameters {
    pub const DEFAULT_WIDTH: u32 = 20;
    pub const DEFAULT_HEIGHT: u32 = 20;
}

impl Default for MapParameters {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            seed: None,
        }
    }
}
