//! A prototype of a turn-based, tile-based strategy game.
//!
//! The crate generates a rectangular [`TileMap`] whose tiles independently draw a
//! [`TerrainKind`] at random, renders it as colored rectangles, and runs a bare
//! turn counter in an interactive terminal loop.

pub mod game;
pub mod grid;
pub mod logging;
pub mod render;
pub mod ruleset;
pub mod tile;
pub mod tile_component;
pub mod tile_map;

pub use grid::*;
pub use tile_component::*;
use tile_map::MapError;
pub use tile_map::{MapParameters, TileMap, VerifyError, verify_tile_map};

/// Generates a map from `map_parameters`.
///
/// # Errors
///
/// Returns [`MapError::InvalidDimension`] if the width or height is zero or above [`TileMap::MAX_DIMENSION`].
pub fn generate_map(map_parameters: &MapParameters) -> Result<TileMap, MapError> {
    TileMap::generate(
        map_parameters.width,
        map_parameters.height,
        map_parameters.seed,
    )
}
