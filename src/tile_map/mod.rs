//! This module defines the [`TileMap`] struct and its associated methods.
//! It provides functionality to create a map of tiles and to query tile properties.
//! Its methods contain 2 parts:
//! 1. The common methods for creating and querying a map, included in the `mod.rs` file.
//! 2. The map generating and checking methods, defined in the [`impls`] module (which is the submodule of this module).

use enum_map::EnumMap;
use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    grid::{OffsetCoordinate, Size, SquareGrid},
    ruleset::TerrainCatalog,
    tile::Tile,
    tile_component::TerrainKind,
};

mod impls;
mod map_parameters;

pub use impls::{VerifyError, verify_tile_map};
pub use map_parameters::MapParameters;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("invalid map dimension {width}x{height}: width and height must be in 1..={max}", max = TileMap::MAX_DIMENSION)]
    InvalidDimension { width: u32, height: u32 },
    #[error("tile ({x}, {y}) is out of bounds for a {width}x{height} map")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    /// Grid of the map. It never changes after the map is created.
    grid: SquareGrid,
    /// The seed the terrain was generated from, if the map was generated from a seed.
    seed: Option<u64>,
    /// Terrain kind of each tile. The index of the terrain kind is equal to [`Tile::index()`].
    pub(crate) terrain_kind_list: Vec<TerrainKind>,
}

impl TileMap {
    /// Largest width or height a map can have, so that every column and row fits the `i32` query coordinates.
    pub const MAX_DIMENSION: u32 = i32::MAX as u32;

    /// Creates a map of the given size with every tile set to [`TerrainKind::Grassland`].
    ///
    /// Use [`TileMap::generate`] to get a map with random terrain.
    pub fn new(width: u32, height: u32) -> Result<Self, MapError> {
        if !(1..=Self::MAX_DIMENSION).contains(&width) || !(1..=Self::MAX_DIMENSION).contains(&height) {
            return Err(MapError::InvalidDimension { width, height });
        }

        let grid = SquareGrid::new(Size::new(width, height));

        Ok(Self {
            grid,
            seed: None,
            terrain_kind_list: vec![TerrainKind::Grassland; grid.size.area()],
        })
    }

    /// Generates a map whose tiles draw their terrain kind independently and uniformly at random.
    ///
    /// The same `seed` always gives the same terrain at every coordinate.
    /// When `seed` is `None` a seed is drawn from the thread RNG, logged, and kept in [`TileMap::seed`].
    pub fn generate(width: u32, height: u32, seed: Option<u64>) -> Result<Self, MapError> {
        let seed = seed.unwrap_or_else(|| {
            let seed: u64 = rand::rng().random();
            info!(seed, "No seed given, drew a random one");
            seed
        });

        let mut random_number_generator = StdRng::seed_from_u64(seed);
        let mut tile_map = Self::generate_with_rng(width, height, &mut random_number_generator)?;
        tile_map.seed = Some(seed);

        info!(width, height, seed, "Generated tile map");
        Ok(tile_map)
    }

    /// Generates a map drawing every random value from `rng`.
    pub fn generate_with_rng(width: u32, height: u32, rng: &mut impl Rng) -> Result<Self, MapError> {
        let mut tile_map = Self::new(width, height)?;
        tile_map.generate_terrain_kinds(rng);
        debug!(terrain_counts = ?tile_map.terrain_counts(), "Assigned terrain kinds");
        Ok(tile_map)
    }

    #[inline]
    pub fn grid(&self) -> SquareGrid {
        self.grid
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.grid.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Returns the seed the map was generated from.
    ///
    /// `None` for maps created by [`TileMap::new`] or [`TileMap::generate_with_rng`].
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[inline]
    pub fn tile_count(&self) -> usize {
        self.terrain_kind_list.len()
    }

    /// Returns an iterator over all tiles in the map, in row-major order.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn all_tiles(&self) -> impl Iterator<Item = Tile> + use<> {
        (0..self.terrain_kind_list.len()).map(Tile::new)
    }

    /// Returns the tile at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::OutOfBounds`] if `x` is outside `[0, width)` or `y` is outside `[0, height)`.
    pub fn tile_at(&self, x: i32, y: i32) -> Result<Tile, MapError> {
        self.get_tile(x, y).ok_or(MapError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })
    }

    /// Returns the tile at `(x, y)`, or `None` if the coordinate is outside the map.
    pub fn get_tile(&self, x: i32, y: i32) -> Option<Tile> {
        Tile::from_offset(OffsetCoordinate::new(x, y), self.grid)
    }

    /// Returns `true` if `(x, y)` is inside the map and its terrain is passable.
    pub fn is_passable(&self, x: i32, y: i32, terrain_catalog: &TerrainCatalog) -> bool {
        self.get_tile(x, y)
            .is_some_and(|tile| tile.is_passable(self, terrain_catalog))
    }

    /// Counts the tiles of each terrain kind.
    pub fn terrain_counts(&self) -> EnumMap<TerrainKind, usize> {
        let mut terrain_counts = EnumMap::default();
        for &terrain_kind in &self.terrain_kind_list {
            terrain_counts[terrain_kind] += 1;
        }
        terrain_counts
    }
}
