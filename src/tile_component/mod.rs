//! This module contains the components of the tile in the map.
//! For now a tile only carries its [`TerrainKind`].

pub mod terrain_kind;

pub use terrain_kind::TerrainKind;
