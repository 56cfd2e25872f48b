use rand::Rng;

use crate::{tile_component::TerrainKind, tile_map::TileMap};

impl TileMap {
    /// Assigns a terrain kind to every tile.
    ///
    /// Tiles are visited in row-major order and each one independently draws a kind uniformly from
    /// [`TerrainKind::ALL`]. There is no spatial coherence: neighboring tiles don't influence each other.
    pub fn generate_terrain_kinds(&mut self, rng: &mut impl Rng) {
        for terrain_kind in self.terrain_kind_list.iter_mut() {
            *terrain_kind = TerrainKind::ALL[rng.random_range(0..TerrainKind::ALL.len())];
        }
    }
}
