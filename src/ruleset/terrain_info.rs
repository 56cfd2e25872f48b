use serde::{Deserialize, Serialize};

use crate::tile_component::TerrainKind;

/// Per-kind terrain data: display color and the gameplay placeholders
/// (yields and movement cost) future rules will read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainInfo {
    pub name: TerrainKind,
    #[serde(rename = "RGB")]
    pub rgb: [u8; 3],
    #[serde(default)]
    pub food: u8,
    #[serde(default)]
    pub production: u8,
    #[serde(default = "default_movement_cost")]
    pub movement_cost: u8,
    #[serde(default)]
    pub impassable: bool,
}

fn default_movement_cost() -> u8 {
    1
}

impl TerrainInfo {
    /// Returns the cost of entering a tile of this terrain, or `None` when the terrain is impassable.
    pub fn movement_cost(&self) -> Option<u8> {
        (!self.impassable).then_some(self.movement_cost)
    }
}
