use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// The terrain of a tile.
///
/// The set of kinds is closed: per-kind data lives in
/// [`TerrainCatalog`](crate::ruleset::TerrainCatalog), which holds exactly one entry per variant.
#[derive(Enum, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
pub enum TerrainKind {
    Grassland,
    Plains,
    Forest,
    Hill,
    Mountain,
    Water,
}

impl TerrainKind {
    /// All terrain kinds, in declaration order.
    pub const ALL: [TerrainKind; 6] = [
        TerrainKind::Grassland,
        TerrainKind::Plains,
        TerrainKind::Forest,
        TerrainKind::Hill,
        TerrainKind::Mountain,
        TerrainKind::Water,
    ];

    pub fn name(&self) -> &str {
        match self {
            TerrainKind::Grassland => "Grassland",
            TerrainKind::Plains => "Plains",
            TerrainKind::Forest => "Forest",
            TerrainKind::Hill => "Hill",
            TerrainKind::Mountain => "Mountain",
            TerrainKind::Water => "Water",
        }
    }
}
