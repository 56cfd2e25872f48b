//! This module defines the [`TerrainCatalog`], the static table of per-terrain rules.
//! It provides the default table and loading a replacement table from a *JSON* string.
//! The JSON may contain `//` and `/* */` comments.

use enum_map::{EnumMap, enum_map};
use thiserror::Error;

use crate::tile_component::TerrainKind;

mod terrain_info;

pub use terrain_info::TerrainInfo;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("can't parse terrain catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("terrain `{}` is missing from the catalog", .0.name())]
    MissingTerrain(TerrainKind),
    #[error("terrain `{}` is listed more than once in the catalog", .0.name())]
    DuplicateTerrain(TerrainKind),
}

/// Lookup table from [`TerrainKind`] to its [`TerrainInfo`].
///
/// Every kind has exactly one entry, so lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainCatalog {
    pub(crate) terrain_infos: EnumMap<TerrainKind, TerrainInfo>,
}

impl Default for TerrainCatalog {
    fn default() -> Self {
        let terrain_infos = enum_map! {
            TerrainKind::Grassland => TerrainInfo {
                name: TerrainKind::Grassland,
                rgb: [170, 200, 170],
                food: 2,
                production: 1,
                movement_cost: 1,
                impassable: false,
            },
            TerrainKind::Plains => TerrainInfo {
                name: TerrainKind::Plains,
                rgb: [220, 220, 180],
                food: 1,
                production: 2,
                movement_cost: 1,
                impassable: false,
            },
            TerrainKind::Forest => TerrainInfo {
                name: TerrainKind::Forest,
                rgb: [120, 160, 120],
                food: 1,
                production: 2,
                movement_cost: 1,
                impassable: false,
            },
            TerrainKind::Hill => TerrainInfo {
                name: TerrainKind::Hill,
                rgb: [180, 150, 120],
                food: 1,
                production: 2,
                movement_cost: 1,
                impassable: false,
            },
            TerrainKind::Mountain => TerrainInfo {
                name: TerrainKind::Mountain,
                rgb: [180, 180, 180],
                food: 0,
                production: 0,
                movement_cost: 1,
                impassable: false,
            },
            TerrainKind::Water => TerrainInfo {
                name: TerrainKind::Water,
                rgb: [90, 140, 210],
                food: 1,
                production: 0,
                movement_cost: 1,
                impassable: true,
            },
        };

        Self { terrain_infos }
    }
}

impl TerrainCatalog {
    /// Loads a catalog from a JSON array of [`TerrainInfo`] entries.
    ///
    /// Every [`TerrainKind`] must appear exactly once.
    pub fn from_json_str(json_with_comments: &str) -> Result<Self, CatalogError> {
        let json = strip_json_comments(json_with_comments);
        let entries: Vec<TerrainInfo> = serde_json::from_str(&json)?;

        let mut slots: EnumMap<TerrainKind, Option<TerrainInfo>> = EnumMap::default();
        for entry in entries {
            let kind = entry.name;
            if slots[kind].replace(entry).is_some() {
                return Err(CatalogError::DuplicateTerrain(kind));
            }
        }

        let mut terrain_infos = Self::default().terrain_infos;
        for (kind, slot) in slots {
            terrain_infos[kind] = slot.ok_or(CatalogError::MissingTerrain(kind))?;
        }

        Ok(Self { terrain_infos })
    }

    #[inline]
    pub fn info(&self, terrain_kind: TerrainKind) -> &TerrainInfo {
        &self.terrain_infos[terrain_kind]
    }

    /// Returns the display color of the terrain kind.
    #[inline]
    pub fn color(&self, terrain_kind: TerrainKind) -> [u8; 3] {
        self.terrain_infos[terrain_kind].rgb
    }

    #[inline]
    pub fn is_passable(&self, terrain_kind: TerrainKind) -> bool {
        !self.terrain_infos[terrain_kind].impassable
    }

    /// Returns an iterator over every kind and its info, in [`TerrainKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (TerrainKind, &TerrainInfo)> {
        self.terrain_infos.iter()
    }
}

/// Takes a JSON string with comments and returns a string serde_json can parse.
///
/// Supports line comments (`//...`) and block comments (`/*...*/`).
/// Comment characters are replaced by spaces and line breaks are kept, so parse errors still point at the right line and column.
pub fn strip_json_comments(json_with_comments: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Json,
        String,
        Escape,
        LineComment,
        BlockComment,
    }

    let mut json_without_comments = String::with_capacity(json_with_comments.len());
    let mut state = State::Json;
    let mut chars = json_with_comments.chars().peekable();

    while let Some(cur_char) = chars.next() {
        let next_char = chars.peek().copied();
        match state {
            State::Json => match (cur_char, next_char) {
                ('"', _) => {
                    state = State::String;
                    json_without_comments.push(cur_char);
                }
                ('/', Some('/')) => {
                    chars.next();
                    state = State::LineComment;
                    json_without_comments.push_str("  ");
                }
                ('/', Some('*')) => {
                    chars.next();
                    state = State::BlockComment;
                    json_without_comments.push_str("  ");
                }
                _ => json_without_comments.push(cur_char),
            },
            State::String => {
                match cur_char {
                    '\\' => state = State::Escape,
                    '"' => state = State::Json,
                    _ => {}
                }
                json_without_comments.push(cur_char);
            }
            State::Escape => {
                state = State::String;
                json_without_comments.push(cur_char);
            }
            State::LineComment => {
                if cur_char == '\n' {
                    state = State::Json;
                    json_without_comments.push('\n');
                } else {
                    json_without_comments.push(' ');
                }
            }
            State::BlockComment => match (cur_char, next_char) {
                ('*', Some('/')) => {
                    chars.next();
                    state = State::Json;
                    json_without_comments.push_str("  ");
                }
                ('\n', _) => json_without_comments.push('\n'),
                _ => json_without_comments.push(' '),
            },
        }
    }

    json_without_comments
}

#[cfg(test)]
mod tests {
    use super::{CatalogError, TerrainCatalog, strip_json_comments};
    use crate::tile_component::TerrainKind;

    const CATALOG_JSON: &str = r#"
        // Terrain table used by the tests, darker than the default one.
        [
            { "name": "Grassland", "RGB": [100, 150, 100], "food": 2, "production": 1 },
            { "name": "Plains", "RGB": [200, 200, 150], "food": 1, "production": 2 },
            /* Rough terrain */
            { "name": "Forest", "RGB": [50, 100, 50], "food": 1, "production": 2, "movementCost": 2 },
            { "name": "Hill", "RGB": [150, 120, 90], "food": 1, "production": 2, "movementCost": 2 },
            { "name": "Mountain", "RGB": [128, 128, 128], "movementCost": 3 },
            { "name": "Water", "RGB": [0, 0, 200], "food": 1, "impassable": true }
        ]
    "#;

    #[test]
    fn default_catalog_has_expected_colors() {
        let catalog = TerrainCatalog::default();

        assert_eq!(catalog.color(TerrainKind::Grassland), [170, 200, 170]);
        assert_eq!(catalog.color(TerrainKind::Water), [90, 140, 210]);
        for (kind, info) in catalog.iter() {
            assert_eq!(info.name, kind);
        }
    }

    #[test]
    fn only_water_is_impassable_and_steps_cost_one_by_default() {
        let catalog = TerrainCatalog::default();

        for kind in TerrainKind::ALL {
            assert_eq!(catalog.is_passable(kind), kind != TerrainKind::Water);
        }
        assert_eq!(catalog.info(TerrainKind::Water).movement_cost(), None);
        for kind in [TerrainKind::Grassland, TerrainKind::Forest, TerrainKind::Hill, TerrainKind::Mountain] {
            assert_eq!(catalog.info(kind).movement_cost(), Some(1));
        }
    }

    #[test]
    fn load_catalog_with_comments() {
        let catalog = TerrainCatalog::from_json_str(CATALOG_JSON).unwrap();

        assert_eq!(catalog.color(TerrainKind::Water), [0, 0, 200]);
        assert_eq!(catalog.info(TerrainKind::Forest).movement_cost(), Some(2));
        // Omitted fields fall back to their defaults.
        assert_eq!(catalog.info(TerrainKind::Mountain).food, 0);
        assert_eq!(catalog.info(TerrainKind::Grassland).movement_cost(), Some(1));
        assert!(!catalog.is_passable(TerrainKind::Water));
    }

    #[test]
    fn missing_terrain_is_rejected() {
        let json = r#"[{ "name": "Grassland", "RGB": [0, 0, 0] }]"#;

        let error = TerrainCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(error, CatalogError::MissingTerrain(TerrainKind::Plains)));
    }

    #[test]
    fn duplicate_terrain_is_rejected() {
        let json = r#"[
            { "name": "Hill", "RGB": [0, 0, 0] },
            { "name": "Hill", "RGB": [1, 1, 1] }
        ]"#;

        let error = TerrainCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(error, CatalogError::DuplicateTerrain(TerrainKind::Hill)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let error = TerrainCatalog::from_json_str("[{ \"name\": ").unwrap_err();
        assert!(matches!(error, CatalogError::Parse(_)));
    }

    #[test]
    fn comment_markers_inside_strings_are_kept() {
        let json = r#"{ "url": "http://example.com/*x*/", "escaped": "a\"//b" } // trailing"#;
        let stripped = strip_json_comments(json);

        assert_eq!(stripped.trim_end(), r#"{ "url": "http://example.com/*x*/", "escaped": "a\"//b" }"#);
        assert_eq!(stripped.len(), json.len());
    }

    #[test]
    fn block_comment_keeps_line_breaks() {
        let stripped = strip_json_comments("1 /* a\nb */ 2");
        assert_eq!(stripped, "1     \n     2");
    }
}
