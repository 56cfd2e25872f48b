use thiserror::Error;

use crate::{ruleset::TerrainCatalog, tile::Tile, tile_map::TileMap};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("map holds {actual} tiles, a {width}x{height} map needs {expected}")]
    TileCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("tile {index} sits at ({x}, {y}), outside the map")]
    TileOutsideMap { index: usize, x: i32, y: i32 },
    #[error("coordinate ({x}, {y}) is covered by {count} tiles")]
    CoordinateCoverage { x: u32, y: u32, count: usize },
    #[error("tile ({x}, {y}) has terrain `{terrain}` with no matching catalog entry")]
    TerrainNotInCatalog { x: u32, y: u32, terrain: String },
}

/// Checks the structural invariants of a generated map:
///
/// - the map holds exactly `width × height` tiles,
/// - every coordinate inside the map is covered by exactly one tile,
/// - every tile's terrain kind has its own entry in `terrain_catalog`.
pub fn verify_tile_map(tile_map: &TileMap, terrain_catalog: &TerrainCatalog) -> Result<(), VerifyError> {
    let grid = tile_map.grid();
    let expected = grid.size.area();
    let actual = tile_map.terrain_kind_list.len();
    if actual != expected {
        return Err(VerifyError::TileCountMismatch {
            width: grid.width(),
            height: grid.height(),
            expected,
            actual,
        });
    }

    let mut coverage = vec![0_usize; expected];
    for tile in tile_map.all_tiles() {
        let offset_coordinate = tile.to_offset(grid);
        let Some(cell) = grid.offset_to_cell(offset_coordinate) else {
            return Err(VerifyError::TileOutsideMap {
                index: tile.index(),
                x: offset_coordinate.x(),
                y: offset_coordinate.y(),
            });
        };
        coverage[cell.index()] += 1;

        let terrain_kind = tile.terrain_kind(tile_map);
        if terrain_catalog.info(terrain_kind).name != terrain_kind {
            return Err(VerifyError::TerrainNotInCatalog {
                x: offset_coordinate.x() as u32,
                y: offset_coordinate.y() as u32,
                terrain: terrain_kind.name().to_owned(),
            });
        }
    }

    if let Some((index, &count)) = coverage.iter().enumerate().find(|&(_, &count)| count != 1) {
        let offset_coordinate = Tile::new(index).to_offset(grid);
        return Err(VerifyError::CoordinateCoverage {
            x: offset_coordinate.x() as u32,
            y: offset_coordinate.y() as u32,
            count,
        });
    }

    Ok(())
}
