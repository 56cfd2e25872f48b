use std::collections::HashSet;

use civ_prototype::{
    MapParameters, TerrainKind, TileMap, generate_map, ruleset::TerrainCatalog, tile_map::MapError,
    verify_tile_map,
};

#[test]
fn generate_10_by_8_with_seed_42() {
    let tile_map = TileMap::generate(10, 8, Some(42)).unwrap();

    assert_eq!(tile_map.tile_count(), 80);
    assert_eq!(tile_map.all_tiles().count(), 80);

    for (x, y) in [(0, 0), (9, 7)] {
        let tile = tile_map.tile_at(x, y).unwrap();
        assert!(TerrainKind::ALL.contains(&tile.terrain_kind(&tile_map)));
    }
    assert_eq!(
        tile_map.tile_at(10, 8),
        Err(MapError::OutOfBounds {
            x: 10,
            y: 8,
            width: 10,
            height: 8,
        })
    );
}

#[test]
fn every_coordinate_has_exactly_one_tile() {
    for (width, height, seed) in [(1, 1, 0), (1, 9, 1), (9, 1, 2), (17, 13, 3)] {
        let tile_map = TileMap::generate(width, height, Some(seed)).unwrap();
        let grid = tile_map.grid();

        let coordinates: Vec<_> = tile_map
            .all_tiles()
            .map(|tile| (tile.x(grid), tile.y(grid)))
            .collect();
        let unique: HashSet<_> = coordinates.iter().copied().collect();
        let expected: HashSet<_> = (0..width)
            .flat_map(|x| (0..height).map(move |y| (x, y)))
            .collect();

        assert_eq!(coordinates.len(), unique.len(), "duplicate coordinates");
        assert_eq!(unique, expected);
        assert_eq!(verify_tile_map(&tile_map, &TerrainCatalog::default()), Ok(()));
    }
}

#[test]
fn out_of_bounds_on_every_side() {
    let (width, height) = (12, 5);
    let tile_map = TileMap::generate(width, height, Some(6)).unwrap();
    let (w, h) = (width as i32, height as i32);

    for (x, y) in [(-1, 0), (w, 0), (0, -1), (0, h)] {
        assert!(matches!(tile_map.tile_at(x, y), Err(MapError::OutOfBounds { .. })));
    }
}

#[test]
fn zero_width_or_height_is_rejected() {
    assert!(matches!(
        TileMap::generate(0, 5, None),
        Err(MapError::InvalidDimension { .. })
    ));
    assert!(matches!(
        TileMap::generate(5, 0, None),
        Err(MapError::InvalidDimension { .. })
    ));
}

#[test]
fn same_seed_same_terrain_everywhere() {
    let map_parameters = MapParameters {
        width: 30,
        height: 20,
        seed: Some(123456),
    };
    let first = generate_map(&map_parameters).unwrap();
    let second = generate_map(&map_parameters).unwrap();

    for (a, b) in first.all_tiles().zip(second.all_tiles()) {
        assert_eq!(a.terrain_kind(&first), b.terrain_kind(&second));
    }
}

#[test]
fn neighbor_counts_on_default_map() {
    let tile_map = generate_map(&MapParameters {
        seed: Some(1),
        ..Default::default()
    })
    .unwrap();
    let grid = tile_map.grid();

    let neighbor_count = |x, y| tile_map.tile_at(x, y).unwrap().neighbor_tiles(grid).count();
    assert_eq!(neighbor_count(0, 0), 2);
    assert_eq!(neighbor_count(19, 19), 2);
    assert_eq!(neighbor_count(5, 0), 3);
    assert_eq!(neighbor_count(5, 5), 4);
}
