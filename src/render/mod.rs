//! Drawing a [`TileMap`] onto a surface.
//!
//! [`MapRenderer`] turns every tile into a colored rectangle and hands it to a [`Canvas`].
//! Two canvases exist: [`ImageCanvas`], an RGB image that can be saved as PNG,
//! and [`TerminalCanvas`], a grid of colored character cells shown by a [`TerminalWindow`].

use std::io;

use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    grid::{
        OffsetCoordinate,
        square::{Square, SquareLayout},
    },
    ruleset::TerrainCatalog,
    tile::Tile,
    tile_map::TileMap,
};

mod image_canvas;
mod terminal;

pub use image_canvas::ImageCanvas;
pub use terminal::{TerminalCanvas, TerminalWindow};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to initialise the display: {0}")]
    RenderInitFailure(#[source] io::Error),
    #[error("failed to draw to the display: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write the map image: {0}")]
    Image(#[from] image::ImageError),
}

/// Render configuration. The defaults give 48-pixel tiles with a dark gray outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Edge length of a tile in pixels.
    pub tile_size: u32,
    /// Color of the 1-pixel outline around each tile, `None` draws no outline.
    pub border_color: Option<[u8; 3]>,
    /// Color of the surface outside the map.
    pub background_color: [u8; 3],
    /// Upper bound of redraws per second in the game loop.
    pub frames_per_second: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            tile_size: 48,
            border_color: Some([50, 50, 50]),
            background_color: [0, 0, 0],
            frames_per_second: 30,
        }
    }
}

/// An axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: UVec2,
    pub size: UVec2,
}

impl Rect {
    pub const fn new(min: UVec2, size: UVec2) -> Self {
        Self { min, size }
    }

    /// One past the bottom-right corner.
    pub fn max(&self) -> UVec2 {
        self.min + self.size
    }

    /// Returns the part of the rectangle inside `[0, bounds)`.
    pub fn clip(&self, bounds: UVec2) -> Rect {
        let min = self.min.min(bounds);
        let max = self.max().min(bounds);
        Rect::new(min, max - min)
    }

    pub fn contains(&self, point: UVec2) -> bool {
        point.cmpge(self.min).all() && point.cmplt(self.max()).all()
    }
}

/// A surface the renderer can paint rectangles on.
pub trait Canvas {
    /// Size of the drawable area in canvas units.
    fn size(&self) -> UVec2;

    /// Fills `rect` with `color`. Parts outside the canvas are ignored.
    fn fill_rect(&mut self, rect: Rect, color: [u8; 3]);

    /// Draws the one-unit-wide outline of `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: [u8; 3]) {
        if rect.size.x == 0 || rect.size.y == 0 {
            return;
        }
        let Rect { min, size } = rect;
        let max = rect.max();
        self.fill_rect(Rect::new(min, UVec2::new(size.x, 1)), color);
        self.fill_rect(Rect::new(UVec2::new(min.x, max.y - 1), UVec2::new(size.x, 1)), color);
        self.fill_rect(Rect::new(min, UVec2::new(1, size.y)), color);
        self.fill_rect(Rect::new(UVec2::new(max.x - 1, min.y), UVec2::new(1, size.y)), color);
    }
}

/// Draws each tile of a map as a colored rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRenderer {
    layout: SquareLayout,
    border_color: Option<[u8; 3]>,
}

impl MapRenderer {
    /// Creates a renderer drawing tiles of `tile_size` canvas units with the top-left tile at `origin`.
    pub fn new(tile_size: UVec2, origin: UVec2, border_color: Option<[u8; 3]>) -> Self {
        Self {
            layout: SquareLayout::new(tile_size.as_vec2(), origin.as_vec2()),
            border_color,
        }
    }

    /// Pixel renderer: square tiles of [`RenderSettings::tile_size`] pixels.
    pub fn from_settings(render_settings: &RenderSettings) -> Self {
        Self::new(
            UVec2::splat(render_settings.tile_size),
            UVec2::ZERO,
            render_settings.border_color,
        )
    }

    /// Size of the canvas area covered by `tile_map`.
    pub fn map_extent(&self, tile_map: &TileMap) -> UVec2 {
        let size = tile_map.size();
        let bottom_right = self.layout.square_to_pixel(Square::new(size.width as i32, size.height as i32));
        bottom_right.as_uvec2()
    }

    /// Returns the rectangle covered by the tile at `offset_coordinate`.
    pub fn tile_rect(&self, offset_coordinate: OffsetCoordinate) -> Rect {
        let top_left = self.layout.square_to_pixel(Square::from_offset(offset_coordinate));
        Rect::new(top_left.as_uvec2(), self.layout.size.as_uvec2())
    }

    /// Returns the tile drawn at `position`, if any.
    pub fn tile_at_position(&self, tile_map: &TileMap, position: UVec2) -> Option<Tile> {
        let square = self.layout.pixel_to_square(position.as_vec2() + Vec2::splat(0.5));
        Tile::from_offset(square.to_offset(), tile_map.grid())
    }

    /// Paints every tile of `tile_map` with its terrain color, then its outline if a border color is set.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, tile_map: &TileMap, terrain_catalog: &TerrainCatalog) {
        let grid = tile_map.grid();
        for tile in tile_map.all_tiles() {
            let rect = self.tile_rect(tile.to_offset(grid));
            canvas.fill_rect(rect, tile.color(tile_map, terrain_catalog));
            if let Some(border_color) = self.border_color {
                canvas.stroke_rect(rect, border_color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::UVec2;

    use super::{Canvas, MapRenderer, Rect, RenderSettings};
    use crate::{grid::OffsetCoordinate, ruleset::TerrainCatalog, tile_map::TileMap};

    /// Records every call so the drawing order can be checked.
    #[derive(Default)]
    struct RecordingCanvas {
        fills: Vec<(Rect, [u8; 3])>,
    }

    impl Canvas for RecordingCanvas {
        fn size(&self) -> UVec2 {
            UVec2::new(1000, 1000)
        }

        fn fill_rect(&mut self, rect: Rect, color: [u8; 3]) {
            self.fills.push((rect, color));
        }
    }

    #[test]
    fn rect_clip_and_contains() {
        let rect = Rect::new(UVec2::new(8, 2), UVec2::new(4, 4));

        assert_eq!(rect.clip(UVec2::new(10, 10)), Rect::new(UVec2::new(8, 2), UVec2::new(2, 4)));
        assert_eq!(rect.clip(UVec2::new(5, 5)).size, UVec2::new(0, 3));
        assert!(rect.contains(UVec2::new(8, 2)));
        assert!(rect.contains(UVec2::new(11, 5)));
        assert!(!rect.contains(UVec2::new(12, 5)));
    }

    #[test]
    fn tiles_are_laid_out_row_major() {
        let renderer = MapRenderer::from_settings(&RenderSettings::default());

        assert_eq!(
            renderer.tile_rect(OffsetCoordinate::new(2, 1)),
            Rect::new(UVec2::new(96, 48), UVec2::new(48, 48))
        );
    }

    #[test]
    fn draw_fills_each_tile_with_its_terrain_color() {
        let tile_map = TileMap::generate(3, 2, Some(42)).unwrap();
        let terrain_catalog = TerrainCatalog::default();
        let renderer = MapRenderer::new(UVec2::new(2, 1), UVec2::ZERO, None);

        let mut canvas = RecordingCanvas::default();
        renderer.draw(&mut canvas, &tile_map, &terrain_catalog);

        assert_eq!(canvas.fills.len(), 6);
        for (tile, (rect, color)) in tile_map.all_tiles().zip(&canvas.fills) {
            assert_eq!(*rect, renderer.tile_rect(tile.to_offset(tile_map.grid())));
            assert_eq!(*color, tile.color(&tile_map, &terrain_catalog));
        }
    }

    #[test]
    fn border_adds_four_strokes_per_tile() {
        let tile_map = TileMap::generate(2, 2, Some(1)).unwrap();
        let renderer = MapRenderer::from_settings(&RenderSettings::default());

        let mut canvas = RecordingCanvas::default();
        renderer.draw(&mut canvas, &tile_map, &TerrainCatalog::default());

        assert_eq!(canvas.fills.len(), 4 * 5);
        assert!(canvas.fills[1..5].iter().all(|&(_, color)| color == [50, 50, 50]));
    }

    #[test]
    fn position_maps_back_to_tile() {
        let tile_map = TileMap::generate(10, 8, Some(42)).unwrap();
        let renderer = MapRenderer::from_settings(&RenderSettings::default());

        assert_eq!(renderer.map_extent(&tile_map), UVec2::new(480, 384));
        assert_eq!(
            renderer.tile_at_position(&tile_map, UVec2::new(479, 383)),
            tile_map.get_tile(9, 7)
        );
        assert_eq!(renderer.tile_at_position(&tile_map, UVec2::new(48, 0)), tile_map.get_tile(1, 0));
        assert_eq!(renderer.tile_at_position(&tile_map, UVec2::new(480, 0)), None);
    }
}
