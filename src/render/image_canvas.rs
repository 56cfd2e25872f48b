use std::path::Path;

use glam::UVec2;
use image::{Rgb, RgbImage};

use super::{Canvas, MapRenderer, Rect, RenderError, RenderSettings};
use crate::{ruleset::TerrainCatalog, tile_map::TileMap};

/// A canvas backed by an in-memory RGB image. One canvas unit is one pixel.
pub struct ImageCanvas {
    image: RgbImage,
}

impl ImageCanvas {
    pub fn new(width: u32, height: u32, background_color: [u8; 3]) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(background_color)),
        }
    }

    /// Renders `tile_map` into a new image just large enough to hold it.
    pub fn from_tile_map(
        tile_map: &TileMap,
        terrain_catalog: &TerrainCatalog,
        render_settings: &RenderSettings,
    ) -> Self {
        let renderer = MapRenderer::from_settings(render_settings);
        let extent = renderer.map_extent(tile_map);

        let mut canvas = Self::new(extent.x, extent.y, render_settings.background_color);
        renderer.draw(&mut canvas, tile_map, terrain_catalog);
        canvas
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Saves the image, the format is deduced from the extension of `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        self.image.save(path)?;
        Ok(())
    }
}

impl Canvas for ImageCanvas {
    fn size(&self) -> UVec2 {
        UVec2::new(self.image.width(), self.image.height())
    }

    fn fill_rect(&mut self, rect: Rect, color: [u8; 3]) {
        let rect = rect.clip(self.size());
        let max = rect.max();
        for y in rect.min.y..max.y {
            for x in rect.min.x..max.x {
                self.image.put_pixel(x, y, Rgb(color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use glam::UVec2;
    use image::Rgb;

    use super::ImageCanvas;
    use crate::{
        render::{Canvas, Rect, RenderSettings},
        ruleset::TerrainCatalog,
        tile_map::TileMap,
    };

    #[test]
    fn fill_is_clipped_to_the_image() {
        let mut canvas = ImageCanvas::new(4, 4, [0, 0, 0]);
        canvas.fill_rect(Rect::new(UVec2::new(2, 2), UVec2::new(10, 10)), [255, 0, 0]);

        assert_eq!(*canvas.image().get_pixel(3, 3), Rgb([255, 0, 0]));
        assert_eq!(*canvas.image().get_pixel(1, 1), Rgb([0, 0, 0]));
    }

    #[test]
    fn tiles_get_terrain_color_and_border() {
        let tile_map = TileMap::generate(10, 8, Some(42)).unwrap();
        let terrain_catalog = TerrainCatalog::default();
        let render_settings = RenderSettings::default();

        let canvas = ImageCanvas::from_tile_map(&tile_map, &terrain_catalog, &render_settings);
        let image = canvas.image();
        assert_eq!(image.dimensions(), (480, 384));

        let grid = tile_map.grid();
        for tile in tile_map.all_tiles() {
            let x = tile.x(grid) * 48;
            let y = tile.y(grid) * 48;
            assert_eq!(
                *image.get_pixel(x + 24, y + 24),
                Rgb(tile.color(&tile_map, &terrain_catalog))
            );
            assert_eq!(*image.get_pixel(x, y), Rgb([50, 50, 50]));
            assert_eq!(*image.get_pixel(x + 47, y + 47), Rgb([50, 50, 50]));
        }
    }

    #[test]
    fn saved_png_can_be_read_back() {
        let tile_map = TileMap::generate(5, 4, Some(7)).unwrap();
        let render_settings = RenderSettings {
            tile_size: 8,
            ..Default::default()
        };
        let canvas = ImageCanvas::from_tile_map(&tile_map, &TerrainCatalog::default(), &render_settings);

        let target_dir = env::temp_dir().join("civ_prototype_map_images");
        fs::create_dir_all(&target_dir).unwrap();
        let file_path = target_dir.join("saved_png_can_be_read_back.png");
        canvas.save(&file_path).unwrap();

        let loaded = image::open(&file_path).unwrap().into_rgb8();
        assert_eq!(loaded, canvas.into_image());
    }
}
