//! Renders a freshly generated map to a PNG file.
//! Run with: cargo run --bin render_map_image
//!
//! The image is written to `map_images/map_<seed>.png`, so the seed can be reused to regenerate it.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use civ_prototype::{
    MapParameters, generate_map,
    logging::{HeldLogWriter, init_logging},
    render::{ImageCanvas, RenderSettings},
    ruleset::TerrainCatalog,
};
use tracing::info;

/// The directory of the map images.
const MAP_IMAGE_DIRECTORY: &str = "map_images";

fn main() -> Result<()> {
    init_logging(HeldLogWriter::new())?;

    let tile_map = generate_map(&MapParameters::default())?;
    let canvas = ImageCanvas::from_tile_map(&tile_map, &TerrainCatalog::default(), &RenderSettings::default());

    let target_dir = Path::new(MAP_IMAGE_DIRECTORY);
    fs::create_dir_all(target_dir)
        .with_context(|| format!("failed to create {}", target_dir.display()))?;

    let file_name = match tile_map.seed() {
        Some(seed) => format!("map_{seed}.png"),
        None => "map.png".to_owned(),
    };
    let file_path = target_dir.join(file_name);
    canvas.save(&file_path)?;

    info!(path = %file_path.display(), "Finished rendering the map");
    Ok(())
}
