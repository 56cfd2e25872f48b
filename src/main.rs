//! Interactive game: generates a map, then shows it in the terminal until the player quits.

use anyhow::{Context, Result};
use civ_prototype::{
    MapParameters,
    game::{Game, run_game_loop},
    logging::{HeldLogWriter, init_logging},
    render::{RenderSettings, TerminalWindow},
};
use tracing::info;

/// Buffers log output while alive and writes it to stderr when dropped.
struct HoldLogs<'a>(&'a HeldLogWriter);

impl<'a> HoldLogs<'a> {
    fn new(log_writer: &'a HeldLogWriter) -> Self {
        log_writer.hold();
        Self(log_writer)
    }
}

impl Drop for HoldLogs<'_> {
    fn drop(&mut self) {
        if let Err(error) = self.0.release() {
            eprintln!("failed to write buffered logs: {error}");
        }
    }
}

fn main() -> Result<()> {
    let log_writer = HeldLogWriter::new();
    init_logging(log_writer.clone())?;

    let map_parameters = MapParameters::default();
    let render_settings = RenderSettings::default();

    let mut game = Game::from_parameters(&map_parameters).context("failed to generate the map")?;
    info!(
        width = game.tile_map().width(),
        height = game.tile_map().height(),
        seed = ?game.tile_map().seed(),
        "Starting game"
    );

    let result = {
        // Declared first so it is dropped last: logs come out after the terminal is restored.
        let _hold_logs = HoldLogs::new(&log_writer);
        let mut window = TerminalWindow::open("civ_prototype").context("failed to open the game window")?;
        run_game_loop(&mut window, &mut game, &render_settings)
    };
    result.context("game loop failed")?;

    info!(turn = game.turn(), "Window closed");
    Ok(())
}
