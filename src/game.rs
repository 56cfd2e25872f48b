//! The game state and the interactive loop.
//!
//! The loop is single-threaded: it draws a frame, then blocks on the next terminal
//! event for at most one frame interval. Pressing `E` ends the turn, `Q`, `Esc` or
//! `Ctrl+C` closes the window.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glam::UVec2;
use tracing::debug;

use crate::{
    render::{MapRenderer, RenderError, RenderSettings, TerminalCanvas, TerminalWindow},
    ruleset::TerrainCatalog,
    tile_map::{MapError, MapParameters, TileMap},
};

/// Counts completed turns. The first turn is turn 1.
///
/// Advancing has no effect on the map yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnCounter {
    turn: u32,
}

impl TurnCounter {
    pub const FIRST_TURN: u32 = 1;

    pub fn new() -> Self {
        Self {
            turn: Self::FIRST_TURN,
        }
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Ends the current turn and returns the number of the new one.
    pub fn advance(&mut self) -> u32 {
        self.turn = self.turn.saturating_add(1);
        self.turn
    }
}

impl Default for TurnCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    EndTurn,
    Quit,
}

/// Maps a key press to a [`GameAction`], `None` for keys without a binding.
pub fn action_for_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(GameAction::Quit),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(GameAction::EndTurn),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameAction::Quit),
        _ => None,
    }
}

/// One game session: the map, the terrain rules and the turn counter.
#[derive(Debug, Clone)]
pub struct Game {
    tile_map: TileMap,
    terrain_catalog: TerrainCatalog,
    turn_counter: TurnCounter,
}

impl Game {
    pub fn new(tile_map: TileMap, terrain_catalog: TerrainCatalog) -> Self {
        Self {
            tile_map,
            terrain_catalog,
            turn_counter: TurnCounter::new(),
        }
    }

    /// Generates a map from `map_parameters` and starts a session on it with the default terrain rules.
    pub fn from_parameters(map_parameters: &MapParameters) -> Result<Self, MapError> {
        let tile_map = crate::generate_map(map_parameters)?;
        Ok(Self::new(tile_map, TerrainCatalog::default()))
    }

    pub fn tile_map(&self) -> &TileMap {
        &self.tile_map
    }

    pub fn terrain_catalog(&self) -> &TerrainCatalog {
        &self.terrain_catalog
    }

    pub fn turn(&self) -> u32 {
        self.turn_counter.turn()
    }

    /// Applies `action`. Returns `false` when the session should stop.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::EndTurn => {
                let turn = self.turn_counter.advance();
                debug!(turn, "Turn ended");
                true
            }
            GameAction::Quit => false,
        }
    }

    /// Draws the map and the status line onto `canvas`.
    pub fn draw(&self, canvas: &mut TerminalCanvas, renderer: &MapRenderer) {
        canvas.clear();
        renderer.draw(canvas, &self.tile_map, &self.terrain_catalog);

        let status_row = renderer.map_extent(&self.tile_map).y;
        if let Ok(status_row) = u16::try_from(status_row) {
            canvas.put_str(
                0,
                status_row,
                &format!("Turn {} | E: end turn | Q: quit", self.turn()),
            );
        }
    }
}

/// Runs the interactive loop until the player quits.
///
/// Each tile is drawn two cells wide and one cell high, which looks roughly square in most terminals.
pub fn run_game_loop(
    window: &mut TerminalWindow,
    game: &mut Game,
    render_settings: &RenderSettings,
) -> Result<(), RenderError> {
    let renderer = MapRenderer::new(UVec2::new(2, 1), UVec2::ZERO, None);
    let frame_duration = Duration::from_secs(1) / render_settings.frames_per_second.max(1);

    let (width, height) = window.size()?;
    let mut canvas = TerminalCanvas::new(width, height, render_settings.background_color);

    debug!(turn = game.turn(), "Entering game loop");
    loop {
        game.draw(&mut canvas, &renderer);
        window.present(&canvas)?;

        if !event::poll(frame_duration)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = action_for_key(key) {
                    if !game.apply_action(action) {
                        return Ok(());
                    }
                }
            }
            Event::Resize(width, height) => {
                canvas.resize(width, height);
                window.invalidate();
            }
            _ => {}
        }
    }
}
