//! Terminal display: a [`TerminalCanvas`] of colored character cells and the
//! [`TerminalWindow`] that shows it on the alternate screen.

use std::{
    io::{self, Write},
    panic,
    sync::Once,
};

use crossterm::{
    QueueableCommand, cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use glam::UVec2;
use tracing::warn;

use super::{Canvas, Rect, RenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TerminalCell {
    ch: char,
    fg: [u8; 3],
    bg: [u8; 3],
}

/// A grid of character cells. One canvas unit is one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalCanvas {
    width: u16,
    height: u16,
    background_color: [u8; 3],
    cells: Vec<TerminalCell>,
}

impl TerminalCanvas {
    const TEXT_COLOR: [u8; 3] = [220, 220, 220];

    pub fn new(width: u16, height: u16, background_color: [u8; 3]) -> Self {
        Self {
            width,
            height,
            background_color,
            cells: vec![Self::blank(background_color); width as usize * height as usize],
        }
    }

    fn blank(background_color: [u8; 3]) -> TerminalCell {
        TerminalCell {
            ch: ' ',
            fg: Self::TEXT_COLOR,
            bg: background_color,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resizes the canvas and blanks every cell.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Self::blank(self.background_color));
        self.clear();
    }

    pub fn clear(&mut self) {
        self.cells.fill(Self::blank(self.background_color));
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Writes `text` starting at `(x, y)` keeping the background of the cells it covers.
    /// Characters past the right edge are dropped.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str) {
        for (offset, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            let Some(index) = x.checked_add(offset).and_then(|x| self.index(x, y)) else {
                break;
            };
            self.cells[index].ch = ch;
            self.cells[index].fg = Self::TEXT_COLOR;
        }
    }

    /// Returns the character at `(x, y)`.
    pub fn char_at(&self, x: u16, y: u16) -> Option<char> {
        self.index(x, y).map(|index| self.cells[index].ch)
    }

    /// Returns the background color at `(x, y)`.
    pub fn background_at(&self, x: u16, y: u16) -> Option<[u8; 3]> {
        self.index(x, y).map(|index| self.cells[index].bg)
    }
}

impl Canvas for TerminalCanvas {
    fn size(&self) -> UVec2 {
        UVec2::new(self.width as u32, self.height as u32)
    }

    fn fill_rect(&mut self, rect: Rect, color: [u8; 3]) {
        let rect = rect.clip(self.size());
        let max = rect.max();
        for y in rect.min.y..max.y {
            for x in rect.min.x..max.x {
                // Clipped to the canvas size, so both fit in u16.
                if let Some(index) = self.index(x as u16, y as u16) {
                    self.cells[index] = TerminalCell {
                        ch: ' ',
                        fg: Self::TEXT_COLOR,
                        bg: color,
                    };
                }
            }
        }
    }
}

/// The terminal switched to raw mode and the alternate screen.
///
/// Opening acquires the terminal, dropping the window gives it back, on every exit path.
pub struct TerminalWindow {
    stdout: io::Stdout,
    /// Set when the next [`TerminalWindow::present`] must clear the screen first.
    needs_clear: bool,
}

impl TerminalWindow {
    /// Switches the terminal to raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::RenderInitFailure`] if the terminal can't be set up,
    /// for example when stdout is not a terminal.
    pub fn open(title: &str) -> Result<Self, RenderError> {
        install_panic_hook();
        terminal::enable_raw_mode().map_err(RenderError::RenderInitFailure)?;
        // From here on `Drop` restores the terminal, even if the rest of the setup fails.
        let mut window = Self {
            stdout: io::stdout(),
            needs_clear: true,
        };
        window.enter(title).map_err(RenderError::RenderInitFailure)?;
        Ok(window)
    }

    fn enter(&mut self, title: &str) -> io::Result<()> {
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(terminal::SetTitle(title))?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()
    }

    fn exit(&mut self) -> io::Result<()> {
        restore_terminal(&mut self.stdout)
    }

    /// Returns the terminal size as `(columns, rows)`.
    pub fn size(&self) -> Result<(u16, u16), RenderError> {
        Ok(terminal::size()?)
    }

    /// Forces the next [`TerminalWindow::present`] to clear the screen. Call it after a resize.
    pub fn invalidate(&mut self) {
        self.needs_clear = true;
    }

    /// Copies `canvas` to the screen.
    pub fn present(&mut self, canvas: &TerminalCanvas) -> Result<(), RenderError> {
        if self.needs_clear {
            self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
            self.needs_clear = false;
        }

        let mut current_colors: Option<([u8; 3], [u8; 3])> = None;
        for y in 0..canvas.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..canvas.width() {
                let Some(index) = canvas.index(x, y) else {
                    continue;
                };
                let cell = canvas.cells[index];
                if current_colors != Some((cell.fg, cell.bg)) {
                    self.stdout.queue(SetForegroundColor(rgb_to_color(cell.fg)))?;
                    self.stdout.queue(SetBackgroundColor(rgb_to_color(cell.bg)))?;
                    current_colors = Some((cell.fg, cell.bg));
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalWindow {
    fn drop(&mut self) {
        if let Err(error) = self.exit() {
            warn!(%error, "Failed to restore the terminal");
        }
    }
}

/// Queues the commands that undo [`TerminalWindow::open`]'s screen changes.
fn queue_restore(out: &mut impl Write) -> io::Result<()> {
    out.queue(ResetColor)?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    queue_restore(out)?;
    out.flush()?;
    terminal::disable_raw_mode()
}

static PANIC_HOOK: Once = Once::new();

/// Restores the terminal before the panic message is printed, so the message stays on the main screen.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            if let Err(error) = restore_terminal(&mut io::stdout()) {
                eprintln!("failed to restore the terminal: {error}");
            }
            default_hook(panic_info);
        }));
    });
}

fn rgb_to_color([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb { r, g, b }
}
