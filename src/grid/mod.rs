//! Square grid geometry: sizes, cells, offset coordinates and directions.
//!
//! A [`Cell`] is the row-major index of a position, `index = y * width + x`,
//! with `(0, 0)` at the top-left corner and `y` growing downward.

use serde::{Deserialize, Serialize};

mod direction;
mod offset_coordinate;
pub mod square_grid;

pub use direction::Direction;
pub use offset_coordinate::OffsetCoordinate;
pub use square_grid::{SquareGrid, square};

/// The dimensions of a grid, in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells covered by the grid.
    #[inline]
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(usize);

impl Cell {
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0
    }
}
