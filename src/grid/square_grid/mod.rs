use crate::grid::{Cell, Direction, OffsetCoordinate, Size};

use square::Square;

pub mod square;

/// A rectangular, non-wrapping grid of square cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareGrid {
    pub size: Size,
}

impl SquareGrid {
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.size.height
    }

    /// Returns `true` if `offset_coordinate` lies inside the grid.
    pub fn contains(&self, offset_coordinate: OffsetCoordinate) -> bool {
        let [x, y] = offset_coordinate.to_array();
        x >= 0 && y >= 0 && (x as u32) < self.size.width && (y as u32) < self.size.height
    }

    /// Converts an offset coordinate to a cell, or `None` if it is outside the grid.
    pub fn offset_to_cell(&self, offset_coordinate: OffsetCoordinate) -> Option<Cell> {
        if !self.contains(offset_coordinate) {
            return None;
        }
        let [x, y] = offset_coordinate.to_array();
        Some(Cell::new(y as usize * self.size.width as usize + x as usize))
    }

    /// Converts a cell to its offset coordinate.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the cell is out of bounds for the grid.
    pub fn cell_to_offset(&self, cell: Cell) -> OffsetCoordinate {
        debug_assert!(
            cell.index() < self.size.area(),
            "cell {} is out of bounds for a {}x{} grid",
            cell.index(),
            self.size.width,
            self.size.height
        );
        let width = self.size.width as usize;
        OffsetCoordinate::new((cell.index() % width) as i32, (cell.index() / width) as i32)
    }

    /// Returns the cell next to `cell` in `direction`, or `None` at the edge of the grid.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let square = Square::from_offset(self.cell_to_offset(cell));
        self.offset_to_cell(square.neighbor(direction).to_offset())
    }

    /// Returns an iterator over the cells sharing an edge with `cell`, in [`Direction::CLOCKWISE`] order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + use<> {
        let grid = *self;
        Direction::CLOCKWISE
            .into_iter()
            .filter_map(move |direction| grid.neighbor(cell, direction))
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        (0..self.size.area()).map(Cell::new)
    }
}

#[cfg(test)]
mod tests {
    use super::SquareGrid;
    use crate::grid::{Cell, Direction, OffsetCoordinate, Size};

    #[test]
    fn offset_and_cell_round_trip() {
        let grid = SquareGrid::new(Size::new(5, 3));

        for cell in grid.cells() {
            let offset_coordinate = grid.cell_to_offset(cell);
            assert_eq!(grid.offset_to_cell(offset_coordinate), Some(cell));
        }
        assert_eq!(grid.cell_to_offset(Cell::new(7)), OffsetCoordinate::new(2, 1));
    }

    #[test]
    fn coordinates_outside_are_rejected() {
        let grid = SquareGrid::new(Size::new(5, 3));

        for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 3), (5, 3)] {
            assert!(!grid.contains(OffsetCoordinate::new(x, y)));
            assert_eq!(grid.offset_to_cell(OffsetCoordinate::new(x, y)), None);
        }
    }

    #[test]
    fn neighbor_directions() {
        let grid = SquareGrid::new(Size::new(3, 3));
        let center = Cell::new(4);

        assert_eq!(grid.neighbor(center, Direction::North), Some(Cell::new(1)));
        assert_eq!(grid.neighbor(center, Direction::East), Some(Cell::new(5)));
        assert_eq!(grid.neighbor(center, Direction::South), Some(Cell::new(7)));
        assert_eq!(grid.neighbor(center, Direction::West), Some(Cell::new(3)));
        assert_eq!(grid.neighbor(Cell::new(0), Direction::North), None);
        assert_eq!(grid.neighbor(Cell::new(0), Direction::West), None);
    }

    #[test]
    fn neighbor_count_depends_on_position() {
        let grid = SquareGrid::new(Size::new(4, 4));

        // corner, edge, interior
        assert_eq!(grid.neighbors(Cell::new(0)).count(), 2);
        assert_eq!(grid.neighbors(Cell::new(1)).count(), 3);
        assert_eq!(grid.neighbors(Cell::new(5)).count(), 4);
    }

    #[test]
    fn opposite_direction_leads_back() {
        let grid = SquareGrid::new(Size::new(3, 3));
        let center = Cell::new(4);

        for direction in Direction::CLOCKWISE {
            let neighbor = grid.neighbor(center, direction).unwrap();
            assert_eq!(grid.neighbor(neighbor, direction.opposite_direction()), Some(center));
        }
    }
}
