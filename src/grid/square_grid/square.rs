use std::ops::Add;

use glam::{IVec2, Vec2};

use crate::grid::{direction::Direction, offset_coordinate::OffsetCoordinate};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Square(IVec2);

impl Square {
    /// Square neighbor coordinates array, following [`Direction::CLOCKWISE`] order.
    pub const SQUARE_DIRECTIONS: [Self; 4] = [
        Self::new(0, -1),
        Self::new(1, 0),
        Self::new(0, 1),
        Self::new(-1, 0),
    ];

    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    /// Create a new [`Square`] from an [`OffsetCoordinate`].
    pub const fn from_offset(offset_coordinate: OffsetCoordinate) -> Self {
        Self(offset_coordinate.into_inner())
    }

    pub const fn x(&self) -> i32 {
        self.0.x
    }

    pub const fn y(&self) -> i32 {
        self.0.y
    }

    pub fn to_offset(self) -> OffsetCoordinate {
        OffsetCoordinate::new(self.x(), self.y())
    }

    /// Get [`Square`] at the given `direction` from `self`.
    pub fn neighbor(self, direction: Direction) -> Self {
        let edge_index = match direction {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        };
        self + Self::SQUARE_DIRECTIONS[edge_index]
    }
}

impl Add for Square {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// Maps squares to positions on a drawing surface and back.
///
/// `size` is the extent of one square, `origin` the position of the top-left corner of square `(0, 0)`.
/// Surface units are whatever the surface uses: pixels for images, character cells for terminals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareLayout {
    pub size: Vec2,
    pub origin: Vec2,
}

impl SquareLayout {
    pub fn new(size: Vec2, origin: Vec2) -> Self {
        Self { size, origin }
    }

    /// Returns the top-left corner of `square`.
    pub fn square_to_pixel(self, square: Square) -> Vec2 {
        self.origin + square.0.as_vec2() * self.size
    }

    /// Returns the square covering `pixel_position`.
    pub fn pixel_to_square(self, pixel_position: Vec2) -> Square {
        let pt = (pixel_position - self.origin) / self.size;
        Square(pt.floor().as_ivec2())
    }
}
