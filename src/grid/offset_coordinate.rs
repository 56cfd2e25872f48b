use glam::IVec2;

/// A coordinate in the offset coordinate system.
///
/// The origin `(0, 0)` is the top-left tile of the map, `x` grows to the right and `y` grows downward.
/// Inside a grid of size `width × height` the valid ranges are `x ∈ [0, width)` and `y ∈ [0, height)`.
/// Coordinates outside these ranges can still be represented, e.g. the neighbor of an edge tile,
/// or a caller's query with a negative coordinate, so the components are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetCoordinate(pub IVec2);

impl OffsetCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub const fn x(&self) -> i32 {
        self.0.x
    }

    pub const fn y(&self) -> i32 {
        self.0.y
    }

    pub const fn into_inner(self) -> IVec2 {
        self.0
    }

    pub const fn to_array(self) -> [i32; 2] {
        [self.0.x, self.0.y]
    }
}
