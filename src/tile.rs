use crate::{
    grid::{Cell, OffsetCoordinate, SquareGrid},
    ruleset::TerrainCatalog,
    tile_component::TerrainKind,
    tile_map::TileMap,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// `Tile` represents a tile on the map, where the `usize` is the index of the current tile.
///
/// The index is the row-major position of the tile in its [`TileMap`], so the coordinates of a tile
/// are fixed once the tile exists. The data of the tile (its terrain kind) is stored in the map and
/// queried through the tile.
pub struct Tile(usize);

impl Tile {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Creates a `Tile` from an `OffsetCoordinate`, or `None` if the coordinate is outside `grid`.
    pub fn from_offset(offset_coordinate: OffsetCoordinate, grid: SquareGrid) -> Option<Self> {
        grid.offset_to_cell(offset_coordinate).map(Self::from_cell)
    }

    #[inline(always)]
    pub fn from_cell(cell: Cell) -> Self {
        Self(cell.index())
    }

    #[inline(always)]
    pub fn to_cell(&self) -> Cell {
        Cell::new(self.0)
    }

    /// Get the index of the tile.
    ///
    /// The index indicates the tile's position on the map, typically used to access or reference specific tiles.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Converts a tile to the corresponding offset coordinate based on grid parameters.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the tile is out of bounds for the given grid.
    pub fn to_offset(&self, grid: SquareGrid) -> OffsetCoordinate {
        grid.cell_to_offset(self.to_cell())
    }

    /// Returns the column of the tile.
    pub fn x(&self, grid: SquareGrid) -> u32 {
        self.to_offset(grid).x() as u32
    }

    /// Returns the row of the tile.
    pub fn y(&self, grid: SquareGrid) -> u32 {
        self.to_offset(grid).y() as u32
    }

    /// Returns the terrain kind of the tile.
    #[inline]
    pub fn terrain_kind(&self, tile_map: &TileMap) -> TerrainKind {
        tile_map.terrain_kind_list[self.0]
    }

    /// Returns the display color of the tile.
    #[inline]
    pub fn color(&self, tile_map: &TileMap, terrain_catalog: &TerrainCatalog) -> [u8; 3] {
        terrain_catalog.color(self.terrain_kind(tile_map))
    }

    /// Returns `true` if units could enter the tile.
    #[inline]
    pub fn is_passable(&self, tile_map: &TileMap, terrain_catalog: &TerrainCatalog) -> bool {
        terrain_catalog.is_passable(self.terrain_kind(tile_map))
    }

    /// Returns an iterator over the tiles sharing an edge with the current tile.
    ///
    /// Corner tiles have 2 neighbors, other edge tiles 3 and interior tiles 4.
    pub fn neighbor_tiles(&self, grid: SquareGrid) -> impl Iterator<Item = Self> + use<> {
        grid.neighbors(self.to_cell()).map(Self::from_cell)
    }
}
