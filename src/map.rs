use fnv::FnvHashSet;

use crate::data::{MapCell, Pos};
use crate::vec2d::Vec2d;

/// The static layout of a level, shared by every world built from it.
///
/// Cells that had no recognised character in the level text (including
/// the space past the end of short rows) hold no tile at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    grid: Vec2d<Option<MapCell>>,
    docks: FnvHashSet<Pos>,
}

impl Map {
    pub(crate) fn new(grid: Vec2d<Option<MapCell>>, docks: FnvHashSet<Pos>) -> Self {
        Map { grid, docks }
    }

    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    /// `None` both outside the grid and in gaps inside it.
    pub fn tile_at(&self, pos: Pos) -> Option<MapCell> {
        self.grid.get(pos).and_then(|&cell| cell)
    }

    pub fn docks(&self) -> &FnvHashSet<Pos> {
        &self.docks
    }

    pub fn is_dock(&self, pos: Pos) -> bool {
        self.docks.contains(&pos)
    }
}
