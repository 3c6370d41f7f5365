//! Cell grid with occupancy and wall-edge flags

use super::{Direction, Orientation, Pos, Wall, TOTAL_CELLS};

/// One board cell packed into a byte: four wall-edge bits plus occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Cell(u8);

impl Cell {
    pub const NORTH: u8 = 1 << 0;
    pub const WEST: u8 = 1 << 1;
    pub const EAST: u8 = 1 << 2;
    pub const SOUTH: u8 = 1 << 3;
    pub const OCCUPIED: u8 = 1 << 4;

    const WALL_MASK: u8 = Self::NORTH | Self::WEST | Self::EAST | Self::SOUTH;

    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Edge bit for a direction
    #[inline]
    pub const fn edge(dir: Direction) -> u8 {
        match dir {
            Direction::Up => Self::NORTH,
            Direction::Left => Self::WEST,
            Direction::Right => Self::EAST,
            Direction::Down => Self::SOUTH,
        }
    }

    /// Wall on the side facing `dir`
    #[inline]
    pub fn has_wall(self, dir: Direction) -> bool {
        self.0 & Self::edge(dir) != 0
    }

    #[inline]
    pub fn is_occupied(self) -> bool {
        self.0 & Self::OCCUPIED != 0
    }

    /// Wall bits only
    #[inline]
    pub fn walls(self) -> u8 {
        self.0 & Self::WALL_MASK
    }

    #[inline]
    fn set(&mut self, bits: u8) {
        self.0 |= bits;
    }

    #[inline]
    fn clear(&mut self, bits: u8) {
        self.0 &= !bits;
    }
}

/// Fixed 9x9 cell storage.
///
/// Pure storage: no legality is checked here. Indexing outside the board is a
/// programming error and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Cell; TOTAL_CELLS],
}

impl Grid {
    /// Empty grid: no walls, no tokens
    pub const fn new() -> Self {
        Self {
            cells: [Cell::empty(); TOTAL_CELLS],
        }
    }

    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        debug_assert!(pos.in_bounds(), "cell {pos} outside grid");
        self.cells[pos.to_index()]
    }

    #[inline]
    fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        debug_assert!(pos.in_bounds(), "cell {pos} outside grid");
        &mut self.cells[pos.to_index()]
    }

    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.cell(pos).is_occupied()
    }

    #[inline]
    pub fn walls_at(&self, pos: Pos) -> Cell {
        self.cell(pos)
    }

    /// Wall on `pos`'s side facing `dir`
    #[inline]
    pub fn has_wall(&self, pos: Pos, dir: Direction) -> bool {
        self.cell(pos).has_wall(dir)
    }

    #[inline]
    pub fn set_occupied(&mut self, pos: Pos, occupied: bool) {
        let cell = self.cell_mut(pos);
        if occupied {
            cell.set(Cell::OCCUPIED);
        } else {
            cell.clear(Cell::OCCUPIED);
        }
    }

    /// Move occupancy from one cell to another
    #[inline]
    pub fn move_token(&mut self, from: Pos, to: Pos) {
        self.set_occupied(from, false);
        self.set_occupied(to, true);
    }

    /// Set the wall flags of the four cells touched by `wall`
    pub fn apply_wall(&mut self, wall: Wall) {
        for (pos, bit) in Self::affected(wall) {
            self.cell_mut(pos).set(bit);
        }
    }

    /// Clear the wall flags of the four cells touched by `wall`
    pub fn remove_wall(&mut self, wall: Wall) {
        for (pos, bit) in Self::affected(wall) {
            self.cell_mut(pos).clear(bit);
        }
    }

    /// The four (cell, edge bit) pairs a wall toggles.
    ///
    /// Caller guarantees `wall.in_bounds()`.
    fn affected(wall: Wall) -> [(Pos, u8); 4] {
        debug_assert!(wall.in_bounds(), "{wall} outside grid");
        let Pos { col: x, row: y } = wall.anchor;
        match wall.orientation {
            Orientation::Horizontal => [
                (Pos::new(x, y), Cell::NORTH),
                (Pos::new(x + 1, y), Cell::NORTH),
                (Pos::new(x, y - 1), Cell::SOUTH),
                (Pos::new(x + 1, y - 1), Cell::SOUTH),
            ],
            Orientation::Vertical => [
                (Pos::new(x, y), Cell::WEST),
                (Pos::new(x, y + 1), Cell::WEST),
                (Pos::new(x - 1, y), Cell::EAST),
                (Pos::new(x - 1, y + 1), Cell::EAST),
            ],
        }
    }

    /// Number of wall edges set (each placed wall contributes 4)
    pub fn wall_edge_count(&self) -> u32 {
        self.cells.iter().map(|c| c.walls().count_ones()).sum()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
