//! Board representation for Quoridor

pub mod grid;


// Re-exports
pub use grid::{Cell, Grid};

use serde::{Deserialize, Serialize};

/// Board size (9x9)
pub const BOARD_SIZE: usize = 9;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 81

/// Last row/column index
pub const LAST: u8 = BOARD_SIZE as u8 - 1;

/// Walls each player starts with
pub const WALLS_PER_PLAYER: u8 = 10;

/// Player colors. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index into per-color arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Row this color has to reach
    #[inline]
    pub fn goal_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => LAST,
        }
    }

    /// Starting cell: midpoint of the edge opposite the goal
    #[inline]
    pub fn start(self) -> Pos {
        match self {
            Color::White => Pos::new(LAST / 2, LAST),
            Color::Black => Pos::new(LAST / 2, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// Cell coordinate on the board.
///
/// Coordinates outside the board can be represented so that callers can hand
/// in raw input; every entry point checks [`Pos::in_bounds`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Build a position from signed coordinates, `None` if off the board.
    #[inline]
    pub fn checked(col: i32, row: i32) -> Option<Self> {
        if Self::is_valid(col, row) {
            Some(Self::new(col as u8, row as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        (self.col as usize) < BOARD_SIZE && (self.row as usize) < BOARD_SIZE
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            col: (idx % BOARD_SIZE) as u8,
            row: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(col: i32, row: i32) -> bool {
        col >= 0 && col < BOARD_SIZE as i32 && row >= 0 && row < BOARD_SIZE as i32
    }

    /// Neighbor one step in `dir`, `None` at the board edge.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dc, dr) = dir.delta();
        Pos::checked(self.col as i32 + dc, self.row as i32 + dr)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Orthogonal directions, in the order moves are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// (column, row) delta. Row 0 is the top edge.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// The two directions perpendicular to this one, in generation order.
    #[inline]
    pub fn sides(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }
}

/// Wall orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[inline]
    pub fn flipped(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A two-cell wall segment.
///
/// A horizontal wall anchored at `(x, y)` lies on the line above row `y` and
/// spans columns `x` and `x + 1`. A vertical wall anchored at `(x, y)` lies on
/// the line left of column `x` and spans rows `y` and `y + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub anchor: Pos,
    pub orientation: Orientation,
}

impl Wall {
    #[inline]
    pub const fn new(anchor: Pos, orientation: Orientation) -> Self {
        Self { anchor, orientation }
    }

    #[inline]
    pub const fn horizontal(col: u8, row: u8) -> Self {
        Self::new(Pos::new(col, row), Orientation::Horizontal)
    }

    #[inline]
    pub const fn vertical(col: u8, row: u8) -> Self {
        Self::new(Pos::new(col, row), Orientation::Vertical)
    }

    /// Whether the whole segment lies inside the board.
    #[inline]
    pub fn in_bounds(self) -> bool {
        let Pos { col, row } = self.anchor;
        match self.orientation {
            Orientation::Horizontal => col < LAST && (1..=LAST).contains(&row),
            Orientation::Vertical => (1..=LAST).contains(&col) && row < LAST,
        }
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.orientation {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        };
        write!(f, "{} wall at {}", kind, self.anchor)
    }
}

/// A player's token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub color: Color,
    pub pos: Pos,
}

impl Token {
    #[inline]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            pos: color.start(),
        }
    }

    /// Whether the token stands on its goal row
    #[inline]
    pub fn at_goal(self) -> bool {
        self.pos.row == self.color.goal_row()
    }
}
