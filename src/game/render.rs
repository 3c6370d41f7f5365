//! Plain-text board diagram
//!
//! ```text
//!    0 1 2 3 4 5 6 7 8
//! 0  . . . . B . . . .
//!                 - -
//! 1  . . . . . . . . .
//! ```
//!
//! `W`/`B` are the tokens, `|` a wall between two cells of a row and `-` a
//! wall under a cell.

use std::fmt;

use crate::board::{Color, Direction, Pos, BOARD_SIZE};

use super::GameState;

impl GameState {
    fn glyph(&self, pos: Pos) -> char {
        if self.token(Color::White).pos == pos {
            'W'
        } else if self.token(Color::Black).pos == pos {
            'B'
        } else {
            '.'
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE as u8 {
            write!(f, "{row}  ")?;
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(col, row);
                let sep = if self.grid().has_wall(pos, Direction::Right) {
                    '|'
                } else {
                    ' '
                };
                write!(f, "{}{sep}", self.glyph(pos))?;
            }
            writeln!(f)?;

            if (row as usize) < BOARD_SIZE - 1 {
                write!(f, "   ")?;
                for col in 0..BOARD_SIZE as u8 {
                    let below = if self.grid().has_wall(Pos::new(col, row), Direction::Down) {
                        '-'
                    } else {
                        ' '
                    };
                    write!(f, "{below} ")?;
                }
                writeln!(f)?;
            }
        }

        write!(
            f,
            "walls: White {} / Black {}, {} to move",
            self.walls_remaining(Color::White),
            self.walls_remaining(Color::Black),
            self.turn().name()
        )
    }
}
