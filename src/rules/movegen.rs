//! Token move generation: orthogonal steps plus the jump rule
//!
//! A token may step to an orthogonal neighbor when no wall separates them and
//! the neighbor is free. When the neighbor holds a token (and no wall is in
//! between), the mover jumps: straight over it if nothing blocks the far side,
//! otherwise to either cell diagonally beside the jumped token, each gated by
//! the wall on that side.

use crate::board::{Direction, Grid, Pos, TOTAL_CELLS};

/// Most destinations a single cell can have (two per direction)
const MAX_MOVES: usize = 8;

/// Small fixed-capacity set of destination cells, kept in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSet {
    cells: [Pos; MAX_MOVES],
    len: u8,
}

impl MoveSet {
    pub const fn new() -> Self {
        Self {
            cells: [Pos::new(0, 0); MAX_MOVES],
            len: 0,
        }
    }

    /// Insert unless already present
    #[inline]
    pub fn insert(&mut self, pos: Pos) {
        if !self.contains(pos) {
            debug_assert!((self.len as usize) < MAX_MOVES);
            self.cells[self.len as usize] = pos;
            self.len += 1;
        }
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.as_slice().contains(&pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Pos] {
        &self.cells[..self.len as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.as_slice().iter().copied()
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Legal destinations for a token standing on `from`.
///
/// Works for any cell, occupied or not, so it doubles as the edge function of
/// the move graph. Occupied cells are never returned.
pub fn moves_from(grid: &Grid, from: Pos) -> MoveSet {
    let mut moves = MoveSet::new();

    for dir in Direction::ALL {
        if grid.has_wall(from, dir) {
            continue;
        }
        let Some(next) = from.step(dir) else {
            continue;
        };

        if !grid.is_occupied(next) {
            moves.insert(next);
            continue;
        }

        // Jump over the neighbor
        let straight = if grid.has_wall(next, dir) {
            None
        } else {
            next.step(dir)
        };

        match straight {
            Some(landing) => {
                if !grid.is_occupied(landing) {
                    moves.insert(landing);
                }
            }
            None => {
                for side in dir.sides() {
                    if grid.has_wall(next, side) {
                        continue;
                    }
                    if let Some(diag) = next.step(side) {
                        if !grid.is_occupied(diag) {
                            moves.insert(diag);
                        }
                    }
                }
            }
        }
    }

    moves
}

/// Move sets for every cell of a grid, keyed by cell index.
#[derive(Debug, Clone)]
pub struct MoveGraph {
    edges: [MoveSet; TOTAL_CELLS],
}

impl MoveGraph {
    pub fn build(grid: &Grid) -> Self {
        let mut edges = [MoveSet::new(); TOTAL_CELLS];
        for (idx, slot) in edges.iter_mut().enumerate() {
            *slot = moves_from(grid, Pos::from_index(idx));
        }
        Self { edges }
    }

    #[inline]
    pub fn neighbors(&self, pos: Pos) -> &MoveSet {
        &self.edges[pos.to_index()]
    }
}
