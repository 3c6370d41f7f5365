//! Wall placement legality
//!
//! A wall is legal when it lies on the board, does not overlap or cross an
//! existing wall, and leaves both tokens a route to their goal row. The route
//! check is done by applying the wall to the grid, probing reachability and
//! removing it again, so the grid is unchanged whatever the outcome.

use tracing::trace;

use crate::board::{Color, Direction, Grid, Orientation, Pos, Wall, LAST};
use crate::error::RuleError;

use super::movegen::MoveGraph;
use super::path::is_reachable;

/// Every in-bounds horizontal anchor, column-major.
pub fn horizontal_anchors() -> impl Iterator<Item = Wall> {
    (0..LAST).flat_map(|x| (1..=LAST).map(move |y| Wall::horizontal(x, y)))
}

/// Every in-bounds vertical anchor, column-major.
pub fn vertical_anchors() -> impl Iterator<Item = Wall> {
    (1..=LAST).flat_map(|x| (0..LAST).map(move |y| Wall::vertical(x, y)))
}

/// Bounds, overlap and crossing checks only. Does not touch the grid.
pub fn check_geometry(grid: &Grid, wall: Wall) -> Result<(), RuleError> {
    if !wall.in_bounds() {
        return Err(RuleError::OutOfBounds(wall.anchor));
    }

    let Pos { col: x, row: y } = wall.anchor;
    match wall.orientation {
        Orientation::Vertical => {
            if grid.has_wall(Pos::new(x, y), Direction::Left)
                || grid.has_wall(Pos::new(x, y + 1), Direction::Left)
            {
                return Err(RuleError::WallOverlap(wall));
            }
            // Horizontal wall through the midpoint of this one
            if grid.has_wall(Pos::new(x - 1, y + 1), Direction::Up)
                && grid.has_wall(Pos::new(x, y + 1), Direction::Up)
            {
                return Err(RuleError::WallCrossing(wall));
            }
        }
        Orientation::Horizontal => {
            if grid.has_wall(Pos::new(x, y), Direction::Up)
                || grid.has_wall(Pos::new(x + 1, y), Direction::Up)
            {
                return Err(RuleError::WallOverlap(wall));
            }
            // Vertical wall through the midpoint of this one
            if grid.has_wall(Pos::new(x + 1, y - 1), Direction::Left)
                && grid.has_wall(Pos::new(x + 1, y), Direction::Left)
            {
                return Err(RuleError::WallCrossing(wall));
            }
        }
    }
    Ok(())
}

/// Full legality check for placing `wall` with the tokens at `white`/`black`.
///
/// The wall is applied to `grid` for the reachability probe and always
/// removed before returning.
pub fn check_wall(grid: &mut Grid, white: Pos, black: Pos, wall: Wall) -> Result<(), RuleError> {
    check_geometry(grid, wall)?;

    grid.apply_wall(wall);
    let graph = MoveGraph::build(grid);
    let open = is_reachable(&graph, white, Color::White.goal_row())
        && is_reachable(&graph, black, Color::Black.goal_row());
    grid.remove_wall(wall);

    if open {
        Ok(())
    } else {
        trace!(%wall, "wall would block a path");
        Err(RuleError::PathBlocked(wall))
    }
}

/// Boolean form of [`check_wall`]
#[inline]
pub fn can_place(grid: &mut Grid, white: Pos, black: Pos, wall: Wall) -> bool {
    check_wall(grid, white, black, wall).is_ok()
}
