//! Heuristic evaluation function for Quoridor positions
//!
//! The score is always from White's point of view (White maximises, Black
//! minimises). It combines:
//! - Race: how many more cells Black has to cover than White
//! - Walls: a small bonus per wall White holds over Black

use crate::board::Color;
use crate::game::GameState;

/// Value of one wall of inventory advantage, in path cells
pub const WALL_WEIGHT: f64 = 0.1;

/// Evaluate the position for White.
///
/// Returns `len(Black) - len(White) + 0.1 * (walls(White) - walls(Black))`
/// where `len` is the shortest path in cells. If either side has no path the
/// score is `+inf`; legal play never produces such a position.
#[must_use]
pub fn evaluate(state: &GameState) -> f64 {
    let graph = state.move_graph();
    let white = state.token(Color::White);
    let black = state.token(Color::Black);

    let white_len = crate::rules::shortest_path_length(&graph, white.pos, Color::White.goal_row());
    let black_len = crate::rules::shortest_path_length(&graph, black.pos, Color::Black.goal_row());

    let (Some(white_len), Some(black_len)) = (white_len, black_len) else {
        return f64::INFINITY;
    };

    let race = black_len as f64 - white_len as f64;
    let walls = state.walls_remaining(Color::White) as f64 - state.walls_remaining(Color::Black) as f64;
    race + walls * WALL_WEIGHT
}
