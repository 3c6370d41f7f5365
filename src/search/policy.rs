//! Simple non-search opponents
//!
//! - Path follower: one step along the BFS shortest path
//! - Wall-ahead blocker: a horizontal wall straight in front of the opponent,
//!   else one column to the left, else follow the path
//! - Probabilistic blocker: tries the wall-ahead block with a fixed
//!   probability, otherwise follows the path
//!
//! Proposals are plain [`Action`]s; [`enact`] plays one through the
//! selection state machine the same way a player at the board would.

use rand::Rng;
use tracing::debug;

use crate::board::{Pos, Wall};
use crate::error::RuleError;
use crate::game::{Action, GameState, Phase};

/// Blocking probability of each named blocker variant, greediest first
pub const BLOCKER_LEVELS: [f64; 5] = [1.0, 2.0 / 3.0, 0.5, 0.25, 0.0];

/// Next step along the active token's shortest path.
///
/// `None` once the token stands on its goal row or has no path.
pub fn follow_path(state: &GameState) -> Option<Action> {
    let path = state.shortest_path(state.turn())?;
    path.get(1).copied().map(Action::Move)
}

/// Candidate anchors directly ahead of the opponent token, in try order.
fn ahead_of_opponent(state: &GameState) -> [Option<Wall>; 2] {
    let opponent = state.token(state.turn().opponent());
    let Pos { col, row } = opponent.pos;
    // Opponents heading for row 0 are blocked by the wall on their north
    // edge, the others by the wall on their south edge.
    let row = if opponent.color.goal_row() == 0 { row } else { row + 1 };

    [
        Some(Wall::horizontal(col, row)),
        col.checked_sub(1).map(|left| Wall::horizontal(left, row)),
    ]
}

/// A legal horizontal wall in front of the opponent, if any.
pub fn block_ahead(state: &GameState) -> Option<Action> {
    if state.walls_remaining(state.turn()) == 0 {
        return None;
    }
    ahead_of_opponent(state)
        .into_iter()
        .flatten()
        .find(|&wall| state.can_place(wall))
        .map(Action::Wall)
}

/// Block ahead of the opponent when possible, otherwise follow the path.
pub fn block_or_follow(state: &GameState) -> Option<Action> {
    block_ahead(state).or_else(|| follow_path(state))
}

/// Attempt a block with probability `probability`, else follow the path.
pub fn gated_block<R: Rng>(state: &GameState, probability: f64, rng: &mut R) -> Option<Action> {
    let roll: f64 = rng.random();
    if roll < probability {
        block_or_follow(state)
    } else {
        follow_path(state)
    }
}

/// Pick one of [`BLOCKER_LEVELS`] uniformly.
pub fn random_level<R: Rng>(rng: &mut R) -> f64 {
    BLOCKER_LEVELS[rng.random_range(0..BLOCKER_LEVELS.len())]
}

/// Play `action` for the side to move through the selection state machine.
///
/// A move selects the active token and moves it. A wall is lifted, turned
/// horizontal or vertical, and dropped at its anchor. On error the state is
/// left as the failed operation left it: board untouched, nothing selected.
pub fn enact(state: &mut GameState, action: Action) -> Result<(), RuleError> {
    match action {
        Action::Move(to) => {
            let from = state.token(state.turn()).pos;
            state.select(from)?;
            state.move_to(to)
        }
        Action::Wall(wall) => {
            if matches!(state.phase(), Phase::WallLifted { .. }) {
                state.unlift_wall()?;
            }
            state.lift_wall()?;
            state.set_orientation(wall.orientation)?;
            state.place_wall(wall.anchor).inspect_err(|err| {
                debug!(%wall, %err, "proposed wall rejected");
            })
        }
    }
}
