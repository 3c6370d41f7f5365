//! Replaying actions received from a remote player
//!
//! The transport layer decodes whatever it receives into [`RemoteAction`]s
//! and feeds them here, in order. Nothing in this module knows about sockets
//! or encodings.

use serde::{Deserialize, Serialize};

use crate::board::{Color, Pos};
use crate::error::RuleError;

use super::state::{Click, GameState};

/// One input event from the remote side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteAction {
    /// A board cell was clicked
    Select(Pos),
    /// The lift/unlift wall key
    ToggleLift,
    /// The flip-wall key
    Flip,
    /// The remote player left the game
    Forfeit,
}

/// Effect of a replayed remote action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOutcome {
    /// Selection state changed; still the same player's turn
    Applied,
    /// A move or wall completed the turn
    TurnEnded,
    /// The sender gave up
    Forfeited { winner: Color },
}

impl GameState {
    /// Replay `action` sent by `from`.
    ///
    /// Actions from the player whose turn it is not are rejected, except for
    /// a forfeit, which is accepted at any time and does not touch the board.
    pub fn apply_remote(
        &mut self,
        from: Color,
        action: RemoteAction,
    ) -> Result<RemoteOutcome, RuleError> {
        match action {
            RemoteAction::Forfeit => Ok(RemoteOutcome::Forfeited {
                winner: from.opponent(),
            }),
            _ if from != self.turn() => Err(RuleError::NotYourTurn),
            RemoteAction::Select(pos) => match self.click(pos)? {
                Click::Selected => Ok(RemoteOutcome::Applied),
                Click::Moved | Click::WallPlaced => Ok(RemoteOutcome::TurnEnded),
            },
            RemoteAction::ToggleLift => self.lift_wall().map(|()| RemoteOutcome::Applied),
            RemoteAction::Flip => self.flip_orientation().map(|()| RemoteOutcome::Applied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, Wall};
    use crate::game::Phase;

    #[test]
    fn test_replay_move() {
        let mut state = GameState::new();
        assert_eq!(
            state.apply_remote(Color::White, RemoteAction::Select(Pos::new(4, 8))),
            Ok(RemoteOutcome::Applied)
        );
        assert_eq!(
            state.apply_remote(Color::White, RemoteAction::Select(Pos::new(4, 7))),
            Ok(RemoteOutcome::TurnEnded)
        );
        assert_eq!(state.token(Color::White).pos, Pos::new(4, 7));
        assert_eq!(state.turn(), Color::Black);
    }

    #[test]
    fn test_replay_wall_with_flip() {
        let mut state = GameState::new();
        state.apply_remote(Color::White, RemoteAction::ToggleLift).unwrap();
        state.apply_remote(Color::White, RemoteAction::Flip).unwrap();
        assert_eq!(
            state.apply_remote(Color::White, RemoteAction::Select(Pos::new(2, 3))),
            Ok(RemoteOutcome::TurnEnded)
        );
        assert!(state.grid().has_wall(Pos::new(2, 3), Direction::Up));
        assert!(state.grid().has_wall(Pos::new(3, 3), Direction::Up));
        assert_eq!(state.walls_remaining(Color::White), 9);
    }

    #[test]
    fn test_out_of_turn_rejected() {
        let mut state = GameState::new();
        assert_eq!(
            state.apply_remote(Color::Black, RemoteAction::ToggleLift),
            Err(RuleError::NotYourTurn)
        );
        assert_eq!(state.phase(), Phase::AwaitingSelection);
    }

    #[test]
    fn test_forfeit_any_time() {
        let mut state = GameState::new();
        let before = state.clone();
        assert_eq!(
            state.apply_remote(Color::Black, RemoteAction::Forfeit),
            Ok(RemoteOutcome::Forfeited {
                winner: Color::White
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_rejected_remote_wall_reports_reason() {
        let mut state = GameState::new();
        state.put_wall(Wall::vertical(2, 3));
        state.apply_remote(Color::White, RemoteAction::ToggleLift).unwrap();
        assert_eq!(
            state.apply_remote(Color::White, RemoteAction::Select(Pos::new(2, 3))),
            Err(RuleError::WallOverlap(Wall::vertical(2, 3)))
        );
        assert_eq!(state.turn(), Color::White);
    }
}
