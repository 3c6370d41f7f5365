//! Turn-sequenced game state with an explicit selection state machine
//!
//! The live game moves through three phases:
//!
//! ```text
//!  AwaitingSelection --select(own token)--> PieceSelected --move_to--> (next turn)
//!         |                                      |
//!         +--lift_wall--> WallLifted <--lift_wall+
//!                           |  flip_orientation
//!                           +--place_wall--> (next turn)
//! ```
//!
//! Every failed operation leaves the board untouched. A failed move or
//! placement also drops back to `AwaitingSelection`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Color, Grid, Orientation, Pos, Token, Wall, WALLS_PER_PLAYER};
use crate::error::RuleError;
use crate::eval::evaluate;
use crate::rules::{self, check_winner, moves_from, MoveGraph, MoveSet};

/// First turn at which [`GameState::poll_winner`] looks at the board.
/// The gate only saves path checks early in the game, and it can report a
/// win one ply late: a jump can put White on row 0 at turn 13. Use
/// [`GameState::winner`] for an ungated answer.
pub const MIN_WINNING_TURN: u32 = 14;

/// Selection state of the active player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    /// The active token is selected; `moves` were computed at selection time
    PieceSelected { from: Pos, moves: MoveSet },
    /// A wall is lifted and follows the pointer until placed
    WallLifted { orientation: Orientation },
}

/// One complete turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move(Pos),
    Wall(Wall),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(pos) => write!(f, "move to {pos}"),
            Action::Wall(wall) => write!(f, "{wall}"),
        }
    }
}

/// What a [`GameState::click`] ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    Selected,
    Moved,
    WallPlaced,
}

/// Complete game position plus the active player's selection.
///
/// Cloning yields a fully independent copy; search explores branches on
/// clones and undo stacks can keep them as snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    grid: Grid,
    tokens: [Token; 2],
    walls: [u8; 2],
    initial_walls: u8,
    turn: Color,
    turn_count: u32,
    phase: Phase,
    /// `Some(result)` once polled this turn
    winner_poll: Option<Option<Color>>,
}

impl GameState {
    /// Fresh game: tokens on their edge midpoints, full inventories, White to move
    pub fn new() -> Self {
        Self::with_walls(WALLS_PER_PLAYER)
    }

    /// Fresh game with a custom wall inventory per player
    pub fn with_walls(walls: u8) -> Self {
        let white = Token::new(Color::White);
        let black = Token::new(Color::Black);
        let mut grid = Grid::new();
        grid.set_occupied(white.pos, true);
        grid.set_occupied(black.pos, true);

        Self {
            grid,
            tokens: [white, black],
            walls: [walls; 2],
            initial_walls: walls,
            turn: Color::White,
            turn_count: 0,
            phase: Phase::AwaitingSelection,
            winner_poll: None,
        }
    }

    /// Start over with the same inventory size
    pub fn reset(&mut self) {
        *self = Self::with_walls(self.initial_walls);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn token(&self, color: Color) -> Token {
        self.tokens[color.index()]
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn walls_remaining(&self, color: Color) -> u8 {
        self.walls[color.index()]
    }

    /// Moves of the selected token, if one is selected
    pub fn selected_moves(&self) -> Option<&MoveSet> {
        match &self.phase {
            Phase::PieceSelected { moves, .. } => Some(moves),
            _ => None,
        }
    }

    /// Legal destinations of the active token
    pub fn legal_moves(&self) -> MoveSet {
        moves_from(&self.grid, self.token(self.turn).pos)
    }

    pub fn move_graph(&self) -> MoveGraph {
        MoveGraph::build(&self.grid)
    }

    /// BFS path from `color`'s token to its goal row, start cell included
    pub fn shortest_path(&self, color: Color) -> Option<Vec<Pos>> {
        rules::shortest_path(&self.move_graph(), self.token(color).pos, color.goal_row())
    }

    /// Shortest path length in cells, `None` when walled off
    pub fn shortest_path_length(&self, color: Color) -> Option<usize> {
        rules::shortest_path_length(&self.move_graph(), self.token(color).pos, color.goal_row())
    }

    pub fn is_reachable(&self, color: Color) -> bool {
        rules::is_reachable(&self.move_graph(), self.token(color).pos, color.goal_row())
    }

    /// Full legality check of a wall for the current position
    pub fn check_wall(&self, wall: Wall) -> Result<(), RuleError> {
        let mut probe = self.grid;
        rules::check_wall(
            &mut probe,
            self.token(Color::White).pos,
            self.token(Color::Black).pos,
            wall,
        )
    }

    #[inline]
    pub fn can_place(&self, wall: Wall) -> bool {
        self.check_wall(wall).is_ok()
    }

    /// The color whose token stands on its goal row, if any
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        check_winner(self.token(Color::White), self.token(Color::Black))
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Winner check for the game loop: skipped before [`MIN_WINNING_TURN`]
    /// and computed at most once per turn.
    pub fn poll_winner(&mut self) -> Option<Color> {
        if self.turn_count < MIN_WINNING_TURN {
            return None;
        }
        if let Some(cached) = self.winner_poll {
            return cached;
        }
        let winner = self.winner();
        self.winner_poll = Some(winner);
        winner
    }

    /// Heuristic score of the position from White's point of view
    #[inline]
    pub fn evaluate(&self) -> f64 {
        evaluate(self)
    }

    // =========================================================================
    // State machine
    // =========================================================================

    /// Select the active player's token at `pos`
    pub fn select(&mut self, pos: Pos) -> Result<(), RuleError> {
        self.ensure_running()?;
        if !pos.in_bounds() {
            return Err(RuleError::OutOfBounds(pos));
        }
        if matches!(self.phase, Phase::WallLifted { .. }) {
            return Err(RuleError::WallLifted);
        }

        let own = self.token(self.turn);
        if own.pos == pos {
            self.phase = Phase::PieceSelected {
                from: pos,
                moves: moves_from(&self.grid, pos),
            };
            Ok(())
        } else if self.token(self.turn.opponent()).pos == pos {
            Err(RuleError::NotYourTurn)
        } else {
            Err(RuleError::NothingToSelect(pos))
        }
    }

    /// Move the selected token to `pos`
    pub fn move_to(&mut self, pos: Pos) -> Result<(), RuleError> {
        let Phase::PieceSelected { from, moves } = self.phase else {
            return Err(RuleError::NoActiveSelection);
        };
        self.phase = Phase::AwaitingSelection;

        if !pos.in_bounds() {
            return Err(RuleError::OutOfBounds(pos));
        }
        if self.grid.is_occupied(pos) || !moves.contains(pos) {
            return Err(RuleError::IllegalMove(pos));
        }

        self.move_token(from, pos);
        self.advance_turn();
        Ok(())
    }

    /// Lift a wall, or put a lifted one back. Drops any token selection.
    pub fn lift_wall(&mut self) -> Result<(), RuleError> {
        self.ensure_running()?;
        if self.walls_remaining(self.turn) == 0 {
            return Err(RuleError::InventoryExhausted(self.turn));
        }
        self.phase = match self.phase {
            Phase::WallLifted { .. } => Phase::AwaitingSelection,
            _ => Phase::WallLifted {
                orientation: Orientation::Vertical,
            },
        };
        Ok(())
    }

    /// Put a lifted wall back without placing it.
    pub fn unlift_wall(&mut self) -> Result<(), RuleError> {
        match self.phase {
            Phase::WallLifted { .. } => {
                self.phase = Phase::AwaitingSelection;
                Ok(())
            }
            _ => Err(RuleError::NoWallLifted),
        }
    }

    pub fn flip_orientation(&mut self) -> Result<(), RuleError> {
        match &mut self.phase {
            Phase::WallLifted { orientation } => {
                *orientation = orientation.flipped();
                Ok(())
            }
            _ => Err(RuleError::NoWallLifted),
        }
    }

    pub fn set_orientation(&mut self, to: Orientation) -> Result<(), RuleError> {
        match &mut self.phase {
            Phase::WallLifted { orientation } => {
                *orientation = to;
                Ok(())
            }
            _ => Err(RuleError::NoWallLifted),
        }
    }

    /// Drop the lifted wall at `anchor`. A rejected placement cancels the lift.
    pub fn place_wall(&mut self, anchor: Pos) -> Result<(), RuleError> {
        let Phase::WallLifted { orientation } = self.phase else {
            return Err(RuleError::NoWallLifted);
        };
        self.phase = Phase::AwaitingSelection;

        let wall = Wall::new(anchor, orientation);
        if let Err(err) = self.check_wall(wall) {
            debug!(color = self.turn.name(), %err, "wall rejected");
            return Err(err);
        }

        self.put_wall(wall);
        self.walls[self.turn.index()] -= 1;
        self.advance_turn();
        Ok(())
    }

    /// Single entry point for board clicks: places a lifted wall, moves the
    /// selected token, or selects. A failed move falls back to selecting the
    /// clicked cell.
    pub fn click(&mut self, pos: Pos) -> Result<Click, RuleError> {
        match self.phase {
            Phase::WallLifted { .. } => self.place_wall(pos).map(|()| Click::WallPlaced),
            Phase::PieceSelected { .. } => match self.move_to(pos) {
                Ok(()) => Ok(Click::Moved),
                Err(err) => self.select(pos).map(|()| Click::Selected).map_err(|_| err),
            },
            Phase::AwaitingSelection => self.select(pos).map(|()| Click::Selected),
        }
    }

    /// Play a complete action for the active player, validated.
    pub fn apply(&mut self, action: Action) -> Result<(), RuleError> {
        self.ensure_running()?;
        match action {
            Action::Move(to) => {
                if !to.in_bounds() {
                    return Err(RuleError::OutOfBounds(to));
                }
                if !self.legal_moves().contains(to) {
                    return Err(RuleError::IllegalMove(to));
                }
            }
            Action::Wall(wall) => {
                if self.walls_remaining(self.turn) == 0 {
                    return Err(RuleError::InventoryExhausted(self.turn));
                }
                self.check_wall(wall)?;
            }
        }
        self.play_unchecked(action);
        Ok(())
    }

    /// Play an action already known to be legal.
    pub(crate) fn play_unchecked(&mut self, action: Action) {
        match action {
            Action::Move(to) => {
                let from = self.token(self.turn).pos;
                self.move_token(from, to);
            }
            Action::Wall(wall) => {
                self.put_wall(wall);
                self.walls[self.turn.index()] -= 1;
            }
        }
        self.advance_turn();
    }

    fn advance_turn(&mut self) {
        self.phase = Phase::AwaitingSelection;
        self.turn = self.turn.opponent();
        self.turn_count += 1;
        self.winner_poll = None;
    }

    fn ensure_running(&self) -> Result<(), RuleError> {
        match self.winner() {
            Some(color) => Err(RuleError::GameOver(color)),
            None => Ok(()),
        }
    }

    fn move_token(&mut self, from: Pos, to: Pos) {
        self.grid.move_token(from, to);
        let token = &mut self.tokens[self.turn.index()];
        debug_assert_eq!(token.pos, from);
        token.pos = to;
    }

    // =========================================================================
    // Position setup (bypasses the rules)
    // =========================================================================

    /// Put a token on `pos` without any legality check
    pub fn set_token(&mut self, color: Color, pos: Pos) {
        let old = self.tokens[color.index()].pos;
        self.grid.set_occupied(old, false);
        self.grid.set_occupied(pos, true);
        self.tokens[color.index()].pos = pos;
        self.winner_poll = None;
    }

    /// Add a wall to the grid without legality or inventory bookkeeping
    pub fn put_wall(&mut self, wall: Wall) {
        self.grid.apply_wall(wall);
    }

    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
        self.phase = Phase::AwaitingSelection;
    }

    pub fn set_turn_count(&mut self, turn_count: u32) {
        self.turn_count = turn_count;
        self.winner_poll = None;
    }

    pub fn set_walls_remaining(&mut self, color: Color, walls: u8) {
        self.walls[color.index()] = walls;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.turn(), Color::White);
        assert_eq!(state.turn_count(), 0);
        assert_eq!(state.walls_remaining(Color::White), 10);
        assert_eq!(state.walls_remaining(Color::Black), 10);
        assert_eq!(state.token(Color::White).pos, Pos::new(4, 8));
        assert_eq!(state.token(Color::Black).pos, Pos::new(4, 0));
        assert!(state.grid().is_occupied(Pos::new(4, 8)));
        assert!(state.grid().is_occupied(Pos::new(4, 0)));
        assert_eq!(state.phase(), Phase::AwaitingSelection);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_fresh_path_lengths() {
        let state = GameState::new();
        assert_eq!(state.shortest_path_length(Color::White), Some(9));
        assert_eq!(state.shortest_path_length(Color::Black), Some(9));
        assert!(state.is_reachable(Color::White));
        assert!(state.is_reachable(Color::Black));
    }

    #[test]
    fn test_select_and_move() {
        let mut state = GameState::new();
        state.select(Pos::new(4, 8)).unwrap();
        let moves = state.selected_moves().copied().unwrap();
        assert!(moves.contains(Pos::new(4, 7)));
        assert!(moves.contains(Pos::new(3, 8)));
        assert!(moves.contains(Pos::new(5, 8)));

        state.move_to(Pos::new(4, 7)).unwrap();
        assert_eq!(state.token(Color::White).pos, Pos::new(4, 7));
        assert!(!state.grid().is_occupied(Pos::new(4, 8)));
        assert_eq!(state.turn(), Color::Black);
        assert_eq!(state.turn_count(), 1);
        assert_eq!(state.phase(), Phase::AwaitingSelection);
    }

    #[test]
    fn test_select_rejections() {
        let mut state = GameState::new();
        assert_eq!(state.select(Pos::new(4, 0)), Err(RuleError::NotYourTurn));
        assert_eq!(
            state.select(Pos::new(2, 2)),
            Err(RuleError::NothingToSelect(Pos::new(2, 2)))
        );
        assert_eq!(
            state.select(Pos::new(9, 2)),
            Err(RuleError::OutOfBounds(Pos::new(9, 2)))
        );
        assert_eq!(state.phase(), Phase::AwaitingSelection);
    }

    #[test]
    fn test_illegal_move_leaves_board_unchanged() {
        let mut state = GameState::new();
        state.select(Pos::new(4, 8)).unwrap();
        let before = *state.grid();

        assert_eq!(
            state.move_to(Pos::new(4, 6)),
            Err(RuleError::IllegalMove(Pos::new(4, 6)))
        );
        assert_eq!(state.grid(), &before);
        assert_eq!(state.turn(), Color::White);
        assert_eq!(state.phase(), Phase::AwaitingSelection);
        assert_eq!(state.move_to(Pos::new(4, 7)), Err(RuleError::NoActiveSelection));
    }

    #[test]
    fn test_lift_flip_place() {
        let mut state = GameState::new();
        state.lift_wall().unwrap();
        assert_eq!(
            state.phase(),
            Phase::WallLifted {
                orientation: Orientation::Vertical
            }
        );
        state.flip_orientation().unwrap();
        state.place_wall(Pos::new(3, 4)).unwrap();

        assert_eq!(state.walls_remaining(Color::White), 9);
        assert_eq!(state.turn(), Color::Black);
        assert!(state.grid().has_wall(Pos::new(3, 4), crate::board::Direction::Up));
    }

    #[test]
    fn test_lift_toggles_and_drops_selection() {
        let mut state = GameState::new();
        state.select(Pos::new(4, 8)).unwrap();
        state.lift_wall().unwrap();
        assert!(matches!(state.phase(), Phase::WallLifted { .. }));
        state.lift_wall().unwrap();
        assert_eq!(state.phase(), Phase::AwaitingSelection);
        assert_eq!(state.flip_orientation(), Err(RuleError::NoWallLifted));
    }

    #[test]
    fn test_unlift_requires_lifted_wall() {
        let mut state = GameState::new();
        assert_eq!(state.unlift_wall(), Err(RuleError::NoWallLifted));

        state.lift_wall().unwrap();
        state.unlift_wall().unwrap();
        assert_eq!(state.phase(), Phase::AwaitingSelection);
        assert_eq!(state.walls_remaining(Color::White), 10);
        assert_eq!(state.turn(), Color::White);
        assert_eq!(state.unlift_wall(), Err(RuleError::NoWallLifted));
    }

    #[test]
    fn test_lift_requires_inventory() {
        let mut state = GameState::with_walls(0);
        assert_eq!(
            state.lift_wall(),
            Err(RuleError::InventoryExhausted(Color::White))
        );
        assert_eq!(state.phase(), Phase::AwaitingSelection);
    }

    #[test]
    fn test_rejected_wall_cancels_lift() {
        let mut state = GameState::new();
        state.put_wall(Wall::horizontal(3, 4));
        state.lift_wall().unwrap();
        state.set_orientation(Orientation::Horizontal).unwrap();
        let before = *state.grid();

        assert_eq!(
            state.place_wall(Pos::new(3, 4)),
            Err(RuleError::WallOverlap(Wall::horizontal(3, 4)))
        );
        assert_eq!(state.phase(), Phase::AwaitingSelection);
        assert_eq!(state.grid(), &before);
        assert_eq!(state.walls_remaining(Color::White), 10);
        assert_eq!(state.turn(), Color::White);
    }

    #[test]
    fn test_click_dispatch() {
        let mut state = GameState::new();
        assert_eq!(state.click(Pos::new(4, 8)), Ok(Click::Selected));
        // Clicking somewhere unreachable drops the selection
        assert_eq!(
            state.click(Pos::new(0, 0)),
            Err(RuleError::IllegalMove(Pos::new(0, 0)))
        );
        assert_eq!(state.phase(), Phase::AwaitingSelection);

        state.click(Pos::new(4, 8)).unwrap();
        assert_eq!(state.click(Pos::new(4, 7)), Ok(Click::Moved));

        state.lift_wall().unwrap();
        assert_eq!(state.click(Pos::new(2, 2)), Ok(Click::WallPlaced));
        assert_eq!(state.walls_remaining(Color::Black), 9);
    }

    #[test]
    fn test_click_on_own_token_reselects() {
        let mut state = GameState::new();
        state.click(Pos::new(4, 8)).unwrap();
        // Clicking the token again is not a move, so it is selected afresh
        assert_eq!(state.click(Pos::new(4, 8)), Ok(Click::Selected));
        assert!(state.selected_moves().is_some());
    }

    #[test]
    fn test_apply_validates() {
        let mut state = GameState::new();
        assert_eq!(
            state.apply(Action::Move(Pos::new(4, 5))),
            Err(RuleError::IllegalMove(Pos::new(4, 5)))
        );
        state.apply(Action::Move(Pos::new(4, 7))).unwrap();
        state.apply(Action::Wall(Wall::horizontal(4, 7))).unwrap();
        assert_eq!(state.walls_remaining(Color::Black), 9);
        assert_eq!(
            state.apply(Action::Wall(Wall::horizontal(4, 7))),
            Err(RuleError::WallOverlap(Wall::horizontal(4, 7)))
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let state = GameState::new();
        let mut copy = state.clone();
        copy.apply(Action::Wall(Wall::vertical(2, 2))).unwrap();

        assert_ne!(copy.grid(), state.grid());
        assert_eq!(state.walls_remaining(Color::White), 10);
        assert_eq!(state.turn(), Color::White);
    }

    #[test]
    fn test_winner_and_game_over() {
        let mut state = GameState::new();
        state.set_token(Color::White, Pos::new(0, 0));
        assert_eq!(state.winner(), Some(Color::White));
        assert_eq!(state.lift_wall(), Err(RuleError::GameOver(Color::White)));
        assert!(state.is_over());

        let mut state = GameState::new();
        state.set_token(Color::Black, Pos::new(8, 8));
        assert_eq!(state.winner(), Some(Color::Black));
    }

    #[test]
    fn test_poll_winner_waits_for_min_turn() {
        let mut state = GameState::new();
        state.set_token(Color::White, Pos::new(0, 0));
        assert_eq!(state.poll_winner(), None);
        state.set_turn_count(MIN_WINNING_TURN);
        assert_eq!(state.poll_winner(), Some(Color::White));
    }

    #[test]
    fn test_reset_restores_start() {
        let mut state = GameState::with_walls(5);
        state.apply(Action::Move(Pos::new(4, 7))).unwrap();
        state.reset();
        assert_eq!(state, GameState::with_walls(5));
    }
}
