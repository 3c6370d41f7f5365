//! Turn-by-turn match runner
//!
//! A [`Match`] owns the live [`GameState`] and one [`Policy`] per color. Each
//! ply asks the side to move for an action and plays it through the selection
//! state machine. A side that has nothing to propose, or proposes something
//! illegal, forfeits.

use tracing::{info, warn};

use crate::board::Color;
use crate::config::EngineConfig;
use crate::engine::Policy;
use crate::error::RuleError;
use crate::game::{Action, GameState};
use crate::search::enact;

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnd {
    /// A token reached its goal row
    Won(Color),
    /// `loser` had no move or proposed an illegal one
    Forfeit { loser: Color },
    /// The ply cap was reached with no winner
    PlyLimit,
}

impl MatchEnd {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchEnd::Won(color) => Some(color),
            MatchEnd::Forfeit { loser } => Some(loser.opponent()),
            MatchEnd::PlyLimit => None,
        }
    }
}

/// Final result of [`Match::run`]
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub end: MatchEnd,
    /// Plies played by this match
    pub plies: u32,
    /// Every action played, in order
    pub history: Vec<Action>,
    pub state: GameState,
}

impl MatchOutcome {
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.end.winner()
    }
}

pub struct Match {
    state: GameState,
    players: [Box<dyn Policy>; 2],
    max_plies: u32,
    plies: u32,
    history: Vec<Action>,
}

impl Match {
    pub fn new(white: Box<dyn Policy>, black: Box<dyn Policy>) -> Self {
        Self {
            state: GameState::new(),
            players: [white, black],
            max_plies: EngineConfig::default().max_plies,
            plies: 0,
            history: Vec::new(),
        }
    }

    /// Match between the two opponents described by `config`
    pub fn from_config(config: &EngineConfig) -> Self {
        let white = Box::new(config.opponent(Color::White));
        let black = Box::new(config.opponent(Color::Black));
        Self::new(white, black)
            .with_state(GameState::with_walls(config.walls_per_player))
            .with_max_plies(config.max_plies)
    }

    /// Start from a given position instead of a fresh board
    pub fn with_state(mut self, state: GameState) -> Self {
        self.state = state;
        self
    }

    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = max_plies;
        self
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// Play one ply. Returns how the match ended if this ply ended it.
    pub fn step(&mut self) -> Option<MatchEnd> {
        let color = self.state.turn();
        let player = &mut self.players[color.index()];

        let Some(action) = player.propose(&self.state) else {
            return Some(match self.state.winner() {
                Some(winner) => MatchEnd::Won(winner),
                None => {
                    warn!(color = color.name(), player = player.name(), "no move, forfeiting");
                    MatchEnd::Forfeit { loser: color }
                }
            });
        };

        match enact(&mut self.state, action) {
            Ok(()) => {}
            Err(RuleError::GameOver(winner)) => return Some(MatchEnd::Won(winner)),
            Err(err) => {
                warn!(color = color.name(), %action, %err, "illegal proposal, forfeiting");
                return Some(MatchEnd::Forfeit { loser: color });
            }
        }

        self.plies += 1;
        self.history.push(action);
        info!(
            ply = self.plies,
            color = color.name(),
            player = player.name(),
            %action,
            walls_left = self.state.walls_remaining(color),
            "ply"
        );

        self.state.poll_winner().map(MatchEnd::Won)
    }

    /// Play until someone wins, forfeits, or the ply cap is hit.
    pub fn run(mut self) -> MatchOutcome {
        let end = loop {
            if self.plies >= self.max_plies {
                break MatchEnd::PlyLimit;
            }
            if let Some(end) = self.step() {
                break end;
            }
        };

        info!(?end, plies = self.plies, "match finished");
        MatchOutcome {
            end,
            plies: self.plies,
            history: self.history,
            state: self.state,
        }
    }
}
