//! Computer opponents behind one "propose a move" capability
//!
//! An [`Opponent`] wraps a [`Strategy`] together with the state it needs
//! (search parameters, random source). Strategies in decreasing strength:
//!
//! 1. **Minimax**: fixed-depth search over every move and wall
//! 2. **Blockers**: drop a wall in front of the opponent with some
//!    probability, otherwise step along the shortest path
//!    (Greediest 1, Greedy 2/3, Random 1/2, Hesitant 1/4, Passive 0)
//! 3. **Mixed**: a blocker whose probability is redrawn every turn
//!
//! # Example
//!
//! ```
//! use quoridor::{GameState, Opponent, Strategy};
//!
//! let mut opponent = Opponent::seeded(Strategy::Greedy, 7);
//! let state = GameState::new();
//!
//! let result = opponent.choose(&state);
//! println!("{:?} plays {:?} in {}ms", result.strategy, result.action, result.time_ms);
//!
//! let next = opponent.play(&state);
//! assert_eq!(next.turn_count(), 1);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::game::{Action, GameState};
use crate::search::{enact, gated_block, random_level, SearchConfig, Searcher, BLOCKER_LEVELS};

/// Opponent strategy, selectable per player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Depth-limited minimax search
    #[default]
    Minimax,
    /// Always blocks when it can
    Greediest,
    /// Blocks two turns in three
    Greedy,
    /// Blocks half the time
    Random,
    /// Blocks one turn in four
    Hesitant,
    /// Never blocks; pure shortest-path follower
    Passive,
    /// Picks one of the five blocker levels at random every turn
    Mixed,
    /// Blocker with a custom probability in `[0, 1]`
    Blocker { probability: f64 },
}

impl Strategy {
    /// Fixed blocking probability, `None` for search and mixed play.
    pub fn block_probability(self) -> Option<f64> {
        match self {
            Strategy::Greediest => Some(BLOCKER_LEVELS[0]),
            Strategy::Greedy => Some(BLOCKER_LEVELS[1]),
            Strategy::Random => Some(BLOCKER_LEVELS[2]),
            Strategy::Hesitant => Some(BLOCKER_LEVELS[3]),
            Strategy::Passive => Some(BLOCKER_LEVELS[4]),
            Strategy::Blocker { probability } => Some(probability),
            Strategy::Minimax | Strategy::Mixed => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::Greediest => "greediest",
            Strategy::Greedy => "greedy",
            Strategy::Random => "random",
            Strategy::Hesitant => "hesitant",
            Strategy::Passive => "passive",
            Strategy::Mixed => "mixed",
            Strategy::Blocker { .. } => "blocker",
        }
    }
}

/// Anything that can propose the next action for the side to move.
pub trait Policy {
    /// Next action, `None` when there is nothing to play.
    fn propose(&mut self, state: &GameState) -> Option<Action>;

    fn name(&self) -> &str;
}

/// Result of one opponent decision with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Action chosen, if any
    pub action: Option<Action>,
    /// Search score from White's point of view; `None` for non-search play
    pub score: Option<f64>,
    /// Strategy that produced the action
    pub strategy: Strategy,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Positions visited by the search (0 for non-search play)
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(action: Option<Action>, score: f64, nodes: u64, time_ms: u64) -> Self {
        Self {
            action,
            score: Some(score),
            strategy: Strategy::Minimax,
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn heuristic(action: Option<Action>, strategy: Strategy, time_ms: u64) -> Self {
        Self {
            action,
            score: None,
            strategy,
            time_ms,
            nodes: 0,
        }
    }
}

/// A computer player.
pub struct Opponent {
    strategy: Strategy,
    searcher: Searcher,
    rng: StdRng,
}

impl Opponent {
    /// Opponent with default search parameters and an OS-seeded RNG
    pub fn new(strategy: Strategy) -> Self {
        Self::with_config(strategy, SearchConfig::default(), None)
    }

    /// Opponent with a reproducible random source
    pub fn seeded(strategy: Strategy, seed: u64) -> Self {
        Self::with_config(strategy, SearchConfig::default(), Some(seed))
    }

    pub fn with_config(strategy: Strategy, search: SearchConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            strategy,
            searcher: Searcher::new(search),
            rng,
        }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Decide on an action without playing it.
    #[must_use]
    pub fn choose(&mut self, state: &GameState) -> MoveResult {
        let start = Instant::now();

        if self.strategy == Strategy::Minimax {
            let result = self.searcher.search(state);
            return MoveResult::from_search(
                result.best_move,
                result.score,
                result.nodes,
                start.elapsed().as_millis() as u64,
            );
        }

        let probability = match self.strategy.block_probability() {
            Some(p) => p,
            None => random_level(&mut self.rng),
        };
        let action = gated_block(state, probability, &mut self.rng);
        debug!(
            strategy = self.strategy.name(),
            probability,
            "heuristic opponent decided"
        );
        MoveResult::heuristic(action, self.strategy, start.elapsed().as_millis() as u64)
    }

    /// Choose and play one action, returning the resulting state.
    ///
    /// The input is returned unchanged when there is nothing to play.
    pub fn play(&mut self, state: &GameState) -> GameState {
        let mut next = state.clone();
        let Some(action) = self.choose(state).action else {
            return next;
        };
        if let Err(err) = enact(&mut next, action) {
            warn!(%action, %err, "opponent proposed an illegal action");
            return state.clone();
        }
        next
    }
}

impl Policy for Opponent {
    fn propose(&mut self, state: &GameState) -> Option<Action> {
        self.choose(state).action
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }
}

/// Apply one turn of `strategy` to `state` and return the resulting state.
pub fn run_opponent_policy(strategy: Strategy, state: &GameState) -> GameState {
    Opponent::new(strategy).play(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Pos, Wall};

    #[test]
    fn test_named_probabilities() {
        assert_eq!(Strategy::Greediest.block_probability(), Some(1.0));
        assert_eq!(Strategy::Greedy.block_probability(), Some(2.0 / 3.0));
        assert_eq!(Strategy::Random.block_probability(), Some(0.5));
        assert_eq!(Strategy::Hesitant.block_probability(), Some(0.25));
        assert_eq!(Strategy::Passive.block_probability(), Some(0.0));
        assert_eq!(Strategy::Mixed.block_probability(), None);
        assert_eq!(Strategy::Minimax.block_probability(), None);
    }

    #[test]
    fn test_greediest_blocks_first() {
        let state = GameState::new();
        let next = run_opponent_policy(Strategy::Greediest, &state);
        assert_eq!(next.walls_remaining(Color::White), 9);
        assert!(!next.can_place(Wall::horizontal(4, 1)));
        assert_eq!(next.turn(), Color::Black);
    }

    #[test]
    fn test_passive_follows_path() {
        let state = GameState::new();
        let next = run_opponent_policy(Strategy::Passive, &state);
        assert_eq!(next.token(Color::White).pos, Pos::new(4, 7));
        assert_eq!(next.walls_remaining(Color::White), 10);
    }

    #[test]
    fn test_minimax_reports_search_stats() {
        let mut state = GameState::new();
        state.set_walls_remaining(Color::White, 0);
        state.set_walls_remaining(Color::Black, 0);

        let mut opponent = Opponent::new(Strategy::Minimax);
        let result = opponent.choose(&state);
        assert_eq!(result.action, Some(Action::Move(Pos::new(4, 7))));
        assert!(result.nodes > 1);
        assert!(result.score.is_some());
        assert_eq!(opponent.name(), "minimax");
    }

    #[test]
    fn test_seeded_mixed_is_reproducible() {
        let state = GameState::new();
        let mut a = Opponent::seeded(Strategy::Mixed, 99);
        let mut b = Opponent::seeded(Strategy::Mixed, 99);
        for _ in 0..10 {
            assert_eq!(a.propose(&state), b.propose(&state));
        }
    }

    #[test]
    fn test_custom_blocker() {
        let state = GameState::new();
        let mut always = Opponent::seeded(Strategy::Blocker { probability: 1.0 }, 1);
        assert_eq!(
            always.propose(&state),
            Some(Action::Wall(Wall::horizontal(4, 1)))
        );
    }

    #[test]
    fn test_play_on_finished_game_is_noop() {
        let mut state = GameState::new();
        state.set_token(Color::White, Pos::new(4, 0));
        let next = Opponent::new(Strategy::Passive).play(&state);
        assert_eq!(next, state);
    }

    #[test]
    fn test_strategy_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: Strategy,
        }
        let w: Wrapper = toml::from_str("strategy = \"hesitant\"").unwrap();
        assert_eq!(w.strategy, Strategy::Hesitant);
        let w: Wrapper = toml::from_str("strategy = { blocker = { probability = 0.75 } }").unwrap();
        assert_eq!(w.strategy, Strategy::Blocker { probability: 0.75 });
    }
}
