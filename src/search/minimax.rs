//! Fixed-depth minimax over cloned game states
//!
//! White is always the maximising side. Every branch is explored on its own
//! clone of the position, so no branch can observe another's moves.
//!
//! # Branch order
//!
//! 1. Token moves of the side to move, in move-generation order
//! 2. Horizontal walls passing the legality check (if the side holds walls)
//! 3. Vertical walls passing the legality check, once the turn counter is
//!    past [`SearchConfig::vertical_wall_turn`]
//!
//! A branch whose value equals the best so far replaces it, so among equally
//! scored branches the last one in this order is chosen.
//!
//! # Example
//!
//! ```
//! use quoridor::game::GameState;
//! use quoridor::search::{SearchConfig, Searcher};
//!
//! let mut searcher = Searcher::new(SearchConfig { depth: 1, ..SearchConfig::default() });
//! let result = searcher.search(&GameState::new());
//! assert!(result.best_move.is_some());
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Color;
use crate::game::{Action, GameState};
use crate::rules::{horizontal_anchors, vertical_anchors};

/// Score of a won position for White
pub const WIN: f64 = f64::INFINITY;

/// Tunable search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies below the root before the heuristic is applied
    pub depth: u8,
    /// Vertical walls are searched only when `turn_count` exceeds this
    pub vertical_wall_turn: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            vertical_wall_turn: 10,
        }
    }
}

/// Outcome of one root search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Chosen action, `None` if the side to move had no branch
    pub best_move: Option<Action>,
    /// Minimax value of the chosen branch, from White's point of view
    pub score: f64,
    /// Depth searched
    pub depth: u8,
    /// Positions visited, root included
    pub nodes: u64,
}

/// Every branch for the side to move, in search order.
pub fn branches(state: &GameState, config: &SearchConfig) -> Vec<Action> {
    let mut actions: Vec<Action> = state.legal_moves().iter().map(Action::Move).collect();

    if state.walls_remaining(state.turn()) > 0 {
        actions.extend(
            horizontal_anchors()
                .filter(|&wall| state.can_place(wall))
                .map(Action::Wall),
        );
        if state.turn_count() > config.vertical_wall_turn {
            actions.extend(
                vertical_anchors()
                    .filter(|&wall| state.can_place(wall))
                    .map(Action::Wall),
            );
        }
    }
    actions
}

/// Depth-limited minimax searcher
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    nodes: u64,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Pick the best action for the side to move.
    pub fn search(&mut self, state: &GameState) -> SearchResult {
        let start = Instant::now();
        self.nodes = 1;

        let color = state.turn();
        let maximizing = color == Color::White;
        let mut best = if maximizing { -WIN } else { WIN };
        let mut best_move = None;

        if state.winner().is_none() {
            for action in branches(state, &self.config) {
                let mut child = state.clone();
                child.play_unchecked(action);
                let value = self.minimax(&child, 1);

                best = if maximizing { best.max(value) } else { best.min(value) };
                if best == value {
                    best_move = Some(action);
                }
                debug!(%action, value, "root branch");
            }
        }

        info!(
            color = color.name(),
            depth = self.config.depth,
            nodes = self.nodes,
            score = best,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best,
            depth: self.config.depth,
            nodes: self.nodes,
        }
    }

    fn minimax(&mut self, state: &GameState, depth: u8) -> f64 {
        self.nodes += 1;

        match state.winner() {
            Some(Color::White) => return WIN,
            Some(Color::Black) => return -WIN,
            None => {}
        }
        if depth >= self.config.depth {
            return state.evaluate();
        }

        let maximizing = state.turn() == Color::White;
        let actions = branches(state, &self.config);
        if actions.is_empty() {
            return state.evaluate();
        }

        let mut best = if maximizing { -WIN } else { WIN };
        for action in actions {
            let mut child = state.clone();
            child.play_unchecked(action);
            let value = self.minimax(&child, depth + 1);
            best = if maximizing { best.max(value) } else { best.min(value) };
        }
        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
