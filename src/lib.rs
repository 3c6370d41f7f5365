//! Quoridor rules engine and computer opponents
//!
//! A rules core and opponent engine for Quoridor on a 9x9 board:
//! - Two tokens racing to the opposite edge, White moving first
//! - Ten two-cell walls per player
//! - Orthogonal steps plus the jump rule (straight, else diagonal)
//! - A wall may never cut either token off from its goal row
//!
//! # Architecture
//!
//! - [`board`]: coordinates, walls and the bit-flag cell grid
//! - [`rules`]: move generation, path search, wall legality, winner
//! - [`game`]: game state with the selection/lift state machine
//! - [`eval`]: heuristic position score
//! - [`search`]: minimax and simple blocker policies
//! - [`engine`]: opponents behind one `Policy` trait
//! - [`session`]: match runner
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use quoridor::{GameState, Opponent, Pos, Strategy};
//!
//! let mut state = GameState::new();
//!
//! // White steps forward through the state machine
//! state.select(Pos::new(4, 8)).unwrap();
//! state.move_to(Pos::new(4, 7)).unwrap();
//!
//! // Black answers with a blocker policy
//! let mut black = Opponent::seeded(Strategy::Greediest, 1);
//! state = black.play(&state);
//! assert_eq!(state.turn_count(), 2);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Color, Direction, Orientation, Pos, Token, Wall, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{run_opponent_policy, MoveResult, Opponent, Policy, Strategy};
pub use error::{ConfigError, RuleError};
pub use game::{Action, GameState, Phase, RemoteAction, RemoteOutcome};
pub use search::{SearchConfig, SearchResult, Searcher};
pub use session::{Match, MatchEnd, MatchOutcome};
