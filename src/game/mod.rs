//! Game model: position, turn order and the selection state machine

mod remote;
mod render;
mod state;

pub use remote::{RemoteAction, RemoteOutcome};
pub use state::{Action, Click, GameState, Phase, MIN_WINNING_TURN};
