//! Game rules for Quoridor
//!
//! This module implements the rule set:
//! - Token moves, including the jump rule
//! - Shortest path and reachability over the move graph
//! - Wall legality (geometry + both players keep a path)
//! - Win condition

pub mod movegen;
pub mod path;
pub mod wall;
pub mod win;

// Re-exports for convenient access
pub use movegen::{moves_from, MoveGraph, MoveSet};
pub use path::{is_reachable, shortest_path, shortest_path_length};
pub use wall::{can_place, check_geometry, check_wall, horizontal_anchors, vertical_anchors};
pub use win::check_winner;
