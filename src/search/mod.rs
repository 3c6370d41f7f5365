//! Move selection for computer players
//!
//! Contains:
//! - Fixed-depth minimax over cloned positions
//! - Non-search blocker and path-follower policies

pub mod minimax;
pub mod policy;

pub use minimax::{branches, SearchConfig, SearchResult, Searcher, WIN};
pub use policy::{
    block_ahead, block_or_follow, enact, follow_path, gated_block, random_level, BLOCKER_LEVELS,
};
