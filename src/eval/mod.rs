//! Position evaluation for the search

pub mod heuristic;

pub use heuristic::{evaluate, WALL_WEIGHT};
