//! Position evaluation.
//!
//! Estimates the distance from a board to the goal layout for A* ordering.

pub mod heuristic;

pub use heuristic::{cycle_distance, heuristic};
