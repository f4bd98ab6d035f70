//! Evaluation module for Mancala positions
//!
//! Store difference only: captured and harvested seeds are the score.

pub mod heuristic;

pub use heuristic::evaluate;
