//! Search module for the Mancala AI
//!
//! Contains:
//! - Depth-limited minimax with alpha-beta pruning
//! - An unpruned minimax reference used for verification and benchmarks

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
