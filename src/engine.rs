//! Main AI engine wrapping the alpha-beta searcher
//!
//! The engine owns the configured search depth and reports timing and node
//! counts for each move it picks.
//!
//! # Example
//!
//! ```
//! use mancala::{AIEngine, Board, Side};
//!
//! let mut engine = AIEngine::with_depth(4);
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Side::South);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Pit, Side};
use crate::search::{SearchResult, Searcher};

/// Default search depth in plies
pub const DEFAULT_DEPTH: u8 = 5;

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pit>,
    /// Store difference the search expects for the moving side
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// AI engine for the computer player.
pub struct AIEngine {
    /// Maximum search depth in plies
    max_depth: u8,
}

impl AIEngine {
    /// Create an engine searching [`DEFAULT_DEPTH`] plies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an engine with a custom search depth.
    #[must_use]
    pub fn with_depth(max_depth: u8) -> Self {
        Self { max_depth }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Get the best move for `side`, or `None` if it has no move.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<Pit> {
        self.get_move_with_stats(board, side).best_move
    }

    /// Get the best move for `side` with search statistics.
    ///
    /// `side` is both the side to move and the maximizing side.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side) -> MoveResult {
        let start = Instant::now();
        let mut searcher = Searcher::new(side);
        let result = searcher.search(board, side, self.max_depth);
        let time_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            side = %side,
            depth = self.max_depth,
            nodes = result.nodes,
            cutoffs = result.stats.cutoffs,
            score = result.score,
            time_ms,
            "search finished"
        );

        MoveResult::from_search(result, time_ms)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick `side`'s move by searching `depth` plies.
#[must_use]
pub fn best_move(board: &Board, side: Side, depth: u8) -> Option<Pit> {
    AIEngine::with_depth(depth).get_move(board, side)
}
