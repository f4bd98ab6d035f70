//! Minimax search with alpha-beta pruning
//!
//! The maximizing side is fixed when the [`Searcher`] is built; the side to
//! move alternates every ply. Each child is searched on its own copy of the
//! board, so sibling branches never see each other's moves.
//!
//! Moves are tried in the side's pit order (A-F or G-L). On equal scores the
//! first move seen is kept, which makes the result deterministic.
//!
//! # Example
//!
//! ```
//! use mancala::board::{Board, Side};
//! use mancala::search::Searcher;
//!
//! let mut searcher = Searcher::new(Side::South);
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Side::South, 5);
//! if let Some(pit) = result.best_move {
//!     println!("Best move: {pit} (score {})", result.score);
//! }
//! ```

use crate::board::{Board, Pit, Side};
use crate::eval::evaluate;
use crate::rules::{is_terminal, legal_moves, sowing::play};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Nodes scored by the static evaluation
    pub leaves: u64,
    /// Sibling scans stopped early by the alpha-beta window
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` if the root had no move
    pub best_move: Option<Pit>,
    /// Minimax value of the root for the maximizing side
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-limited minimax searcher
#[derive(Debug, Clone)]
pub struct Searcher {
    max_side: Side,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher that maximizes `max_side`'s store difference.
    pub fn new(max_side: Side) -> Self {
        Self {
            max_side,
            stats: SearchStats::default(),
        }
    }

    /// The maximizing side
    #[inline]
    pub fn max_side(&self) -> Side {
        self.max_side
    }

    /// Statistics of the last search
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `depth` plies from `board` with `to_move` to play.
    ///
    /// The caller's board is never modified. On an already finished board
    /// the result is the static evaluation with no move.
    pub fn search(&mut self, board: &Board, to_move: Side, depth: u8) -> SearchResult {
        self.stats = SearchStats::default();
        let (score, best_move) = self.alpha_beta(*board, to_move, depth, -INF, INF);
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.stats.nodes,
            stats: self.stats,
        }
    }

    /// Alpha-beta over the `(alpha, beta)` window.
    ///
    /// `board` is this node's own copy; the terminal check may harvest it.
    pub fn alpha_beta(
        &mut self,
        mut board: Board,
        to_move: Side,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Pit>) {
        self.stats.nodes += 1;

        if is_terminal(&mut board) || depth == 0 {
            self.stats.leaves += 1;
            return (evaluate(&board, self.max_side), None);
        }

        // A live board has seeds on both sides
        let moves = legal_moves(&board, to_move);
        debug_assert!(!moves.is_empty());

        let maximizing = to_move == self.max_side;
        let mut best_value = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for pit in moves {
            let mut child = board;
            play(&mut child, to_move, pit);
            let (value, _) = self.alpha_beta(child, to_move.opponent(), depth - 1, alpha, beta);

            if maximizing {
                if value > best_value || best_move.is_none() {
                    best_value = value;
                    best_move = Some(pit);
                }
                alpha = alpha.max(best_value);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            } else {
                if value < best_value || best_move.is_none() {
                    best_value = value;
                    best_move = Some(pit);
                }
                beta = beta.min(best_value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        (best_value, best_move)
    }

    /// Plain minimax with no pruning. Same move order and tie rule as
    /// [`Searcher::alpha_beta`], so both agree on value and move.
    pub fn minimax(&mut self, mut board: Board, to_move: Side, depth: u8) -> (i32, Option<Pit>) {
        self.stats.nodes += 1;

        if is_terminal(&mut board) || depth == 0 {
            self.stats.leaves += 1;
            return (evaluate(&board, self.max_side), None);
        }

        let maximizing = to_move == self.max_side;
        let mut best: Option<(i32, Pit)> = None;

        for pit in legal_moves(&board, to_move) {
            let mut child = board;
            play(&mut child, to_move, pit);
            let (value, _) = self.minimax(child, to_move.opponent(), depth - 1);

            let better = match best {
                None => true,
                Some((best_value, _)) if maximizing => value > best_value,
                Some((best_value, _)) => value < best_value,
            };
            if better {
                best = Some((value, pit));
            }
        }

        match best {
            Some((value, pit)) => (value, Some(pit)),
            None => {
                self.stats.leaves += 1;
                (evaluate(&board, self.max_side), None)
            }
        }
    }
}
