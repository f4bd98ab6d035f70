//! Mancala (Kalah) rule engine and alpha-beta AI
//!
//! A six-pit, four-seed Kalah engine with a depth-limited minimax opponent:
//! - 14 positions: six pits and a store per side
//! - Sowing skips the opponent's store
//! - Capture when the last seed lands in an empty pit of your own
//! - The game ends when either side's pits are empty; the other side
//!   harvests its remaining seeds
//! - No extra turn for landing in your own store
//!
//! # Architecture
//!
//! - [`board`]: Board representation and topology
//! - [`rules`]: Sowing, capture, terminal detection and scoring
//! - [`eval`]: Static evaluation
//! - [`search`]: Alpha-beta search (plus an unpruned reference minimax)
//! - [`engine`]: AI facade with configured depth and timing
//! - [`game`]: Turn controller used by both front ends
//! - [`config`]: TOML configuration
//! - [`ui`]: egui desktop front end
//!
//! # Quick Start
//!
//! ```
//! use mancala::{new_game, rules, AIEngine, Side};
//!
//! let mut board = new_game();
//! let mut engine = AIEngine::with_depth(3);
//!
//! if let Some(pit) = engine.get_move(&board, Side::South) {
//!     let landing = rules::apply_move(&mut board, Side::South, pit).unwrap();
//!     println!("South sowed {pit}, last seed in {landing}");
//! }
//! assert_eq!(board.total_seeds(), 48);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod logging;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pit, Position, Side, PITS_PER_SIDE, SEEDS_PER_PIT};
pub use engine::{best_move, AIEngine, MoveResult};
pub use error::{ConfigError, GameError, MoveError};
pub use game::{Game, GameOutcome, Player, Winner};
pub use rules::{apply_move, is_terminal, legal_moves, winner, Outcome};

/// Fresh starting board: four seeds in every pit, both stores empty.
#[inline]
pub fn new_game() -> Board {
    Board::new()
}
