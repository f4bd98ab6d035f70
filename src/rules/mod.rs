//! Game rules for Kalah-style Mancala
//!
//! This module implements the rule set:
//! - Sowing (one seed per position, skipping the opponent's store)
//! - Capture on landing in an own empty pit
//! - End of game harvest when one side runs out of seeds
//!
//! There is no extra turn for landing in one's own store.

pub mod capture;
pub mod sowing;
pub mod terminal;

// Re-exports for convenient access
pub use capture::try_capture;
pub use sowing::{apply_move, check_move, legal_moves};
pub use terminal::{harvest, is_terminal, winner, Outcome};
