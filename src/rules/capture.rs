//! Capture rule
//!
//! When the last seed of a move lands in one of the mover's own pits that
//! was empty before the move, and the pit across the board holds seeds,
//! both pits are emptied into the mover's store.

use crate::board::{Board, Position, Side};

/// Apply the capture rule to the landing position of a finished sowing.
///
/// Returns the number of seeds moved to `side`'s store, or `None` if the
/// landing does not capture.
pub fn try_capture(board: &mut Board, side: Side, landing: Position) -> Option<u8> {
    let pit = landing.to_pit().filter(|&pit| side.owns(pit))?;
    let opposite = pit.opposite();

    if board.pit(pit) != 1 || board.pit(opposite) == 0 {
        return None;
    }

    let captured = board.take(pit.position()) + board.take(opposite.position());
    board.add(side.store(), captured);
    Some(captured)
}
