//! Static evaluation used at search leaves

use crate::board::{Board, Side};

/// Evaluate the board for the maximizing side.
///
/// Returns `store[max_side] - store[opponent]`; positive values favor
/// `max_side`. Seeds still in pits are ignored.
#[must_use]
#[inline]
pub fn evaluate(board: &Board, max_side: Side) -> i32 {
    board.store(max_side) as i32 - board.store(max_side.opponent()) as i32
}
