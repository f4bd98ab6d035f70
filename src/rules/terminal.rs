//! End of game detection, harvest and scoring

use crate::board::{Board, Side};

/// Final result of a finished board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Side with the strictly larger store, `None` on a tie
    pub winner: Option<Side>,
    /// Winner's store (either store on a tie)
    pub score: u8,
}

impl Outcome {
    #[inline]
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}

/// Sweep every seed left in `side`'s pits into `side`'s own store.
pub fn harvest(board: &mut Board, side: Side) {
    let store = side.store();
    for pit in side.pits() {
        let seeds = board.take(pit.position());
        board.add(store, seeds);
    }
}

/// Check if the game has ended, harvesting if it has.
///
/// The game ends as soon as either side's pits are all empty; the other
/// side then keeps its remaining seeds. Returns `false` without touching
/// the board otherwise.
pub fn is_terminal(board: &mut Board) -> bool {
    let south_empty = board.is_side_empty(Side::South);
    let north_empty = board.is_side_empty(Side::North);

    if !south_empty && !north_empty {
        return false;
    }
    if south_empty {
        harvest(board, Side::North);
    }
    if north_empty {
        harvest(board, Side::South);
    }
    true
}

/// Compare stores. Only meaningful once [`is_terminal`] has returned `true`.
#[must_use]
pub fn winner(board: &Board) -> Outcome {
    let south = board.store(Side::South);
    let north = board.store(Side::North);

    match south.cmp(&north) {
        std::cmp::Ordering::Greater => Outcome {
            winner: Some(Side::South),
            score: south,
        },
        std::cmp::Ordering::Less => Outcome {
            winner: Some(Side::North),
            score: north,
        },
        std::cmp::Ordering::Equal => Outcome {
            winner: None,
            score: south,
        },
    }
}
