//! Move generation and sowing
//!
//! A move picks up every seed in one of the mover's pits and drops them one
//! at a time along the ring. The opponent's store is stepped over without
//! spending a seed. After the last seed lands, the capture rule is checked
//! exactly once.

use crate::board::{Board, Pit, Position, Side};
use crate::error::MoveError;

use super::capture::try_capture;

/// Pits `side` may sow from, in the side's fixed left-to-right order.
///
/// An empty result means the side has no move.
#[must_use]
pub fn legal_moves(board: &Board, side: Side) -> Vec<Pit> {
    side.pits()
        .into_iter()
        .filter(|&pit| board.pit(pit) > 0)
        .collect()
}

/// Validate a move without touching the board.
pub fn check_move(board: &Board, side: Side, pit: Pit) -> Result<(), MoveError> {
    if !side.owns(pit) {
        return Err(MoveError::NotOwned { side, pit });
    }
    if board.pit(pit) == 0 {
        return Err(MoveError::EmptyPit { pit });
    }
    Ok(())
}

/// Sow from `pit` for `side` and apply any capture.
///
/// Returns the landing position (the last position that received a seed).
///
/// # Errors
/// [`MoveError`] if `pit` is not on `side` or holds no seeds. The board is
/// not modified in that case.
pub fn apply_move(board: &mut Board, side: Side, pit: Pit) -> Result<Position, MoveError> {
    check_move(board, side, pit)?;
    Ok(play(board, side, pit))
}

/// Sow and capture without validation.
///
/// Callers must pass a pit from [`legal_moves`].
#[inline]
pub(crate) fn play(board: &mut Board, side: Side, pit: Pit) -> Position {
    debug_assert!(check_move(board, side, pit).is_ok());

    let landing = sow(board, side, pit);
    try_capture(board, side, landing);
    landing
}

/// Distribute the pit's seeds, returning where the last one landed
fn sow(board: &mut Board, side: Side, pit: Pit) -> Position {
    let skipped = side.opponent().store();
    let mut seeds = board.take(pit.position());
    let mut current = pit.position();

    while seeds > 0 {
        current = current.next();
        if current == skipped {
            continue;
        }
        board.add(current, 1);
        seeds -= 1;
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pit(c: char) -> Pit {
        Pit::from_label(c).unwrap()
    }

    #[test]
    fn test_legal_moves_initial() {
        let board = Board::new();
        let labels: String = legal_moves(&board, Side::South)
            .iter()
            .map(|p| p.label())
            .collect();
        assert_eq!(labels, "ABCDEF");

        let labels: String = legal_moves(&board, Side::North)
            .iter()
            .map(|p| p.label())
            .collect();
        assert_eq!(labels, "GHIJKL");
    }

    #[test]
    fn test_legal_moves_skips_empty_pits() {
        let board = Board::from_counts([0, 3, 0, 1, 0, 0], [0; 6], 0, 0);
        assert_eq!(legal_moves(&board, Side::South), vec![pit('B'), pit('D')]);
        assert!(legal_moves(&board, Side::North).is_empty());
    }

    #[test]
    fn test_sow_from_a_initial() {
        let mut board = Board::new();
        let landing = apply_move(&mut board, Side::South, pit('A')).unwrap();

        assert_eq!(landing, pit('E').position());
        assert_eq!(board.side_pits(Side::South), [0, 5, 5, 5, 5, 4]);
        assert_eq!(board.side_pits(Side::North), [4; 6]);
        assert_eq!(board.store(Side::South), 0);
        assert_eq!(board.store(Side::North), 0);
    }

    #[test]
    fn test_sow_into_own_store() {
        let mut board = Board::new();
        // C holds 4: D, E, F, store 1
        let landing = apply_move(&mut board, Side::South, pit('C')).unwrap();
        assert_eq!(landing, Position::SOUTH_STORE);
        assert_eq!(board.store(Side::South), 1);
        assert_eq!(board.side_pits(Side::South), [4, 4, 0, 5, 5, 5]);
    }

    #[test]
    fn test_sow_crosses_to_opponent_pits() {
        let mut board = Board::new();
        // L holds 4: store 2, A, B, C
        let landing = apply_move(&mut board, Side::North, pit('L')).unwrap();
        assert_eq!(landing, pit('C').position());
        assert_eq!(board.store(Side::North), 1);
        assert_eq!(board.side_pits(Side::South), [5, 5, 5, 4, 4, 4]);
        assert_eq!(board.store(Side::South), 0);
    }

    #[test]
    fn test_sow_skips_opponent_store() {
        // F holds 8: store 1, G, H, I, J, K, L, (skip store 2), A
        let mut board = Board::from_counts([1, 1, 1, 1, 1, 8], [1; 6], 0, 5);
        let landing = apply_move(&mut board, Side::South, pit('F')).unwrap();

        assert_eq!(landing, pit('A').position());
        assert_eq!(board.store(Side::North), 5);
        assert_eq!(board.store(Side::South), 1);
        assert_eq!(board.side_pits(Side::North), [2; 6]);
        assert_eq!(board.side_pits(Side::South), [2, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn test_north_skips_south_store() {
        // 13 seeds: H I J K L, store 2, A B C D E F, (skip store 1), G
        let mut board = Board::from_counts([0; 6], [13, 0, 0, 0, 0, 0], 3, 0);
        let landing = apply_move(&mut board, Side::North, pit('G')).unwrap();

        assert_eq!(landing, pit('G').position());
        assert_eq!(board.store(Side::South), 3);
        // G refilled from empty with F opposite holding one seed: capture 1 + 1
        assert_eq!(board.store(Side::North), 1 + 2);
        assert_eq!(board.pit(pit('G')), 0);
        assert_eq!(board.pit(pit('F')), 0);
        assert_eq!(board.total_seeds(), 16);
    }

    #[test]
    fn test_full_lap_returns_to_origin() {
        // 13 seeds from A visits every position except store 2 once and refills A
        let mut board = Board::from_counts([13, 0, 0, 0, 0, 0], [0; 6], 0, 0);
        let landing = apply_move(&mut board, Side::South, pit('A')).unwrap();

        assert_eq!(landing, pit('A').position());
        assert_eq!(board.store(Side::North), 0);
        // A was emptied before sowing, so landing there with opposite L > 0 captures
        assert_eq!(board.pit(pit('A')), 0);
        assert_eq!(board.pit(pit('L')), 0);
        assert_eq!(board.store(Side::South), 1 + 2);
        assert_eq!(board.total_seeds(), 13);
    }

    #[test]
    fn test_reject_opponent_pit() {
        let mut board = Board::new();
        let before = board;
        let err = apply_move(&mut board, Side::South, pit('G')).unwrap_err();
        assert_eq!(
            err,
            MoveError::NotOwned {
                side: Side::South,
                pit: pit('G')
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_reject_empty_pit() {
        let mut board = Board::from_counts([0, 4, 4, 4, 4, 4], [4; 6], 4, 0);
        let before = board;
        let err = apply_move(&mut board, Side::South, pit('A')).unwrap_err();
        assert_eq!(err, MoveError::EmptyPit { pit: pit('A') });
        assert_eq!(board, before);
    }

    #[test]
    fn test_check_move() {
        let board = Board::new();
        assert!(check_move(&board, Side::North, pit('K')).is_ok());
        assert!(check_move(&board, Side::North, pit('B')).is_err());
    }
}
