// tests/rules_invariants_prop.rs
#![forbid(unsafe_code)]

//! Property tests for the rule engine and the search.
//!
//! Random rollouts pick a legal pit at every ply (indexing the legal move
//! list with a generated choice), so every board checked here is reachable
//! from the starting position.
//!
//! Invariants covered:
//! - Sowing and harvesting never create or destroy seeds.
//! - Sowing never credits the mover's opponent's store.
//! - A finished board has every pit empty and `winner` agrees with the stores.
//! - Alpha-beta returns the same move and value as unpruned minimax.

use proptest::prelude::*;

use mancala::board::TOTAL_SEEDS;
use mancala::rules::{apply_move, is_terminal, legal_moves, winner};
use mancala::search::Searcher;
use mancala::{Board, Side};

/// Plays `choices` from the start, alternating sides from South.
///
/// Stops early when the game ends; returns the board and the side to move.
fn rollout(choices: &[usize]) -> (Board, Side, bool) {
    let mut board = Board::new();
    let mut side = Side::South;
    for &choice in choices {
        let moves = legal_moves(&board, side);
        if moves.is_empty() {
            return (board, side, true);
        }
        let pit = moves[choice % moves.len()];
        apply_move(&mut board, side, pit).unwrap();
        if is_terminal(&mut board) {
            return (board, side.opponent(), true);
        }
        side = side.opponent();
    }
    (board, side, false)
}

#[test]
fn start_position_holds_all_seeds() {
    assert_eq!(Board::new().total_seeds(), TOTAL_SEEDS);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sowing_conserves_seeds_and_skips_opponent_store(
        choices in proptest::collection::vec(0usize..6, 0..120)
    ) {
        let mut board = Board::new();
        let mut side = Side::South;

        for choice in choices {
            let moves = legal_moves(&board, side);
            if moves.is_empty() {
                break;
            }
            let pit = moves[choice % moves.len()];
            let opponent_store = board.store(side.opponent());
            let own_store = board.store(side);

            apply_move(&mut board, side, pit).unwrap();

            prop_assert_eq!(board.total_seeds(), TOTAL_SEEDS);
            prop_assert_eq!(board.store(side.opponent()), opponent_store);
            prop_assert!(board.store(side) >= own_store);

            if is_terminal(&mut board) {
                prop_assert_eq!(board.total_seeds(), TOTAL_SEEDS);
                break;
            }
            side = side.opponent();
        }
    }

    #[test]
    fn finished_games_are_fully_harvested(
        choices in proptest::collection::vec(0usize..6, 300)
    ) {
        let (board, _, finished) = rollout(&choices);
        prop_assume!(finished);

        prop_assert!(board.is_side_empty(Side::South));
        prop_assert!(board.is_side_empty(Side::North));

        let south = board.store(Side::South);
        let north = board.store(Side::North);
        prop_assert_eq!(u32::from(south) + u32::from(north), TOTAL_SEEDS);

        let outcome = winner(&board);
        prop_assert_eq!(outcome.score, south.max(north));
        match outcome.winner {
            Some(Side::South) => prop_assert!(south > north),
            Some(Side::North) => prop_assert!(north > south),
            None => prop_assert_eq!(south, north),
        }
    }

    #[test]
    fn terminal_check_leaves_live_boards_alone(
        choices in proptest::collection::vec(0usize..6, 0..40)
    ) {
        let (board, _, finished) = rollout(&choices);
        prop_assume!(!finished);

        let mut copy = board;
        prop_assert!(!is_terminal(&mut copy));
        prop_assert_eq!(copy, board);
    }

    #[test]
    fn alpha_beta_matches_minimax_on_reachable_boards(
        choices in proptest::collection::vec(0usize..6, 0..30),
        depth in 1u8..=4,
        max_south in any::<bool>(),
    ) {
        let (board, to_move, finished) = rollout(&choices);
        prop_assume!(!finished);

        let max_side = if max_south { Side::South } else { Side::North };
        let mut pruned = Searcher::new(max_side);
        let mut full = Searcher::new(max_side);

        let result = pruned.search(&board, to_move, depth);
        let (score, best) = full.minimax(board, to_move, depth);

        prop_assert_eq!(result.score, score);
        prop_assert_eq!(result.best_move, best);
        prop_assert!(result.nodes <= full.stats().nodes);
    }

    #[test]
    fn search_is_deterministic(
        choices in proptest::collection::vec(0usize..6, 0..30),
        depth in 1u8..=4,
    ) {
        let (board, to_move, finished) = rollout(&choices);
        prop_assume!(!finished);

        let first = Searcher::new(Side::South).search(&board, to_move, depth);
        let second = Searcher::new(Side::South).search(&board, to_move, depth);
        prop_assert_eq!(first, second);
    }
}
