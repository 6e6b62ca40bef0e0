//! Property-based tests using proptest.

use crate::board::{Board, Color, Move, Piece};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves, returning the moves played.
fn random_playout(board: &mut Board, seed: u64, num_moves: usize) -> Vec<Move> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut played = Vec::new();
    for _ in 0..num_moves {
        let side = board.side_to_move();
        let moves = board.legal_moves(side);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        board.play(mv).unwrap();
        played.push(mv);
    }
    played
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: undoing every move restores the start position exactly
    #[test]
    fn prop_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let initial_fen = board.to_fen();
        let initial_table = board.pieces().to_vec();

        let played = random_playout(&mut board, seed, num_moves);
        for _ in 0..played.len() {
            prop_assert!(board.undo());
        }

        prop_assert!(!board.undo());
        prop_assert_eq!(board.to_fen(), initial_fen);
        prop_assert_eq!(board.pieces(), &initial_table[..]);
    }

    /// Property: occupancy stays consistent and each side keeps one king
    #[test]
    fn prop_invariants_hold(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);
        board.validate();
        for color in Color::BOTH {
            let kings = board
                .pieces_of(color)
                .iter()
                .filter(|&&id| board.piece(id).piece() == Piece::King)
                .count();
            prop_assert_eq!(kings, 1);
        }
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);
        let side = board.side_to_move();
        for mv in board.legal_moves(side) {
            let mut probe = board.clone();
            probe.play(mv).unwrap();
            prop_assert!(!probe.is_king_in_check(side), "{} left the king in check", mv);
        }
    }

    /// Property: checkmate and stalemate never hold together
    #[test]
    fn prop_mate_and_stalemate_exclusive(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);
        for color in Color::BOTH {
            prop_assert!(!(board.is_checkmate(color) && board.is_stalemate(color)));
        }
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);
        let fen = board.to_fen();
        let mut restored = Board::from_fen(&fen);
        prop_assert_eq!(restored.board_snapshot(), board.board_snapshot());

        let side = board.side_to_move();
        prop_assert_eq!(restored.side_to_move(), side);
        let mut expected = board.legal_moves(side);
        let mut actual = restored.legal_moves(side);
        expected.sort_by_key(ToString::to_string);
        actual.sort_by_key(ToString::to_string);
        prop_assert_eq!(actual, expected);
    }

    /// Property: redo after undo reproduces the same position
    #[test]
    fn prop_redo_inverts_undo(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let played = random_playout(&mut board, seed, num_moves);
        let fen = board.to_fen();
        for _ in 0..played.len() {
            prop_assert!(board.undo());
        }
        for _ in 0..played.len() {
            prop_assert!(board.redo());
        }
        prop_assert_eq!(board.to_fen(), fen);
    }
}
