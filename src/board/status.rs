//! Check, checkmate, stalemate and legal-move enumeration.
//!
//! Legality is move validity plus king safety: each candidate is applied
//! speculatively and the mover's king is tested for attack before the
//! speculation is rolled back.

use std::fmt;

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Move, Piece, PieceId, Square};

/// Outcome of the game from the side to move's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Active,
    WhiteWins,
    BlackWins,
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Active => "active",
            GameStatus::WhiteWins => "white wins",
            GameStatus::BlackWins => "black wins",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

impl Board {
    /// Is the king of `color` attacked by any enemy piece?
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king on the board.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        let square = self
            .king(color)
            .and_then(|id| self.piece(id).square)
            .unwrap_or_else(|| panic!("{color} has no king on the board"));
        let attacked = self.is_square_attacked(square, color.opponent());
        trace!("check scan for {color}: {attacked}");
        attacked
    }

    /// Would moving `id` to `to` leave its own king attacked?
    pub(crate) fn leaves_king_in_check(&mut self, id: PieceId, to: Square) -> bool {
        let color = self.piece(id).color;
        let after = self.speculate(id, to);
        after.is_king_in_check(color)
    }

    /// Move validity plus king safety.
    pub fn is_legal(&mut self, id: PieceId, to: Square) -> bool {
        self.is_move_valid(id, to) && !self.leaves_king_in_check(id, to)
    }

    /// Legal destinations for the piece on `square`; empty if the square is
    /// empty. Castling appears once, as the king's two-file move.
    pub fn legal_moves_for(&mut self, square: Square) -> Vec<Square> {
        let Some(id) = self.occupant_id(square) else {
            return Vec::new();
        };
        self.pseudo_legal_destinations(id)
            .into_iter()
            .filter(|&to| !self.leaves_king_in_check(id, to))
            .collect()
    }

    /// Every legal move of `color`. A pawn move onto the last rank is listed
    /// once per promotion choice.
    pub fn legal_moves(&mut self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        let ids = self.pieces_of(color).to_vec();
        for id in ids {
            let entry = *self.piece(id);
            let Some(from) = entry.square else {
                continue;
            };
            for to in self.legal_moves_for(from) {
                if entry.piece() == Piece::Pawn && to.y() == color.promotion_row() {
                    moves.extend(
                        Piece::PROMOTIONS
                            .iter()
                            .map(|&piece| Move::with_promotion(from, to, piece)),
                    );
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// True as soon as one legal move of `color` is found.
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let ids = self.pieces_of(color).to_vec();
        ids.into_iter().any(|id| {
            self.pseudo_legal_destinations(id)
                .into_iter()
                .any(|to| !self.leaves_king_in_check(id, to))
        })
    }

    /// `color` is in check and has no legal move.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_king_in_check(color) && !self.has_legal_move(color)
    }

    /// `color` is not in check and has no legal move.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_king_in_check(color) && !self.has_legal_move(color)
    }

    /// The color that is checkmated, if either is.
    pub fn checkmate(&mut self) -> Option<Color> {
        Color::BOTH.into_iter().find(|&color| self.is_checkmate(color))
    }

    /// Is the side to move stalemated?
    pub fn stalemate(&mut self) -> bool {
        let side = self.side_to_move();
        self.is_stalemate(side)
    }

    pub fn status(&mut self) -> GameStatus {
        if let Some(mated) = self.checkmate() {
            return match mated {
                Color::White => GameStatus::BlackWins,
                Color::Black => GameStatus::WhiteWins,
            };
        }
        if self.stalemate() {
            GameStatus::Stalemate
        } else {
            GameStatus::Active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_start_position_has_twenty_moves() {
        let mut board = Board::new();
        assert_eq!(board.legal_moves(Color::White).len(), 20);
        assert_eq!(board.legal_moves(Color::Black).len(), 20);
        assert!(!board.is_king_in_check(Color::White));
        assert_eq!(board.status(), GameStatus::Active);
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        // Knight on e2 pinned by the rook on e8.
        let mut board = Board::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(board.legal_moves_for(sq("e2")).is_empty());
        let knight = board.occupant_id(sq("e2")).unwrap();
        assert!(board.is_move_valid(knight, sq("c3")));
        assert!(!board.is_legal(knight, sq("c3")));
    }

    #[test]
    fn test_check_must_be_answered() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/3q4/R3K3 w Q - 0 1");
        assert!(board.is_king_in_check(Color::White));
        let mut replies: Vec<String> = board
            .legal_moves(Color::White)
            .iter()
            .map(ToString::to_string)
            .collect();
        replies.sort();
        assert_eq!(replies, vec!["e1d2", "e1f1"]);
    }

    #[test]
    fn test_back_rank_mate() {
        let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        board.apply_move(sq("a1"), sq("a8")).unwrap();
        assert!(board.is_king_in_check(Color::Black));
        assert!(board.is_checkmate(Color::Black));
        assert!(!board.is_stalemate(Color::Black));
        assert_eq!(board.checkmate(), Some(Color::Black));
        assert_eq!(board.status(), GameStatus::WhiteWins);
    }

    #[test]
    fn test_stalemate_is_not_checkmate() {
        let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(board.is_stalemate(Color::Black));
        assert!(!board.is_checkmate(Color::Black));
        assert_eq!(board.checkmate(), None);
        assert!(board.stalemate());
        assert_eq!(board.status(), GameStatus::Stalemate);
    }

    #[test]
    fn test_status_queries_leave_board_untouched() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let fen = board.to_fen();
        let _ = board.legal_moves(Color::White);
        let _ = board.legal_moves(Color::Black);
        let _ = board.status();
        assert_eq!(board.to_fen(), fen);
        assert!(board.history().is_empty());
    }
}
