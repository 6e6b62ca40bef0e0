//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//! Castling eligibility and the en passant pawn are expressed as the piece
//! flags they end up in.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(sq("e1"), Color::White, Piece::King)
//!     .piece(sq("h1"), Color::White, Piece::Rook)
//!     .piece(sq("e8"), Color::Black, Piece::King)
//!     .castling(Color::White, true)
//!     .side_to_move(Color::Black)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.side_to_move(), Color::Black);
//! ```

use log::debug;

use super::error::SetupError;
use super::{Board, Color, Kind, Piece, Square};

const KINGSIDE: usize = 0;
const QUEENSIDE: usize = 1;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    /// `[color][side]`, side 0 = kingside.
    castling: [[bool; 2]; 2],
    /// Square of the pawn that just double-stepped.
    en_passant: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: [[false; 2]; 2],
            en_passant: None,
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Keep the king and the kingside (or queenside) rook of `color`
    /// unmoved so they may castle.
    #[must_use]
    pub fn castling(mut self, color: Color, kingside: bool) -> Self {
        let side = if kingside { KINGSIDE } else { QUEENSIDE };
        self.castling[color.index()][side] = true;
        self
    }

    /// Mark the pawn on `pawn_square` as having just double-stepped.
    #[must_use]
    pub const fn en_passant(mut self, pawn_square: Square) -> Self {
        self.en_passant = Some(pawn_square);
        self
    }

    /// Validate the layout and produce a board with an empty history.
    pub fn build(self) -> Result<Board, SetupError> {
        for color in Color::BOTH {
            let kings = self
                .pieces
                .iter()
                .filter(|&&(_, c, p)| c == color && p == Piece::King)
                .count();
            match kings {
                0 => return Err(SetupError::MissingKing { color }),
                1 => {}
                _ => return Err(SetupError::ExtraKing { color }),
            }
        }
        if let Some(&(square, _, _)) = self
            .pieces
            .iter()
            .find(|&&(sq, _, p)| p == Piece::Pawn && (sq.y() == 0 || sq.y() == 7))
        {
            return Err(SetupError::PawnOnBackRank { square });
        }
        if let Some(square) = self.en_passant {
            let double_stepped = self.pieces.iter().any(|&(sq, color, piece)| {
                sq == square
                    && piece == Piece::Pawn
                    && sq.y() as isize
                        == color.pawn_start_row() as isize + 2 * color.pawn_direction()
            });
            if !double_stepped {
                return Err(SetupError::InvalidEnPassant { square });
            }
        }

        let mut board = Board::empty();
        for &(square, color, piece) in &self.pieces {
            let kind = self.initial_kind(square, color, piece);
            board.spawn(color, kind, square);
        }
        board.initial_side = self.side_to_move;
        let waiting = self.side_to_move.opponent();
        if board.is_king_in_check(waiting) {
            return Err(SetupError::OpponentInCheck { color: waiting });
        }
        debug!(
            "built position with {} pieces, {} to move",
            board.pieces.len(),
            board.initial_side
        );
        Ok(board)
    }

    fn initial_kind(&self, square: Square, color: Color, piece: Piece) -> Kind {
        let rights = self.castling[color.index()];
        let on_home_row = square.y() == color.home_row();
        match piece {
            Piece::Pawn => Kind::Pawn {
                has_moved_once: square.y() != color.pawn_start_row(),
                en_passant_eligible: self.en_passant == Some(square),
            },
            Piece::King => Kind::King {
                has_moved: !(on_home_row && (rights[KINGSIDE] || rights[QUEENSIDE])),
            },
            Piece::Rook => {
                let unmoved = on_home_row
                    && ((square.x() == 7 && rights[KINGSIDE])
                        || (square.x() == 0 && rights[QUEENSIDE]));
                Kind::Rook { has_moved: !unmoved }
            }
            other => Kind::fresh(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn kings() -> BoardBuilder {
        BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
    }

    #[test]
    fn test_builder_places_pieces() {
        let board = kings()
            .piece(sq("d4"), Color::White, Piece::Queen)
            .build()
            .unwrap();
        assert_eq!(board.piece_at(sq("d4")), Some((Color::White, Piece::Queen)));
        assert_eq!(board.pieces().len(), 3);
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn test_builder_replaces_and_clears() {
        let board = kings()
            .piece(sq("d4"), Color::White, Piece::Queen)
            .piece(sq("d4"), Color::Black, Piece::Knight)
            .piece(sq("a2"), Color::White, Piece::Pawn)
            .clear(sq("a2"))
            .build()
            .unwrap();
        assert_eq!(board.piece_at(sq("d4")), Some((Color::Black, Piece::Knight)));
        assert!(board.is_empty(sq("a2")));
    }

    #[test]
    fn test_builder_rejects_bad_layouts() {
        let missing = BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .build();
        assert_eq!(
            missing.unwrap_err(),
            SetupError::MissingKing {
                color: Color::Black
            }
        );

        let extra = kings().piece(sq("a1"), Color::White, Piece::King).build();
        assert_eq!(
            extra.unwrap_err(),
            SetupError::ExtraKing {
                color: Color::White
            }
        );

        let pawn = kings().piece(sq("c8"), Color::White, Piece::Pawn).build();
        assert_eq!(
            pawn.unwrap_err(),
            SetupError::PawnOnBackRank { square: sq("c8") }
        );

        let ep = kings()
            .piece(sq("d3"), Color::White, Piece::Pawn)
            .en_passant(sq("d3"))
            .build();
        assert_eq!(
            ep.unwrap_err(),
            SetupError::InvalidEnPassant { square: sq("d3") }
        );

        let exposed = kings()
            .piece(sq("e4"), Color::White, Piece::Rook)
            .build();
        assert_eq!(
            exposed.unwrap_err(),
            SetupError::OpponentInCheck {
                color: Color::Black
            }
        );
        assert!(kings()
            .piece(sq("e4"), Color::White, Piece::Rook)
            .side_to_move(Color::Black)
            .build()
            .is_ok());
    }

    #[test]
    fn test_builder_castling_flags() {
        let board = kings()
            .piece(sq("a1"), Color::White, Piece::Rook)
            .piece(sq("h1"), Color::White, Piece::Rook)
            .castling(Color::White, true)
            .build()
            .unwrap();
        let king = board.occupant(sq("e1")).unwrap();
        assert!(king.kind().can_castle());
        assert!(board.occupant(sq("h1")).unwrap().kind().can_castle());
        assert!(!board.occupant(sq("a1")).unwrap().kind().can_castle());
        assert!(!board.occupant(sq("e8")).unwrap().kind().can_castle());
    }

    #[test]
    fn test_builder_pawn_flags() {
        let board = kings()
            .piece(sq("b2"), Color::White, Piece::Pawn)
            .piece(sq("c3"), Color::White, Piece::Pawn)
            .piece(sq("f5"), Color::Black, Piece::Pawn)
            .en_passant(sq("f5"))
            .build()
            .unwrap();
        assert_eq!(
            board.occupant(sq("b2")).unwrap().kind(),
            Kind::fresh(Piece::Pawn)
        );
        assert_eq!(
            board.occupant(sq("c3")).unwrap().kind(),
            Kind::Pawn {
                has_moved_once: true,
                en_passant_eligible: false
            }
        );
        assert!(board.occupant(sq("f5")).unwrap().kind().is_en_passant_eligible());
        assert_eq!(board.en_passant_pawn(), board.occupant_id(sq("f5")));
    }
}
