use super::builder::BoardBuilder;
use super::error::FenError;
use super::{Board, Color, Kind, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The castling field decides which kings and rooks count as unmoved, the
    /// en passant field marks the pawn that just double-stepped, and the side
    /// to move seeds [`Board::side_to_move`]. The move counters are accepted
    /// but not tracked.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut builder = BoardBuilder::new();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (y, rank_str) in ranks.iter().enumerate() {
            let mut x = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    x += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let square = Square::new(x, y).ok_or(FenError::WrongFileCount {
                    rank: 8 - y,
                    files: x + 1,
                })?;
                builder = builder.piece(square, color, piece);
                x += 1;
            }
            if x != 8 {
                return Err(FenError::WrongFileCount {
                    rank: 8 - y,
                    files: x,
                });
            }
        }

        builder = match parts[1] {
            "w" => builder.side_to_move(Color::White),
            "b" => builder.side_to_move(Color::Black),
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            builder = match c {
                'K' => builder.castling(Color::White, true),
                'Q' => builder.castling(Color::White, false),
                'k' => builder.castling(Color::Black, true),
                'q' => builder.castling(Color::Black, false),
                '-' => builder,
                _ => return Err(FenError::InvalidCastling { char: c }),
            };
        }

        if parts[3] != "-" {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let target: Square = parts[3].parse().map_err(|_| invalid())?;
            // The pawn sits one row past the target in its direction of travel.
            let pawn = match target.rank() {
                3 => target.offset(0, -1),
                6 => target.offset(0, 1),
                _ => None,
            }
            .ok_or_else(invalid)?;
            builder = builder.en_passant(pawn);
        }

        builder.build().map_err(FenError::from)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    ///
    /// The halfmove clock is always `0`; the fullmove number counts from the
    /// start of this board's history.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for y in 0..8 {
            let mut row = String::new();
            let mut empty = 0;
            for x in 0..8 {
                let Some(square) = Square::new(x, y) else {
                    continue;
                };
                if let Some((color, piece)) = self.piece_at(square) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = self.side_to_move();
        let active = match side {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for color in Color::BOTH {
            let (kingside, queenside) = self.castling_sides(color);
            if kingside {
                castling.push(Piece::King.to_fen_char(color));
            }
            if queenside {
                castling.push(Piece::Queen.to_fen_char(color));
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_pawn()
            .and_then(|id| {
                let pawn = self.piece(id);
                pawn.square
                    .and_then(|sq| sq.offset(0, -pawn.color.pawn_direction()))
            })
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        let black_first = usize::from(self.initial_side == Color::Black);
        let fullmove = 1 + (self.history.ply_count() + black_first) / 2;

        format!("{} {active} {castling} {ep} 0 {fullmove}", rows.join("/"))
    }

    /// Which sides `color` could still castle toward, judged by piece flags
    /// alone: an unmoved king on its home row and an unmoved rook beside it.
    fn castling_sides(&self, color: Color) -> (bool, bool) {
        let Some(king) = self.king(color).map(|id| self.piece(id)) else {
            return (false, false);
        };
        let Some(king_square) = king.square else {
            return (false, false);
        };
        if !king.kind.can_castle() || king_square.y() != color.home_row() {
            return (false, false);
        }
        let rook_at = |x: usize| {
            Square::new(x, color.home_row())
                .and_then(|sq| self.occupant(sq))
                .is_some_and(|p| p.color == color && p.kind == (Kind::Rook { has_moved: false }))
        };
        (rook_at(7), rook_at(0))
    }
}
