//! Read-only grid view of the board for rendering and transport.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Piece, Square};

/// Kind and color of every square, row 0 being rank 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    rows: [[Option<(Color, Piece)>; 8]; 8],
}

impl Snapshot {
    #[inline]
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<(Color, Piece)> {
        self.rows[square.y()][square.x()]
    }

    #[must_use]
    pub const fn rows(&self) -> &[[Option<(Color, Piece)>; 8]; 8] {
        &self.rows
    }

    /// FEN-style letter for a square, `'.'` when empty
    #[must_use]
    pub fn symbol(&self, square: Square) -> char {
        self.at(square)
            .map_or('.', |(color, piece)| piece.to_fen_char(color))
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8 {
            write!(f, "{} ", 8 - y)?;
            for x in 0..8 {
                let Some(square) = Square::new(x, y) else {
                    continue;
                };
                write!(f, " {}", self.symbol(square))?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl Board {
    /// Capture the current layout as a grid of kind and color symbols.
    #[must_use]
    pub fn board_snapshot(&self) -> Snapshot {
        let mut rows = [[None; 8]; 8];
        for square in Square::all() {
            rows[square.y()][square.x()] = self.piece_at(square);
        }
        Snapshot { rows }
    }
}
