//! Pieces as stored in the board's flat piece table.
//!
//! A piece has no identity outside a board: it is an entry in the table,
//! addressed by `PieceId`, and knows its square only as a handle the board
//! keeps in sync with the square's occupant.

use std::fmt;

use super::{Color, Piece, Square};

/// Index of a piece in the board's piece table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u16);

impl PieceId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Piece kind together with the transient state each kind carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Pawn {
        /// Set after the first move; disables the double step.
        has_moved_once: bool,
        /// Set for exactly one ply after a double step.
        en_passant_eligible: bool,
    },
    Knight,
    Bishop,
    Rook {
        /// Disables castling with this rook once set.
        has_moved: bool,
    },
    Queen,
    King {
        /// Disables castling once set.
        has_moved: bool,
    },
}

impl Kind {
    /// A piece of this kind that has not moved yet.
    #[must_use]
    pub const fn fresh(piece: Piece) -> Kind {
        match piece {
            Piece::Pawn => Kind::Pawn {
                has_moved_once: false,
                en_passant_eligible: false,
            },
            Piece::Knight => Kind::Knight,
            Piece::Bishop => Kind::Bishop,
            Piece::Rook => Kind::Rook { has_moved: false },
            Piece::Queen => Kind::Queen,
            Piece::King => Kind::King { has_moved: false },
        }
    }

    /// The kind a promoted pawn becomes. A promoted rook never castles.
    #[must_use]
    pub(crate) const fn promoted(piece: Piece) -> Kind {
        match piece {
            Piece::Rook => Kind::Rook { has_moved: true },
            other => Kind::fresh(other),
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        match self {
            Kind::Pawn { .. } => Piece::Pawn,
            Kind::Knight => Piece::Knight,
            Kind::Bishop => Piece::Bishop,
            Kind::Rook { .. } => Piece::Rook,
            Kind::Queen => Piece::Queen,
            Kind::King { .. } => Piece::King,
        }
    }

    /// True for a king or rook that may still take part in castling.
    #[inline]
    #[must_use]
    pub const fn can_castle(self) -> bool {
        matches!(
            self,
            Kind::Rook { has_moved: false } | Kind::King { has_moved: false }
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant_eligible(self) -> bool {
        matches!(
            self,
            Kind::Pawn {
                en_passant_eligible: true,
                ..
            }
        )
    }

    /// The kind after this piece moves `dy` rows.
    #[must_use]
    pub(crate) const fn after_move(self, dy: isize) -> Kind {
        match self {
            Kind::Pawn { .. } => Kind::Pawn {
                has_moved_once: true,
                en_passant_eligible: dy == 2 || dy == -2,
            },
            Kind::Rook { .. } => Kind::Rook { has_moved: true },
            Kind::King { .. } => Kind::King { has_moved: true },
            other => other,
        }
    }

    /// Positional validity: can this kind reach `to` from `from` by geometry
    /// alone, ignoring every other piece on the board?
    #[must_use]
    pub fn reaches(self, color: Color, from: Square, to: Square) -> bool {
        if from == to {
            return false;
        }
        let (dx, dy) = from.delta(to);
        match self {
            Kind::Pawn { .. } => {
                let dir = color.pawn_direction();
                (dx == 0 && dy == dir)
                    || (dx.abs() == 1 && dy == dir)
                    || (dx == 0 && dy == 2 * dir && from.y() == color.pawn_start_row())
            }
            Kind::Knight => matches!((dx.abs(), dy.abs()), (1, 2) | (2, 1)),
            Kind::Bishop => dx.abs() == dy.abs(),
            Kind::Rook { .. } => (dx == 0) != (dy == 0),
            Kind::Queen => dx.abs() == dy.abs() || (dx == 0) != (dy == 0),
            Kind::King { has_moved } => {
                (dx.abs() <= 1 && dy.abs() <= 1) || (!has_moved && dy == 0 && dx.abs() >= 2)
            }
        }
    }
}

/// One entry of the board's piece table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceEntry {
    pub(crate) id: PieceId,
    pub(crate) color: Color,
    pub(crate) kind: Kind,
    /// `None` once the piece is captured or replaced by a promotion.
    pub(crate) square: Option<Square>,
}

impl PieceEntry {
    #[inline]
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.kind.piece()
    }

    /// Current square, or `None` if the piece has left the board
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Option<Square> {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(&self) -> bool {
        self.square.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_geometry_is_color_relative() {
        let pawn = Kind::fresh(Piece::Pawn);
        assert!(pawn.reaches(Color::White, sq("e2"), sq("e3")));
        assert!(pawn.reaches(Color::White, sq("e2"), sq("e4")));
        assert!(pawn.reaches(Color::White, sq("e2"), sq("d3")));
        assert!(!pawn.reaches(Color::White, sq("e2"), sq("e1")));
        assert!(!pawn.reaches(Color::White, sq("e3"), sq("e5")));
        assert!(pawn.reaches(Color::Black, sq("e7"), sq("e5")));
        assert!(!pawn.reaches(Color::Black, sq("e7"), sq("e8")));
    }

    #[test]
    fn test_knight_geometry() {
        let knight = Kind::Knight;
        assert!(knight.reaches(Color::White, sq("g1"), sq("f3")));
        assert!(knight.reaches(Color::White, sq("g1"), sq("e2")));
        assert!(!knight.reaches(Color::White, sq("g1"), sq("g3")));
    }

    #[test]
    fn test_slider_geometry() {
        assert!(Kind::Bishop.reaches(Color::White, sq("c1"), sq("h6")));
        assert!(!Kind::Bishop.reaches(Color::White, sq("c1"), sq("c4")));
        assert!(Kind::fresh(Piece::Rook).reaches(Color::White, sq("a1"), sq("a8")));
        assert!(!Kind::fresh(Piece::Rook).reaches(Color::White, sq("a1"), sq("b2")));
        assert!(Kind::Queen.reaches(Color::Black, sq("d8"), sq("h4")));
        assert!(Kind::Queen.reaches(Color::Black, sq("d8"), sq("d1")));
        assert!(!Kind::Queen.reaches(Color::Black, sq("d8"), sq("e6")));
    }

    #[test]
    fn test_king_castling_geometry_needs_unmoved_king() {
        let king = Kind::fresh(Piece::King);
        assert!(king.reaches(Color::White, sq("e1"), sq("g1")));
        assert!(king.reaches(Color::White, sq("e1"), sq("h1")));
        let moved = Kind::King { has_moved: true };
        assert!(!moved.reaches(Color::White, sq("e1"), sq("g1")));
        assert!(moved.reaches(Color::White, sq("e1"), sq("f2")));
    }

    #[test]
    fn test_after_move_flags() {
        let pawn = Kind::fresh(Piece::Pawn).after_move(-2);
        assert!(pawn.is_en_passant_eligible());
        let pawn = pawn.after_move(-1);
        assert!(!pawn.is_en_passant_eligible());
        assert!(!Kind::fresh(Piece::Rook).after_move(0).can_castle());
        assert_eq!(Kind::promoted(Piece::Rook), Kind::Rook { has_moved: true });
    }
}
