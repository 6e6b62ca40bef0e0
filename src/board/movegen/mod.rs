//! Per-piece move validity and pseudo-legal destination enumeration.
//!
//! Every query takes the board explicitly; pieces hold no board reference.
//! Validity here ignores king safety, which `status` layers on top.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Kind, Piece, PieceId, Square};

impl Board {
    /// Move validity: positional validity plus occupancy and path rules.
    ///
    /// A pseudo-legal move may still leave the mover's king in check.
    /// No piece ever moves onto the enemy king.
    #[must_use]
    pub fn is_move_valid(&self, id: PieceId, to: Square) -> bool {
        let entry = self.piece(id);
        let Some(from) = entry.square else {
            return false;
        };
        if !entry.kind.reaches(entry.color, from, to) || self.is_enemy_king(entry.color, to) {
            return false;
        }
        match entry.kind {
            Kind::Pawn { .. } => self.pawn_move_valid(entry.color, from, to),
            Kind::Knight => !self.is_own(entry.color, to),
            Kind::Bishop | Kind::Rook { .. } | Kind::Queen => {
                !self.is_own(entry.color, to) && self.path_clear(from, to)
            }
            Kind::King { .. } => {
                if Board::is_king_step(from, to) {
                    !self.is_own(entry.color, to)
                } else {
                    self.castle_plan(id, to).is_some()
                }
            }
        }
    }

    fn is_enemy_king(&self, color: Color, square: Square) -> bool {
        self.occupant(square)
            .is_some_and(|target| target.color != color && target.piece() == Piece::King)
    }

    /// Does this piece attack `target`? Unlike move validity this ignores
    /// what stands on `target`, counts pawn diagonals only, and never castles.
    #[must_use]
    pub(crate) fn attacks(&self, id: PieceId, target: Square) -> bool {
        let entry = self.piece(id);
        let Some(from) = entry.square else {
            return false;
        };
        match entry.kind {
            Kind::Pawn { .. } => pawns::attacks(entry.color, from, target),
            Kind::Knight => entry.kind.reaches(entry.color, from, target),
            Kind::Bishop | Kind::Rook { .. } | Kind::Queen => {
                entry.kind.reaches(entry.color, from, target) && self.path_clear(from, target)
            }
            Kind::King { .. } => from != target && Board::is_king_step(from, target),
        }
    }

    /// Is `square` attacked by any on-board piece of `by`?
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces_of(by).iter().any(|&id| self.attacks(id, square))
    }

    /// Every destination that passes `is_move_valid` for this piece.
    #[must_use]
    pub fn pseudo_legal_destinations(&self, id: PieceId) -> Vec<Square> {
        let entry = self.piece(id);
        let Some(from) = entry.square else {
            return Vec::new();
        };
        let candidates = match entry.kind {
            Kind::Pawn { .. } => pawns::candidates(entry.color, from),
            Kind::Knight => knights::candidates(from),
            Kind::Bishop => self.ray_candidates(from, &sliders::DIAGONALS),
            Kind::Rook { .. } => self.ray_candidates(from, &sliders::ORTHOGONALS),
            Kind::Queen => {
                let mut squares = self.ray_candidates(from, &sliders::DIAGONALS);
                squares.extend(self.ray_candidates(from, &sliders::ORTHOGONALS));
                squares
            }
            Kind::King { .. } => kings::candidates(entry.kind, from),
        };
        candidates
            .into_iter()
            .filter(|&to| self.is_move_valid(id, to))
            .collect()
    }

    #[inline]
    pub(crate) fn is_own(&self, color: Color, square: Square) -> bool {
        self.occupant(square).is_some_and(|p| p.color == color)
    }

    #[inline]
    pub(crate) fn is_enemy(&self, color: Color, square: Square) -> bool {
        self.occupant(square).is_some_and(|p| p.color != color)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Piece, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn destinations(board: &Board, from: &str) -> Vec<String> {
        let id = board.occupant_id(sq(from)).unwrap();
        let mut labels: Vec<String> = board
            .pseudo_legal_destinations(id)
            .into_iter()
            .map(Square::label)
            .collect();
        labels.sort();
        labels
    }

    #[test]
    fn test_start_position_destinations() {
        let board = Board::new();
        assert_eq!(destinations(&board, "e2"), vec!["e3", "e4"]);
        assert_eq!(destinations(&board, "g1"), vec!["f3", "h3"]);
        assert!(destinations(&board, "c1").is_empty());
        assert!(destinations(&board, "a1").is_empty());
        assert!(destinations(&board, "d1").is_empty());
        assert!(destinations(&board, "e1").is_empty());
    }

    #[test]
    fn test_slider_blocked_and_capture() {
        let board = Board::from_fen("4k3/8/8/8/1p6/8/8/R3K3 w Q - 0 1");
        let rook = board.occupant_id(sq("a1")).unwrap();
        assert!(board.is_move_valid(rook, sq("a8")));
        assert!(board.is_move_valid(rook, sq("d1")));
        assert!(!board.is_move_valid(rook, sq("e1")));
        assert!(!board.is_move_valid(rook, sq("f1")));

        let bishop_board = Board::from_fen("4k3/8/8/8/3p4/8/8/B3K3 w - - 0 1");
        let bishop = bishop_board.occupant_id(sq("a1")).unwrap();
        assert!(bishop_board.is_move_valid(bishop, sq("d4")));
        assert!(!bishop_board.is_move_valid(bishop, sq("e5")));
    }

    #[test]
    fn test_attack_includes_pawn_diagonals_on_empty_squares() {
        let board = Board::from_fen("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1");
        let pawn = board.occupant_id(sq("d2")).unwrap();
        assert!(board.attacks(pawn, sq("e1")));
        assert!(board.attacks(pawn, sq("c1")));
        assert!(!board.attacks(pawn, sq("d1")));
        assert!(board.is_square_attacked(sq("c1"), crate::board::Color::Black));
    }

    #[test]
    fn test_queen_destinations_count_open_board() {
        let board = Board::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1");
        let queen = board.occupant_id(sq("d4")).unwrap();
        assert_eq!(board.piece(queen).piece(), Piece::Queen);
        assert_eq!(board.pseudo_legal_destinations(queen).len(), 27);
    }
}
