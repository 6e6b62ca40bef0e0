use super::super::{Board, Kind, PieceId, Square};

const KING_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Single steps, plus the two castling targets while the king is unmoved.
pub(super) fn candidates(kind: Kind, from: Square) -> Vec<Square> {
    let mut squares: Vec<Square> = KING_STEPS
        .iter()
        .filter_map(|&(dx, dy)| from.offset(dx, dy))
        .collect();
    if let Kind::King { has_moved: false } = kind {
        squares.extend([from.offset(-2, 0), from.offset(2, 0)].into_iter().flatten());
    }
    squares
}

/// Both legs of a castling move, resolved against the current board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CastlePlan {
    pub(crate) king: PieceId,
    pub(crate) rook: PieceId,
    pub(crate) king_from: Square,
    pub(crate) king_to: Square,
    pub(crate) rook_from: Square,
    pub(crate) rook_to: Square,
}

impl Board {
    #[inline]
    pub(crate) fn is_king_step(from: Square, to: Square) -> bool {
        let (dx, dy) = from.delta(to);
        from != to && dx.abs() <= 1 && dy.abs() <= 1
    }

    /// Resolve a king move of two or more files into a castle.
    ///
    /// The king must be unmoved on its home row and the first piece in the
    /// direction of travel must be an unmoved rook of the same color at least
    /// three files away. `to` may name the canonical target, the rook's
    /// square or anything in between. The king may not castle out of check or
    /// across an attacked square.
    pub(crate) fn castle_plan(&self, king: PieceId, to: Square) -> Option<CastlePlan> {
        let entry = self.piece(king);
        let from = entry.square?;
        if entry.kind != (Kind::King { has_moved: false }) || from.y() != entry.color.home_row() {
            return None;
        }
        let (dx, dy) = from.delta(to);
        if dy != 0 || dx.abs() < 2 {
            return None;
        }
        let dir = dx.signum();

        let mut distance = 0;
        let mut current = from;
        let rook_from = loop {
            current = current.offset(dir, 0)?;
            distance += 1;
            if !self.is_empty(current) {
                break current;
            }
        };
        let rook = self.occupant(rook_from)?;
        if rook.color != entry.color || rook.kind != (Kind::Rook { has_moved: false }) {
            return None;
        }
        if distance < 3 || dx.abs() > distance {
            return None;
        }

        let rook_to = from.offset(dir, 0)?;
        let king_to = from.offset(2 * dir, 0)?;
        let enemy = entry.color.opponent();
        if [from, rook_to, king_to]
            .into_iter()
            .any(|sq| self.is_square_attacked(sq, enemy))
        {
            return None;
        }

        Some(CastlePlan {
            king,
            rook: rook.id,
            king_from: from,
            king_to,
            rook_from,
            rook_to,
        })
    }
}
