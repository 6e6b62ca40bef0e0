use super::super::{Board, Color, Kind, PieceId, Square};

/// Squares a pawn could move to by geometry: pushes and both diagonals.
pub(super) fn candidates(color: Color, from: Square) -> Vec<Square> {
    let dir = color.pawn_direction();
    [(0, dir), (0, 2 * dir), (-1, dir), (1, dir)]
        .into_iter()
        .filter_map(|(dx, dy)| from.offset(dx, dy))
        .collect()
}

pub(super) fn attacks(color: Color, from: Square, target: Square) -> bool {
    let (dx, dy) = from.delta(target);
    dx.abs() == 1 && dy == color.pawn_direction()
}

impl Board {
    /// Occupancy rules for a pawn move that already passed geometry.
    pub(super) fn pawn_move_valid(&self, color: Color, from: Square, to: Square) -> bool {
        let (dx, dy) = from.delta(to);
        if dx == 0 {
            if dy == color.pawn_direction() {
                return self.is_empty(to);
            }
            let unmoved = matches!(
                self.occupant(from).map(|p| p.kind),
                Some(Kind::Pawn {
                    has_moved_once: false,
                    ..
                })
            );
            let skipped = from.offset(0, color.pawn_direction());
            return unmoved
                && skipped.is_some_and(|mid| self.is_empty(mid))
                && self.is_empty(to);
        }
        if self.is_enemy(color, to) {
            return true;
        }
        self.is_empty(to) && self.en_passant_victim(color, from, to).is_some()
    }

    /// The enemy pawn a diagonal move from `from` to `to` would capture en
    /// passant: the eligible pawn beside `from` on the destination file.
    pub(crate) fn en_passant_victim(
        &self,
        color: Color,
        from: Square,
        to: Square,
    ) -> Option<PieceId> {
        let (dx, dy) = from.delta(to);
        if dx.abs() != 1 || dy != color.pawn_direction() || !self.is_empty(to) {
            return None;
        }
        let beside = Square::new(to.x(), from.y())?;
        let victim = self.occupant(beside)?;
        (victim.color != color && victim.kind.is_en_passant_eligible()).then_some(victim.id)
    }
}
