use super::super::{Board, Square};

pub(super) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(super) const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Board {
    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// Walks unit steps from `from` toward `to`; the two squares must share a
    /// rank, file or diagonal.
    pub(crate) fn path_clear(&self, from: Square, to: Square) -> bool {
        let (dx, dy) = from.delta(to);
        debug_assert!(
            dx == 0 || dy == 0 || dx.abs() == dy.abs(),
            "path walk between unaligned squares {from} and {to}"
        );
        let step = (dx.signum(), dy.signum());
        let mut current = from;
        loop {
            current = match current.offset(step.0, step.1) {
                Some(next) => next,
                None => return false,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }

    /// Squares along each ray up to and including the first occupied square.
    pub(super) fn ray_candidates(&self, from: Square, directions: &[(isize, isize)]) -> Vec<Square> {
        let mut squares = Vec::new();
        for &(dx, dy) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dx, dy) {
                squares.push(next);
                if !self.is_empty(next) {
                    break;
                }
                current = next;
            }
        }
        squares
    }
}
