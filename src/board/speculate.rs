//! Scoped apply-then-revert for legality checks and tree walks.

use std::ops::{Deref, DerefMut};

use log::trace;

use super::{Board, Piece, PieceId, Square};

/// A move applied to the board for inspection only.
///
/// Dereferences to the board in its post-move state. Dropping the guard
/// rewinds every record pushed since it was opened, on every exit path
/// including unwinding.
pub(crate) struct Speculation<'a> {
    board: &'a mut Board,
    mark: usize,
}

impl Speculation<'_> {
    /// Promote the pawn this speculation just moved.
    pub(crate) fn promote(&mut self, piece: Piece) {
        self.board.promote_unchecked(piece);
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        while self.board.history.len() > self.mark {
            self.board.rewind();
        }
    }
}

impl Board {
    /// Apply `id -> to` without any checks until the returned guard drops.
    pub(crate) fn speculate(&mut self, id: PieceId, to: Square) -> Speculation<'_> {
        let mark = self.history.len();
        trace!("speculating {id} -> {to}");
        self.perform(id, to);
        Speculation { board: self, mark }
    }
}
