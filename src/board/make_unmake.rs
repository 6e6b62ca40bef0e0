use log::{debug, warn};

use super::history::{Capture, MoveRecord};
use super::{Board, Kind, Move, MoveError, Piece, PieceId, Square};

impl Board {
    /// Relocate a piece without any legality check and record how to undo it.
    ///
    /// Resolves castling and en passant from the board itself, so callers
    /// only ever pass the piece and its destination.
    pub(crate) fn perform(&mut self, id: PieceId, to: Square) {
        let entry = *self.piece(id);
        let from = entry
            .square
            .unwrap_or_else(|| panic!("perform with off-board piece {id}"));

        if matches!(entry.kind, Kind::King { .. }) && !Board::is_king_step(from, to) {
            if let Some(plan) = self.castle_plan(id, to) {
                let expired = self.expire_en_passant();
                self.relocate(plan.king, plan.king_to);
                self.set_kind(plan.king, entry.kind.after_move(0));
                self.history.push(MoveRecord {
                    from: plan.king_from,
                    to: plan.king_to,
                    piece: plan.king,
                    prior: entry.kind,
                    captured: None,
                    expired_en_passant: expired,
                    promotion: None,
                    is_castle: true,
                    is_en_passant: false,
                });

                let rook_prior = self.piece(plan.rook).kind;
                self.relocate(plan.rook, plan.rook_to);
                self.set_kind(plan.rook, rook_prior.after_move(0));
                self.history.push(MoveRecord {
                    from: plan.rook_from,
                    to: plan.rook_to,
                    piece: plan.rook,
                    prior: rook_prior,
                    captured: None,
                    expired_en_passant: None,
                    promotion: None,
                    is_castle: true,
                    is_en_passant: false,
                });
                debug!(
                    "{} castles {}{} with rook {}{}",
                    entry.color, plan.king_from, plan.king_to, plan.rook_from, plan.rook_to
                );
                return;
            }
        }

        let en_passant = match entry.kind {
            Kind::Pawn { .. } => self.en_passant_victim(entry.color, from, to),
            _ => None,
        };
        let expired = self.expire_en_passant();

        let captured = match en_passant.or_else(|| self.occupant_id(to)) {
            Some(victim) => {
                let square = self.detach(victim);
                debug!(
                    "{} {} captures {} on {square}",
                    entry.color,
                    entry.piece(),
                    self.piece(victim).piece()
                );
                Some(Capture {
                    piece: victim,
                    square,
                })
            }
            None => None,
        };

        self.relocate(id, to);
        let (_, dy) = from.delta(to);
        self.set_kind(id, entry.kind.after_move(dy));
        self.history.push(MoveRecord {
            from,
            to,
            piece: id,
            prior: entry.kind,
            captured,
            expired_en_passant: expired,
            promotion: None,
            is_castle: false,
            is_en_passant: en_passant.is_some(),
        });
        if en_passant.is_some() {
            debug!("{} pawn takes en passant {from}{to}", entry.color);
        }
    }

    /// Clear the en passant flag of whichever pawn still carries it.
    fn expire_en_passant(&mut self) -> Option<PieceId> {
        let pawn = self.en_passant_pawn()?;
        self.set_kind(
            pawn,
            Kind::Pawn {
                has_moved_once: true,
                en_passant_eligible: false,
            },
        );
        Some(pawn)
    }

    /// Reverse the newest record, and its king leg too if it is a castle's
    /// rook leg.
    ///
    /// # Panics
    ///
    /// Panics when the history is empty.
    pub(crate) fn rewind(&mut self) {
        let record = self.history.pop().expect("rewind with empty history");
        self.revert(&record);
        if record.is_rook_leg() {
            let king_leg = self
                .history
                .pop()
                .expect("castle rook leg without its king leg");
            debug_assert!(king_leg.is_castle, "castle legs out of order");
            self.revert(&king_leg);
        }
    }

    fn revert(&mut self, record: &MoveRecord) {
        if let Some(promoted) = record.promotion {
            self.detach(promoted);
            self.forget_last(promoted);
            self.attach(record.piece, record.to);
        }
        self.relocate(record.piece, record.from);
        self.set_kind(record.piece, record.prior);
        if let Some(capture) = record.captured {
            self.attach(capture.piece, capture.square);
        }
        if let Some(pawn) = record.expired_en_passant {
            self.set_kind(
                pawn,
                Kind::Pawn {
                    has_moved_once: true,
                    en_passant_eligible: true,
                },
            );
        }
    }

    /// Replace the pawn on the newest record's destination with `piece`.
    pub(crate) fn promote_unchecked(&mut self, piece: Piece) {
        let Some(record) = self.history.last() else {
            return;
        };
        let pawn = record.piece;
        let color = self.piece(pawn).color;
        let square = self.detach(pawn);
        let promoted = self.spawn(color, Kind::promoted(piece), square);
        if let Some(record) = self.history.last_mut() {
            record.promotion = Some(promoted);
        }
    }

    // ------------------------------------------------------------------
    // Public transitions
    // ------------------------------------------------------------------

    /// Apply a move if it is legal for the piece on `from`.
    ///
    /// On `Err` the board is untouched. A pawn reaching its last rank leaves
    /// a pending promotion that must be resolved with [`Board::promote`]
    /// before any other move is accepted.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        self.commit(from, to)?;
        self.history.clear_redo();
        Ok(())
    }

    /// Apply a move and, if it carries one, its promotion choice.
    ///
    /// Either both halves happen or neither does.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        self.commit_move(mv)?;
        self.history.clear_redo();
        Ok(())
    }

    fn commit_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if let Some(piece) = mv.promotion {
            if !piece.is_promotion_target() {
                warn!("rejected {mv}: cannot promote to {piece}");
                return Err(MoveError::InvalidPromotion { piece });
            }
        }
        self.commit(mv.from, mv.to)?;
        match (mv.promotion, self.pending_promotion()) {
            (Some(piece), Some(square)) => self.promote(square, piece),
            (Some(_), None) => {
                self.rewind();
                warn!("rejected {mv}: move does not promote");
                Err(MoveError::NotPromotable { square: mv.to })
            }
            (None, _) => Ok(()),
        }
    }

    fn commit(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        if let Some(square) = self.pending_promotion() {
            warn!("rejected {from}{to}: promotion pending on {square}");
            return Err(MoveError::PromotionPending { square });
        }
        let Some(id) = self.occupant_id(from) else {
            warn!("rejected {from}{to}: no piece on {from}");
            return Err(MoveError::NoPiece { square: from });
        };
        if !self.is_legal(id, to) {
            warn!("rejected illegal move {from}{to}");
            return Err(MoveError::IllegalMove { from, to });
        }

        let piece = self.piece(id);
        debug!("{} {} {from}{to}", piece.color, piece.piece());
        self.perform(id, to);
        if cfg!(debug_assertions) {
            self.validate();
        }
        Ok(())
    }

    /// The square of a pawn that has reached its last rank and waits for a
    /// promotion choice.
    #[must_use]
    pub fn pending_promotion(&self) -> Option<Square> {
        let record = self.history.last()?;
        if record.is_castle || record.promotion.is_some() {
            return None;
        }
        let entry = self.piece(record.piece);
        let waiting = entry.piece() == Piece::Pawn
            && entry.square == Some(record.to)
            && record.to.y() == entry.color.promotion_row();
        waiting.then_some(record.to)
    }

    /// Promote the pawn waiting on `square` to `piece`.
    ///
    /// The pawn leaves the board and a new piece with a fresh id takes its
    /// place; undoing the move restores the pawn.
    pub fn promote(&mut self, square: Square, piece: Piece) -> Result<(), MoveError> {
        if !piece.is_promotion_target() {
            warn!("rejected promotion on {square} to {piece}");
            return Err(MoveError::InvalidPromotion { piece });
        }
        if self.pending_promotion() != Some(square) {
            warn!("rejected promotion on {square}: no pawn waiting");
            return Err(MoveError::NotPromotable { square });
        }
        self.promote_unchecked(piece);
        debug!("pawn on {square} promoted to {piece}");
        if cfg!(debug_assertions) {
            self.validate();
        }
        Ok(())
    }

    /// Take back the last move, castling as one move. Returns `false` when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let records = self.history.records();
        let Some(last) = records.last() else {
            return false;
        };
        let origin = if last.is_rook_leg() {
            &records[records.len() - 2]
        } else {
            last
        };
        let promotion = last.promotion.map(|id| self.piece(id).piece());
        let reverted = Move {
            from: origin.from,
            to: origin.to,
            promotion,
        };

        self.rewind();
        self.history.push_redo(reverted);
        debug!("undo {reverted}");
        if cfg!(debug_assertions) {
            self.validate();
        }
        true
    }

    /// Replay the most recently undone move. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(mv) = self.history.pop_redo() else {
            return false;
        };
        match self.commit_move(mv) {
            Ok(()) => {
                debug!("redo {mv}");
                true
            }
            Err(err) => {
                warn!("redo {mv} failed: {err}");
                self.history.push_redo(mv);
                false
            }
        }
    }

    /// Records of every committed relocation, oldest first.
    ///
    /// A castle shows up as two records, king leg then rook leg.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        self.history.records()
    }

    /// Number of undone moves that [`Board::redo`] can replay.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.history.redo_len()
    }

    /// Moves made so far, counting a castle once.
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.ply_count()
    }
}
