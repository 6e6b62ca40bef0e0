use super::{Kind, Move, PieceId, Square};

/// A piece removed by a move, with the square it must return to on undo.
///
/// For en passant the square is beside the destination, not the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    pub piece: PieceId,
    pub square: Square,
}

/// Everything needed to reverse one committed relocation exactly.
///
/// Castling is stored as two records, king leg first, each with `is_castle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: PieceId,
    /// The moving piece's kind (and flags) before the move.
    pub prior: Kind,
    pub captured: Option<Capture>,
    /// Pawn whose en passant eligibility lapsed when this move was made.
    pub expired_en_passant: Option<PieceId>,
    /// Piece that replaced the pawn after it reached the last rank.
    pub promotion: Option<PieceId>,
    pub is_castle: bool,
    pub is_en_passant: bool,
}

impl MoveRecord {
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[must_use]
    pub(crate) const fn is_rook_leg(&self) -> bool {
        self.is_castle && matches!(self.prior, Kind::Rook { .. })
    }
}

/// Applied moves, newest last, plus the moves undone since the last commit.
#[derive(Clone, Debug, Default)]
pub(crate) struct History {
    records: Vec<MoveRecord>,
    redo: Vec<Move>,
}

impl History {
    pub(crate) fn new() -> Self {
        History::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub(crate) fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut MoveRecord> {
        self.records.last_mut()
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    /// Number of moves made, counting a castle once.
    pub(crate) fn ply_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_rook_leg()).count()
    }

    pub(crate) fn push_redo(&mut self, mv: Move) {
        self.redo.push(mv);
    }

    pub(crate) fn pop_redo(&mut self) -> Option<Move> {
        self.redo.pop()
    }

    pub(crate) fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub(crate) fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
        self.redo.clear();
    }
}
