use log::debug;

use super::history::History;
use super::{Color, Kind, Piece, PieceEntry, PieceId, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// What stands on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub id: PieceId,
    pub color: Color,
    pub piece: Piece,
}

/// Read-only view of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    square: Square,
    occupant: Option<Occupant>,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn x(&self) -> usize {
        self.square.x()
    }

    #[inline]
    #[must_use]
    pub const fn y(&self) -> usize {
        self.square.y()
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> usize {
        self.square.id()
    }

    /// Algebraic label, e.g. `"e4"`
    #[must_use]
    pub fn label(&self) -> String {
        self.square.label()
    }

    #[inline]
    #[must_use]
    pub const fn occupant(&self) -> Option<Occupant> {
        self.occupant
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// The board: 64 squares, the piece table and the move history.
///
/// Squares hold indices into the piece table and pieces hold their square;
/// both sides are only ever written by `attach`, `detach` and `relocate`.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<PieceId>; 64],
    /// Every piece ever created on this board, indexed by `PieceId`.
    pub(crate) pieces: Vec<PieceEntry>,
    /// Pieces currently on the board, per color, sorted by id.
    pub(crate) by_color: [Vec<PieceId>; 2],
    pub(crate) history: History,
    /// Side to move before any history was recorded.
    pub(crate) initial_side: Color,
}

impl Board {
    /// A board with the standard 32-piece starting layout.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.setup_standard_position();
        board
    }

    /// A board with 64 empty positions and no history.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            pieces: Vec::with_capacity(32),
            by_color: [Vec::with_capacity(16), Vec::with_capacity(16)],
            history: History::new(),
            initial_side: Color::White,
        }
    }

    /// Reset to 64 empty positions, dropping every piece and all history.
    pub fn setup_board(&mut self) {
        self.squares = [None; 64];
        self.pieces.clear();
        self.by_color[0].clear();
        self.by_color[1].clear();
        self.history.clear();
        self.initial_side = Color::White;
    }

    /// Reset to the standard starting position with White to move.
    pub fn setup_standard_position(&mut self) {
        self.setup_board();
        for (x, &piece) in BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                let back = Square::new(x, color.home_row());
                let pawn = Square::new(x, color.pawn_start_row());
                if let (Some(back), Some(pawn)) = (back, pawn) {
                    self.spawn(color, Kind::fresh(piece), back);
                    self.spawn(color, Kind::fresh(Piece::Pawn), pawn);
                }
            }
        }
        debug!("standard position set up with {} pieces", self.pieces.len());
    }

    // ------------------------------------------------------------------
    // Single-point mutators. Nothing else writes `squares`, `by_color` or
    // `PieceEntry::square`.
    // ------------------------------------------------------------------

    /// Create a new piece on an empty square and return its fresh id.
    pub(crate) fn spawn(&mut self, color: Color, kind: Kind, square: Square) -> PieceId {
        let id = PieceId(
            u16::try_from(self.pieces.len()).expect("piece table exceeds u16 ids"),
        );
        self.pieces.push(PieceEntry {
            id,
            color,
            kind,
            square: None,
        });
        self.attach(id, square);
        id
    }

    /// Put an off-board piece onto an empty square.
    pub(crate) fn attach(&mut self, id: PieceId, square: Square) {
        assert!(
            self.squares[square.id()].is_none(),
            "attach {id} onto occupied square {square}"
        );
        let entry = &mut self.pieces[id.index()];
        assert!(entry.square.is_none(), "attach {id} which is already on the board");
        entry.square = Some(square);
        let color = entry.color;
        self.squares[square.id()] = Some(id);

        let list = &mut self.by_color[color.index()];
        match list.binary_search(&id) {
            Ok(_) => unreachable!("{id} already listed for {color}"),
            Err(pos) => list.insert(pos, id),
        }
    }

    /// Take a piece off the board; it stays in the piece table.
    pub(crate) fn detach(&mut self, id: PieceId) -> Square {
        let entry = &mut self.pieces[id.index()];
        let square = entry.square.take().expect("detach of a piece not on the board");
        let color = entry.color;
        assert_eq!(
            self.squares[square.id()],
            Some(id),
            "occupant of {square} does not match {id}"
        );
        self.squares[square.id()] = None;

        let list = &mut self.by_color[color.index()];
        let pos = list
            .binary_search(&id)
            .unwrap_or_else(|_| unreachable!("{id} missing from {color} pieces"));
        list.remove(pos);
        square
    }

    /// Move an on-board piece to an empty square.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) {
        assert!(
            self.squares[to.id()].is_none(),
            "relocate {id} onto occupied square {to}"
        );
        let entry = &mut self.pieces[id.index()];
        let from = entry.square.expect("relocate of a piece not on the board");
        assert_eq!(
            self.squares[from.id()],
            Some(id),
            "occupant of {from} does not match {id}"
        );
        entry.square = Some(to);
        self.squares[from.id()] = None;
        self.squares[to.id()] = Some(id);
    }

    /// Drop the newest piece table entry; used to reverse a promotion.
    pub(crate) fn forget_last(&mut self, id: PieceId) {
        let last = self.pieces.pop().expect("forget on an empty piece table");
        assert_eq!(last.id, id, "only the newest piece can be forgotten");
        assert!(last.square.is_none(), "forgotten piece {id} is still on the board");
    }

    pub(crate) fn set_kind(&mut self, id: PieceId, kind: Kind) {
        let entry = &mut self.pieces[id.index()];
        debug_assert_eq!(entry.kind.piece(), kind.piece(), "kind change of {id}");
        entry.kind = kind;
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn occupant_id(&self, square: Square) -> Option<PieceId> {
        self.squares[square.id()]
    }

    #[inline]
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<&PieceEntry> {
        self.occupant_id(square).map(|id| &self.pieces[id.index()])
    }

    /// Color and kind of the piece on a square
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.occupant(square).map(|p| (p.color, p.piece()))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.id()].is_none()
    }

    /// A piece table entry; captured pieces remain addressable.
    #[inline]
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &PieceEntry {
        &self.pieces[id.index()]
    }

    /// The whole piece table, including pieces no longer on the board.
    #[must_use]
    pub fn pieces(&self) -> &[PieceEntry] {
        &self.pieces
    }

    /// Ids of the pieces of one color currently on the board.
    #[must_use]
    pub fn pieces_of(&self, color: Color) -> &[PieceId] {
        &self.by_color[color.index()]
    }

    #[must_use]
    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.by_color[color.index()]
            .iter()
            .copied()
            .find(|id| self.pieces[id.index()].piece() == Piece::King)
    }

    #[must_use]
    pub fn position(&self, square: Square) -> Position {
        Position {
            square,
            occupant: self.occupant(square).map(|p| Occupant {
                id: p.id,
                color: p.color,
                piece: p.piece(),
            }),
        }
    }

    #[must_use]
    pub fn position_by_notation(&self, label: &str) -> Option<Position> {
        label.parse::<Square>().ok().map(|sq| self.position(sq))
    }

    #[must_use]
    pub fn position_by_coords(&self, x: usize, y: usize) -> Option<Position> {
        Square::new(x, y).map(|sq| self.position(sq))
    }

    #[must_use]
    pub fn position_by_id(&self, id: usize) -> Option<Position> {
        Square::from_id(id).map(|sq| self.position(sq))
    }

    /// The pawn currently capturable en passant, if any.
    #[must_use]
    pub fn en_passant_pawn(&self) -> Option<PieceId> {
        Color::BOTH
            .iter()
            .flat_map(|c| self.by_color[c.index()].iter().copied())
            .find(|id| self.pieces[id.index()].kind.is_en_passant_eligible())
    }

    /// The color expected to move next: the opponent of whoever moved last.
    ///
    /// Informational only; `apply_move` does not enforce turns.
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        match self.history.last() {
            Some(record) => self.pieces[record.piece.index()].color.opponent(),
            None => self.initial_side,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
