use super::{Board, Color, Piece, Square};

impl Board {
    /// Walk the whole board and panic on any broken invariant: square and
    /// piece table disagreeing, a piece listed under the wrong color, or a
    /// color without exactly one king.
    pub fn validate(&self) {
        for square in Square::all() {
            if let Some(id) = self.squares[square.id()] {
                let entry = &self.pieces[id.index()];
                assert_eq!(
                    entry.square,
                    Some(square),
                    "{square} holds {id} but the piece thinks it is on {:?}",
                    entry.square
                );
                assert!(
                    self.by_color[entry.color.index()].binary_search(&id).is_ok(),
                    "{id} on {square} missing from {} pieces",
                    entry.color
                );
            }
        }

        for entry in &self.pieces {
            if let Some(square) = entry.square {
                assert_eq!(
                    self.squares[square.id()],
                    Some(entry.id),
                    "{} claims {square} which holds {:?}",
                    entry.id,
                    self.squares[square.id()]
                );
            }
        }

        for color in Color::BOTH {
            let list = &self.by_color[color.index()];
            assert!(
                list.windows(2).all(|w| w[0] < w[1]),
                "{color} piece list is not sorted"
            );
            for &id in list {
                let entry = &self.pieces[id.index()];
                assert_eq!(entry.color, color, "{id} listed under {color}");
                assert!(entry.is_on_board(), "{id} listed under {color} but off the board");
            }
            let kings = list
                .iter()
                .filter(|id| self.pieces[id.index()].piece() == Piece::King)
                .count();
            if !self.pieces.is_empty() {
                assert_eq!(kings, 1, "{color} has {kings} kings");
            }
        }
    }
}
