use crate::board::Board;

impl Board {
    /// Count leaf nodes of the legal move tree, alternating colors from the
    /// side to move. Each promotion choice is a separate node.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let side = self.side_to_move();
        let moves = self.legal_moves(side);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            let Some(id) = self.occupant_id(m.from) else {
                continue;
            };
            let mut child = self.speculate(id, m.to);
            if let Some(piece) = m.promotion {
                child.promote(piece);
            }
            nodes += child.perft(depth - 1);
        }

        nodes
    }
}
