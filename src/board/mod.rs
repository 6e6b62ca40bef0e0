//! Chess board representation and rules.
//!
//! A flat piece table addressed by `PieceId`, a 64-square occupancy array
//! kept in lockstep with it, and a move history that makes every transition
//! reversible. Supports the full movement rules including castling, en
//! passant and promotion, plus check, checkmate and stalemate detection.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! board.apply_move(e2, e4).unwrap();
//! println!("Black has {} legal moves", board.legal_moves(Color::Black).len());
//! ```

mod builder;
mod debug;
mod error;
mod fen;
mod history;
mod make_unmake;
mod movegen;
mod pieces;
pub mod prelude;
mod snapshot;
mod speculate;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SetupError, SquareError};
pub use history::{Capture, MoveRecord};
pub use pieces::{Kind, PieceEntry, PieceId};
pub use snapshot::Snapshot;
pub use state::{Board, Occupant, Position};
pub use status::GameStatus;
pub use types::{Color, Move, Piece, Square};
