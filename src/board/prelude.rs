//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut board = Board::new();
//! assert_eq!(board.status(), GameStatus::Active);
//! ```

pub use super::{
    Board, BoardBuilder, Color, FenError, GameStatus, Move, MoveError, MoveParseError, Piece,
    Position, Square, SquareError,
};
