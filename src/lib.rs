pub mod board;
mod perft;

pub use board::{Board, Color, GameStatus, Move, MoveError, Piece, Square};
