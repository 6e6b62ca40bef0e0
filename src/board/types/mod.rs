//! Core chess types.
//!
//! This module contains the value types shared by the rules engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - a board cell addressed by coordinates or stable id
//! - `Move` - a requested move, the unit a transport layer serializes

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
