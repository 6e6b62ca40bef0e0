//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move tree node counts against reference positions
//! - `make_unmake.rs` - Apply/undo/redo correctness
//! - `edge_cases.rs` - Special positions and moves
//! - `scenarios.rs` - Short games exercising the public API end to end
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::Square;

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}
