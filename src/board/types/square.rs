//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

const FILES: &[u8; 8] = b"abcdefgh";

/// A square on the chess board.
///
/// Squares are addressed by `x` (the file, `0` = a) and `y` (the row counted
/// from the top of the board, `0` = rank 8). The stable id is `y * 8 + x`, so
/// `a8` is `0` and `h1` is `63`. The algebraic label is always derived from
/// the coordinates and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// All 64 squares in id order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Create a square from coordinates with bounds checking
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Square((y * 8 + x) as u8))
        } else {
            None
        }
    }

    /// Create a square from its stable id (0-63)
    #[must_use]
    pub const fn from_id(id: usize) -> Option<Self> {
        if id < 64 {
            Some(Square(id as u8))
        } else {
            None
        }
    }

    /// File coordinate (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn x(self) -> usize {
        (self.0 % 8) as usize
    }

    /// Row coordinate (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn y(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Stable id (0-63)
    #[inline]
    #[must_use]
    pub const fn id(self) -> usize {
        self.0 as usize
    }

    /// Rank number as printed on the board (1-8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        8 - self.y()
    }

    /// File letter (`'a'..='h'`)
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        FILES[self.x()] as char
    }

    /// Algebraic label such as `"e4"`.
    #[must_use]
    pub fn label(self) -> String {
        self.to_string()
    }

    /// The square shifted by `(dx, dy)`, or `None` when it falls off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Square> {
        let x = self.x() as isize + dx;
        let y = self.y() as isize + dy;
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Square::new(x as usize, y as usize)
        } else {
            None
        }
    }

    /// Signed coordinate difference `(to.x - self.x, to.y - self.y)`.
    #[inline]
    #[must_use]
    pub(crate) fn delta(self, to: Square) -> (isize, isize) {
        (
            to.x() as isize - self.x() as isize,
            to.y() as isize - self.y() as isize,
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        if x >= 8 {
            return Err(SquareError::XOutOfBounds { x });
        }
        if y >= 8 {
            return Err(SquareError::YOutOfBounds { y });
        }
        Ok(Square((y * 8 + x) as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let x = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let y = match bytes[1] {
            b'1'..=b'8' => (b'8' - bytes[1]) as usize,
            _ => return Err(invalid()),
        };

        Ok(Square((y * 8 + x) as u8))
    }
}
