//! Error types for chess board operations.

use std::fmt;

use super::{Color, Piece, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Placement field does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly 8 files
    WrongFileCount { rank: usize, files: usize },
    /// The placement parsed but is not a playable position
    InvalidPosition(SetupError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidPosition(err) => write!(f, "Invalid position: {err}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidPosition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SetupError> for FenError {
    fn from(err: SetupError) -> Self {
        FenError::InvalidPosition(err)
    }
}

/// Error type for positions that cannot be set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A color has no king
    MissingKing { color: Color },
    /// A color has more than one king
    ExtraKing { color: Color },
    /// A pawn stands on the first or last rank
    PawnOnBackRank { square: Square },
    /// The en passant pawn is missing or did not just double-step
    InvalidEnPassant { square: Square },
    /// The side that just moved is still in check
    OpponentInCheck { color: Color },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingKing { color } => write!(f, "{color} has no king"),
            SetupError::ExtraKing { color } => write!(f, "{color} has more than one king"),
            SetupError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank at {square}")
            }
            SetupError::InvalidEnPassant { square } => {
                write!(f, "No pawn at {square} can be captured en passant")
            }
            SetupError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not their move")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File coordinate out of bounds (must be 0-7)
    XOutOfBounds { x: usize },
    /// Row coordinate out of bounds (must be 0-7)
    YOutOfBounds { y: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::XOutOfBounds { x } => {
                write!(f, "File coordinate {x} out of bounds (must be 0-7)")
            }
            SquareError::YOutOfBounds { y } => {
                write!(f, "Row coordinate {y} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected board mutations.
///
/// A rejected request never changes the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the origin square
    NoPiece { square: Square },
    /// The move is not in the legal set of the moving color
    IllegalMove { from: Square, to: Square },
    /// A pawn on its last rank is waiting for a promotion choice
    PromotionPending { square: Square },
    /// Nothing on this square is waiting for promotion
    NotPromotable { square: Square },
    /// Pawns cannot promote to this kind
    InvalidPromotion { piece: Piece },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPiece { square } => write!(f, "No piece on {square}"),
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move {from}{to}"),
            MoveError::PromotionPending { square } => {
                write!(f, "Pawn on {square} must be promoted first")
            }
            MoveError::NotPromotable { square } => {
                write!(f, "No pawn awaiting promotion on {square}")
            }
            MoveError::InvalidPromotion { piece } => {
                write!(f, "Cannot promote to {piece}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    // FenError tests
    #[test]
    fn test_fen_error_too_few_parts() {
        let err = FenError::TooFewParts { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_wraps_setup_error() {
        let err: FenError = SetupError::MissingKing {
            color: Color::Black,
        }
        .into();
        assert!(err.to_string().contains("Black has no king"));
        assert!(std::error::Error::source(&err).is_some());
    }

    // MoveParseError tests
    #[test]
    fn test_move_parse_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_move_parse_error_invalid_square() {
        let err = MoveParseError::InvalidSquare {
            notation: "z9z9".to_string(),
        };
        assert!(err.to_string().contains("z9z9"));
    }

    // SquareError tests
    #[test]
    fn test_square_error_bounds() {
        let err = SquareError::XOutOfBounds { x: 10 };
        assert!(err.to_string().contains("10"));
        let err = SquareError::YOutOfBounds { y: 9 };
        assert!(err.to_string().contains('9'));
    }

    // MoveError tests
    #[test]
    fn test_move_error_illegal_move() {
        let err = MoveError::IllegalMove {
            from: sq("e2"),
            to: sq("e5"),
        };
        assert_eq!(err.to_string(), "Illegal move e2e5");
    }

    #[test]
    fn test_move_error_promotion() {
        let err = MoveError::InvalidPromotion { piece: Piece::King };
        assert!(err.to_string().contains("king"));
        let err = MoveError::PromotionPending { square: sq("a8") };
        assert!(err.to_string().contains("a8"));
    }
}
