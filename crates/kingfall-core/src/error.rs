//! Error types for placement parsing, move parsing, and move validation.

use crate::square::Square;

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 `/`-separated ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

/// Errors that occur when parsing a coordinate move such as `e2e4`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    /// The move is not exactly 4 characters long.
    #[error("expected 4 characters, found {found}")]
    WrongLength {
        /// Number of characters found.
        found: usize,
    },
    /// One half of the move is not a square between a1 and h8.
    #[error("invalid square: \"{found}\"")]
    InvalidSquare {
        /// The offending two-character slice.
        found: String,
    },
}

/// Reasons a submitted move is refused by the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// A king has already been captured.
    #[error("the game is over")]
    GameOver,
    /// The source square is empty or holds an opposing piece.
    #[error("no piece of the side to move on {square}")]
    NotYourPiece {
        /// The source square of the move.
        square: Square,
    },
    /// The piece cannot reach the destination.
    #[error("{from} cannot move to {to}")]
    IllegalDestination {
        /// The source square.
        from: Square,
        /// The requested destination.
        to: Square,
    },
}
