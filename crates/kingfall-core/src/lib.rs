//! Core chess types: board, destination generation, and the turn state machine.

mod board;
mod chess_move;
mod color;
mod error;
mod file;
mod game;
pub mod movegen;
mod piece;
mod piece_kind;
mod placement;
mod rank;
mod square;

pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use error::{MoveError, ParseMoveError, PlacementError};
pub use file::File;
pub use game::{Game, GameState, MoveOutcome};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use rank::Rank;
pub use square::Square;
