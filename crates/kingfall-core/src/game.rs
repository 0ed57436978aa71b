//! Turn order, move validation, and the king-capture win condition.

use tracing::{debug, info};

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::MoveError;
use crate::movegen::{destinations, legal_moves};
use crate::piece::Piece;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The given side must move next.
    ToMove(Color),
    /// A king was captured; `winner` took it.
    Finished { winner: Color },
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game continues with `next` to move.
    Moved {
        captured: Option<Piece>,
        next: Color,
    },
    /// The opposing king was taken and the game is over.
    Won {
        winner: Color,
        captured: Option<Piece>,
    },
}

/// A game in progress: one board and whose turn it is.
///
/// There is no check detection. A side loses only when its king is no longer
/// on the board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Game {
    /// Start from the standard opening position with White to move.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position(), Color::White)
    }

    /// Start from an arbitrary board with `to_move` on turn.
    pub fn from_board(board: Board, to_move: Color) -> Game {
        Game {
            board,
            state: GameState::ToMove(to_move),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The side to move, or `None` once the game is finished.
    pub fn turn(&self) -> Option<Color> {
        match self.state {
            GameState::ToMove(color) => Some(color),
            GameState::Finished { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self.state {
            GameState::Finished { winner } => Some(winner),
            GameState::ToMove(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished { .. })
    }

    /// Every move the side to move may submit. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.turn()
            .map(|color| legal_moves(&self.board, color))
            .unwrap_or_default()
    }

    /// Check that `mv` is playable without changing anything.
    pub fn validate(&self, mv: Move) -> Result<Piece, MoveError> {
        let turn = self.turn().ok_or(MoveError::GameOver)?;
        let piece = self
            .board
            .get(mv.from())
            .filter(|piece| piece.color() == turn)
            .ok_or(MoveError::NotYourPiece { square: mv.from() })?;
        if !destinations(&self.board, mv.from()).contains(mv.to()) {
            return Err(MoveError::IllegalDestination {
                from: mv.from(),
                to: mv.to(),
            });
        }
        Ok(piece)
    }

    /// Validate and apply `mv` for the side to move.
    ///
    /// A rejected move leaves the board and turn untouched. An accepted move
    /// overwrites the destination, capturing whatever stood there, and then
    /// either ends the game or passes the turn.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let piece = self.validate(mv)?;
        let mover = piece.color();

        let captured = self.board.get(mv.to());
        self.board.set(mv.to(), Some(piece));
        self.board.set(mv.from(), None);
        debug!(%mv, ?piece, ?captured, "move applied");

        if !self.board.king_present(mover.flip()) {
            info!(winner = %mover, %mv, "king captured");
            self.state = GameState::Finished { winner: mover };
            return Ok(MoveOutcome::Won {
                winner: mover,
                captured,
            });
        }

        let next = mover.flip();
        self.state = GameState::ToMove(next);
        Ok(MoveOutcome::Moved { captured, next })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
