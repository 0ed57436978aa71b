//! Parsing one line of player input.

use kingfall_core::Move;

use crate::error::ConsoleError;

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line, ignored.
    Empty,
    /// End the session immediately.
    Exit,
    /// List the moves available to the side on turn.
    Moves,
    /// Play a move.
    Move(Move),
}

/// Parse a single line of input into a [`Command`].
///
/// `exit_command` is matched case-sensitively against the trimmed line.
/// Anything that is not a known word must be a coordinate move.
pub fn parse_command(line: &str, exit_command: &str) -> Result<Command, ConsoleError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Command::Empty);
    }
    if trimmed == exit_command {
        return Ok(Command::Exit);
    }
    if trimmed == "moves" {
        return Ok(Command::Moves);
    }

    Move::from_coords(trimmed)
        .map(Command::Move)
        .map_err(|source| ConsoleError::MalformedMove {
            input: trimmed.to_string(),
            source,
        })
}
