//! The interactive read-validate-render loop.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use kingfall_core::{Color, Game, MoveOutcome};

use crate::command::{Command, parse_command};
use crate::config::ConsoleConfig;
use crate::error::ConsoleError;

const INVALID_MOVE: &str = "Invalid move. Try again.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A king was captured by the given side.
    Won(Color),
    /// The player typed the exit command.
    Exited,
    /// Input ran out before the game finished.
    InputClosed,
}

/// One game played over a line-oriented reader and writer.
///
/// Single-threaded: the only blocking point is reading the next line.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over a fresh game in the starting position.
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self::with_game(Game::new(), input, output, config)
    }

    /// Create a session that continues an existing game.
    pub fn with_game(game: Game, input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            game,
            input,
            output,
            config,
        }
    }

    /// Run until a king is captured, the exit command is read, or input closes.
    pub fn run(mut self) -> Result<SessionEnd, ConsoleError> {
        info!("session started");
        self.render()?;

        let end = loop {
            let Some(turn) = self.game.turn() else {
                // Only reachable when handed a game that was already over.
                break self.game.winner().map_or(SessionEnd::Exited, SessionEnd::Won);
            };
            write!(self.output, "{turn} turn: enter your move (e.g., e2e4): ")?;
            self.output.flush()?;

            let command = match self.next_command() {
                Ok(Some(command)) => command,
                Ok(None) => break SessionEnd::InputClosed,
                Err(ConsoleError::MalformedMove { input, source }) => {
                    debug!(%input, error = %source, "malformed move");
                    writeln!(self.output, "{INVALID_MOVE}")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match command {
                Command::Exit => break SessionEnd::Exited,
                Command::Moves => self.list_moves()?,
                Command::Move(mv) => match self.game.play(mv) {
                    Ok(MoveOutcome::Won { winner, .. }) => {
                        self.render()?;
                        writeln!(self.output, "{winner} Win")?;
                        break SessionEnd::Won(winner);
                    }
                    Ok(MoveOutcome::Moved { .. }) => self.render()?,
                    Err(e) => {
                        debug!(%mv, error = %e, "move rejected");
                        writeln!(self.output, "{INVALID_MOVE}")?;
                    }
                },
                Command::Empty => {}
            }
        };

        self.output.flush()?;
        info!(?end, "session finished");
        Ok(end)
    }

    /// Read the next non-blank line and parse it. `None` means end of input.
    ///
    /// Lines are read as raw bytes. Invalid UTF-8 is replaced rather than
    /// treated as an I/O failure, so it surfaces as a malformed move.
    fn next_command(&mut self) -> Result<Option<Command>, ConsoleError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("input closed");
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&buf);
            debug!(line = %line.trim(), "received input");

            match parse_command(&line, &self.config.exit_command)? {
                Command::Empty => continue,
                command => return Ok(Some(command)),
            }
        }
    }

    fn list_moves(&mut self) -> Result<(), ConsoleError> {
        let moves: Vec<String> = self.game.legal_moves().iter().map(ToString::to_string).collect();
        writeln!(self.output, "{}", moves.join(" "))?;
        Ok(())
    }

    fn render(&mut self) -> Result<(), ConsoleError> {
        if self.config.show_board {
            writeln!(self.output, "{}", self.game.board().pretty())?;
        }
        Ok(())
    }
}
