//! Console errors.

use kingfall_core::ParseMoveError;

/// Errors that can occur while running a console session.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A line was neither a command nor a 4-character coordinate move.
    #[error("malformed move \"{input}\": {source}")]
    MalformedMove {
        /// The trimmed input line.
        input: String,
        /// Why the move did not parse.
        source: ParseMoveError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
