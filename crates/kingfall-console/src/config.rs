//! Session options.

/// Options a [`Session`](crate::Session) runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Render the board at start and after every accepted move.
    pub show_board: bool,
    /// Token that ends the session without a result.
    pub exit_command: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            exit_command: "exit".to_string(),
        }
    }
}
