//! Console front end for kingfall: line parsing and the interactive session.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::Command;
pub use config::ConsoleConfig;
pub use error::ConsoleError;
pub use session::{Session, SessionEnd};
