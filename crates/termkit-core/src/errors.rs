//! Error types for termkit-core.

use thiserror::Error;

/// Errors raised by the interactive console helpers.
///
/// The wrapper and markup formatter are total and never produce one of these.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// An interactive prompt was requested but stdin is not a terminal.
    ///
    /// The prompt text has already been written when this is returned, so the
    /// user can still see what was being asked.
    #[error("stdin is not interactive")]
    NotInteractive,

    /// Reading from or writing to the console streams failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The line editor subprocess could not be run.
    #[error("Line editor failed: {0}")]
    LineEditor(String),

    /// The configuration file exists but is unreadable or invalid.
    #[error("Config invalid: {0}")]
    InvalidConfig(String),
}

impl ConsoleError {
    /// Returns `true` for the non-interactive stdin case.
    pub fn is_not_interactive(&self) -> bool {
        matches!(self, Self::NotInteractive)
    }
}
