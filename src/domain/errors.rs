//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Riddle document could not be parsed.
    #[error("Riddle data error: {0}")]
    Data(String),

    /// Riddle document could not be read or downloaded.
    #[error("Riddle fetch failed: {0}")]
    Fetch(String),

    /// A tile or slot that does not exist on the board.
    #[error("Invalid move: {0}")]
    Board(String),

    #[error("UI error: {0}")]
    Ui(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
