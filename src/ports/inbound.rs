//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the interactive front end drives the puzzle use case until the player quits.
pub trait InputPort {
    /// Run the session loop. Returns when the player exits or cancels a prompt.
    fn run(&mut self) -> Result<(), DomainError>;
}
