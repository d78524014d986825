//! Application use cases. Orchestrate domain logic via ports.

pub mod calendar_loader;
pub mod puzzle_service;

pub use calendar_loader::{CalendarLoader, CalendarOrigin};
pub use puzzle_service::{PuzzleService, PuzzleSettings, SessionState};
