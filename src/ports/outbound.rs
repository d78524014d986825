//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Location, Notice, Puzzle, RiddleCalendar, Stage};
use chrono::NaiveDate;

/// Source of the day -> riddle document (local file, HTTP).
#[async_trait::async_trait]
pub trait RiddleSource: Send + Sync {
    /// Read and parse the whole calendar. Called once at startup.
    async fn load_calendar(&self) -> Result<RiddleCalendar, DomainError>;

    /// Human-readable origin for logs (path or URL).
    fn describe(&self) -> String;
}

/// Today's date, injectable for tests and the `today` config override.
pub trait ClockPort {
    fn today(&self) -> NaiveDate;
}

/// View binding. The use case pushes element contents here; adapters decide how to draw them.
///
/// Every setter replaces the previous contents of its element.
pub trait ViewPort {
    /// Day number and the long date label.
    fn set_header(&mut self, day: u32, date_label: &str);

    /// Current page address (with the `day` parameter).
    fn set_location(&mut self, location: &Location);

    /// Page-level message; `None` hides it.
    fn set_notice(&mut self, notice: Option<Notice>);

    fn set_riddle_text(&mut self, stage: Stage, text: &str);

    /// Input affordance and feedback of one riddle; `None` removes it.
    fn set_puzzle(&mut self, stage: Stage, puzzle: Option<&Puzzle>);

    /// Show or hide the second (place) riddle section.
    fn set_place_visible(&mut self, visible: bool);
}
