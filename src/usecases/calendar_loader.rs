//! Load the riddle calendar once at startup.
//!
//! Any fetch or parse failure is swallowed: the embedded single-day record is used instead
//! and the player never sees an error.

use crate::domain::RiddleCalendar;
use crate::ports::RiddleSource;
use std::sync::Arc;
use tracing::{info, warn};

/// Where the calendar in use came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarOrigin {
    Source,
    Fallback,
}

pub struct CalendarLoader {
    source: Arc<dyn RiddleSource>,
}

impl CalendarLoader {
    pub fn new(source: Arc<dyn RiddleSource>) -> Self {
        Self { source }
    }

    /// Load from the source, falling back to [`RiddleCalendar::fallback`] on error.
    pub async fn load(&self) -> (RiddleCalendar, CalendarOrigin) {
        let origin = self.source.describe();
        match self.source.load_calendar().await {
            Ok(calendar) => {
                info!(
                    source = %origin,
                    days = calendar.len(),
                    bounds = ?calendar.bounds(),
                    "riddle calendar loaded"
                );
                (calendar, CalendarOrigin::Source)
            }
            Err(e) => {
                warn!(source = %origin, error = %e, "riddle data unavailable, using embedded day");
                (RiddleCalendar::fallback(), CalendarOrigin::Fallback)
            }
        }
    }
}
