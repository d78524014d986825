//! Day resolution and season phase.
//!
//! Pure date-range classification: which day to show given an optional override,
//! today's date and the configured bounds.

use crate::domain::{DayBounds, RiddleCalendar};
use chrono::{Datelike, Locale, NaiveDate};

/// Month the calendar runs in.
pub const ADVENT_MONTH: u32 = 12;

/// Where today sits relative to the configured December days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonPhase {
    /// Earlier in the year, or a December day below the first configured day.
    Before,
    /// A configured December day.
    During(u32),
    /// A December day past the last configured day.
    After,
}

/// Classify `today` against the December bounds of its own calendar year.
pub fn season_phase(today: NaiveDate, bounds: DayBounds) -> SeasonPhase {
    if today.month() < ADVENT_MONTH {
        return SeasonPhase::Before;
    }
    let day = today.day();
    if day < bounds.min {
        SeasonPhase::Before
    } else if day > bounds.max {
        SeasonPhase::After
    } else {
        SeasonPhase::During(day)
    }
}

/// Why a day was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySource {
    Override,
    Today,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No days in the data; nothing to play.
    NotConfigured,
    Day {
        day: u32,
        phase: SeasonPhase,
        source: DaySource,
    },
}

/// Pick the active day: an in-bounds override wins, then today during the season,
/// then the first configured day.
pub fn resolve_day(
    calendar: &RiddleCalendar,
    override_day: Option<u32>,
    today: NaiveDate,
) -> Resolution {
    let Some(bounds) = calendar.bounds() else {
        return Resolution::NotConfigured;
    };
    let phase = season_phase(today, bounds);
    let (day, source) = match (override_day, phase) {
        (Some(day), _) if bounds.contains(day) => (day, DaySource::Override),
        (_, SeasonPhase::During(day)) => (day, DaySource::Today),
        _ => (bounds.min, DaySource::Fallback),
    };
    Resolution::Day { day, phase, source }
}

/// Lenient integer parse of a `day` value: leading whitespace and `+` allowed,
/// leading digits used, the rest ignored. `"8abc"` is 8; `"abc"` is `None`.
pub fn parse_day_param(raw: &str) -> Option<u32> {
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Long Italian date for the header, e.g. `martedì 16 dicembre 2025`.
pub fn italian_date_label(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| {
            midnight
                .and_utc()
                .format_localized("%A %-d %B %Y", Locale::it_IT)
                .to_string()
        })
        .unwrap_or_default()
}
