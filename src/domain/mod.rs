//! Core domain layer. No external I/O dependencies.
//!
//! Riddle calendar, day resolution, answer validation and the two puzzle input kinds.

pub mod answer;
pub mod board;
pub mod calendar;
pub mod entities;
pub mod errors;
pub mod location;
pub mod notice;
pub mod puzzle;
pub mod text_entry;

pub use answer::{Feedback, Verdict, check_answer, normalize};
pub use board::{Tile, TileBoard, TileId};
pub use calendar::{
    ADVENT_MONTH, DaySource, Resolution, SeasonPhase, italian_date_label, parse_day_param,
    resolve_day, season_phase,
};
pub use entities::{DayBounds, DayRecord, FIRST_DAY, InputMode, LAST_DAY, RiddleCalendar, Stage};
pub use errors::DomainError;
pub use location::Location;
pub use notice::Notice;
pub use puzzle::{Puzzle, PuzzleInput};
pub use text_entry::{LetterMark, LetterStatus, TextEntry};
