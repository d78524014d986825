//! Domain entities. Pure data structures for the riddle calendar.
//!
//! No IO types here: adapters hand raw JSON text to [`RiddleCalendar::from_json`].

use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Lowest and highest day key a calendar may hold.
pub const FIRST_DAY: u32 = 1;
pub const LAST_DAY: u32 = 31;

/// One day of the calendar: a riddle whose answer is a word, then one whose answer is a place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(rename = "indovinelloParola", default)]
    pub riddle_word: String,
    #[serde(rename = "rispostaParola", default)]
    pub word_answer: String,
    #[serde(rename = "indovinelloLuogo", default)]
    pub riddle_place: String,
    #[serde(rename = "rispostaLuogo", default)]
    pub place_answer: String,
}

impl DayRecord {
    pub fn new(
        riddle_word: impl Into<String>,
        word_answer: impl Into<String>,
        riddle_place: impl Into<String>,
        place_answer: impl Into<String>,
    ) -> Self {
        Self {
            riddle_word: riddle_word.into(),
            word_answer: word_answer.into(),
            riddle_place: riddle_place.into(),
            place_answer: place_answer.into(),
        }
    }
}

/// Inclusive range of configured day keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
    pub min: u32,
    pub max: u32,
}

impl DayBounds {
    pub fn contains(&self, day: u32) -> bool {
        (self.min..=self.max).contains(&day)
    }
}

/// Day number -> riddles. Loaded once per session, immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiddleCalendar {
    days: BTreeMap<u32, DayRecord>,
}

impl RiddleCalendar {
    pub fn new(days: BTreeMap<u32, DayRecord>) -> Self {
        Self { days }
    }

    /// Parse the `{"8": {...}, ...}` document. Only plain decimal keys in 1..=31 are kept;
    /// `"08"`, `" 8"` and the like are skipped.
    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        let raw: BTreeMap<String, DayRecord> =
            serde_json::from_str(text).map_err(|e| DomainError::Data(e.to_string()))?;
        let mut days = BTreeMap::new();
        for (key, record) in raw {
            match key.parse::<u32>() {
                Ok(day) if day.to_string() == key && (FIRST_DAY..=LAST_DAY).contains(&day) => {
                    days.insert(day, record);
                }
                _ => warn!(key = %key, "skipping calendar entry with invalid day key"),
            }
        }
        Ok(Self { days })
    }

    /// Embedded single-day calendar used when the real data cannot be loaded.
    pub fn fallback() -> Self {
        let mut days = BTreeMap::new();
        days.insert(
            1,
            DayRecord::new(
                "Sono piccolo e tondo, mi vedi sullo schermo. Se premi play ti porto lontano. Chi sono?",
                "DVD",
                "Dove riposano le storie prima di essere viste? È lì che il dono ti aspetta.",
                "LIBRERIA",
            ),
        );
        Self { days }
    }

    pub fn get(&self, day: u32) -> Option<&DayRecord> {
        self.days.get(&day)
    }

    /// Min and max configured day; `None` when nothing is configured.
    pub fn bounds(&self) -> Option<DayBounds> {
        let min = *self.days.keys().next()?;
        let max = *self.days.keys().next_back()?;
        Some(DayBounds { min, max })
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// The two riddles of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Word,
    Place,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Word => write!(f, "word"),
            Stage::Place => write!(f, "place"),
        }
    }
}

/// How the player builds an answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Shuffled letter tiles moved into ordered slots.
    #[default]
    Drag,
    /// Free text shown letter by letter, highlighted on check.
    Text,
}

impl FromStr for InputMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drag" | "dnd" | "tiles" => Ok(InputMode::Drag),
            "text" | "type" => Ok(InputMode::Text),
            other => Err(DomainError::Config(format!("unknown input mode: {other}"))),
        }
    }
}
