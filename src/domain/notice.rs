//! Page-level messages shown instead of (or above) a puzzle.

use crate::domain::DayBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The riddle data holds no days.
    NotConfigured,
    /// Season gating: today is before the first configured day.
    ComeBackLater,
    /// Season gating: today is past the last configured day.
    SeasonEnded,
    /// Requested day outside the configured bounds.
    InvalidDay(DayBounds),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::NotConfigured => "Calendario non ancora configurato.".to_string(),
            Notice::ComeBackLater => {
                "Torna più tardi: il calendario dell'Avvento non è ancora iniziato.".to_string()
            }
            Notice::SeasonEnded => {
                "La stagione è finita: il calendario dell'Avvento è concluso.".to_string()
            }
            Notice::InvalidDay(bounds) => format!(
                "Giorno non valido: scegli un giorno tra {} e {}.",
                bounds.min, bounds.max
            ),
        }
    }
}
