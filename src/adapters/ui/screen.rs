//! Implements ViewPort in memory. Holds the latest contents of every element.
//!
//! The terminal view draws from it; tests assert against it directly.

use crate::domain::{Location, Notice, Puzzle, Stage};
use crate::ports::ViewPort;

#[derive(Debug, Clone, Default)]
pub struct Screen {
    /// Day number and date label.
    pub header: Option<(u32, String)>,
    pub location: Option<String>,
    pub notice: Option<Notice>,
    pub riddle_word_text: String,
    pub riddle_place_text: String,
    pub word_puzzle: Option<Puzzle>,
    pub place_puzzle: Option<Puzzle>,
    pub place_visible: bool,
}

impl Screen {
    pub fn riddle_text(&self, stage: Stage) -> &str {
        match stage {
            Stage::Word => &self.riddle_word_text,
            Stage::Place => &self.riddle_place_text,
        }
    }

    pub fn puzzle(&self, stage: Stage) -> Option<&Puzzle> {
        match stage {
            Stage::Word => self.word_puzzle.as_ref(),
            Stage::Place => self.place_puzzle.as_ref(),
        }
    }

    /// Feedback line under a puzzle, if any.
    pub fn feedback(&self, stage: Stage) -> Option<&'static str> {
        self.puzzle(stage)
            .and_then(Puzzle::feedback)
            .map(|f| f.message())
    }
}

impl ViewPort for Screen {
    fn set_header(&mut self, day: u32, date_label: &str) {
        self.header = Some((day, date_label.to_string()));
    }

    fn set_location(&mut self, location: &Location) {
        self.location = Some(location.to_string());
    }

    fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    fn set_riddle_text(&mut self, stage: Stage, text: &str) {
        match stage {
            Stage::Word => self.riddle_word_text = text.to_string(),
            Stage::Place => self.riddle_place_text = text.to_string(),
        }
    }

    fn set_puzzle(&mut self, stage: Stage, puzzle: Option<&Puzzle>) {
        let puzzle = puzzle.cloned();
        match stage {
            Stage::Word => self.word_puzzle = puzzle,
            Stage::Place => self.place_puzzle = puzzle,
        }
    }

    fn set_place_visible(&mut self, visible: bool) {
        self.place_visible = visible;
    }
}
