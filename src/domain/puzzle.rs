//! One riddle's answer plus whatever the player has built so far.

use crate::domain::{
    DomainError, Feedback, InputMode, Stage, TextEntry, TileBoard, TileId, Verdict, check_answer,
};
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleInput {
    Tiles(TileBoard),
    Text(TextEntry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    stage: Stage,
    answer: String,
    input: PuzzleInput,
    feedback: Option<Feedback>,
}

impl Puzzle {
    pub fn new<R: Rng + ?Sized>(stage: Stage, answer: &str, mode: InputMode, rng: &mut R) -> Self {
        let input = match mode {
            InputMode::Drag => PuzzleInput::Tiles(TileBoard::new(answer, rng)),
            InputMode::Text => PuzzleInput::Text(TextEntry::new(answer)),
        };
        Self {
            stage,
            answer: answer.to_string(),
            input,
            feedback: None,
        }
    }

    pub fn input(&self) -> &PuzzleInput {
        &self.input
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn is_solved(&self) -> bool {
        self.feedback.is_some_and(|f| f.is_ok())
    }

    /// What the player has built: slot letters in order, or the typed text.
    pub fn attempt(&self) -> String {
        match &self.input {
            PuzzleInput::Tiles(board) => board.constructed(),
            PuzzleInput::Text(entry) => entry.input().to_string(),
        }
    }

    pub fn place_tile(&mut self, tile: TileId, slot: usize) -> Result<(), DomainError> {
        match &mut self.input {
            PuzzleInput::Tiles(board) => board.place(tile, slot),
            PuzzleInput::Text(_) => Err(DomainError::Board("puzzle takes typed input".into())),
        }
    }

    pub fn clear_slot(&mut self, slot: usize) -> Result<bool, DomainError> {
        match &mut self.input {
            PuzzleInput::Tiles(board) => Ok(board.clear_slot(slot)),
            PuzzleInput::Text(_) => Err(DomainError::Board("puzzle takes typed input".into())),
        }
    }

    pub fn type_text(&mut self, text: &str) -> Result<(), DomainError> {
        match &mut self.input {
            PuzzleInput::Text(entry) => {
                entry.set_input(text);
                Ok(())
            }
            PuzzleInput::Tiles(_) => Err(DomainError::Board("puzzle takes letter tiles".into())),
        }
    }

    /// Put the input back to its starting state and drop the feedback.
    pub fn reset(&mut self) {
        match &mut self.input {
            PuzzleInput::Tiles(board) => board.reset(),
            PuzzleInput::Text(entry) => entry.clear(),
        }
        self.feedback = None;
    }

    /// Validate the current attempt and remember the feedback.
    pub fn check(&mut self) -> Feedback {
        let verdict: Verdict = check_answer(&self.attempt(), &self.answer);
        if let PuzzleInput::Text(entry) = &mut self.input {
            entry.grade(&self.answer);
        }
        let feedback = Feedback::new(self.stage, verdict);
        self.feedback = Some(feedback);
        feedback
    }
}
