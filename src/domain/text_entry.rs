//! Text-entry puzzle: one box per answer letter, highlighted per character on check.

use crate::domain::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    /// Not checked yet.
    Pending,
    Correct,
    Wrong,
    /// Nothing typed in this box.
    Empty,
}

/// Contents and highlight of one letter box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterMark {
    pub letter: Option<char>,
    pub status: LetterStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    answer_len: usize,
    input: String,
    marks: Vec<LetterMark>,
}

impl TextEntry {
    pub fn new(answer: &str) -> Self {
        let answer_len = normalize(answer).chars().count();
        let mut entry = Self {
            answer_len,
            input: String::new(),
            marks: Vec::new(),
        };
        entry.refresh();
        entry
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn marks(&self) -> &[LetterMark] {
        &self.marks
    }

    /// Replace the attempt. Highlights go back to pending.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.refresh();
    }

    pub fn clear(&mut self) {
        self.set_input("");
    }

    /// Highlight each box against `answer`, position by position.
    pub fn grade(&mut self, answer: &str) {
        let expected: Vec<char> = normalize(answer).chars().collect();
        let typed: Vec<char> = normalize(&self.input).chars().collect();
        self.marks = expected
            .iter()
            .enumerate()
            .map(|(i, want)| match typed.get(i) {
                Some(got) if got == want => LetterMark {
                    letter: Some(*got),
                    status: LetterStatus::Correct,
                },
                Some(got) => LetterMark {
                    letter: Some(*got),
                    status: LetterStatus::Wrong,
                },
                None => LetterMark {
                    letter: None,
                    status: LetterStatus::Empty,
                },
            })
            .collect();
    }

    fn refresh(&mut self) {
        let normalized = normalize(&self.input);
        let mut typed = normalized.chars();
        self.marks = (0..self.answer_len)
            .map(|_| LetterMark {
                letter: typed.next(),
                status: LetterStatus::Pending,
            })
            .collect();
    }
}
