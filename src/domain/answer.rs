//! Answer validation: normalization and exact comparison.

use crate::domain::Stage;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Uppercase, decompose (NFD), drop diacritics, trim.
///
/// Trimming runs last so a dangling combining mark cannot leave whitespace behind;
/// that keeps `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    s.to_uppercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Outcome of checking one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Attempt and answer differ in length after normalization.
    Incomplete,
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }
}

/// Compare `attempt` against `expected`. No partial credit.
pub fn check_answer(attempt: &str, expected: &str) -> Verdict {
    let attempt = normalize(attempt);
    let expected = normalize(expected);
    if attempt.chars().count() != expected.chars().count() {
        return Verdict::Incomplete;
    }
    if attempt == expected {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

/// Inline message shown under a puzzle after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub stage: Stage,
    pub verdict: Verdict,
}

impl Feedback {
    pub fn new(stage: Stage, verdict: Verdict) -> Self {
        Self { stage, verdict }
    }

    pub fn is_ok(&self) -> bool {
        self.verdict.is_correct()
    }

    pub fn message(&self) -> &'static str {
        match (self.stage, self.verdict) {
            (_, Verdict::Incomplete) => "Completa tutte le lettere 😊",
            (Stage::Word, Verdict::Correct) => "Bravo! 🎉 Passa al secondo indovinello.",
            (Stage::Word, Verdict::Incorrect) => "Quasi… riprova!",
            (Stage::Place, Verdict::Correct) => "Trovato! 🗺️ Vai a cercare lì!",
            (Stage::Place, Verdict::Incorrect) => "Mmm, non credo sia quello. Riprova!",
        }
    }
}
