//! Implements ViewPort on the terminal. Keeps a [`Screen`] and redraws it in full.

use crate::adapters::ui::banner::Banner;
use crate::adapters::ui::screen::Screen;
use crate::domain::{
    DomainError, LetterMark, LetterStatus, Location, Notice, Puzzle, PuzzleInput, Stage, TileBoard,
};
use crate::ports::ViewPort;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{Write, stdout};

const EMPTY_BOX: char = '_';

pub struct TerminalView {
    screen: Screen,
    /// Banner rows, styled once.
    banner: Vec<String>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            screen: Screen::default(),
            banner: Banner::new().styled_lines(),
        }
    }

    /// Clear the terminal and print the banner and every element.
    pub fn draw(&self) -> Result<(), DomainError> {
        let mut out = stdout();
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))
            .map_err(|e| DomainError::Ui(e.to_string()))?;
        for line in &self.banner {
            println!("{line}");
        }
        let s = &self.screen;

        match &s.header {
            Some((day, date)) => {
                println!("{}  {}", format!("🎄 Giorno {day}").bold().red(), date.clone().dim());
            }
            None => println!("{}", "🎄 Calendario dell'Avvento".bold().red()),
        }
        if let Some(notice) = s.notice {
            println!();
            println!("{}", notice.message().yellow());
        }

        if s.word_puzzle.is_some() || !s.riddle_word_text.is_empty() {
            self.draw_section(Stage::Word);
        }
        if s.place_visible {
            self.draw_section(Stage::Place);
        }

        if let Some(location) = &s.location {
            println!();
            println!("{}", format!("Link: {location}").dark_grey());
        }
        println!();
        stdout().flush().map_err(|e| DomainError::Ui(e.to_string()))
    }

    fn draw_section(&self, stage: Stage) {
        let title = match stage {
            Stage::Word => "Indovinello 1: la parola",
            Stage::Place => "Indovinello 2: il luogo",
        };
        println!();
        println!("{}", title.bold().green());
        println!("{}", self.screen.riddle_text(stage));
        let Some(puzzle) = self.screen.puzzle(stage) else {
            return;
        };
        println!();
        match puzzle.input() {
            PuzzleInput::Tiles(board) => {
                println!("  {}", slots_line(board));
                println!("  {}", format!("Lettere: {}", bank_line(board)).cyan());
            }
            PuzzleInput::Text(entry) => {
                let boxes: Vec<String> = entry.marks().iter().map(styled_box).collect();
                println!("  {}", boxes.join(""));
            }
        }
        if let Some(feedback) = puzzle.feedback() {
            let line = if feedback.is_ok() {
                feedback.message().green().bold()
            } else {
                feedback.message().red()
            };
            println!("  {line}");
        }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

/// `[D] [_] [V]`
pub fn slots_line(board: &TileBoard) -> String {
    board
        .slots()
        .iter()
        .map(|slot| format!("[{}]", slot.map_or(EMPTY_BOX, |t| t.letter)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bank letters separated by spaces.
pub fn bank_line(board: &TileBoard) -> String {
    board
        .bank()
        .iter()
        .map(|t| t.letter.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn styled_box(mark: &LetterMark) -> String {
    let cell = format!("[{}]", mark.letter.unwrap_or(EMPTY_BOX));
    match mark.status {
        LetterStatus::Pending => cell,
        LetterStatus::Correct => cell.green().bold().to_string(),
        LetterStatus::Wrong => cell.red().bold().to_string(),
        LetterStatus::Empty => cell.dark_grey().to_string(),
    }
}

impl ViewPort for TerminalView {
    fn set_header(&mut self, day: u32, date_label: &str) {
        self.screen.set_header(day, date_label);
    }

    fn set_location(&mut self, location: &Location) {
        self.screen.set_location(location);
    }

    fn set_notice(&mut self, notice: Option<Notice>) {
        self.screen.set_notice(notice);
    }

    fn set_riddle_text(&mut self, stage: Stage, text: &str) {
        self.screen.set_riddle_text(stage, text);
    }

    fn set_puzzle(&mut self, stage: Stage, puzzle: Option<&Puzzle>) {
        self.screen.set_puzzle(stage, puzzle);
    }

    fn set_place_visible(&mut self, visible: bool) {
        self.screen.set_place_visible(visible);
    }
}
