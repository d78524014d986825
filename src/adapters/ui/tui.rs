//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Each menu choice maps to one PuzzleService handler; the terminal view is redrawn after it.

use crate::adapters::ui::terminal::TerminalView;
use crate::domain::{DomainError, InputMode, PuzzleInput, Stage, TileId};
use crate::ports::InputPort;
use crate::usecases::{PuzzleService, SessionState};
use inquire::InquireError;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{Select, Text};
use std::fmt;
use tracing::{debug, warn};

/// Apply the festive theme to all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("❄").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightRed))
        .with_selected_option(Some(StyleSheet::new().with_fg(Color::LightGreen)));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    MoveTile(Stage),
    ClearSlot(Stage),
    TypeAnswer(Stage),
    Check(Stage),
    Reset(Stage),
    GoToDay,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::MoveTile(_) => "Sposta una lettera",
            Action::ClearSlot(_) => "Togli una lettera",
            Action::TypeAnswer(_) => "Scrivi la risposta",
            Action::Check(Stage::Word) => "Verifica la parola",
            Action::Check(Stage::Place) => "Verifica il luogo",
            Action::Reset(_) => "Ricomincia",
            Action::GoToDay => "Vai a un altro giorno",
            Action::Quit => "Esci",
        };
        f.write_str(label)
    }
}

/// A tile offered in the "move" prompt, with where it currently sits.
struct TileChoice {
    id: TileId,
    letter: char,
    slot: Option<usize>,
}

impl fmt::Display for TileChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Some(slot) => write!(f, "{}  (casella {})", self.letter, slot + 1),
            None => write!(f, "{}", self.letter),
        }
    }
}

struct SlotChoice {
    index: usize,
    letter: Option<char>,
}

impl fmt::Display for SlotChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Casella {}: {}", self.index + 1, self.letter.unwrap_or('_'))
    }
}

/// Esc backs out of a prompt (`None`); Ctrl-C is reported as an interruption.
fn prompt<T>(result: Result<T, InquireError>) -> Result<Option<T>, Interrupt> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(InquireError::OperationInterrupted) => Err(Interrupt::Quit),
        Err(e) => Err(Interrupt::Failed(DomainError::Ui(e.to_string()))),
    }
}

enum Interrupt {
    Quit,
    Failed(DomainError),
}

/// TUI adapter. Owns the session state and the terminal view; the service does the work.
pub struct TuiInputPort {
    service: PuzzleService,
    state: SessionState,
    view: TerminalView,
}

impl TuiInputPort {
    pub fn new(service: PuzzleService, state: SessionState) -> Self {
        Self {
            service,
            state,
            view: TerminalView::new(),
        }
    }

    /// The riddle being worked on: the place once revealed and unsolved, else the word.
    fn active_stage(&self) -> Option<Stage> {
        if let Some(place) = &self.state.place {
            return (!place.is_solved()).then_some(Stage::Place);
        }
        self.state
            .word
            .as_ref()
            .filter(|w| !w.is_solved())
            .map(|_| Stage::Word)
    }

    fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(stage) = self.active_stage() {
            match self.service.settings().input_mode {
                InputMode::Drag => {
                    actions.push(Action::MoveTile(stage));
                    actions.push(Action::ClearSlot(stage));
                }
                InputMode::Text => actions.push(Action::TypeAnswer(stage)),
            }
            actions.push(Action::Check(stage));
            actions.push(Action::Reset(stage));
        }
        if !self.service.calendar().is_empty() {
            actions.push(Action::GoToDay);
        }
        actions.push(Action::Quit);
        actions
    }

    /// Run one menu round. `Ok(false)` ends the session.
    fn step(&mut self) -> Result<bool, Interrupt> {
        let Some(action) = prompt(Select::new("Cosa vuoi fare?", self.actions()).prompt())? else {
            return Ok(false);
        };
        debug!(?action, "menu action");
        let result = match action {
            Action::Quit => return Ok(false),
            Action::MoveTile(stage) => self.move_tile(stage)?,
            Action::ClearSlot(stage) => self.clear_slot(stage)?,
            Action::TypeAnswer(stage) => self.type_answer(stage)?,
            Action::Check(stage) => self
                .service
                .check(&mut self.state, &mut self.view, stage)
                .map(|_| ()),
            Action::Reset(stage) => self.service.reset(&mut self.state, &mut self.view, stage),
            Action::GoToDay => {
                self.go_to_day()?;
                Ok(())
            }
        };
        if let Err(e) = result {
            warn!(error = %e, "action rejected");
        }
        Ok(true)
    }

    fn move_tile(&mut self, stage: Stage) -> Result<Result<(), DomainError>, Interrupt> {
        let Some(PuzzleInput::Tiles(board)) = self.state.puzzle(stage).map(|p| p.input().clone())
        else {
            return Ok(Ok(()));
        };
        let mut tiles: Vec<TileChoice> = board
            .bank()
            .into_iter()
            .map(|t| TileChoice {
                id: t.id,
                letter: t.letter,
                slot: None,
            })
            .collect();
        tiles.extend(board.slots().into_iter().enumerate().filter_map(|(i, s)| {
            s.map(|t| TileChoice {
                id: t.id,
                letter: t.letter,
                slot: Some(i),
            })
        }));
        let Some(tile) = prompt(Select::new("Quale lettera?", tiles).prompt())? else {
            return Ok(Ok(()));
        };
        let slots: Vec<SlotChoice> = board
            .slots()
            .into_iter()
            .enumerate()
            .map(|(index, s)| SlotChoice {
                index,
                letter: s.map(|t| t.letter),
            })
            .collect();
        let Some(slot) = prompt(Select::new("In quale casella?", slots).prompt())? else {
            return Ok(Ok(()));
        };
        Ok(self
            .service
            .place_tile(&mut self.state, &mut self.view, stage, tile.id, slot.index))
    }

    fn clear_slot(&mut self, stage: Stage) -> Result<Result<(), DomainError>, Interrupt> {
        let Some(PuzzleInput::Tiles(board)) = self.state.puzzle(stage).map(|p| p.input().clone())
        else {
            return Ok(Ok(()));
        };
        let filled: Vec<SlotChoice> = board
            .slots()
            .into_iter()
            .enumerate()
            .filter_map(|(index, s)| {
                s.map(|t| SlotChoice {
                    index,
                    letter: Some(t.letter),
                })
            })
            .collect();
        if filled.is_empty() {
            return Ok(Ok(()));
        }
        let Some(slot) = prompt(Select::new("Quale casella svuotare?", filled).prompt())? else {
            return Ok(Ok(()));
        };
        Ok(self
            .service
            .clear_slot(&mut self.state, &mut self.view, stage, slot.index)
            .map(|_| ()))
    }

    fn type_answer(&mut self, stage: Stage) -> Result<Result<(), DomainError>, Interrupt> {
        let current = self
            .state
            .puzzle(stage)
            .map(|p| p.attempt())
            .unwrap_or_default();
        let Some(text) = prompt(
            Text::new("Risposta:")
                .with_initial_value(&current)
                .prompt(),
        )?
        else {
            return Ok(Ok(()));
        };
        Ok(self
            .service
            .type_answer(&mut self.state, &mut self.view, stage, &text))
    }

    fn go_to_day(&mut self) -> Result<(), Interrupt> {
        let hint = self
            .service
            .calendar()
            .bounds()
            .map(|b| format!("Giorno ({}-{}):", b.min, b.max))
            .unwrap_or_else(|| "Giorno:".to_string());
        if let Some(raw) = prompt(Text::new(&hint).prompt())? {
            self.service
                .request_day(&mut self.state, &mut self.view, &raw);
        }
        Ok(())
    }
}

impl InputPort for TuiInputPort {
    fn run(&mut self) -> Result<(), DomainError> {
        self.service.start(&mut self.state, &mut self.view);
        loop {
            self.view.draw()?;
            match self.step() {
                Ok(true) => {}
                Ok(false) | Err(Interrupt::Quit) => return Ok(()),
                Err(Interrupt::Failed(e)) => return Err(e),
            }
        }
    }
}
