//! Day navigation and the two-stage riddle flow.
//!
//! All mutable state lives in [`SessionState`], passed by `&mut` into each handler together
//! with the view. Handlers run synchronously; nothing here suspends.

use crate::domain::{
    DaySource, DomainError, Feedback, InputMode, Location, Notice, Puzzle, Resolution,
    RiddleCalendar, SeasonPhase, Stage, TileId, italian_date_label, parse_day_param, resolve_day,
};
use crate::ports::{ClockPort, ViewPort};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

const MISSING_DAY_TEXT: &str = "Nessun indovinello disponibile per questo giorno.";
const WORD_RIDDLE_PLACEHOLDER: &str = "Indovinello non disponibile";
const PLACE_RIDDLE_PLACEHOLDER: &str = "Indovinello luogo non disponibile";

/// Per-session state. Discarded on exit.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub day: Option<u32>,
    pub location: Location,
    pub word_answer: String,
    pub place_answer: String,
    pub word: Option<Puzzle>,
    pub place: Option<Puzzle>,
    pub place_revealed: bool,
    pub notice: Option<Notice>,
}

impl SessionState {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    pub fn puzzle(&self, stage: Stage) -> Option<&Puzzle> {
        match stage {
            Stage::Word => self.word.as_ref(),
            Stage::Place => self.place.as_ref(),
        }
    }

    fn puzzle_mut(&mut self, stage: Stage) -> Result<&mut Puzzle, DomainError> {
        let puzzle = match stage {
            Stage::Word => self.word.as_mut(),
            Stage::Place => self.place.as_mut(),
        };
        puzzle.ok_or_else(|| DomainError::Board(format!("no {stage} puzzle on screen")))
    }
}

/// Behaviour switches that replace the separate page variants.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleSettings {
    pub input_mode: InputMode,
    /// Show before/after-season messages instead of falling back to the first day.
    pub season_gating: bool,
    /// Fixed tile shuffle; `None` seeds from the OS.
    pub shuffle_seed: Option<u64>,
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Drag,
            season_gating: true,
            shuffle_seed: None,
        }
    }
}

pub struct PuzzleService {
    calendar: RiddleCalendar,
    settings: PuzzleSettings,
    clock: Box<dyn ClockPort>,
    rng: StdRng,
}

impl PuzzleService {
    pub fn new(
        calendar: RiddleCalendar,
        settings: PuzzleSettings,
        clock: Box<dyn ClockPort>,
    ) -> Self {
        let rng = match settings.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            calendar,
            settings,
            clock,
            rng,
        }
    }

    pub fn calendar(&self) -> &RiddleCalendar {
        &self.calendar
    }

    pub fn settings(&self) -> &PuzzleSettings {
        &self.settings
    }

    /// Resolve the initial day from the location override, today and the data bounds.
    pub fn start(&mut self, state: &mut SessionState, view: &mut dyn ViewPort) {
        let today = self.clock.today();
        let override_day = state.location.day();
        match resolve_day(&self.calendar, override_day, today) {
            Resolution::NotConfigured => {
                info!("riddle calendar is empty");
                self.show_notice_only(state, view, Notice::NotConfigured);
            }
            Resolution::Day { day, phase, source } => {
                if override_day.is_some() && source != DaySource::Override {
                    warn!(requested = ?override_day, "day override outside configured days, ignored");
                }
                debug!(day, ?phase, ?source, %today, "resolved start day");
                let gate = match phase {
                    SeasonPhase::Before => Some(Notice::ComeBackLater),
                    SeasonPhase::After => Some(Notice::SeasonEnded),
                    SeasonPhase::During(_) => None,
                };
                match gate {
                    Some(notice) if self.settings.season_gating && source == DaySource::Fallback => {
                        info!(?phase, "outside the advent season");
                        self.show_notice_only(state, view, notice);
                    }
                    _ => self.go_to_day(state, view, day),
                }
            }
        }
    }

    /// "Go to day" from user input. Out-of-range or unparsable values leave the current
    /// puzzle alone and show a notice. Returns whether the day changed.
    pub fn request_day(
        &mut self,
        state: &mut SessionState,
        view: &mut dyn ViewPort,
        raw: &str,
    ) -> bool {
        let Some(bounds) = self.calendar.bounds() else {
            self.set_notice(state, view, Some(Notice::NotConfigured));
            return false;
        };
        match parse_day_param(raw) {
            Some(day) if bounds.contains(day) => {
                self.go_to_day(state, view, day);
                true
            }
            _ => {
                debug!(raw, "rejected day request");
                self.set_notice(state, view, Some(Notice::InvalidDay(bounds)));
                false
            }
        }
    }

    /// Switch to `day`: header, riddles, fresh puzzles, and the `day` parameter.
    pub fn go_to_day(&mut self, state: &mut SessionState, view: &mut dyn ViewPort, day: u32) {
        state.day = Some(day);
        self.set_notice(state, view, None);
        view.set_header(day, &italian_date_label(self.clock.today()));
        self.hydrate(state, view, day);
        state.location.set_day(day);
        view.set_location(&state.location);
        info!(day, location = %state.location, "showing day");
    }

    pub fn place_tile(
        &mut self,
        state: &mut SessionState,
        view: &mut dyn ViewPort,
        stage: Stage,
        tile: TileId,
        slot: usize,
    ) -> Result<(), DomainError> {
        let puzzle = state.puzzle_mut(stage)?;
        puzzle.place_tile(tile, slot)?;
        view.set_puzzle(stage, Some(&*puzzle));
        Ok(())
    }

    pub fn clear_slot(
        &mut self,
        state: &mut SessionState,
        view: &mut dyn ViewPort,
        stage: Stage,
        slot: usize,
    ) -> Result<bool, DomainError> {
        let puzzle = state.puzzle_mut(stage)?;
        let cleared = puzzle.clear_slot(slot)?;
        view.set_puzzle(stage, Some(&*puzzle));
        Ok(cleared)
    }

    pub fn type_answer(
        &mut self,
        state: &mut SessionState,
        view: &mut dyn ViewPort,
        stage: Stage,
        text: &str,
    ) -> Result<(), DomainError> {
        let puzzle = state.puzzle_mut(stage)?;
        puzzle.type_text(text)?;
        view.set_puzzle(stage, Some(&*puzzle));
        Ok(())
    }

    /// Back to an empty answer, feedback cleared.
    pub fn reset(
        &mut self,
        state: &mut SessionState,
        view: &mut dyn ViewPort,
        stage: Stage,
    ) -> Result<(), DomainError> {
        let puzzle = state.puzzle_mut(stage)?;
        puzzle.reset();
        view.set_puzzle(stage, Some(&*puzzle));
        Ok(())
    }

    /// Validate the attempt. A solved word riddle reveals the place riddle.
    pub fn check(
        &mut self,
        state: &mut SessionState,
        view: &mut dyn ViewPort,
        stage: Stage,
    ) -> Result<Feedback, DomainError> {
        let puzzle = state.puzzle_mut(stage)?;
        let feedback = puzzle.check();
        view.set_puzzle(stage, Some(&*puzzle));
        info!(day = ?state.day, %stage, verdict = ?feedback.verdict, "answer checked");
        if stage == Stage::Word && feedback.is_ok() {
            self.reveal_place(state, view);
        }
        Ok(feedback)
    }

    fn reveal_place(&mut self, state: &mut SessionState, view: &mut dyn ViewPort) {
        let puzzle = Puzzle::new(
            Stage::Place,
            &state.place_answer,
            self.settings.input_mode,
            &mut self.rng,
        );
        view.set_puzzle(Stage::Place, Some(&puzzle));
        view.set_place_visible(true);
        state.place = Some(puzzle);
        state.place_revealed = true;
    }

    fn hydrate(&mut self, state: &mut SessionState, view: &mut dyn ViewPort, day: u32) {
        state.place = None;
        state.place_revealed = false;
        view.set_place_visible(false);
        view.set_puzzle(Stage::Place, None);

        let Some(record) = self.calendar.get(day) else {
            debug!(day, "no riddle for day");
            state.word = None;
            state.word_answer.clear();
            state.place_answer.clear();
            view.set_riddle_text(Stage::Word, MISSING_DAY_TEXT);
            view.set_riddle_text(Stage::Place, "");
            view.set_puzzle(Stage::Word, None);
            return;
        };

        state.word_answer = record.word_answer.to_uppercase();
        state.place_answer = record.place_answer.to_uppercase();
        view.set_riddle_text(
            Stage::Word,
            non_empty_or(&record.riddle_word, WORD_RIDDLE_PLACEHOLDER),
        );
        view.set_riddle_text(
            Stage::Place,
            non_empty_or(&record.riddle_place, PLACE_RIDDLE_PLACEHOLDER),
        );

        let puzzle = Puzzle::new(
            Stage::Word,
            &state.word_answer,
            self.settings.input_mode,
            &mut self.rng,
        );
        view.set_puzzle(Stage::Word, Some(&puzzle));
        state.word = Some(puzzle);
    }

    fn show_notice_only(&self, state: &mut SessionState, view: &mut dyn ViewPort, notice: Notice) {
        state.day = None;
        state.word = None;
        state.place = None;
        state.place_revealed = false;
        view.set_puzzle(Stage::Word, None);
        view.set_puzzle(Stage::Place, None);
        view.set_place_visible(false);
        self.set_notice(state, view, Some(notice));
    }

    fn set_notice(&self, state: &mut SessionState, view: &mut dyn ViewPort, notice: Option<Notice>) {
        state.notice = notice;
        view.set_notice(notice);
    }
}

fn non_empty_or<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.is_empty() { placeholder } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::ui::screen::Screen;
    use crate::domain::{DayRecord, PuzzleInput, Verdict};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    const DVD_RIDDLE: &str =
        "Sono piccolo e tondo, mi vedi sullo schermo. Se premi play ti porto lontano. Chi sono?";

    fn day8() -> RiddleCalendar {
        let mut days = BTreeMap::new();
        days.insert(
            8,
            DayRecord::new(DVD_RIDDLE, "DVD", "Dove riposano le storie?", "Libreria"),
        );
        RiddleCalendar::new(days)
    }

    fn service(calendar: RiddleCalendar, mode: InputMode, today: (i32, u32, u32)) -> PuzzleService {
        let date = NaiveDate::from_ymd_opt(today.0, today.1, today.2).unwrap();
        PuzzleService::new(
            calendar,
            PuzzleSettings {
                input_mode: mode,
                season_gating: true,
                shuffle_seed: Some(3),
            },
            Box::new(FixedClock::new(date)),
        )
    }

    /// Drag tiles from the bank into the first slots so they spell `word`.
    fn spell(
        svc: &mut PuzzleService,
        state: &mut SessionState,
        view: &mut Screen,
        stage: Stage,
        word: &str,
    ) {
        for (slot, letter) in word.chars().enumerate() {
            let Some(PuzzleInput::Tiles(board)) = state.puzzle(stage).map(|p| p.input().clone())
            else {
                panic!("expected tiles");
            };
            let tile = board
                .bank()
                .into_iter()
                .find(|t| t.letter == letter)
                .expect("letter in bank");
            svc.place_tile(state, view, stage, tile.id, slot).unwrap();
        }
    }

    #[test]
    fn day_eight_example() {
        let mut svc = service(day8(), InputMode::Drag, (2025, 12, 8));
        let mut state = SessionState::new(Location::parse("index.html?day=8"));
        let mut view = Screen::default();
        svc.start(&mut state, &mut view);

        assert_eq!(state.day, Some(8));
        assert_eq!(view.riddle_word_text, DVD_RIDDLE);
        assert!(!view.place_visible);

        spell(&mut svc, &mut state, &mut view, Stage::Word, "DV");
        let fb = svc.check(&mut state, &mut view, Stage::Word).unwrap();
        assert_eq!(fb.verdict, Verdict::Incomplete);
        assert_eq!(view.feedback(Stage::Word), Some("Completa tutte le lettere 😊"));
        assert!(!view.place_visible);

        svc.reset(&mut state, &mut view, Stage::Word).unwrap();
        assert_eq!(view.feedback(Stage::Word), None);
        spell(&mut svc, &mut state, &mut view, Stage::Word, "DVD");
        let fb = svc.check(&mut state, &mut view, Stage::Word).unwrap();
        assert!(fb.is_ok());
        assert_eq!(
            view.feedback(Stage::Word),
            Some("Bravo! 🎉 Passa al secondo indovinello.")
        );
        assert!(view.place_visible);
        assert!(state.place_revealed);
    }

    #[test]
    fn place_riddle_follows_word_riddle() {
        let mut svc = service(day8(), InputMode::Text, (2025, 12, 8));
        let mut state = SessionState::new(Location::parse("index.html"));
        let mut view = Screen::default();
        svc.start(&mut state, &mut view);

        assert!(svc.check(&mut state, &mut view, Stage::Place).is_err());

        svc.type_answer(&mut state, &mut view, Stage::Word, "dvd").unwrap();
        svc.check(&mut state, &mut view, Stage::Word).unwrap();
        assert!(view.place_visible);

        svc.type_answer(&mut state, &mut view, Stage::Place, "libreira").unwrap();
        let fb = svc.check(&mut state, &mut view, Stage::Place).unwrap();
        assert_eq!(fb.verdict, Verdict::Incorrect);
        assert_eq!(
            view.feedback(Stage::Place),
            Some("Mmm, non credo sia quello. Riprova!")
        );

        svc.type_answer(&mut state, &mut view, Stage::Place, "Libreria").unwrap();
        let fb = svc.check(&mut state, &mut view, Stage::Place).unwrap();
        assert!(fb.is_ok());
        assert_eq!(view.feedback(Stage::Place), Some("Trovato! 🗺️ Vai a cercare lì!"));
    }

    #[test]
    fn go_to_day_writes_location_and_hides_place() {
        let mut days = BTreeMap::new();
        days.insert(1, DayRecord::new("uno", "A", "luogo", "B"));
        days.insert(2, DayRecord::new("due", "C", "luogo", "D"));
        let mut svc = service(RiddleCalendar::new(days), InputMode::Text, (2025, 12, 1));
        let mut state = SessionState::new(Location::parse("index.html?theme=dark"));
        let mut view = Screen::default();
        svc.start(&mut state, &mut view);
        assert_eq!(view.location.as_deref(), Some("index.html?theme=dark&day=1"));

        svc.type_answer(&mut state, &mut view, Stage::Word, "a").unwrap();
        svc.check(&mut state, &mut view, Stage::Word).unwrap();
        assert!(view.place_visible);

        assert!(svc.request_day(&mut state, &mut view, "2"));
        assert_eq!(view.header.as_ref().map(|h| h.0), Some(2));
        assert_eq!(view.riddle_word_text, "due");
        assert!(!view.place_visible);
        assert!(state.place.is_none());
        assert_eq!(view.location.as_deref(), Some("index.html?theme=dark&day=2"));
    }

    #[test]
    fn out_of_range_request_keeps_current_day() {
        let mut svc = service(day8(), InputMode::Drag, (2025, 12, 8));
        let mut state = SessionState::new(Location::default());
        let mut view = Screen::default();
        svc.start(&mut state, &mut view);

        assert!(!svc.request_day(&mut state, &mut view, "25"));
        assert!(!svc.request_day(&mut state, &mut view, "domani"));
        assert_eq!(state.day, Some(8));
        assert_eq!(
            view.notice.map(|n| n.message()).as_deref(),
            Some("Giorno non valido: scegli un giorno tra 8 e 8.")
        );
    }

    #[test]
    fn empty_calendar_shows_not_configured() {
        let mut svc = service(RiddleCalendar::default(), InputMode::Drag, (2025, 12, 8));
        let mut state = SessionState::new(Location::parse("index.html?day=8"));
        let mut view = Screen::default();
        svc.start(&mut state, &mut view);

        assert_eq!(view.notice, Some(Notice::NotConfigured));
        assert!(view.word_puzzle.is_none());
        assert!(view.place_puzzle.is_none());
        assert_eq!(state.day, None);
    }

    #[test]
    fn gating_before_and_after_season() {
        let mut svc = service(day8(), InputMode::Drag, (2025, 11, 30));
        let mut state = SessionState::new(Location::default());
        let mut view = Screen::default();
        svc.start(&mut state, &mut view);
        assert_eq!(view.notice, Some(Notice::ComeBackLater));
        assert!(view.word_puzzle.is_none());

        let mut svc = service(day8(), InputMode::Drag, (2025, 12, 9));
        let mut state = SessionState::new(Location::default());
        let mut view = Screen::default();
        svc.start(&mut state, &mut view);
        assert_eq!(view.notice, Some(Notice::SeasonEnded));
        assert!(view.word_puzzle.is_none());
    }

    #[test]
    fn override_bypasses_gating() {
        let mut svc = service(day8(), InputMode::Drag, (2025, 3, 1));
        let mut state = SessionState::new(Location::parse("?day=8"));
        let mut view = Screen::default();
        svc.start(&mut state, &mut view);
        assert_eq!(view.notice, None);
        assert_eq!(state.day, Some(8));
    }

    #[test]
    fn without_gating_falls_back_to_first_day() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut svc = PuzzleService::new(
            day8(),
            PuzzleSettings {
                season_gating: false,
                shuffle_seed: Some(1),
                ..PuzzleSettings::default()
            },
            Box::new(FixedClock::new(date)),
        );
        let mut state = SessionState::new(Location::default());
        let mut view = Screen::default();
        svc.start(&mut state, &mut view);
        assert_eq!(view.notice, None);
        assert_eq!(state.day, Some(8));
        assert!(view.word_puzzle.is_some());
    }

    #[test]
    fn gap_in_calendar_shows_missing_text() {
        let mut days = BTreeMap::new();
        days.insert(1, DayRecord::new("uno", "A", "luogo", "B"));
        days.insert(3, DayRecord::new("tre", "C", "luogo", "D"));
        let mut svc = service(RiddleCalendar::new(days), InputMode::Drag, (2025, 12, 2));
        let mut state = SessionState::new(Location::default());
        let mut view = Screen::default();
        svc.start(&mut state, &mut view);
        assert_eq!(state.day, Some(2));
        assert_eq!(view.riddle_word_text, MISSING_DAY_TEXT);
        assert!(view.word_puzzle.is_none());
        assert!(svc.check(&mut state, &mut view, Stage::Word).is_err());
    }

    #[test]
    fn empty_riddle_text_uses_placeholder() {
        let mut days = BTreeMap::new();
        days.insert(5, DayRecord::new(" ", "neve", "", "tetto"));
        let mut svc = service(RiddleCalendar::new(days), InputMode::Drag, (2025, 12, 5));
        let mut state = SessionState::new(Location::default());
        let mut view = Screen::default();
        svc.start(&mut state, &mut view);
        assert_eq!(view.riddle_word_text, " ");
        assert_eq!(view.riddle_place_text, PLACE_RIDDLE_PLACEHOLDER);
        assert_eq!(state.word_answer, "NEVE");
    }
}
