//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; day resolution and answer checks live in PuzzleService.

use advent_riddles::adapters::clock::{FixedClock, SystemClock};
use advent_riddles::adapters::data::{FileRiddleSource, HttpRiddleSource};
use advent_riddles::adapters::ui::progress::loading_spinner;
use advent_riddles::adapters::ui::tui::TuiInputPort;
use advent_riddles::domain::Location;
use advent_riddles::ports::{ClockPort, InputPort, RiddleSource};
use advent_riddles::shared::config::{AppConfig, DataLocation};
use advent_riddles::usecases::{CalendarLoader, PuzzleService, PuzzleSettings, SessionState};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    // stderr keeps log lines out of the redrawn screen
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });

    advent_riddles::adapters::ui::init_ui();

    // --- Riddle data: one fetch, embedded fallback on failure ---
    let source: Arc<dyn RiddleSource> = match cfg.data_location() {
        DataLocation::Url(url) => Arc::new(HttpRiddleSource::new(url)),
        DataLocation::File(path) => Arc::new(FileRiddleSource::new(path)),
    };
    let spinner = loading_spinner("Carico gli indovinelli…");
    let (calendar, origin) = CalendarLoader::new(source).load().await;
    spinner.finish_and_clear();
    info!(?origin, days = calendar.len(), "calendar ready");

    // --- Clock: ADVENT_TODAY pins the date ---
    let clock: Box<dyn ClockPort> = match cfg.today_override() {
        Some(date) => {
            info!(%date, "using fixed date");
            Box::new(FixedClock::new(date))
        }
        None => Box::new(SystemClock),
    };

    let settings = PuzzleSettings {
        input_mode: cfg.input_mode_or_default(),
        season_gating: cfg.season_gating_or_default(),
        shuffle_seed: cfg.shuffle_seed,
    };
    info!(?settings, "puzzle settings");

    // --- Location: page URL, with ADVENT_DAY written in as the `day` parameter ---
    let mut location = Location::parse(&cfg.page_url_or_default());
    if let Some(day) = cfg.day.as_deref() {
        location.set_param("day", day.trim());
    }

    let service = PuzzleService::new(calendar, settings, clock);
    let mut input_port = TuiInputPort::new(service, SessionState::new(location));

    // --- Run (menu loop until Esci / Esc / Ctrl-C) ---
    input_port.run().map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
