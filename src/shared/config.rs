//! Application configuration. Data source, input mode, day override, season gating.

use crate::domain::InputMode;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

/// Default location of the riddle document.
pub const DEFAULT_DATA_PATH: &str = "./data/advent.json";
/// Default page address the `day` parameter is written into.
pub const DEFAULT_PAGE_URL: &str = "index.html";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Local riddle JSON. Read from ADVENT_DATA_PATH.
    #[serde(default)]
    pub data_path: Option<String>,

    /// Remote riddle JSON; takes precedence over `data_path`. Read from ADVENT_DATA_URL.
    #[serde(default)]
    pub data_url: Option<String>,

    /// `drag` (letter tiles) or `text` (typed answer). Read from ADVENT_INPUT_MODE.
    #[serde(default)]
    pub input_mode: Option<String>,

    /// Day override, parsed leniently like the `day` query parameter. Read from ADVENT_DAY.
    #[serde(default)]
    pub day: Option<String>,

    /// Page address shown as the share link; may already carry `?day=`. Read from ADVENT_PAGE_URL.
    #[serde(default)]
    pub page_url: Option<String>,

    /// Show before/after-season messages (default true). Read from ADVENT_SEASON_GATING.
    #[serde(default)]
    pub season_gating: Option<bool>,

    /// Pretend today is this date (YYYY-MM-DD). Read from ADVENT_TODAY.
    #[serde(default)]
    pub today: Option<String>,

    /// Fixed seed for the tile shuffle. Read from ADVENT_SHUFFLE_SEED.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

/// Where the calendar is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    File(String),
    Url(String),
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("ADVENT"));
        if let Ok(path) = std::env::var("ADVENT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// URL when configured, otherwise the local path (default `./data/advent.json`).
    pub fn data_location(&self) -> DataLocation {
        match self.data_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => DataLocation::Url(url.to_string()),
            _ => DataLocation::File(
                self.data_path
                    .clone()
                    .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()),
            ),
        }
    }

    /// Returns the input mode. Defaults to drag-and-drop if unset or invalid.
    pub fn input_mode_or_default(&self) -> InputMode {
        match self.input_mode.as_deref() {
            None => InputMode::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(value = raw, error = %e, "invalid input mode, using drag");
                InputMode::default()
            }),
        }
    }

    pub fn page_url_or_default(&self) -> String {
        self.page_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PAGE_URL.to_string())
    }

    /// Returns whether season gating is on. Defaults to true.
    pub fn season_gating_or_default(&self) -> bool {
        self.season_gating.unwrap_or(true)
    }

    /// Parsed `today` override; `None` (with a warning) when it is not a valid date.
    pub fn today_override(&self) -> Option<NaiveDate> {
        let raw = self.today.as_deref()?;
        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(e) => {
                warn!(value = raw, error = %e, "invalid ADVENT_TODAY, using system date");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_settings() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.data_location(),
            DataLocation::File(DEFAULT_DATA_PATH.to_string())
        );
        assert_eq!(cfg.input_mode_or_default(), InputMode::Drag);
        assert_eq!(cfg.page_url_or_default(), "index.html");
        assert!(cfg.season_gating_or_default());
        assert_eq!(cfg.today_override(), None);
    }

    #[test]
    fn url_wins_over_path() {
        let cfg = AppConfig {
            data_path: Some("local.json".into()),
            data_url: Some("https://example.org/advent.json".into()),
            ..AppConfig::default()
        };
        assert_eq!(
            cfg.data_location(),
            DataLocation::Url("https://example.org/advent.json".into())
        );

        let blank_url = AppConfig {
            data_path: Some("local.json".into()),
            data_url: Some("  ".into()),
            ..AppConfig::default()
        };
        assert_eq!(
            blank_url.data_location(),
            DataLocation::File("local.json".into())
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = AppConfig {
            input_mode: Some("voice".into()),
            today: Some("16/10/2026".into()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.input_mode_or_default(), InputMode::Drag);
        assert_eq!(cfg.today_override(), None);
    }

    #[test]
    fn today_override_parses_iso_dates() {
        let cfg = AppConfig {
            today: Some("2025-12-08".into()),
            input_mode: Some("text".into()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.today_override(), NaiveDate::from_ymd_opt(2025, 12, 8));
        assert_eq!(cfg.input_mode_or_default(), InputMode::Text);
    }
}
