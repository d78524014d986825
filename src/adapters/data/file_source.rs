//! Implements RiddleSource by reading a JSON file from disk.

use crate::domain::{DomainError, RiddleCalendar};
use crate::ports::RiddleSource;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub struct FileRiddleSource {
    path: PathBuf,
}

impl FileRiddleSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl RiddleSource for FileRiddleSource {
    async fn load_calendar(&self) -> Result<RiddleCalendar, DomainError> {
        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::Fetch(format!("{}: {}", self.path.display(), e)))?;
        debug!(path = %self.path.display(), bytes = text.len(), "read riddle file");
        RiddleCalendar::from_json(&text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
