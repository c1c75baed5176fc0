//! File history lookup via `git log`

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use super::failure_message;
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{format_history_line, HistoryEntry, HISTORY_LIMIT};
use crate::infrastructure::traits::{CommandRunner, Console};

/// Reads and prints the most recent commits touching a file.
pub struct HistoryReader {
    cmd: Arc<dyn CommandRunner>,
    console: Arc<dyn Console>,
    settings: Arc<Settings>,
}

impl HistoryReader {
    pub fn new(
        cmd: Arc<dyn CommandRunner>,
        console: Arc<dyn Console>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            cmd,
            console,
            settings,
        }
    }

    /// Fetch up to [`HISTORY_LIMIT`] entries for `path`, newest first,
    /// and print them as a numbered menu.
    #[instrument(skip(self))]
    pub fn read(&self, path: &Path) -> ApplicationResult<Vec<HistoryEntry>> {
        let entries = self.fetch(path)?;

        self.console
            .info(&format!("\nGit history for '{}':", path.display()));
        for (i, entry) in entries.iter().enumerate() {
            self.console.info(&format_history_line(i + 1, entry));
        }

        Ok(entries)
    }

    /// Fetch without printing.
    pub fn fetch(&self, path: &Path) -> ApplicationResult<Vec<HistoryEntry>> {
        let path_arg = path.to_string_lossy().into_owned();
        let date_arg = format!("--date=format:{}", self.settings.git.date_format);
        let limit = HISTORY_LIMIT.to_string();
        let args = [
            "log",
            "--pretty=format:%h, %an, %ad, %s",
            date_arg.as_str(),
            "-n",
            limit.as_str(),
            "--",
            path_arg.as_str(),
        ];

        let unavailable = |message: String| ApplicationError::HistoryUnavailable {
            path: path.to_path_buf(),
            message,
        };

        let output = self
            .cmd
            .run(&self.settings.git.binary, &args)
            .map_err(|e| unavailable(e.to_string()))?;

        if !output.status.success() {
            return Err(unavailable(failure_message(&output)));
        }

        let entries = HistoryEntry::parse_log(&String::from_utf8_lossy(&output.stdout));
        if entries.is_empty() {
            return Err(unavailable("no commits found for this file".into()));
        }

        debug!("fetch: {} entries for {}", entries.len(), path.display());
        Ok(entries)
    }
}
