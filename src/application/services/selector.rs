//! Interactive revision choice

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{default_selection, parse_selection, HistoryEntry, Selection};
use crate::infrastructure::traits::Console;

/// Prompts until the operator enters a valid history index.
pub struct RevisionSelector {
    console: Arc<dyn Console>,
}

impl RevisionSelector {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }

    /// Ask for a 1-based index into `entries` (which must not be empty).
    ///
    /// Empty input or end of input picks the default. Invalid input is
    /// reported and asked again, without limit.
    pub fn select(&self, path: &Path, entries: &[HistoryEntry]) -> ApplicationResult<Selection> {
        let len = entries.len();
        let prompt = format!(
            "Enter the number of the commit to roll back to [{}]:",
            default_selection(len)
        );

        loop {
            let input = self
                .console
                .ask(&prompt)
                .with_path_context("read selection for", path)?
                .unwrap_or_default();

            match parse_selection(&input, len) {
                Ok(index) => {
                    debug!("select: accepted index {} for {}", index, path.display());
                    return Ok(Selection::from_index(entries, index));
                }
                Err(e) => {
                    debug!("select: {}", e);
                    self.console.info("Invalid number. Please try again.");
                }
            }
        }
    }
}
