//! Top-level flow for a single invocation
//!
//! Preconditions (path exists, repository guard) are checked once up front.
//! Then a file path runs the single-file flow and a directory runs the
//! multi-file flow, which confirms once and handles each file in turn.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use super::{HistoryReader, PathWalker, RepositoryGuard, RevisionSelector, RollbackExecutor};
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{is_target_file, DispatchOutcome, RollbackOutcome, Selection};
use crate::infrastructure::traits::Console;

pub struct CommandDispatcher {
    guard: RepositoryGuard,
    history: HistoryReader,
    selector: RevisionSelector,
    executor: RollbackExecutor,
    walker: PathWalker,
    console: Arc<dyn Console>,
    settings: Arc<Settings>,
}

impl CommandDispatcher {
    pub fn new(
        guard: RepositoryGuard,
        history: HistoryReader,
        selector: RevisionSelector,
        executor: RollbackExecutor,
        walker: PathWalker,
        console: Arc<dyn Console>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            guard,
            history,
            selector,
            executor,
            walker,
            console,
            settings,
        }
    }

    #[instrument(skip(self))]
    pub fn run(&self, path: &Path) -> ApplicationResult<DispatchOutcome> {
        if !path.exists() {
            return Err(ApplicationError::PathNotFound(path.to_path_buf()));
        }

        let branch = self.guard.check()?;
        debug!("run: on branch '{}'", branch);

        if path.is_file() {
            if !is_target_file(path, &self.settings.target_filename) {
                self.console.info(&format!(
                    "'{}' is not a {} file, nothing to do.",
                    path.display(),
                    self.settings.target_filename
                ));
                return Ok(DispatchOutcome::NotApplicable);
            }
            let outcome = self.rollback_file(path)?;
            return Ok(DispatchOutcome::Completed(vec![(path.to_path_buf(), outcome)]));
        }

        if path.is_dir() {
            return self.rollback_directory(path);
        }

        self.console.info(&format!(
            "'{}' is neither a file nor a directory, nothing to do.",
            path.display()
        ));
        Ok(DispatchOutcome::NotApplicable)
    }

    /// Single-file flow: history, choice, rollback.
    pub fn rollback_file(&self, path: &Path) -> ApplicationResult<RollbackOutcome> {
        let entries = self.history.read(path)?;

        match self.selector.select(path, &entries)? {
            Selection::Current => {
                self.console.info(&format!(
                    "No rollback has been done for '{}' because it is already at commit number 1.",
                    path.display()
                ));
                Ok(RollbackOutcome::Unchanged)
            }
            Selection::Revision { revision, .. } => {
                self.executor.rollback(path, &revision)?;
                self.console.success(&format!(
                    "Successfully rolled back '{}' to commit {}.",
                    path.display(),
                    revision
                ));
                Ok(RollbackOutcome::RolledBack { revision })
            }
        }
    }

    /// Multi-file flow: list, confirm once, then each file in walk order.
    fn rollback_directory(&self, dir: &Path) -> ApplicationResult<DispatchOutcome> {
        let files = self.walker.find(dir)?;
        let target = &self.settings.target_filename;

        self.console
            .info(&format!("Found {} {} files:", files.len(), target));
        for file in &files {
            self.console.info(&file.display().to_string());
        }

        if files.is_empty() {
            return Ok(DispatchOutcome::NoFilesFound);
        }

        let answer = self
            .console
            .ask(&format!(
                "Would you like to continue with rolling back all {} of these files? (yes/no):",
                files.len()
            ))
            .with_path_context("read confirmation for", dir)?
            .unwrap_or_default();

        if answer.trim().to_lowercase() != "yes" {
            self.console.info("Operation aborted by the user.");
            return Ok(DispatchOutcome::Aborted);
        }

        self.console
            .info(&format!("Proceeding with rollback for all {} files...", target));

        let mut results: Vec<(PathBuf, RollbackOutcome)> = Vec::with_capacity(files.len());
        for file in files {
            let outcome = self.rollback_file(&file)?;
            results.push((file, outcome));
        }
        Ok(DispatchOutcome::Completed(results))
    }
}
