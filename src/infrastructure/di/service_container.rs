//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{
    CommandDispatcher, HistoryReader, PathWalker, RepositoryGuard, RevisionSelector,
    RollbackExecutor,
};
use crate::config::Settings;
use crate::infrastructure::traits::{
    CommandRunner, Console, RealCommandRunner, TerminalConsole,
};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,

    /// Operator terminal abstraction
    pub console: Arc<dyn Console>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealCommandRunner),
            Arc::new(TerminalConsole),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        cmd: Arc<dyn CommandRunner>,
        console: Arc<dyn Console>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            cmd,
            console,
        }
    }

    pub fn guard(&self) -> RepositoryGuard {
        RepositoryGuard::new(self.cmd.clone(), self.settings.clone())
    }

    pub fn history_reader(&self) -> HistoryReader {
        HistoryReader::new(self.cmd.clone(), self.console.clone(), self.settings.clone())
    }

    pub fn selector(&self) -> RevisionSelector {
        RevisionSelector::new(self.console.clone())
    }

    pub fn executor(&self) -> RollbackExecutor {
        RollbackExecutor::new(self.cmd.clone(), self.settings.clone())
    }

    pub fn walker(&self) -> PathWalker {
        PathWalker::new(self.settings.clone())
    }

    /// Top-level dispatcher with all components wired in.
    pub fn dispatcher(&self) -> CommandDispatcher {
        CommandDispatcher::new(
            self.guard(),
            self.history_reader(),
            self.selector(),
            self.executor(),
            self.walker(),
            self.console.clone(),
            self.settings.clone(),
        )
    }
}
