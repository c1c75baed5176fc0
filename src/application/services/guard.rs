//! Repository precondition checks
//!
//! Confirms the process runs inside a git work tree and that the checked-out
//! branch may receive rollback commits. Read-only: only queries git.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::failure_message;
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::is_protected_branch;
use crate::infrastructure::traits::CommandRunner;

/// Refuses to proceed outside a repository or on a protected branch.
pub struct RepositoryGuard {
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
}

impl RepositoryGuard {
    pub fn new(cmd: Arc<dyn CommandRunner>, settings: Arc<Settings>) -> Self {
        Self { cmd, settings }
    }

    /// Run both checks and return the current branch name.
    ///
    /// A detached HEAD yields an empty branch name, which is not protected.
    #[instrument(skip(self))]
    pub fn check(&self) -> ApplicationResult<String> {
        self.ensure_work_tree()?;
        let branch = self.current_branch()?;

        if is_protected_branch(&branch, &self.settings.protected_branches) {
            return Err(ApplicationError::ProtectedBranch(branch));
        }

        debug!("check: branch '{}' is not protected", branch);
        Ok(branch)
    }

    fn ensure_work_tree(&self) -> ApplicationResult<()> {
        let output = self
            .cmd
            .run(&self.settings.git.binary, &["rev-parse", "--is-inside-work-tree"])
            .map_err(|e| {
                debug!("ensure_work_tree: cannot run git: {}", e);
                ApplicationError::NotARepository
            })?;

        if !output.status.success() {
            debug!("ensure_work_tree: {}", failure_message(&output));
            return Err(ApplicationError::NotARepository);
        }

        match String::from_utf8_lossy(&output.stdout).trim() {
            "true" => Ok(()),
            other => {
                debug!("ensure_work_tree: unexpected answer '{}'", other);
                Err(ApplicationError::NotARepository)
            }
        }
    }

    fn current_branch(&self) -> ApplicationResult<String> {
        let output = self
            .cmd
            .run(&self.settings.git.binary, &["branch", "--show-current"])
            .map_err(|e| ApplicationError::BranchUnavailable {
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ApplicationError::BranchUnavailable {
                message: failure_message(&output),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
