//! Checkout and commit of a historical revision
//!
//! Both git steps inherit the terminal so the operator sees git's own output.
//! A failed commit after a successful checkout leaves the file restored but
//! uncommitted; nothing is undone automatically.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::render_commit_message;
use crate::infrastructure::traits::CommandRunner;

pub struct RollbackExecutor {
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
}

impl RollbackExecutor {
    pub fn new(cmd: Arc<dyn CommandRunner>, settings: Arc<Settings>) -> Self {
        Self { cmd, settings }
    }

    /// Restore `path` to `revision` and commit exactly that file.
    #[instrument(skip(self))]
    pub fn rollback(&self, path: &Path, revision: &str) -> ApplicationResult<()> {
        let git = self.settings.git.binary.as_str();
        let path_arg = path.to_string_lossy().into_owned();

        let status = self
            .cmd
            .run_passthrough(git, &["checkout", revision, "--", path_arg.as_str()])
            .map_err(|e| ApplicationError::CheckoutFailed {
                path: path.to_path_buf(),
                revision: revision.to_string(),
                message: e.to_string(),
            })?;
        if !status.success() {
            return Err(ApplicationError::CheckoutFailed {
                path: path.to_path_buf(),
                revision: revision.to_string(),
                message: format!("git exited with {}", status),
            });
        }
        info!("rollback: checked out {} at {}", path.display(), revision);

        let message = render_commit_message(&self.settings.commit_message, path, revision);
        let status = self
            .cmd
            .run_passthrough(git, &["commit", "-m", message.as_str(), "--", path_arg.as_str()])
            .map_err(|e| ApplicationError::CommitFailed {
                path: path.to_path_buf(),
                revision: revision.to_string(),
                message: e.to_string(),
            })?;
        if !status.success() {
            return Err(ApplicationError::CommitFailed {
                path: path.to_path_buf(),
                revision: revision.to_string(),
                message: format!("git exited with {}", status),
            });
        }
        info!("rollback: committed '{}'", message);

        Ok(())
    }
}
