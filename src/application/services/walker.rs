//! Rollout file discovery

use std::path::Path;
use std::sync::Arc;

use tracing::debug;
use walkdir::WalkDir;

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{is_target_file, RolloutFileSet};

pub struct PathWalker {
    settings: Arc<Settings>,
}

impl PathWalker {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Recursively collect regular files named like the target filename
    /// (case-insensitive), in directory walk order.
    ///
    /// Any unreadable entry aborts the walk; no partial set is returned.
    pub fn find(&self, root: &Path) -> ApplicationResult<RolloutFileSet> {
        debug!(
            "find: root={}, target={}",
            root.display(),
            self.settings.target_filename
        );
        let mut files = Vec::new();

        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| ApplicationError::WalkFailed {
                root: root.to_path_buf(),
                message: e.to_string(),
            })?;

            if entry.file_type().is_file()
                && is_target_file(entry.path(), &self.settings.target_filename)
            {
                files.push(entry.into_path());
            }
        }

        debug!("find: found {} files", files.len());
        Ok(RolloutFileSet::new(files))
    }
}
