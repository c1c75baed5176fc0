//! Domain entities: core data structures

use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// Maximum number of history entries fetched and offered per file.
pub const HISTORY_LIMIT: usize = 10;

/// Branches on which a rollback commit is never allowed.
pub const BUILTIN_PROTECTED_BRANCHES: [&str; 3] = ["master", "develop", "main"];

/// One line of `git log` output for a rollout file.
///
/// The line has the shape `<short hash>, <author>, <date>, <subject>`.
/// The subject is free text and may contain further commas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The line as printed by git, shown verbatim in the menu
    pub raw: String,
    /// Abbreviated commit hash (text before the first comma)
    pub revision: String,
    pub author: String,
    pub date: String,
    pub subject: String,
}

impl HistoryEntry {
    /// Parse a single log line. Returns `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let raw = line.trim_end_matches(['\r', '\n']);
        if raw.trim().is_empty() {
            return None;
        }

        let mut parts = raw.splitn(4, ',').map(str::trim);
        let revision = parts.next().unwrap_or_default().to_string();
        let author = parts.next().unwrap_or_default().to_string();
        let date = parts.next().unwrap_or_default().to_string();
        let subject = parts.next().unwrap_or_default().to_string();

        Some(Self {
            raw: raw.to_string(),
            revision,
            author,
            date,
            subject,
        })
    }

    /// Parse the full output of the log query, newest first, capped at [`HISTORY_LIMIT`].
    pub fn parse_log(output: &str) -> Vec<Self> {
        output
            .lines()
            .filter_map(Self::parse)
            .take(HISTORY_LIMIT)
            .collect()
    }
}

/// Format one menu line; `index` is 1-based.
///
/// Single digit indices get a leading space so they right-align with `10.`.
pub fn format_history_line(index: usize, entry: &HistoryEntry) -> String {
    format!("{:>2}. {}", index, entry.raw)
}

/// Index offered when the operator just presses enter:
/// the revision before the most recent one, if there is one.
pub fn default_selection(len: usize) -> usize {
    len.min(2)
}

/// Interpret operator input as a 1-based index into a history of `len` entries.
///
/// Empty input selects [`default_selection`].
pub fn parse_selection(input: &str, len: usize) -> Result<usize, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default_selection(len));
    }

    match trimmed.parse::<usize>() {
        Ok(index) if (1..=len).contains(&index) => Ok(index),
        _ => Err(DomainError::InvalidSelection {
            input: trimmed.to_string(),
            max: len,
        }),
    }
}

/// What the operator chose from the history menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Index 1: the file already is at this revision
    Current,
    /// An older revision to roll back to
    Revision { index: usize, revision: String },
}

impl Selection {
    /// Build a selection from a validated 1-based index.
    pub fn from_index(entries: &[HistoryEntry], index: usize) -> Self {
        match index.checked_sub(1).and_then(|i| entries.get(i)) {
            Some(entry) if index > 1 => Selection::Revision {
                index,
                revision: entry.revision.clone(),
            },
            _ => Selection::Current,
        }
    }
}

/// Rollout files discovered under a directory, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolloutFileSet {
    files: Vec<PathBuf>,
}

impl RolloutFileSet {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.files
    }
}

impl IntoIterator for RolloutFileSet {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

impl<'a> IntoIterator for &'a RolloutFileSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Whether the final component of `path` equals `target`, ignoring ASCII case.
pub fn is_target_file(path: &Path, target: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case(target))
}

/// Whether `branch` may not receive rollback commits.
///
/// The built-in set always applies; `extra` can only add to it.
pub fn is_protected_branch(branch: &str, extra: &[String]) -> bool {
    BUILTIN_PROTECTED_BRANCHES.contains(&branch) || extra.iter().any(|b| b == branch)
}

/// Substitute `{path}` and `{revision}` in a commit message template.
pub fn render_commit_message(template: &str, path: &Path, revision: &str) -> String {
    template
        .replace("{path}", &path.display().to_string())
        .replace("{revision}", revision)
}

/// Result of processing a single rollout file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackOutcome {
    /// Operator picked the current revision; nothing was touched
    Unchanged,
    /// File was checked out at `revision` and committed
    RolledBack { revision: String },
}

/// Result of a whole invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Path is a file, but not a rollout file
    NotApplicable,
    /// Directory contains no rollout files
    NoFilesFound,
    /// Operator declined to process the discovered files
    Aborted,
    /// Every file was processed
    Completed(Vec<(PathBuf, RollbackOutcome)>),
}

/// Expand `~`, `$VAR` and `${VAR}`; falls back to the input on lookup failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
