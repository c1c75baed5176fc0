//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("the path '{}' does not exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("not a git repository")]
    NotARepository,

    #[error("failed to get the current branch: {message}")]
    BranchUnavailable { message: String },

    #[error("current branch '{0}' is a protected branch")]
    ProtectedBranch(String),

    #[error("failed to retrieve git history for '{}': {message}", .path.display())]
    HistoryUnavailable { path: PathBuf, message: String },

    #[error("failed to checkout '{}' at commit {revision}: {message}", .path.display())]
    CheckoutFailed {
        path: PathBuf,
        revision: String,
        message: String,
    },

    #[error(
        "failed to commit '{}' after checking out commit {revision}: {message} \
         (the file is restored in the working tree but NOT committed)",
        .path.display()
    )]
    CommitFailed {
        path: PathBuf,
        revision: String,
        message: String,
    },

    #[error("failed to walk directory '{}': {message}", .root.display())]
    WalkFailed { root: PathBuf, message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
