//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business rule violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Operator input that is not a number in `[1, max]`.
    /// Recovered by re-prompting, never fatal.
    #[error("invalid selection '{input}': expected a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },
}
