//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (CommandRunner, Console)
//! but are themselves concrete structs, not traits.

use std::process::Output;

mod dispatcher;
mod executor;
mod guard;
mod history;
mod selector;
mod walker;

pub use dispatcher::CommandDispatcher;
pub use executor::RollbackExecutor;
pub use guard::RepositoryGuard;
pub use history::HistoryReader;
pub use selector::RevisionSelector;
pub use walker::PathWalker;

/// Best description of a failed captured command: its stderr, else its status.
fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("git exited with {}", output.status)
    } else {
        stderr.to_string()
    }
}
