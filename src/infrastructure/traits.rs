//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, BufRead};
use std::process::{ExitStatus, Output};

use crate::cli::output;

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments, capturing stdout and stderr.
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output>;

    /// Run a command with stdout and stderr inherited from this process,
    /// so the operator sees the tool's own diagnostics.
    fn run_passthrough(&self, cmd: &str, args: &[&str]) -> io::Result<ExitStatus>;
}

/// Operator-facing terminal abstraction.
pub trait Console: Send + Sync {
    /// Print a plain status line.
    fn info(&self, msg: &str);

    /// Print a success line.
    fn success(&self, msg: &str);

    /// Show `prompt` and read one line of input.
    /// Returns `None` at end of input. The trailing newline is stripped.
    fn ask(&self, prompt: &str) -> io::Result<Option<String>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        std::process::Command::new(cmd).args(args).output()
    }

    fn run_passthrough(&self, cmd: &str, args: &[&str]) -> io::Result<ExitStatus> {
        std::process::Command::new(cmd).args(args).status()
    }
}

/// Real console on stdin/stdout with colored output.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn info(&self, msg: &str) {
        output::info(msg);
    }

    fn success(&self, msg: &str) {
        output::success(msg);
    }


    fn ask(&self, prompt: &str) -> io::Result<Option<String>> {
        output::prompt(prompt);

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // keep the next status line off the prompt line
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
