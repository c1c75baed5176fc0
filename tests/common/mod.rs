//! Shared test doubles for the service tests

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};

use rollback::config::Settings;
use rollback::infrastructure::di::ServiceContainer;
use rollback::infrastructure::traits::{CommandRunner, Console};

/// Canned answer for one git subcommand.
#[derive(Debug, Clone)]
pub struct Reply {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl Reply {
    pub fn ok(stdout: &str) -> Self {
        Self {
            code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn fail(code: i32, stderr: &str) -> Self {
        Self {
            code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

pub fn exit_status(code: i32) -> ExitStatus {
    ExitStatus::from_raw(code << 8)
}

/// Command runner answering by git subcommand (`rev-parse`, `log`, ...).
///
/// Unknown subcommands fail to spawn, like a missing binary.
#[derive(Default)]
pub struct MockRunner {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, subcommand: &str, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(subcommand.to_string(), reply);
        self
    }

    /// A repository on `branch` with the given `git log` output,
    /// where checkout and commit succeed.
    pub fn repo(branch: &str, log: &str) -> Self {
        Self::new()
            .reply("rev-parse", Reply::ok("true\n"))
            .reply("branch", Reply::ok(&format!("{branch}\n")))
            .reply("log", Reply::ok(log))
            .reply("checkout", Reply::ok(""))
            .reply("commit", Reply::ok(""))
    }

    /// Every call as `[cmd, args...]`.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls whose first argument is `subcommand`.
    pub fn calls_to(&self, subcommand: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|c| c.get(1).map(String::as_str) == Some(subcommand))
            .collect()
    }

    fn answer(&self, cmd: &str, args: &[&str]) -> io::Result<Reply> {
        let mut call = vec![cmd.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.lock().unwrap().push(call);

        let key = args.first().copied().unwrap_or_default();
        self.replies
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no reply for {key}")))
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        let reply = self.answer(cmd, args)?;
        Ok(Output {
            status: exit_status(reply.code),
            stdout: reply.stdout.into_bytes(),
            stderr: reply.stderr.into_bytes(),
        })
    }

    fn run_passthrough(&self, cmd: &str, args: &[&str]) -> io::Result<ExitStatus> {
        let reply = self.answer(cmd, args)?;
        Ok(exit_status(reply.code))
    }
}

/// Console with scripted answers; records everything shown.
///
/// Once the answers run out, `ask` reports end of input.
#[derive(Default)]
pub struct MockConsole {
    answers: Mutex<VecDeque<String>>,
    pub lines: Mutex<Vec<String>>,
    pub prompts: Mutex<Vec<String>>,
}

impl MockConsole {
    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Lines telling the operator their input was rejected.
    pub fn rejections(&self) -> usize {
        self.lines()
            .iter()
            .filter(|l| l.as_str() == "Invalid number. Please try again.")
            .count()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn output(&self) -> String {
        self.lines().join("\n")
    }
}

impl Console for MockConsole {
    fn info(&self, msg: &str) {
        self.lines.lock().unwrap().push(msg.to_string());
    }

    fn success(&self, msg: &str) {
        self.lines.lock().unwrap().push(msg.to_string());
    }

    fn ask(&self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.answers.lock().unwrap().pop_front())
    }
}

pub fn container(
    settings: Settings,
    runner: &Arc<MockRunner>,
    console: &Arc<MockConsole>,
) -> ServiceContainer {
    ServiceContainer::with_deps(settings, runner.clone(), console.clone())
}

pub const TWO_ENTRY_LOG: &str =
    "abc123, Alice, 2024-01-01 10:00:00, fix config\nabc000, Bob, 2023-12-31 09:00:00, initial";
