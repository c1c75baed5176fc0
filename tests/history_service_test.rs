//! Tests for HistoryReader

mod common;

use std::path::Path;
use std::sync::Arc;

use common::{container, MockConsole, MockRunner, Reply, TWO_ENTRY_LOG};
use rollback::application::ApplicationError;
use rollback::config::Settings;
use rollback::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_log_output_when_read_then_returns_entries_newest_first() {
    // Arrange
    let runner = Arc::new(MockRunner::repo("feature", TWO_ENTRY_LOG));
    let console = Arc::new(MockConsole::default());
    let services = container(Settings::default(), &runner, &console);

    // Act
    let entries = services
        .history_reader()
        .read(Path::new("svc/rollout.yaml"))
        .unwrap();

    // Assert
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].revision, "abc123");
    assert_eq!(entries[0].author, "Alice");
    assert_eq!(entries[1].revision, "abc000");
    assert_eq!(entries[1].subject, "initial");
}

#[test]
fn given_path_when_read_then_queries_log_limited_to_ten() {
    let runner = Arc::new(MockRunner::repo("feature", TWO_ENTRY_LOG));
    let console = Arc::new(MockConsole::default());
    let services = container(Settings::default(), &runner, &console);

    services
        .history_reader()
        .read(Path::new("svc/rollout.yaml"))
        .unwrap();

    let calls = runner.calls_to("log");
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        vec![
            "git",
            "log",
            "--pretty=format:%h, %an, %ad, %s",
            "--date=format:%Y-%m-%d %H:%M:%S",
            "-n",
            "10",
            "--",
            "svc/rollout.yaml",
        ]
    );
}

#[test]
fn given_entries_when_read_then_prints_numbered_menu() {
    let log = (0..10)
        .map(|i| format!("r{i}, Dev, 2024-01-01 10:00:00, change {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let runner = Arc::new(MockRunner::repo("feature", &log));
    let console = Arc::new(MockConsole::default());
    let services = container(Settings::default(), &runner, &console);

    services.history_reader().read(Path::new("rollout.yaml")).unwrap();

    let lines = console.lines();
    assert_eq!(lines[0], "\nGit history for 'rollout.yaml':");
    assert_eq!(lines[1], " 1. r0, Dev, 2024-01-01 10:00:00, change 0");
    assert_eq!(lines[10], "10. r9, Dev, 2024-01-01 10:00:00, change 9");
}

#[test]
fn given_git_log_fails_when_read_then_history_unavailable() {
    let runner = Arc::new(
        MockRunner::repo("feature", "")
            .reply("log", Reply::fail(128, "fatal: bad revision")),
    );
    let console = Arc::new(MockConsole::default());
    let services = container(Settings::default(), &runner, &console);

    let result = services.history_reader().read(Path::new("rollout.yaml"));

    match result {
        Err(ApplicationError::HistoryUnavailable { message, .. }) => {
            assert!(message.contains("bad revision"))
        }
        other => panic!("expected HistoryUnavailable, got {other:?}"),
    }
    assert!(console.lines().is_empty(), "nothing printed on failure");
}

#[test]
fn given_untracked_file_when_read_then_history_unavailable() {
    let runner = Arc::new(MockRunner::repo("feature", "\n"));
    let console = Arc::new(MockConsole::default());
    let services = container(Settings::default(), &runner, &console);

    let result = services.history_reader().fetch(Path::new("rollout.yaml"));

    assert!(matches!(
        result,
        Err(ApplicationError::HistoryUnavailable { .. })
    ));
}
