// tests/process_launcher.rs
//
// Runs real child processes; needs `echo` and `sh` on PATH.

mod common;
use crate::common::{init_tracing, path_str, with_timeout};

use std::error::Error;
use std::path::Path;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc;

use nanoshell::engine::{LoopExit, Shell};
use nanoshell::exec::{
    open_redirect, CommandOutcome, LaunchRequest, Launcher, OpenedRedirect, ProcessLauncher,
};
use nanoshell::line::RedirectSpec;
use nanoshell::state::ShellState;
use nanoshell::types::RedirectMode;
use nanoshell_test_utils::{ScriptedSource, SharedBuffer};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn exit_statuses_are_reported() -> TestResult {
    init_tracing();
    let mut launcher = ProcessLauncher;

    let ok = launcher
        .launch(LaunchRequest {
            program: "sh",
            args: &["-c", "exit 0"],
            redirect: None,
        })
        .await?;
    assert_eq!(ok, CommandOutcome::Success);

    let failed = launcher
        .launch(LaunchRequest {
            program: "sh",
            args: &["-c", "exit 3"],
            redirect: None,
        })
        .await?;
    assert_eq!(failed, CommandOutcome::Failed(3));
    assert_eq!(failed.exit_code(), 3);

    let killed = launcher
        .launch(LaunchRequest {
            program: "sh",
            args: &["-c", "kill -TERM $$"],
            redirect: None,
        })
        .await?;
    assert_eq!(killed, CommandOutcome::Failed(128 + 15));
    Ok(())
}

#[tokio::test]
async fn missing_program_is_an_exec_failure() -> TestResult {
    init_tracing();

    let outcome = ProcessLauncher
        .launch(LaunchRequest {
            program: "nanoshell-no-such-program",
            args: &[],
            redirect: None,
        })
        .await?;

    assert!(matches!(outcome, CommandOutcome::ExecFailed { .. }));
    assert_eq!(outcome.exit_code(), 4);
    Ok(())
}

#[tokio::test]
async fn non_executable_file_is_an_exec_failure() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let script = dir.path().join("not-executable.sh");
    std::fs::write(&script, "#!/bin/sh\necho hi\n")?;

    let outcome = ProcessLauncher
        .launch(LaunchRequest {
            program: path_str(&script),
            args: &[],
            redirect: None,
        })
        .await?;

    assert!(matches!(outcome, CommandOutcome::ExecFailed { .. }));
    Ok(())
}

#[tokio::test]
async fn bad_program_paths_and_arguments_fail_only_the_command() -> TestResult {
    init_tracing();

    let long_name = "a".repeat(300);
    let cases: [(&str, &[&str]); 4] = [
        ("/etc/passwd/x", &[]),
        (&long_name, &[]),
        ("echo", &["a\0b"]),
        ("nanoshell-no-such-dir/prog", &[]),
    ];

    let mut launcher = ProcessLauncher;
    for (program, args) in cases {
        let outcome = launcher
            .launch(LaunchRequest {
                program,
                args,
                redirect: None,
            })
            .await?;
        assert!(
            matches!(outcome, CommandOutcome::ExecFailed { .. }),
            "{program:?} gave {outcome:?}"
        );
    }
    Ok(())
}

#[tokio::test]
async fn loop_keeps_going_after_an_unrunnable_program() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let out = dir.path().join("after.txt");

    let source = ScriptedSource::new([
        "/etc/passwd/x".to_string(),
        "a".repeat(300),
        format!("echo after > {}", path_str(&out)),
    ]);
    let state = Arc::new(ShellState::new(0, Local::now()));
    let output = SharedBuffer::new();
    let (_shutdown_tx, shutdown_rx) = mpsc::channel(1);

    let mut shell = Shell::new(
        Arc::clone(&state),
        source,
        ProcessLauncher,
        output.clone(),
        shutdown_rx,
    );
    let exit = with_timeout(shell.run()).await?;

    assert_eq!(exit, LoopExit::EndOfInput);
    assert_eq!(std::fs::read_to_string(&out)?, "after\n");
    assert_eq!(state.counters.total_executed(), 3);

    let lines = output.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[ERROR] Error executing '/etc/passwd/x': "));
    assert!(lines[1].starts_with(&format!("[ERROR] Error executing '{}': ", "a".repeat(300))));
    Ok(())
}

fn redirect_to(mode: RedirectMode, target: &Path) -> std::io::Result<Option<OpenedRedirect>> {
    let spec = RedirectSpec {
        mode,
        target: path_str(target),
    };
    open_redirect(&spec).map(Some)
}

#[tokio::test]
async fn stdout_and_stderr_redirects_truncate_and_append() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out.txt");
    let err = dir.path().join("err.txt");
    std::fs::write(&out, "stale contents\n")?;

    let mut launcher = ProcessLauncher;

    launcher
        .launch(LaunchRequest {
            program: "echo",
            args: &["first"],
            redirect: redirect_to(RedirectMode::StdoutTruncate, &out)?,
        })
        .await?;
    launcher
        .launch(LaunchRequest {
            program: "echo",
            args: &["second"],
            redirect: redirect_to(RedirectMode::StdoutAppend, &out)?,
        })
        .await?;
    assert_eq!(std::fs::read_to_string(&out)?, "first\nsecond\n");

    launcher
        .launch(LaunchRequest {
            program: "sh",
            args: &["-c", "echo oops >&2"],
            redirect: redirect_to(RedirectMode::StderrTruncate, &err)?,
        })
        .await?;
    launcher
        .launch(LaunchRequest {
            program: "sh",
            args: &["-c", "echo again >&2"],
            redirect: redirect_to(RedirectMode::StderrAppend, &err)?,
        })
        .await?;
    assert_eq!(std::fs::read_to_string(&err)?, "oops\nagain\n");
    Ok(())
}

#[tokio::test]
async fn echo_into_a_file_then_bye() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out.txt");

    let source = ScriptedSource::new([
        format!("echo hi > {}", path_str(&out)),
        "bye".to_string(),
        "echo never".to_string(),
    ]);
    let reads = source.reads();
    let state = Arc::new(ShellState::new(0, Local::now()));
    let output = SharedBuffer::new();
    let (_shutdown_tx, shutdown_rx) = mpsc::channel(1);

    let mut shell = Shell::new(
        Arc::clone(&state),
        source,
        ProcessLauncher,
        output.clone(),
        shutdown_rx,
    );
    let exit = with_timeout(shell.run()).await?;

    assert_eq!(exit, LoopExit::Bye);
    assert_eq!(std::fs::read_to_string(&out)?, "hi\n");
    assert_eq!(reads.load(Ordering::SeqCst), 2);
    assert_eq!(
        output.lines(),
        vec!["[INFO] bye command detected. Terminating nanoShell"]
    );

    let snapshot = state.counters.snapshot();
    assert_eq!(snapshot.total_executed, 1);
    assert_eq!(snapshot.stdout_redirects, 1);
    Ok(())
}
