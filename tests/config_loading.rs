// tests/config_loading.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use nanoshell::cli::CliArgs;
use nanoshell::config::loader::resolve;
use nanoshell::config::{load_config, load_from_path, validate_max_commands, RawConfigFile, ShellConfig};
use nanoshell::errors::ShellError;
use nanoshell::fs::mock::MockFileSystem;

type TestResult = Result<(), Box<dyn Error>>;

fn args(argv: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(std::iter::once("nanoshell").chain(argv.iter().copied()))
        .expect("arguments should parse")
}

#[test]
fn defaults_without_flags_or_file() -> TestResult {
    let cfg = load_config(&MockFileSystem::new(), &args(&[]))?;
    assert_eq!(cfg, ShellConfig::default());
    assert_eq!(cfg.prompt, "nanoShell$ ");
    assert_eq!(cfg.max_commands, 0);
    assert_eq!(cfg.stats_prefix, "nanoShell_status");
    assert_eq!(cfg.stats_dir, PathBuf::from("."));
    assert!(!cfg.signal_file);
    assert_eq!(cfg.batch_file, None);
    Ok(())
}

#[test]
fn short_and_long_flags_are_parsed() {
    let a = args(&["-m", "5", "-f", "cmds.txt", "-s"]);
    assert_eq!(a.max, Some(5));
    assert_eq!(a.file, Some(PathBuf::from("cmds.txt")));
    assert!(a.signalfile);

    let a = args(&["--max", "-2", "--config", "shell.toml", "--log-level", "debug"]);
    assert_eq!(a.max, Some(-2));
    assert_eq!(a.config, Some(PathBuf::from("shell.toml")));
    assert!(a.log_level.is_some());
}

#[test]
fn non_positive_max_is_an_invalid_threshold() {
    for bad in ["0", "-1"] {
        let err = load_config(&MockFileSystem::new(), &args(&["-m", bad])).unwrap_err();
        assert!(matches!(err, ShellError::InvalidThreshold(_)), "got {err:?}");
        assert_eq!(err.exit_code(), 8);
    }
    assert_eq!(validate_max_commands(1).unwrap(), 1);
}

#[test]
fn non_numeric_max_is_rejected_by_the_parser() {
    assert!(CliArgs::try_parse_from(["nanoshell", "-m", "ten"]).is_err());
}

#[test]
fn toml_file_fills_in_values() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file(
        "shell.toml",
        r#"
[shell]
prompt = "> "
max_commands = 4
stats_prefix = "stats"
stats_dir = "/var/tmp"
signal_file = true
"#,
    );

    let cfg = load_config(&fs, &args(&["--config", "shell.toml"]))?;
    assert_eq!(cfg.prompt, "> ");
    assert_eq!(cfg.max_commands, 4);
    assert_eq!(cfg.stats_prefix, "stats");
    assert_eq!(cfg.stats_dir, PathBuf::from("/var/tmp"));
    assert!(cfg.signal_file);
    Ok(())
}

#[test]
fn command_line_beats_the_file() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("shell.toml", "[shell]\nmax_commands = 4\nprompt = \"$ \"\n");

    let cfg = load_config(&fs, &args(&["--config", "shell.toml", "-m", "2", "-f", "batch.txt"]))?;
    assert_eq!(cfg.max_commands, 2);
    assert_eq!(cfg.prompt, "$ ");
    assert_eq!(cfg.batch_file, Some(PathBuf::from("batch.txt")));
    Ok(())
}

#[test]
fn empty_file_and_empty_section_mean_defaults() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("empty.toml", "");
    fs.add_file("section.toml", "[shell]\n");

    for path in ["empty.toml", "section.toml"] {
        let raw = load_from_path(&fs, path)?;
        assert_eq!(ShellConfig::try_from(raw)?, ShellConfig::default());
    }
    Ok(())
}

#[test]
fn bad_files_are_config_errors() {
    let fs = MockFileSystem::new();
    fs.add_file("typo.toml", "[shell]\nmax_comands = 3\n");
    fs.add_file("broken.toml", "[shell\n");
    fs.add_file("negative.toml", "[shell]\nmax_commands = -5\n");
    fs.add_file("prefix.toml", "[shell]\nstats_prefix = \"\"\n");

    let err = load_config(&fs, &args(&["--config", "typo.toml"])).unwrap_err();
    assert!(matches!(err, ShellError::TomlError(_)));
    assert_eq!(err.exit_code(), 9);

    let err = load_config(&fs, &args(&["--config", "broken.toml"])).unwrap_err();
    assert!(matches!(err, ShellError::TomlError(_)));

    let err = load_config(&fs, &args(&["--config", "negative.toml"])).unwrap_err();
    assert!(matches!(err, ShellError::InvalidThreshold(-5)));

    let err = load_config(&fs, &args(&["--config", "prefix.toml"])).unwrap_err();
    assert!(matches!(err, ShellError::ConfigFailure(_)));
    assert_eq!(err.exit_code(), 9);
}

#[test]
fn missing_config_file_is_an_io_failure() {
    let err = load_config(&MockFileSystem::new(), &args(&["--config", "nope.toml"])).unwrap_err();
    assert!(matches!(err, ShellError::IoFailure { .. }));
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn signalfile_flag_overrides_the_file() -> TestResult {
    let mut raw = RawConfigFile::default();
    raw.shell.signal_file = Some(false);

    let cfg = resolve(raw, &args(&["-s"]))?;
    assert!(cfg.signal_file);
    Ok(())
}
