// tests/redirect_detection.rs

use nanoshell::line::{apply_redirect, detect_redirect, tokenize, RedirectError};
use nanoshell::state::Counters;
use nanoshell::types::{RedirectMode, Stream};

#[test]
fn every_operator_is_detected_and_cut_out() {
    for mode in RedirectMode::ALL {
        let line = format!("ls -l {} out.txt", mode.operator());
        let mut tokens = tokenize(&line).unwrap();

        let spec = detect_redirect(&mut tokens).unwrap().unwrap();
        assert_eq!(spec.mode, mode);
        assert_eq!(spec.target, "out.txt");
        assert_eq!(tokens.as_slice(), &["ls", "-l"]);
    }
}

#[test]
fn operator_mode_properties() {
    assert_eq!(RedirectMode::StdoutAppend.stream(), Stream::Stdout);
    assert_eq!(RedirectMode::StderrTruncate.stream(), Stream::Stderr);
    assert!(RedirectMode::StderrAppend.appends());
    assert!(!RedirectMode::StdoutTruncate.appends());
    assert_eq!("2>>".parse::<RedirectMode>(), Ok(RedirectMode::StderrAppend));
    assert!("3>".parse::<RedirectMode>().is_err());
}

#[test]
fn only_the_first_operator_counts() {
    let mut tokens = tokenize("cmd > a.txt 2> b.txt").unwrap();
    let spec = detect_redirect(&mut tokens).unwrap().unwrap();
    assert_eq!(spec.mode, RedirectMode::StdoutTruncate);
    assert_eq!(spec.target, "a.txt");
    assert_eq!(tokens.as_slice(), &["cmd"]);
}

#[test]
fn operators_glued_to_words_are_plain_arguments() {
    let mut tokens = tokenize("echo a>b 2>c").unwrap();
    assert_eq!(detect_redirect(&mut tokens).unwrap(), None);
    assert_eq!(tokens.as_slice(), &["echo", "a>b", "2>c"]);
}

#[test]
fn missing_target_and_missing_program_are_errors() {
    let mut tokens = tokenize("ls >").unwrap();
    assert_eq!(
        detect_redirect(&mut tokens),
        Err(RedirectError::MissingTarget {
            operator: RedirectMode::StdoutTruncate
        })
    );

    let mut tokens = tokenize("2> err.txt").unwrap();
    assert_eq!(
        detect_redirect(&mut tokens),
        Err(RedirectError::MissingProgram {
            operator: RedirectMode::StderrTruncate
        })
    );
}

#[test]
fn counters_follow_the_detected_stream() {
    let counters = Counters::new(0);

    for line in ["ls", "ls > a", "ls >> a", "ls 2> b", "ls x 2>> b", "ls >"] {
        let mut tokens = tokenize(line).unwrap();
        let _ = apply_redirect(&mut tokens, &counters);
    }

    let snapshot = counters.snapshot();
    assert_eq!(snapshot.total_executed, 5);
    assert_eq!(snapshot.stdout_redirects, 2);
    assert_eq!(snapshot.stderr_redirects, 2);
}

#[test]
fn threshold_is_only_reached_when_bounded() {
    let unbounded = Counters::new(0);
    for _ in 0..10 {
        unbounded.record_command(None);
    }
    assert!(!unbounded.threshold_reached());

    let bounded = Counters::new(2);
    bounded.record_command(None);
    assert!(!bounded.threshold_reached());
    bounded.record_command(Some(RedirectMode::StdoutAppend));
    assert!(bounded.threshold_reached());
    assert_eq!(bounded.max_commands(), 2);
}
