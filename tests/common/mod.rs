#![allow(dead_code)]

use std::path::Path;

pub use nanoshell_test_utils::{init_tracing, with_timeout};

/// Parse a statistics file body into
/// `(commands_executed, stdout_redirects, stderr_redirects)`.
pub fn parse_stats(contents: &str) -> (u64, u64, u64) {
    let mut fields = [None; 3];
    for line in contents.lines() {
        let (name, value) = line.split_once(": ").expect("malformed stats line");
        let value: u64 = value.parse().expect("stats value is not a number");
        let slot = match name {
            "commands_executed" => 0,
            "stdout_redirects" => 1,
            "stderr_redirects" => 2,
            other => panic!("unexpected stats field {other}"),
        };
        fields[slot] = Some(value);
    }
    (
        fields[0].expect("missing commands_executed"),
        fields[1].expect("missing stdout_redirects"),
        fields[2].expect("missing stderr_redirects"),
    )
}

/// Path as a `&str`, for embedding in command lines.
pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}
