//! Shared test utilities for termkit-cli integration tests.

use std::path::Path;

use assert_cmd::Command;

/// Get a Command for the termkit binary.
///
/// # Panics
///
/// Panics if the termkit binary cannot be found. This should not happen
/// in a properly configured test environment.
#[allow(deprecated)]
pub fn termkit_cmd() -> Command {
    Command::cargo_bin("termkit").expect("termkit binary should exist")
}

/// A termkit Command with `HOME` pointed at `home` and termkit env vars
/// cleared, so the user's own config and history never leak into a test.
pub fn isolated_cmd(home: &Path) -> Command {
    let mut cmd = termkit_cmd();
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("TERMKIT_CONFIG")
        .env_remove("TERMKIT_COLOR")
        .env_remove("TERMKIT_VERBOSE");
    cmd
}
