//! # termkit CLI
//!
//! Command-line front end for `termkit-core`: wrap text, render markup,
//! and ask prompts from shell scripts.
//! Run `termkit --help` for usage information.

mod cli;
pub mod ui;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run()
}
