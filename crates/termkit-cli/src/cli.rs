//! CLI definition and command dispatch for termkit.
//!
//! This module defines the command-line interface using `clap` and provides
//! the `run()` function that dispatches commands to `termkit-core`.
//!
//! ## Configuration Precedence
//!
//! 1. CLI flags (`--config`, `--color`, `--verbose`)
//! 2. Environment variables (`TERMKIT_CONFIG`, `TERMKIT_COLOR`, `TERMKIT_VERBOSE`)
//! 3. Config file (`~/.termkit/config.yaml` or path from `--config`)
//! 4. Built-in defaults

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::ui::{ColorMode, MessageType, Style};

use termkit_core::color::terminal_width;
use termkit_core::wrap::MAX_INDENT;
use termkit_core::{wrap_with_width, Console, ConsoleConfig, ConsoleError, MarkupFormatter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Version string including git commit hash
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Exit code for `confirm` when the answer is no.
const EXIT_NO: u8 = 1;

/// Exit code for failures.
const EXIT_ERROR: u8 = 2;

/// termkit – console text wrapping, markup and prompts for shell scripts
#[derive(Parser, Debug)]
#[command(name = "termkit")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, env = "TERMKIT_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file (default: ~/.termkit/config.yaml)
    #[arg(long, global = true, env = "TERMKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Color output mode: always, never, or auto (default: auto)
    #[arg(long, global = true, env = "TERMKIT_COLOR", default_value = "auto")]
    pub color: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Wrap text to the console width
    #[command(after_help = r#"EXAMPLES:
    # Wrap an argument
    termkit wrap "some long sentence ..."

    # Wrap stdin with a 4-space indent
    git log -1 --format=%B | termkit wrap --indent 4
"#)]
    Wrap {
        /// Text to wrap. Read from stdin when omitted.
        text: Option<String>,

        /// Spaces to indent every line with
        #[arg(
            long,
            default_value_t = 0,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(0..=MAX_INDENT as u64)
        )]
        indent: usize,

        /// Total line width (default: wrap_width from config)
        #[arg(long, conflicts_with = "fit")]
        width: Option<usize>,

        /// Use the current terminal width
        #[arg(long)]
        fit: bool,
    },

    /// Render markup (**bold**, __underline__, ##invert##, <fg:red>..</fg>, <bg:blue>..</bg>)
    #[command(after_help = r#"EXAMPLES:
    termkit format "**Done** in <fg:green>3s</fg>"
"#)]
    Format {
        /// Markup text to render
        markup: String,
    },

    /// Ask a yes/no question; exits 0 for yes and 1 for no
    #[command(after_help = r#"EXAMPLES:
    termkit confirm "Delete the build directory?" && rm -rf build/

    # Default to yes on an empty answer
    termkit confirm "Continue?" --default-yes
"#)]
    Confirm {
        /// Question to ask
        prompt: String,

        /// Treat an empty answer as yes
        #[arg(long)]
        default_yes: bool,

        /// Read the answer even when stdin is not a terminal
        #[arg(long)]
        allow_piped: bool,
    },

    /// Ask for a line of input and print it
    #[command(after_help = r#"EXAMPLES:
    NAME=$(termkit prompt "Release name?" --history releases | tail -n 1)
"#)]
    Prompt {
        /// Prompt text
        prompt: String,

        /// History key; enables line editing with history saved under this name
        #[arg(long)]
        history: Option<String>,

        /// Read the answer even when stdin is not a terminal
        #[arg(long)]
        allow_piped: bool,
    },

    /// Show the resolved configuration
    Config {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// Entry point
// ============================================================================

/// Run the CLI.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // Always show warnings; debug info only with --verbose
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = format!("termkit_core={},termkit_cli={}", log_level, log_level);

    tracing_subscriber::fmt()
        .with_env_filter(&filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let flag_mode = ColorMode::from_str(&cli.color);
    if flag_mode.is_none() {
        tracing::warn!("Unknown color mode '{}', using auto", cli.color);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            let style = Style::new(flag_mode.unwrap_or_default());
            let hint = match &cli.config {
                Some(path) => format!("Check your config at {}", path.display()),
                None => "Check your config at ~/.termkit/config.yaml".to_string(),
            };
            eprintln!(
                "{}",
                style.error_with_context(
                    "Failed to load configuration",
                    Some(&e.to_string()),
                    Some(&hint),
                )
            );
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // An explicit --color wins; auto defers to the config file.
    let color_mode = match flag_mode {
        Some(ColorMode::Auto) | None => config.color,
        Some(mode) => mode,
    };
    let style = Style::new(color_mode);
    tracing::debug!(color = %color_mode, "Resolved color mode");

    let result = match cli.command {
        Command::Wrap {
            text,
            indent,
            width,
            fit,
        } => {
            let width = if fit { Some(terminal_width()) } else { width };
            handle_wrap(&config, text, indent, width)
        }
        Command::Format { markup } => handle_format(color_mode, &markup),
        Command::Confirm {
            prompt,
            default_yes,
            allow_piped,
        } => handle_confirm(&config, &prompt, default_yes, allow_piped),
        Command::Prompt {
            prompt,
            history,
            allow_piped,
        } => handle_prompt(&config, &prompt, history.as_deref(), allow_piped),
        Command::Config { json } => handle_config(&style, cli.config.as_deref(), &config, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            report_error(&style, &e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn load_config(cli: &Cli) -> Result<ConsoleConfig, ConsoleError> {
    match &cli.config {
        Some(path) => ConsoleConfig::from_path(path),
        None => ConsoleConfig::load_default(),
    }
}

fn report_error(style: &Style, err: &anyhow::Error) {
    let hint = match err.downcast_ref::<ConsoleError>() {
        Some(ConsoleError::NotInteractive) => {
            Some("Run from a terminal, or pass --allow-piped to read from a pipe")
        }
        Some(ConsoleError::LineEditor(_)) => {
            Some("Set `line_editor: false` in the config to read without history")
        }
        _ => None,
    };

    // Interactive failures leave a prompt on stdout without a line ending.
    if hint.is_some() {
        println!();
    }
    let cause = err.chain().nth(1).map(|c| c.to_string());
    eprintln!(
        "{}",
        style.error_with_context(&err.to_string(), cause.as_deref(), hint)
    );
}

// ============================================================================
// Command handlers
// ============================================================================

fn handle_wrap(
    config: &ConsoleConfig,
    text: Option<String>,
    indent: usize,
    width: Option<usize>,
) -> anyhow::Result<ExitCode> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    let width = width.unwrap_or(config.wrap_width);
    let wrapped = wrap_with_width(&text, indent, width);
    tracing::debug!(indent, width, bytes = wrapped.len(), "Wrapped text");

    print!("{}", wrapped);
    if !wrapped.is_empty() && !wrapped.ends_with('\n') {
        println!();
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_format(color_mode: ColorMode, markup: &str) -> anyhow::Result<ExitCode> {
    let formatter = MarkupFormatter::from_color_mode(color_mode);
    println!("{}", formatter.render(markup));
    Ok(ExitCode::SUCCESS)
}

fn handle_confirm(
    config: &ConsoleConfig,
    prompt: &str,
    default_yes: bool,
    allow_piped: bool,
) -> anyhow::Result<ExitCode> {
    let mut console = Console::stdio(config).require_interactive(!allow_piped);
    let yes = console
        .confirm(prompt, !default_yes)
        .context("Confirmation failed")?;

    tracing::debug!(yes, "Confirmation answered");
    Ok(if yes {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NO)
    })
}

fn handle_prompt(
    config: &ConsoleConfig,
    prompt: &str,
    history: Option<&str>,
    allow_piped: bool,
) -> anyhow::Result<ExitCode> {
    let mut console = Console::stdio(config).require_interactive(!allow_piped);
    let response = console
        .prompt_with_history(prompt, history.unwrap_or_default())
        .context("Prompt failed")?;

    println!();
    println!("{}", response);
    Ok(ExitCode::SUCCESS)
}

fn handle_config(
    style: &Style,
    config_path: Option<&Path>,
    config: &ConsoleConfig,
    json: bool,
) -> anyhow::Result<ExitCode> {
    if json {
        let pretty = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
        println!("{}", pretty);
        return Ok(ExitCode::SUCCESS);
    }

    let source = config_path
        .map(Path::to_path_buf)
        .or_else(ConsoleConfig::default_path);
    match &source {
        Some(path) if path.exists() => println!(
            "{}",
            style.message(MessageType::Info, &format!("Loaded from {}", path.display()))
        ),
        Some(path) => println!(
            "{}",
            style.message(
                MessageType::Info,
                &format!("No config at {}, showing defaults", path.display())
            )
        ),
        None => println!(
            "{}",
            style.message(MessageType::Warn, "No home directory, showing defaults")
        ),
    }
    println!();

    let history_dir = config
        .history_dir()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "-".to_string());

    println!("{}", style.section("CONFIG"));
    println!("{}", style.key_value("wrap_width", &config.wrap_width.to_string()));
    println!("{}", style.key_value("prompt_indent", &config.prompt_indent.to_string()));
    println!("{}", style.key_value("color", &config.color.to_string()));
    println!("{}", style.key_value("line_editor", &config.line_editor.to_string()));
    println!("{}", style.key_value("history_dir", &history_dir));
    Ok(ExitCode::SUCCESS)
}
