//! Interactive prompts and confirmations.
//!
//! A [`Console`] owns its input and output streams, so prompts can be driven
//! by in-memory buffers in tests and by the process streams in production
//! ([`Console::stdio`]).
//!
//! # Example
//!
//! ```
//! use termkit_core::Console;
//!
//! let input: &[u8] = b"y\n";
//! let mut console = Console::new(input, Vec::new()).interactive(true);
//! assert!(console.confirm("Delete branch?", true).unwrap());
//! ```

use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use crate::config::ConsoleConfig;
use crate::errors::ConsoleError;
use crate::line_editor::{LineEditor, ShellLineEditor};
use crate::wrap::wrap_with_width;

/// Console bound to the process's stdin and stdout.
pub type StdConsole = Console<StdinLock<'static>, Stdout>;

/// Prompting front end over an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
    interactive: bool,
    require_interactive: bool,
    config: ConsoleConfig,
    line_editor: Option<Box<dyn LineEditor>>,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Bind to stdin/stdout.
    ///
    /// Interactivity is detected from stdin; a [`ShellLineEditor`] is
    /// installed when `config.line_editor` is set.
    pub fn stdio(config: &ConsoleConfig) -> Self {
        let interactive = io::stdin().is_terminal();
        tracing::debug!(interactive, "Binding console to stdio");

        let console = Console::new(io::stdin().lock(), io::stdout())
            .with_config(config)
            .interactive(interactive);

        if config.line_editor {
            console.with_line_editor(ShellLineEditor::new())
        } else {
            console
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over arbitrary streams.
    ///
    /// The input is treated as non-interactive until
    /// [`interactive`](Self::interactive) says otherwise, and no line editor
    /// is installed.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            interactive: false,
            require_interactive: true,
            config: ConsoleConfig::default(),
            line_editor: None,
        }
    }

    /// Declare whether the input stream is an interactive terminal.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Whether prompts refuse to read from a non-interactive input.
    ///
    /// Defaults to `true`.
    pub fn require_interactive(mut self, require: bool) -> Self {
        self.require_interactive = require;
        self
    }

    /// Apply width, indent and history settings.
    pub fn with_config(mut self, config: &ConsoleConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Install a line editor for prompts that carry a history key.
    pub fn with_line_editor(mut self, editor: impl LineEditor + 'static) -> Self {
        self.line_editor = Some(Box::new(editor));
        self
    }

    /// The output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the console, returning its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt for a line of input.
    ///
    /// See [`prompt_with_history`](Self::prompt_with_history).
    pub fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        self.prompt_with_history(text, "")
    }

    /// Prompt for a line of input, recording it under `history_key`.
    ///
    /// Writes two blank lines, then the prompt wrapped at the configured
    /// width and indent. When a history key is given and the line editor is
    /// available, the editor shows the prompt and reads the line; otherwise
    /// the line is read from the input stream. Trailing `\r`/`\n` are
    /// stripped. End of input yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotInteractive`] when interactivity is
    /// required and the input is not a terminal. The prompt text is written
    /// before the error is returned.
    pub fn prompt_with_history(
        &mut self,
        text: &str,
        history_key: &str,
    ) -> Result<String, ConsoleError> {
        self.output.write_all(b"\n\n")?;
        let prompt = wrap_with_width(
            &format!("{} ", text),
            self.config.prompt_indent,
            self.config.wrap_width,
        );

        if self.require_interactive && !self.interactive {
            self.output.write_all(prompt.as_bytes())?;
            self.output.flush()?;
            tracing::debug!("Refusing to prompt, stdin is not interactive");
            return Err(ConsoleError::NotInteractive);
        }

        let history = self.config.history_path(history_key);
        if let (Some(path), Some(editor)) = (history, self.line_editor.as_mut()) {
            if editor.is_available() {
                self.output.flush()?;
                tracing::debug!(history = %path.display(), "Reading through line editor");
                let response = editor.read_line(&prompt, &path)?;
                return Ok(strip_line_ending(&response));
            }
            tracing::debug!("Line editor unavailable, reading input directly");
        }

        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut response = String::new();
        self.input.read_line(&mut response)?;
        Ok(strip_line_ending(&response))
    }

    /// Ask a yes/no question.
    ///
    /// The prompt is suffixed with `[y/N]` when `default_no` is set and
    /// `[Y/n]` otherwise. Answers are trimmed and case-insensitive; an empty
    /// answer selects the default and anything other than `y`/`n` asks again.
    pub fn confirm(&mut self, prompt: &str, default_no: bool) -> Result<bool, ConsoleError> {
        let options = if default_no { "[y/N]" } else { "[Y/n]" };
        let question = format!("{} {}", prompt, options);

        let answer = loop {
            let response = self.prompt(&question)?;
            let answer = response.trim().to_lowercase();
            match answer.as_str() {
                "y" | "n" | "" => break answer,
                _ => tracing::debug!(response = %response, "Unrecognized answer, asking again"),
            }
        };
        self.output.write_all(b"\n")?;
        self.output.flush()?;

        Ok(if default_no {
            answer == "y"
        } else {
            answer != "n"
        })
    }
}

fn strip_line_ending(line: &str) -> String {
    line.trim_end_matches(['\r', '\n']).to_string()
}
