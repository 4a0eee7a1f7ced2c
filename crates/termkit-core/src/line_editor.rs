//! Line editing with persistent history.
//!
//! [`LineEditor`] is the seam the [`Console`](crate::console::Console) uses for
//! prompts that carry a history key. [`ShellLineEditor`] delegates to bash's
//! `read -e`, which provides readline editing and loads/saves history files.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::ConsoleError;

/// Reads one line of user input with editing and history support.
pub trait LineEditor {
    /// Whether the editor can be used on this system.
    fn is_available(&mut self) -> bool;

    /// Show `prompt`, read one line, and record it in the `history` file.
    ///
    /// The returned line may still carry its trailing newline.
    fn read_line(&mut self, prompt: &str, history: &Path) -> Result<String, ConsoleError>;
}

/// Bash program run for each read. `$1` is the prompt, `$2` the history file.
const READ_SCRIPT: &str = concat!(
    r#"history -r "$2" 2> /dev/null;"#,
    r#" read -e -p "$1";"#,
    r#" echo "$REPLY";"#,
    r#" history -s "$REPLY" 2> /dev/null;"#,
    r#" history -w "$2" 2> /dev/null"#,
);

/// Line editor backed by a bash subprocess.
#[derive(Debug, Clone)]
pub struct ShellLineEditor {
    shell: String,
    available: Option<bool>,
}

impl Default for ShellLineEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellLineEditor {
    /// Use `bash` from `PATH`.
    pub fn new() -> Self {
        Self::with_shell("bash")
    }

    /// Use a specific shell binary.
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            available: None,
        }
    }

    /// The shell binary this editor runs.
    pub fn shell(&self) -> &str {
        &self.shell
    }

    fn probe(&self) -> bool {
        let output = Command::new(&self.shell)
            .args(["-c", "echo $BASH"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(out) => out.status.success() && !String::from_utf8_lossy(&out.stdout).trim().is_empty(),
            Err(e) => {
                tracing::debug!(shell = %self.shell, error = %e, "Line editor shell not runnable");
                false
            }
        }
    }
}

impl LineEditor for ShellLineEditor {
    fn is_available(&mut self) -> bool {
        if let Some(available) = self.available {
            return available;
        }
        let available = self.probe();
        tracing::debug!(shell = %self.shell, available, "Probed line editor");
        self.available = Some(available);
        available
    }

    fn read_line(&mut self, prompt: &str, history: &Path) -> Result<String, ConsoleError> {
        if let Some(parent) = history.parent() {
            fs::create_dir_all(parent)?;
        }

        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(READ_SCRIPT)
            .arg("termkit")
            .arg(prompt)
            .arg(history)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .stdout(Stdio::piped())
            .output()
            .map_err(|e| ConsoleError::LineEditor(format!("failed to run {}: {}", self.shell, e)))?;

        if !output.status.success() {
            tracing::debug!(status = %output.status, "Line editor exited with non-zero status");
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_shell_unavailable() {
        let mut editor = ShellLineEditor::with_shell("/nonexistent/termkit-shell");
        assert!(!editor.is_available());
        // Cached result.
        assert_eq!(editor.available, Some(false));
        assert!(!editor.is_available());
    }

    #[test]
    fn test_missing_shell_read_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut editor = ShellLineEditor::with_shell("/nonexistent/termkit-shell");
        let err = editor
            .read_line("> ", &temp.path().join("history"))
            .unwrap_err();
        assert!(matches!(err, ConsoleError::LineEditor(_)));
    }

    #[test]
    fn test_default_uses_bash() {
        assert_eq!(ShellLineEditor::default().shell(), "bash");
    }

    #[test]
    fn test_script_references_positional_args() {
        assert!(READ_SCRIPT.contains(r#"read -e -p "$1""#));
        assert!(READ_SCRIPT.contains(r#"history -w "$2""#));
    }

    #[test]
    #[ignore] // Requires bash and an interactive terminal
    fn test_bash_read_line() {
        let temp = tempfile::TempDir::new().unwrap();
        let history = temp.path().join("nested").join("history");
        let mut editor = ShellLineEditor::new();
        assert!(editor.is_available());
        let line = editor.read_line("type something: ", &history).unwrap();
        assert!(line.ends_with('\n'));
        assert!(history.exists());
    }
}
