//! Markup formatter for console text.
//!
//! A small styling language rendered to ANSI escape sequences:
//!
//! | Markup | Effect |
//! |--------|--------|
//! | `**text**` | bold |
//! | `__text__` | underline |
//! | `##text##` | inverse video |
//! | `<fg:red>text</fg>` | foreground color |
//! | `<bg:blue>text</bg>` | background color |
//!
//! Colors: `black`, `red`, `green`, `yellow`, `blue`, `magenta`, `cyan`,
//! `white`, `default`. When colors are disabled the markers are stripped and
//! only the text remains.
//!
//! # Examples
//!
//! ```
//! use termkit_core::markup::MarkupFormatter;
//!
//! let plain = MarkupFormatter::new(false);
//! assert_eq!(plain.render("**Done** in <fg:green>3s</fg>"), "Done in 3s");
//! ```

use std::sync::LazyLock;

use owo_colors::{AnsiColors, OwoColorize};
use regex::{Captures, Regex};

use crate::color::ColorMode;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*\*(.+?)\*\*").expect("Invalid regex"));
static UNDERLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)__(.+?)__").expect("Invalid regex"));
static INVERT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)##(.+?)##").expect("Invalid regex"));
static BG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<bg:(\w+)>(.*?)</bg>").expect("Invalid regex"));
static FG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<fg:(\w+)>(.*?)</fg>").expect("Invalid regex"));

/// Format arguments like [`format!`] and render the result as markup with
/// auto-detected colors.
///
/// ```
/// let text = termkit_core::console_format!("**{}** files", 3);
/// assert!(text.contains("files"));
/// ```
#[macro_export]
macro_rules! console_format {
    ($($arg:tt)*) => {
        $crate::markup::MarkupFormatter::detect().render(&::std::format!($($arg)*))
    };
}

/// Renders markup either to ANSI sequences or to plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupFormatter {
    ansi: bool,
}

impl Default for MarkupFormatter {
    fn default() -> Self {
        Self::detect()
    }
}

impl MarkupFormatter {
    /// Create a formatter that emits ANSI codes when `ansi` is true.
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    /// Create a formatter for an explicit color mode.
    pub fn from_color_mode(mode: ColorMode) -> Self {
        Self::new(mode.is_enabled())
    }

    /// Create a formatter from the environment (`NO_COLOR`, stdout TTY).
    pub fn detect() -> Self {
        Self::from_color_mode(ColorMode::Auto)
    }

    /// Whether ANSI codes are emitted.
    pub fn ansi_enabled(&self) -> bool {
        self.ansi
    }

    /// Render `text`, replacing every markup construct.
    ///
    /// Unbalanced markers and tags naming an unknown color are left as they
    /// are.
    pub fn render(&self, text: &str) -> String {
        let ansi = self.ansi;

        let out = BOLD_RE.replace_all(text, |caps: &Captures| {
            style_or_plain(ansi, &caps[1], |s| s.bold().to_string())
        });
        let out = UNDERLINE_RE.replace_all(&out, |caps: &Captures| {
            style_or_plain(ansi, &caps[1], |s| s.underline().to_string())
        });
        let out = INVERT_RE.replace_all(&out, |caps: &Captures| {
            style_or_plain(ansi, &caps[1], |s| s.reversed().to_string())
        });
        let out = BG_RE.replace_all(&out, |caps: &Captures| match parse_color(&caps[1]) {
            Some(color) => style_or_plain(ansi, &caps[2], |s| s.on_color(color).to_string()),
            None => caps[0].to_string(),
        });
        let out = FG_RE.replace_all(&out, |caps: &Captures| match parse_color(&caps[1]) {
            Some(color) => style_or_plain(ansi, &caps[2], |s| s.color(color).to_string()),
            None => caps[0].to_string(),
        });

        out.into_owned()
    }
}

fn style_or_plain(ansi: bool, text: &str, style: impl FnOnce(&str) -> String) -> String {
    if ansi {
        style(text)
    } else {
        text.to_string()
    }
}

/// Map a markup color name to an ANSI color.
pub fn parse_color(name: &str) -> Option<AnsiColors> {
    match name {
        "black" => Some(AnsiColors::Black),
        "red" => Some(AnsiColors::Red),
        "green" => Some(AnsiColors::Green),
        "yellow" => Some(AnsiColors::Yellow),
        "blue" => Some(AnsiColors::Blue),
        "magenta" => Some(AnsiColors::Magenta),
        "cyan" => Some(AnsiColors::Cyan),
        "white" => Some(AnsiColors::White),
        "default" => Some(AnsiColors::Default),
        _ => None,
    }
}
