//! Soft wrapping for console text.
//!
//! Wraps text to a fixed width, breaking at spaces, while respecting UTF-8
//! character boundaries and ANSI color escape sequences. Escape sequences
//! (`ESC ... m`) are copied through verbatim and do not count toward the
//! line width, so bold or colored text does not wrap early.
//!
//! # Examples
//!
//! ```
//! use termkit_core::wrap::wrap;
//!
//! assert_eq!(wrap("ab\ncd", 0), "ab\ncd");
//! assert_eq!(wrap("hello", 4), "    hello");
//! ```

/// Default total width used by [`wrap`].
pub const DEFAULT_WRAP_WIDTH: usize = 78;

/// Largest indent applied; larger values are clamped.
pub const MAX_INDENT: usize = u16::MAX as usize;

const ESC: char = '\x1b';

/// Wrap `text` to [`DEFAULT_WRAP_WIDTH`] columns, indenting every line by
/// `indent` spaces.
pub fn wrap(text: &str, indent: usize) -> String {
    wrap_with_width(text, indent, DEFAULT_WRAP_WIDTH)
}

/// Wrap `text` to `width` total columns, indenting every line by `indent`
/// spaces.
///
/// The printable budget per line is `width - indent`, never less than one
/// column. A run of non-space characters longer than the budget is not
/// split. `indent` is clamped to [`MAX_INDENT`].
pub fn wrap_with_width(text: &str, indent: usize, width: usize) -> String {
    let indent = indent.min(MAX_INDENT);
    let budget = effective_width(width, indent);
    let lines = LineBuilder::new(budget).feed(text);

    let prefix = " ".repeat(indent);
    let mut out =
        String::with_capacity(text.len().saturating_add(lines.len().saturating_mul(indent)));
    for line in &lines {
        out.push_str(&prefix);
        out.push_str(line);
    }
    out
}

/// Printable columns available per line.
pub fn effective_width(width: usize, indent: usize) -> usize {
    width.saturating_sub(indent).max(1)
}

/// Accumulates the line currently being built and the lines already done.
struct LineBuilder {
    width: usize,
    line: String,
    /// Printable characters in `line`.
    line_len: usize,
    /// Printable characters since the last break point.
    len_after_break: usize,
    /// Byte offset in `line` just past the last space.
    break_pos: Option<usize>,
    lines: Vec<String>,
}

impl LineBuilder {
    fn new(width: usize) -> Self {
        Self {
            width,
            line: String::new(),
            line_len: 0,
            len_after_break: 0,
            break_pos: None,
            lines: Vec::new(),
        }
    }

    fn feed(mut self, text: &str) -> Vec<String> {
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == ESC {
                self.line.push(c);
                for esc in chars.by_ref() {
                    self.line.push(esc);
                    if esc == 'm' {
                        break;
                    }
                }
                continue;
            }

            self.line.push(c);
            self.line_len += 1;
            self.len_after_break += 1;

            if self.line_len > self.width {
                self.break_line();
            }

            match c {
                ' ' => {
                    self.break_pos = Some(self.line.len());
                    self.len_after_break = 0;
                }
                '\n' => {
                    self.lines.push(std::mem::take(&mut self.line));
                    self.line_len = 0;
                    self.len_after_break = 0;
                    self.break_pos = None;
                }
                _ => {}
            }
        }

        if !self.line.is_empty() {
            self.lines.push(self.line);
        }
        self.lines
    }

    /// Split the current line at the last break point, if there is one.
    ///
    /// After a split the break point sits at offset 0 of the new line, so a
    /// token that overflows again emits an empty line and restarts the count.
    fn break_line(&mut self) {
        let Some(pos) = self.break_pos else {
            return;
        };

        let rest = self.line.split_off(pos);
        let mut head = std::mem::replace(&mut self.line, rest);
        let kept = head.trim_end_matches(' ').len();
        head.truncate(kept);
        head.push('\n');
        self.lines.push(head);

        self.line_len = self.len_after_break;
        self.len_after_break = 0;
        self.break_pos = Some(0);
    }
}
