//! # termkit-core
//!
//! Console output helpers for command-line tools.
//!
//! ## Main Types
//!
//! - [`Console`] – prompts and yes/no confirmation over explicit streams
//! - [`MarkupFormatter`] – renders `**bold**`/`<fg:red>` style markup
//! - [`ConsoleConfig`] – user configuration (`~/.termkit/config.yaml`)
//! - [`ConsoleError`] – error type for the interactive helpers
//!
//! ## Modules
//!
//! - [`wrap`] – soft wrapping that respects UTF-8 and ANSI escape sequences
//! - [`markup`] – markup formatter and the [`console_format!`] macro
//! - [`console`] – prompt and confirm
//! - [`line_editor`] – line editing with persistent history
//! - [`color`] – color mode detection
//! - [`config`] – configuration loading
//! - [`errors`] – error types
//!
//! ## Example
//!
//! ```
//! use termkit_core::{wrap, MarkupFormatter};
//!
//! let text = MarkupFormatter::new(false).render("**Note:** indexes are rebuilt nightly");
//! assert_eq!(wrap(&text, 4), "    Note: indexes are rebuilt nightly");
//! ```

pub mod color;
pub mod config;
pub mod console;
pub mod errors;
pub mod line_editor;
pub mod markup;
pub mod wrap;

pub use color::ColorMode;
pub use config::ConsoleConfig;
pub use console::{Console, StdConsole};
pub use errors::ConsoleError;
pub use line_editor::{LineEditor, ShellLineEditor};
pub use markup::MarkupFormatter;
pub use wrap::{wrap, wrap_with_width, DEFAULT_WRAP_WIDTH};
