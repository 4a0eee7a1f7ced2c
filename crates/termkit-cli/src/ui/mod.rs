//! # CLI UI Module
//!
//! Styling for the CLI's own status and error messages. Respects `NO_COLOR`
//! and the `--color` flag through [`ColorMode`].
//!
//! - `style`: message types, prefixes, and styling functions

pub mod style;

pub use style::{MessageType, Style};
pub use termkit_core::ColorMode;
