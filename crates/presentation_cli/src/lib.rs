//! Weatheryze command-line client
//!
//! Argument parsing, rendering and the console notifier live here so the
//! binary stays a thin wiring layer and the pieces can be tested directly.

pub mod cli;
pub mod notifier;
pub mod render;
pub mod repl;

pub use cli::{Cli, Commands, log_filter_from_verbosity};
pub use notifier::ConsoleNotifier;
pub use render::{render_json, render_text};
pub use repl::{ReplInput, parse_line};
