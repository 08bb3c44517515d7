//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real runs
//! - [`MockUI`] for capturing output in tests
//!
//! Probe results are written to stdout through [`UserInterface::emit`] and
//! are never suppressed. Everything else goes to stderr so that a build
//! system capturing stdout sees only the label.
//!
//! # Example
//!
//! ```
//! use platprobe::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.emit("freebsd").unwrap();
//! assert_eq!(ui.emitted(), &["freebsd".to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ProbeTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Write one line of probe output to stdout.
    ///
    /// Fails when stdout cannot be written.
    fn emit(&mut self, line: &str) -> Result<()>;

    /// Display an informational message (verbose mode only).
    fn detail(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);
}
