//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{should_use_colors, OutputMode, ProbeTheme, UserInterface};

/// Terminal UI implementation.
///
/// Probe output goes to stdout unstyled; diagnostics go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ProbeTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            ProbeTheme::new()
        } else {
            ProbeTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn emit(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.err, "{}", self.theme.format_detail(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_warnings() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the UI for the given mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
