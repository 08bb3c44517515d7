//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can also be told to fail stdout
//! writes, to exercise the error path of commands.

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    emitted: Vec<String>,
    details: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    fail_emits: bool,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Make every subsequent `emit` fail as if stdout were closed.
    pub fn set_fail_emits(&mut self, fail: bool) {
        self.fail_emits = fail;
    }

    /// Lines written to stdout.
    pub fn emitted(&self) -> &[String] {
        &self.emitted
    }

    /// Detail messages, captured only when the mode shows them.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn emit(&mut self, line: &str) -> Result<()> {
        if self.fail_emits {
            return Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed").into());
        }
        self.emitted.push(line.to_string());
        Ok(())
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            self.details.push(msg.to_string());
        }
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
