//! Signals command implementation.
//!
//! The `platprobe signals` command prints the signals present in the
//! resolved context, one macro name per line.

use crate::config::ProbeConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{resolve_context, Command, CommandResult};

/// The signals command implementation.
pub struct SignalsCommand {
    config: ProbeConfig,
}

impl SignalsCommand {
    /// Create a new signals command.
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }
}

impl Command for SignalsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = resolve_context(&self.config, ui)?;

        for signal in resolved.context.signals() {
            ui.emit(signal.macro_name())?;
        }

        Ok(CommandResult::success())
    }
}
