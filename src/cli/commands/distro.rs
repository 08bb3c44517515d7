//! Distro command implementation.
//!
//! The `platprobe distro` command prints the distro label on a single line.

use crate::config::ProbeConfig;
use crate::error::Result;
use crate::probe::detect_distro;
use crate::ui::UserInterface;

use super::dispatcher::{resolve_context, Command, CommandResult};

/// The distro command implementation.
pub struct DistroCommand {
    config: ProbeConfig,
}

impl DistroCommand {
    /// Create a new distro command.
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }
}

impl Command for DistroCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = resolve_context(&self.config, ui)?;
        let label = detect_distro(&resolved.context)?;
        ui.emit(label.as_str())?;
        Ok(CommandResult::success())
    }
}
