//! Kernel command implementation.
//!
//! The `platprobe kernel` command prints the kernel-family label on a
//! single line.

use crate::config::ProbeConfig;
use crate::error::Result;
use crate::probe::detect_kernel_family;
use crate::ui::UserInterface;

use super::dispatcher::{resolve_context, Command, CommandResult};

/// The kernel command implementation.
pub struct KernelCommand {
    config: ProbeConfig,
}

impl KernelCommand {
    /// Create a new kernel command.
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }
}

impl Command for KernelCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = resolve_context(&self.config, ui)?;
        let label = detect_kernel_family(&resolved.context)?;
        ui.emit(label.as_str())?;
        Ok(CommandResult::success())
    }
}
