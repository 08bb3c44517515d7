//! Labels command implementation.
//!
//! The `platprobe labels` command lists the closed set of labels each axis
//! can produce, in rule order.

use crate::cli::args::LabelsArgs;
use crate::error::Result;
use crate::probe::Axis;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The labels command implementation.
pub struct LabelsCommand {
    args: LabelsArgs,
}

impl LabelsCommand {
    /// Create a new labels command.
    pub fn new(args: LabelsArgs) -> Self {
        Self { args }
    }
}

impl Command for LabelsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.args.axis {
            Some(axis) => {
                for label in axis.labels() {
                    ui.emit(label)?;
                }
            }
            None => {
                for axis in [Axis::Distro, Axis::Kernel] {
                    ui.emit(&format!("{}: {}", axis, axis.labels().join(" ")))?;
                }
            }
        }

        Ok(CommandResult::success())
    }
}
