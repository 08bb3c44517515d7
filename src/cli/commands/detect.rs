//! Detect command implementation.
//!
//! The `platprobe detect` command classifies both axes at once. Text output
//! is one `axis=label` line per axis; `--json` adds the signals and the
//! context source.

use serde::Serialize;

use crate::cli::args::DetectArgs;
use crate::config::{ContextSource, ProbeConfig};
use crate::error::Result;
use crate::probe::{detect_all, PlatformReport};
use crate::ui::UserInterface;

use super::dispatcher::{resolve_context, Command, CommandResult};

/// The detect command implementation.
pub struct DetectCommand {
    config: ProbeConfig,
    args: DetectArgs,
}

#[derive(Serialize)]
struct DetectOutput<'a> {
    #[serde(flatten)]
    report: &'a PlatformReport,
    source: &'a ContextSource,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(config: ProbeConfig, args: DetectArgs) -> Self {
        Self { config, args }
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = resolve_context(&self.config, ui)?;
        let report = detect_all(&resolved.context)?;

        if self.args.json {
            let output = DetectOutput {
                report: &report,
                source: &resolved.source,
            };
            let json = serde_json::to_string_pretty(&output).map_err(anyhow::Error::from)?;
            ui.emit(&json)?;
        } else {
            ui.emit(&format!("distro={}", report.distro))?;
            ui.emit(&format!("kernel={}", report.kernel))?;
        }

        Ok(CommandResult::success())
    }
}
