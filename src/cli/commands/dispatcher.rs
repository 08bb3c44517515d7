//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, DetectArgs};
use crate::config::{ProbeConfig, ResolvedContext};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: ProbeConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher probing the context `config` describes.
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Distro) => {
                let cmd = super::distro::DistroCommand::new(self.config.clone());
                cmd.execute(ui)
            }
            Some(Commands::Kernel) => {
                let cmd = super::kernel::KernelCommand::new(self.config.clone());
                cmd.execute(ui)
            }
            Some(Commands::Detect(args)) => {
                let cmd = super::detect::DetectCommand::new(self.config.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Labels(args)) => {
                let cmd = super::labels::LabelsCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Signals) => {
                let cmd = super::signals::SignalsCommand::new(self.config.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to detect with default args
                let cmd =
                    super::detect::DetectCommand::new(self.config.clone(), DetectArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

/// Resolve the context a probe command runs against, reporting how it was
/// resolved in verbose mode.
pub(crate) fn resolve_context(
    config: &ProbeConfig,
    ui: &mut dyn UserInterface,
) -> Result<ResolvedContext> {
    let resolved = config.resolve()?;

    ui.detail(&format!("Context source: {}", resolved.source));
    ui.detail(&format!(
        "Signals: {}",
        if resolved.context.is_empty() {
            "(none)".to_string()
        } else {
            resolved
                .context
                .signals()
                .map(|s| s.macro_name())
                .collect::<Vec<_>>()
                .join(" ")
        }
    ));

    if config.bare && config.defines.is_empty() {
        ui.warning("Probing an empty context; no label can match");
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::Signal;
    use crate::ui::{MockUI, OutputMode};
    use clap::Parser;

    #[test]
    fn command_result_success() {
        assert_eq!(CommandResult::success().exit_code, 0);
    }

    #[test]
    fn dispatch_propagates_detection_failure() {
        let cli = Cli::parse_from(["platprobe", "kernel"]);
        let dispatcher = CommandDispatcher::new(ProbeConfig {
            bare: true,
            ..Default::default()
        });
        let mut ui = MockUI::new();
        assert!(dispatcher.dispatch(&cli, &mut ui).is_err());
        assert!(ui.emitted().is_empty());
    }

    #[test]
    fn dispatches_distro() {
        let cli = Cli::parse_from(["platprobe", "distro"]);
        let dispatcher = CommandDispatcher::new(ProbeConfig {
            target: Some("x86_64-unknown-dragonfly".to_string()),
            ..Default::default()
        });
        let mut ui = MockUI::new();
        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.emitted(), &["dragonfly".to_string()]);
    }

    #[test]
    fn no_subcommand_runs_detect() {
        let cli = Cli::parse_from(["platprobe"]);
        let dispatcher = CommandDispatcher::new(ProbeConfig {
            target: Some("x86_64-unknown-linux-gnu".to_string()),
            ..Default::default()
        });
        let mut ui = MockUI::new();
        dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert_eq!(
            ui.emitted(),
            &["distro=generic-linux".to_string(), "kernel=linux".to_string()]
        );
    }

    #[test]
    fn resolve_context_reports_details_in_verbose() {
        let config = ProbeConfig {
            bare: true,
            defines: vec![Signal::Linux],
            ..Default::default()
        };
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        resolve_context(&config, &mut ui).unwrap();
        assert_eq!(ui.details()[0], "Context source: bare");
        assert_eq!(ui.details()[1], "Signals: __linux__");
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn resolve_context_warns_on_empty_bare() {
        let config = ProbeConfig {
            bare: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();
        resolve_context(&config, &mut ui).unwrap();
        assert_eq!(ui.warnings().len(), 1);
    }
}
