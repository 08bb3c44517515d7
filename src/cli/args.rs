//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::ProbeConfig;
use crate::probe::{Axis, Signal};

/// platprobe - print the distro or kernel-family label of a platform.
#[derive(Debug, Parser)]
#[command(name = "platprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Show how the context was resolved (on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments selecting the context to probe.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ContextArgs {
    /// Probe this target triple instead of the host
    #[arg(long, global = true, env = "PLATPROBE_TARGET", value_name = "TRIPLE")]
    pub target: Option<String>,

    /// Define a signal on top of the resolved context (e.g. -D _WIN32)
    #[arg(short = 'D', long = "define", global = true, value_name = "SIGNAL")]
    pub defines: Vec<Signal>,

    /// Remove a signal from the resolved context
    #[arg(short = 'U', long = "undefine", global = true, value_name = "SIGNAL")]
    pub undefines: Vec<Signal>,

    /// Start from an empty context
    #[arg(long, global = true)]
    pub bare: bool,

    /// Probe the host even when a target or Cargo build env is set
    #[arg(long, global = true)]
    pub host: bool,
}

impl From<&ContextArgs> for ProbeConfig {
    fn from(args: &ContextArgs) -> Self {
        Self {
            bare: args.bare,
            target: args.target.clone(),
            host_only: args.host,
            defines: args.defines.clone(),
            undefines: args.undefines.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the distro label
    Distro,

    /// Print the kernel-family label
    Kernel,

    /// Print both labels (default if no command specified)
    Detect(DetectArgs),

    /// List every label an axis can produce
    Labels(LabelsArgs),

    /// List the signals present in the resolved context
    Signals,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `labels` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LabelsArgs {
    /// Only list labels for this axis
    #[arg(long, value_enum)]
    pub axis: Option<Axis>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
