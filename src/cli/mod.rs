//! Command-line interface for platprobe.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ContextArgs, DetectArgs, LabelsArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
