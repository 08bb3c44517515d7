//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! dispatched via [`CommandDispatcher`].

pub mod completions;
pub mod detect;
pub mod dispatcher;
pub mod distro;
pub mod kernel;
pub mod labels;
pub mod signals;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
