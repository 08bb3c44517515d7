//! platprobe - configure-time platform detection.
//!
//! Classifies a build target into a distro label (`freebsd`, `mingw`,
//! `generic-linux`, ...) and a kernel-family label (`bsd`, `winnt`, `linux`,
//! ...) so a build system can capture one token from stdout, or a build
//! script can turn it into `cfg`s.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Choosing which context to probe
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Signals, contexts, labels and the detection rules
//! - [`ui`] - Output to stdout and stderr
//!
//! # Example
//!
//! ```
//! use platprobe::probe::{detect_kernel_family, PlatformContext, Signal};
//!
//! let ctx = PlatformContext::empty().with(Signal::Win32);
//! assert_eq!(detect_kernel_family(&ctx).unwrap().as_str(), "win32");
//!
//! let nt = ctx.with(Signal::Win32Winnt);
//! assert_eq!(detect_kernel_family(&nt).unwrap().as_str(), "winnt");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod ui;

pub use error::{ProbeError, Result};
