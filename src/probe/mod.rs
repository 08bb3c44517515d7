//! Platform probing.
//!
//! This module classifies an environment-identity context on two
//! independent axes:
//!
//! - **distro**: `dragonfly`, `freebsd`, `netbsd`, `openbsd`, `cygwin`,
//!   `mingw`, `mswin`, `generic-linux`
//! - **kernel family**: `bsd`, `winnt`, `win32`, `linux`, `unix`
//!
//! A context that matches no rule on an axis is an error, never a default.
//!
//! # Example
//!
//! ```
//! use platprobe::probe::{detect_distro, detect_kernel_family, PlatformContext};
//!
//! let ctx = PlatformContext::from_target_triple("x86_64-unknown-freebsd").unwrap();
//! assert_eq!(detect_distro(&ctx).unwrap().as_str(), "freebsd");
//! assert_eq!(detect_kernel_family(&ctx).unwrap().as_str(), "bsd");
//! ```

pub mod cargo;
pub mod context;
pub mod detect;
pub mod label;
pub mod rules;
pub mod signal;

pub use context::PlatformContext;
pub use detect::{current, detect_all, detect_distro, detect_kernel_family, PlatformReport};
pub use label::{Axis, DistroLabel, KernelLabel};
pub use signal::Signal;
