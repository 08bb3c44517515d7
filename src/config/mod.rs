//! Probe configuration.
//!
//! Decides which environment-identity context a probe runs against. Sources
//! are checked in this order, first hit wins:
//!
//! 1. `--bare` (an empty context)
//! 2. `--host` (the host this binary was compiled for)
//! 3. `--target <TRIPLE>` or `PLATPROBE_TARGET`
//! 4. Cargo build-script variables (`CARGO_CFG_TARGET_OS`, or `TARGET` when
//!    `OUT_DIR` is also set)
//! 5. The host
//!
//! `-D`/`-U` overrides are then applied on top, undefines last.
//!
//! # Example
//!
//! ```
//! use platprobe::config::{ContextSource, ProbeConfig};
//! use platprobe::probe::Signal;
//!
//! let config = ProbeConfig {
//!     target: Some("x86_64-pc-windows-msvc".to_string()),
//!     undefines: vec![Signal::Win32Winnt],
//!     ..Default::default()
//! };
//! let resolved = config.resolve().unwrap();
//! assert_eq!(resolved.source, ContextSource::Target("x86_64-pc-windows-msvc".to_string()));
//! assert!(!resolved.context.has(Signal::Win32Winnt));
//! ```

pub mod source;

pub use source::{ContextSource, ProbeConfig, ResolvedContext};
