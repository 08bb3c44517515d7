//! Build-script integration.
//!
//! Lets a crate's `build.rs` resolve the target platform before any other
//! platform-dependent code is compiled, and expose the result as cfgs:
//!
//! ```no_run
//! // build.rs
//! fn main() {
//!     platprobe::probe::cargo::emit_cfg(|key| std::env::var(key)).unwrap();
//! }
//! ```
//!
//! Downstream code can then use `#[cfg(platprobe_kernel = "bsd")]`.

use crate::error::Result;

use super::context::PlatformContext;
use super::detect::{detect_all, PlatformReport};
use super::label::{DistroLabel, KernelLabel};

/// `cargo::` directives declaring and setting both labels as `rustc` cfgs.
///
/// Every label is declared through `rustc-check-cfg`, so downstream
/// `#[cfg(platprobe_distro = "...")]` checks do not trip `unexpected_cfgs`.
pub fn cfg_directives(report: &PlatformReport) -> Vec<String> {
    vec![
        check_cfg("platprobe_distro", DistroLabel::ALL.iter().map(|l| l.as_str())),
        check_cfg("platprobe_kernel", KernelLabel::ALL.iter().map(|l| l.as_str())),
        format!("cargo::rustc-cfg=platprobe_distro=\"{}\"", report.distro),
        format!("cargo::rustc-cfg=platprobe_kernel=\"{}\"", report.kernel),
    ]
}

fn check_cfg<'a>(name: &str, values: impl Iterator<Item = &'a str>) -> String {
    let values = values
        .map(|v| format!("\"{}\"", v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("cargo::rustc-check-cfg=cfg({}, values({}))", name, values)
}

/// Resolve the build target, classify it, and print the cfg directives.
///
/// Falls back to the host context when not run from a build script.
pub fn emit_cfg<F>(env_fn: F) -> Result<PlatformReport>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let ctx = PlatformContext::from_build_env(env_fn)?.unwrap_or_else(PlatformContext::host);
    let report = detect_all(&ctx)?;

    for line in cfg_directives(&report) {
        println!("{}", line);
    }

    Ok(report)
}
