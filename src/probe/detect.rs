//! Platform detection.
//!
//! Two independent queries, one per axis. Both are pure functions of the
//! context: evaluating the same context twice gives the same label.

use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{ProbeError, Result};

use super::context::PlatformContext;
use super::label::{Axis, DistroLabel, KernelLabel};
use super::rules::{first_match, DISTRO_RULES, KERNEL_RULES};

/// Both labels for one context, with the signals they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformReport {
    pub distro: DistroLabel,
    pub kernel: KernelLabel,
    pub signals: PlatformContext,
}

/// Classify the context's OS distribution.
///
/// # Errors
///
/// [`ProbeError::UnsupportedPlatform`] with [`Axis::Distro`] when no rule
/// matches.
pub fn detect_distro(ctx: &PlatformContext) -> Result<DistroLabel> {
    classify(Axis::Distro, first_match(DISTRO_RULES, ctx))
}

/// Classify the context's kernel family.
///
/// # Errors
///
/// [`ProbeError::UnsupportedPlatform`] with [`Axis::Kernel`] when no rule
/// matches.
pub fn detect_kernel_family(ctx: &PlatformContext) -> Result<KernelLabel> {
    classify(Axis::Kernel, first_match(KERNEL_RULES, ctx))
}

/// Classify both axes. The distro axis is checked first, so a context that
/// fits neither reports the distro failure.
pub fn detect_all(ctx: &PlatformContext) -> Result<PlatformReport> {
    Ok(PlatformReport {
        distro: detect_distro(ctx)?,
        kernel: detect_kernel_family(ctx)?,
        signals: ctx.clone(),
    })
}

/// Report for the host target, resolved on first use and cached for the
/// rest of the process.
pub fn current() -> Result<&'static PlatformReport> {
    static CURRENT: OnceLock<std::result::Result<PlatformReport, Axis>> = OnceLock::new();

    CURRENT
        .get_or_init(resolve_host)
        .as_ref()
        .map_err(|axis| ProbeError::UnsupportedPlatform { axis: *axis })
}

fn resolve_host() -> std::result::Result<PlatformReport, Axis> {
    let ctx = PlatformContext::host();
    let Some(distro) = first_match(DISTRO_RULES, &ctx) else {
        return Err(Axis::Distro);
    };
    let Some(kernel) = first_match(KERNEL_RULES, &ctx) else {
        return Err(Axis::Kernel);
    };
    Ok(PlatformReport {
        distro,
        kernel,
        signals: ctx,
    })
}

fn classify<L: std::fmt::Display>(axis: Axis, label: Option<L>) -> Result<L> {
    match label {
        Some(label) => {
            tracing::debug!("{} classified as {}", axis, label);
            Ok(label)
        }
        None => {
            tracing::debug!("No {} rule matched", axis);
            Err(ProbeError::UnsupportedPlatform { axis })
        }
    }
}
