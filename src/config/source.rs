//! Context source resolution.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::probe::{PlatformContext, Signal};

/// Where the base context came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ContextSource {
    /// Started from no signals.
    Bare,
    /// Parsed from an explicit target triple.
    Target(String),
    /// Read from Cargo build-script variables.
    BuildEnv,
    /// The target this binary was compiled for.
    Host,
}

impl fmt::Display for ContextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextSource::Bare => write!(f, "bare"),
            ContextSource::Target(triple) => write!(f, "target {}", triple),
            ContextSource::BuildEnv => write!(f, "cargo build environment"),
            ContextSource::Host => write!(f, "host ({})", env!("PLATPROBE_BUILD_TARGET")),
        }
    }
}

/// Options controlling which context is probed.
#[derive(Debug, Clone, Default)]
pub struct ProbeConfig {
    /// Start from an empty context.
    pub bare: bool,
    /// Target triple to derive the context from.
    pub target: Option<String>,
    /// Use the host context, ignoring `target` and Cargo build-script
    /// variables.
    pub host_only: bool,
    /// Signals to add after the base context is resolved.
    pub defines: Vec<Signal>,
    /// Signals to remove after defines are applied.
    pub undefines: Vec<Signal>,
}

/// A context together with the source it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContext {
    pub context: PlatformContext,
    pub source: ContextSource,
}

impl ProbeConfig {
    /// Resolve against the process environment.
    pub fn resolve(&self) -> Result<ResolvedContext> {
        self.resolve_with_env(|key| std::env::var(key))
    }

    /// Resolve with a custom env var lookup (for testing).
    pub fn resolve_with_env<F>(&self, env_fn: F) -> Result<ResolvedContext>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let (mut context, source) = self.base_context(env_fn)?;

        for signal in &self.defines {
            context.define(*signal);
        }
        for signal in &self.undefines {
            context.undefine(*signal);
        }

        tracing::debug!(
            "Resolved context from {}: [{}]",
            source,
            context
                .signals()
                .map(|s| s.macro_name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(ResolvedContext { context, source })
    }

    fn base_context<F>(&self, env_fn: F) -> Result<(PlatformContext, ContextSource)>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        if self.bare {
            return Ok((PlatformContext::empty(), ContextSource::Bare));
        }

        if self.host_only {
            return Ok((PlatformContext::host(), ContextSource::Host));
        }

        if let Some(ref triple) = self.target {
            let ctx = PlatformContext::from_target_triple(triple)?;
            return Ok((ctx, ContextSource::Target(triple.clone())));
        }

        if let Some(ctx) = PlatformContext::from_build_env(env_fn)? {
            return Ok((ctx, ContextSource::BuildEnv));
        }

        Ok((PlatformContext::host(), ContextSource::Host))
    }
}
