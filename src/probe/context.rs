//! Environment-identity contexts.
//!
//! A [`PlatformContext`] is the set of identity signals a probe is evaluated
//! against. Contexts come from the running binary's own compile-time target,
//! from a target triple, or from the variables Cargo hands to build scripts.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{ProbeError, Result};

use super::signal::Signal;

/// OSes whose C compilers define `__unix__` without a more specific
/// kernel signal the rules recognize.
const PLAIN_UNIX_OSES: &[&str] = &[
    "solaris",
    "illumos",
    "aix",
    "hurd",
    "haiku",
    "redox",
    "nto",
    "emscripten",
];

/// The set of identity signals present in an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlatformContext {
    signals: BTreeSet<Signal>,
}

impl PlatformContext {
    /// Create an empty context. No rule matches an empty context.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a signal, builder style.
    pub fn with(mut self, signal: Signal) -> Self {
        self.signals.insert(signal);
        self
    }

    /// Define a signal.
    pub fn define(&mut self, signal: Signal) {
        self.signals.insert(signal);
    }

    /// Undefine a signal. Returns whether it was present.
    pub fn undefine(&mut self, signal: Signal) -> bool {
        self.signals.remove(&signal)
    }

    /// Check whether a signal is present.
    pub fn has(&self, signal: Signal) -> bool {
        self.signals.contains(&signal)
    }

    /// Check whether any of the given signals is present.
    pub fn has_any(&self, signals: &[Signal]) -> bool {
        signals.iter().any(|s| self.has(*s))
    }

    /// Iterate over present signals in canonical order.
    pub fn signals(&self) -> impl Iterator<Item = Signal> + '_ {
        self.signals.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Context of the target this binary was compiled for.
    pub fn host() -> Self {
        Self::from_os_env(std::env::consts::OS, host_env())
    }

    /// Context implied by a Rust or GNU target triple.
    ///
    /// Accepts `arch-vendor-os[-env]` and `arch-os[-env]`, in any case.
    /// Version suffixes on the OS component (`freebsd13.2`) are ignored. A
    /// well-formed triple naming an OS with no known signals yields an empty
    /// context.
    pub fn from_target_triple(triple: &str) -> Result<Self> {
        let triple = triple.trim();
        let lowered = triple.to_ascii_lowercase();
        let parts: Vec<&str> = lowered.split('-').collect();

        if parts.len() < 2 {
            return Err(invalid_triple(triple, "expected at least two components"));
        }
        if parts.iter().any(|p| p.is_empty()) {
            return Err(invalid_triple(triple, "empty component"));
        }

        let rest = &parts[1..];
        let (os, env) = match rest.iter().position(|p| os_name(p).is_some()) {
            Some(idx) => {
                let (os, implied_env) = os_name(rest[idx]).unwrap_or(("", ""));
                let env = rest.get(idx + 1).copied().unwrap_or(implied_env);
                (os, env)
            }
            None => {
                tracing::debug!("No known OS in target triple '{}'", triple);
                return Ok(Self::empty());
            }
        };

        tracing::debug!("Target triple '{}' -> os={} env={}", triple, os, env);
        Ok(Self::from_os_env(os, env))
    }

    /// Context from Cargo build-script variables.
    ///
    /// `CARGO_CFG_TARGET_OS` (with `CARGO_CFG_TARGET_ENV`) takes precedence
    /// over `TARGET`. `TARGET` alone is a common Makefile variable, so it is
    /// only read when `OUT_DIR` is also set, as Cargo does for build scripts.
    /// Returns `Ok(None)` outside a build script.
    pub fn from_build_env<F>(env_fn: F) -> Result<Option<Self>>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        if let Ok(os) = env_fn("CARGO_CFG_TARGET_OS") {
            let env = env_fn("CARGO_CFG_TARGET_ENV").unwrap_or_default();
            tracing::debug!("Using CARGO_CFG_TARGET_OS={} env={}", os, env);
            return Ok(Some(Self::from_os_env(&os, &env)));
        }

        if env_fn("OUT_DIR").is_err() {
            return Ok(None);
        }

        if let Ok(target) = env_fn("TARGET") {
            tracing::debug!("Using TARGET={}", target);
            return Self::from_target_triple(&target).map(Some);
        }

        Ok(None)
    }

    /// Signals implied by a Rust `target_os` / `target_env` pair.
    pub fn from_os_env(os: &str, env: &str) -> Self {
        let mut ctx = Self::empty();

        match os.to_ascii_lowercase().as_str() {
            "dragonfly" => ctx.define(Signal::DragonFly),
            "freebsd" => ctx.define(Signal::FreeBsd),
            "netbsd" => ctx.define(Signal::NetBsd),
            "openbsd" => ctx.define(Signal::OpenBsd),
            "linux" | "android" => ctx.define(Signal::Linux),
            "windows" => {
                ctx.define(Signal::Win32);
                // Current SDK and mingw-w64 headers always define it.
                ctx.define(Signal::Win32Winnt);
                if env.eq_ignore_ascii_case("gnu") || env.eq_ignore_ascii_case("gnullvm") {
                    ctx.define(Signal::Mingw32);
                }
                return ctx;
            }
            "cygwin" => {
                ctx.define(Signal::Cygwin);
                ctx.define(Signal::Win32Winnt);
            }
            other if PLAIN_UNIX_OSES.contains(&other) => {}
            _ => return ctx,
        }

        ctx.define(Signal::Unix);
        ctx
    }
}

impl FromIterator<Signal> for PlatformContext {
    fn from_iter<I: IntoIterator<Item = Signal>>(iter: I) -> Self {
        Self {
            signals: iter.into_iter().collect(),
        }
    }
}

/// Normalize a triple component to a Rust `target_os` name, along with the
/// environment it implies when the triple carries none.
fn os_name(component: &str) -> Option<(&'static str, &'static str)> {
    let base = component.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');

    if base.starts_with("mingw") {
        return Some(("windows", "gnu"));
    }

    let os = match base {
        "dragonfly" => "dragonfly",
        "freebsd" => "freebsd",
        "netbsd" => "netbsd",
        "openbsd" => "openbsd",
        "linux" => "linux",
        "android" => "android",
        "windows" => "windows",
        "cygwin" => "cygwin",
        "darwin" => "macos",
        "macos" => "macos",
        "ios" => "ios",
        other => PLAIN_UNIX_OSES.iter().copied().find(|os| *os == other)?,
    };

    Some((os, ""))
}

fn host_env() -> &'static str {
    if cfg!(target_env = "gnu") {
        "gnu"
    } else if cfg!(target_env = "msvc") {
        "msvc"
    } else if cfg!(target_env = "musl") {
        "musl"
    } else {
        ""
    }
}

fn invalid_triple(triple: &str, message: &str) -> ProbeError {
    ProbeError::InvalidTargetTriple {
        triple: triple.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> std::result::Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    fn signals(ctx: &PlatformContext) -> Vec<Signal> {
        ctx.signals().collect()
    }

    #[test]
    fn linux_gnu_triple() {
        let ctx = PlatformContext::from_target_triple("x86_64-unknown-linux-gnu").unwrap();
        assert_eq!(signals(&ctx), vec![Signal::Linux, Signal::Unix]);
    }

    #[test]
    fn android_triple_is_linux() {
        let ctx = PlatformContext::from_target_triple("aarch64-linux-android").unwrap();
        assert!(ctx.has(Signal::Linux));
    }

    #[test]
    fn msvc_triple() {
        let ctx = PlatformContext::from_target_triple("x86_64-pc-windows-msvc").unwrap();
        assert_eq!(signals(&ctx), vec![Signal::Win32, Signal::Win32Winnt]);
    }

    #[test]
    fn windows_gnu_triple_is_mingw() {
        let ctx = PlatformContext::from_target_triple("x86_64-pc-windows-gnu").unwrap();
        assert!(ctx.has(Signal::Mingw32));
        assert!(ctx.has(Signal::Win32));
        assert!(!ctx.has(Signal::Unix));
    }

    #[test]
    fn gnu_style_mingw_triple() {
        let ctx = PlatformContext::from_target_triple("i686-w64-mingw32").unwrap();
        assert!(ctx.has(Signal::Mingw32));
        assert!(ctx.has(Signal::Win32));
    }

    #[test]
    fn cygwin_triple() {
        let ctx = PlatformContext::from_target_triple("x86_64-pc-cygwin").unwrap();
        assert_eq!(
            signals(&ctx),
            vec![Signal::Cygwin, Signal::Win32Winnt, Signal::Unix]
        );
    }

    #[test]
    fn versioned_bsd_triple() {
        let ctx = PlatformContext::from_target_triple("x86_64-unknown-freebsd13.2").unwrap();
        assert_eq!(signals(&ctx), vec![Signal::FreeBsd, Signal::Unix]);
    }

    #[test]
    fn solaris_is_plain_unix() {
        let ctx = PlatformContext::from_target_triple("sparcv9-sun-solaris").unwrap();
        assert_eq!(signals(&ctx), vec![Signal::Unix]);
    }

    #[test]
    fn apple_triple_has_no_signals() {
        let ctx = PlatformContext::from_target_triple("aarch64-apple-darwin").unwrap();
        assert!(ctx.is_empty());
    }

    #[test]
    fn unknown_os_triple_is_empty() {
        let ctx = PlatformContext::from_target_triple("wasm32-unknown-unknown").unwrap();
        assert!(ctx.is_empty());
    }

    #[test]
    fn single_component_triple_is_invalid() {
        let err = PlatformContext::from_target_triple("x86_64").unwrap_err();
        assert!(matches!(err, ProbeError::InvalidTargetTriple { .. }));
    }

    #[test]
    fn empty_component_triple_is_invalid() {
        let err = PlatformContext::from_target_triple("x86_64--linux").unwrap_err();
        assert!(err.to_string().contains("empty component"));
    }

    #[test]
    fn build_env_prefers_cargo_cfg() {
        let env = make_env(&[
            ("CARGO_CFG_TARGET_OS", "windows"),
            ("CARGO_CFG_TARGET_ENV", "gnu"),
            ("TARGET", "x86_64-unknown-linux-gnu"),
        ]);
        let ctx = PlatformContext::from_build_env(env).unwrap().unwrap();
        assert!(ctx.has(Signal::Mingw32));
        assert!(!ctx.has(Signal::Linux));
    }

    #[test]
    fn build_env_falls_back_to_target() {
        let env = make_env(&[
            ("TARGET", "x86_64-unknown-netbsd"),
            ("OUT_DIR", "/tmp/out"),
        ]);
        let ctx = PlatformContext::from_build_env(env).unwrap().unwrap();
        assert!(ctx.has(Signal::NetBsd));
    }

    #[test]
    fn build_env_absent() {
        let env = make_env(&[]);
        assert!(PlatformContext::from_build_env(env).unwrap().is_none());
    }

    #[test]
    fn build_env_propagates_bad_target() {
        let env = make_env(&[("TARGET", "garbage"), ("OUT_DIR", "/tmp/out")]);
        assert!(PlatformContext::from_build_env(env).is_err());
    }

    #[test]
    fn bare_target_variable_outside_build_script_is_ignored() {
        let env = make_env(&[("TARGET", "myapp")]);
        assert!(PlatformContext::from_build_env(env).unwrap().is_none());

        let env = make_env(&[("TARGET", "x86_64-unknown-openbsd")]);
        assert!(PlatformContext::from_build_env(env).unwrap().is_none());
    }

    #[test]
    fn emscripten_is_plain_unix() {
        let ctx = PlatformContext::from_target_triple("wasm32-unknown-emscripten").unwrap();
        assert_eq!(signals(&ctx), vec![Signal::Unix]);
    }

    #[test]
    fn triple_matching_ignores_case() {
        let ctx = PlatformContext::from_target_triple("X86_64-PC-Windows-GNU").unwrap();
        assert!(ctx.has(Signal::Mingw32));

        let ctx = PlatformContext::from_target_triple("x86_64-unknown-FreeBSD").unwrap();
        assert!(ctx.has(Signal::FreeBsd));
    }

    #[test]
    fn cargo_cfg_os_ignores_case() {
        let ctx = PlatformContext::from_os_env("Linux", "");
        assert!(ctx.has(Signal::Linux));
    }

    #[test]
    fn define_and_undefine() {
        let mut ctx = PlatformContext::empty().with(Signal::Win32);
        ctx.define(Signal::Win32Winnt);
        assert!(ctx.has_any(&[Signal::Cygwin, Signal::Win32Winnt]));
        assert!(ctx.undefine(Signal::Win32Winnt));
        assert!(!ctx.undefine(Signal::Win32Winnt));
        assert_eq!(signals(&ctx), vec![Signal::Win32]);
    }

    #[test]
    fn collects_from_iterator() {
        let ctx: PlatformContext = [Signal::Unix, Signal::Linux].into_iter().collect();
        assert_eq!(signals(&ctx), vec![Signal::Linux, Signal::Unix]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn host_context_on_linux() {
        let ctx = PlatformContext::host();
        assert!(ctx.has(Signal::Linux));
        assert!(ctx.has(Signal::Unix));
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn host_context_on_windows() {
        let ctx = PlatformContext::host();
        assert!(ctx.has(Signal::Win32));
    }
}
