//! Platform labels.
//!
//! The two closed enumerations a context is classified into. Each label
//! prints as the token a build system captures from stdout.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Classification axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// OS distribution.
    Distro,
    /// Kernel family.
    Kernel,
}

impl Axis {
    /// Token for this axis.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Distro => "distro",
            Axis::Kernel => "kernel",
        }
    }

    /// All label tokens on this axis, in rule order.
    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            Axis::Distro => DistroLabel::ALL.iter().map(|l| l.as_str()).collect(),
            Axis::Kernel => KernelLabel::ALL.iter().map(|l| l.as_str()).collect(),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OS distribution label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DistroLabel {
    #[serde(rename = "dragonfly")]
    DragonFly,
    #[serde(rename = "freebsd")]
    FreeBsd,
    #[serde(rename = "netbsd")]
    NetBsd,
    #[serde(rename = "openbsd")]
    OpenBsd,
    #[serde(rename = "cygwin")]
    Cygwin,
    #[serde(rename = "mingw")]
    Mingw,
    #[serde(rename = "mswin")]
    MsWin,
    #[serde(rename = "generic-linux")]
    GenericLinux,
}

impl DistroLabel {
    pub const ALL: [DistroLabel; 8] = [
        DistroLabel::DragonFly,
        DistroLabel::FreeBsd,
        DistroLabel::NetBsd,
        DistroLabel::OpenBsd,
        DistroLabel::Cygwin,
        DistroLabel::Mingw,
        DistroLabel::MsWin,
        DistroLabel::GenericLinux,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DistroLabel::DragonFly => "dragonfly",
            DistroLabel::FreeBsd => "freebsd",
            DistroLabel::NetBsd => "netbsd",
            DistroLabel::OpenBsd => "openbsd",
            DistroLabel::Cygwin => "cygwin",
            DistroLabel::Mingw => "mingw",
            DistroLabel::MsWin => "mswin",
            DistroLabel::GenericLinux => "generic-linux",
        }
    }
}

impl fmt::Display for DistroLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistroLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistroLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| format!("unknown distro label: {}", s))
    }
}

/// Kernel family label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelLabel {
    Bsd,
    WinNt,
    Win32,
    Linux,
    Unix,
}

impl KernelLabel {
    pub const ALL: [KernelLabel; 5] = [
        KernelLabel::Bsd,
        KernelLabel::WinNt,
        KernelLabel::Win32,
        KernelLabel::Linux,
        KernelLabel::Unix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KernelLabel::Bsd => "bsd",
            KernelLabel::WinNt => "winnt",
            KernelLabel::Win32 => "win32",
            KernelLabel::Linux => "linux",
            KernelLabel::Unix => "unix",
        }
    }
}

impl fmt::Display for KernelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KernelLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KernelLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| format!("unknown kernel label: {}", s))
    }
}
