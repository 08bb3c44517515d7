//! Identity signals.
//!
//! A signal is one of the compiler-predefined macros that identify the
//! target platform. Contexts are built from these and the detection rules
//! test for their presence.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ProbeError;

/// A platform-identity macro predefined by C compilers or system headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Signal {
    #[serde(rename = "__DragonFly__")]
    DragonFly,
    #[serde(rename = "__FreeBSD__")]
    FreeBsd,
    #[serde(rename = "__NetBSD__")]
    NetBsd,
    #[serde(rename = "__OpenBSD__")]
    OpenBsd,
    #[serde(rename = "__CYGWIN__")]
    Cygwin,
    #[serde(rename = "__MINGW32__")]
    Mingw32,
    #[serde(rename = "_WIN32")]
    Win32,
    /// Defined by `<windows.h>` when the NT API surface is available.
    #[serde(rename = "_WIN32_WINNT")]
    Win32Winnt,
    #[serde(rename = "__linux__")]
    Linux,
    #[serde(rename = "__unix__")]
    Unix,
}

impl Signal {
    /// Every known signal, in declaration order.
    pub const ALL: [Signal; 10] = [
        Signal::DragonFly,
        Signal::FreeBsd,
        Signal::NetBsd,
        Signal::OpenBsd,
        Signal::Cygwin,
        Signal::Mingw32,
        Signal::Win32,
        Signal::Win32Winnt,
        Signal::Linux,
        Signal::Unix,
    ];

    /// The macro name as a C preprocessor would spell it.
    pub fn macro_name(&self) -> &'static str {
        match self {
            Signal::DragonFly => "__DragonFly__",
            Signal::FreeBsd => "__FreeBSD__",
            Signal::NetBsd => "__NetBSD__",
            Signal::OpenBsd => "__OpenBSD__",
            Signal::Cygwin => "__CYGWIN__",
            Signal::Mingw32 => "__MINGW32__",
            Signal::Win32 => "_WIN32",
            Signal::Win32Winnt => "_WIN32_WINNT",
            Signal::Linux => "__linux__",
            Signal::Unix => "__unix__",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.macro_name())
    }
}

impl FromStr for Signal {
    type Err = ProbeError;

    /// Parse a signal from its macro name. Matching is exact: `__linux` and
    /// `linux` are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Signal::ALL
            .iter()
            .copied()
            .find(|signal| signal.macro_name() == name)
            .ok_or_else(|| ProbeError::UnknownSignal {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_macro_name() {
        for signal in Signal::ALL {
            assert_eq!(signal.macro_name().parse::<Signal>().unwrap(), signal);
        }
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" _WIN32 ".parse::<Signal>().unwrap(), Signal::Win32);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "__APPLE__".parse::<Signal>().unwrap_err();
        assert!(matches!(err, ProbeError::UnknownSignal { name } if name == "__APPLE__"));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("__FREEBSD__".parse::<Signal>().is_err());
    }

    #[test]
    fn display_uses_macro_name() {
        assert_eq!(Signal::Win32Winnt.to_string(), "_WIN32_WINNT");
    }

    #[test]
    fn serializes_as_macro_name() {
        let json = serde_json::to_string(&Signal::Mingw32).unwrap();
        assert_eq!(json, "\"__MINGW32__\"");
    }
}
