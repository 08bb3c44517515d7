//! Error types for platprobe operations.
//!
//! This module defines [`ProbeError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - An unrecognized platform is a hard failure: no axis ever falls back to a
//!   default label
//! - Malformed input (target triples, signal names) is reported before any
//!   detection runs
//! - Use `anyhow::Error` (via `ProbeError::Other`) for unexpected errors

use thiserror::Error;

use crate::probe::Axis;

/// Core error type for platprobe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No rule on the requested axis matched the context.
    #[error("unsupported {axis}")]
    UnsupportedPlatform { axis: Axis },

    /// A target triple could not be split into its components.
    #[error("Invalid target triple '{triple}': {message}")]
    InvalidTargetTriple { triple: String, message: String },

    /// A `-D`/`-U` argument named a signal outside the known set.
    #[error("Unknown signal '{name}'")]
    UnknownSignal { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for platprobe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_distro_displays_axis() {
        let err = ProbeError::UnsupportedPlatform { axis: Axis::Distro };
        assert_eq!(err.to_string(), "unsupported distro");
    }

    #[test]
    fn unsupported_kernel_displays_axis() {
        let err = ProbeError::UnsupportedPlatform { axis: Axis::Kernel };
        assert_eq!(err.to_string(), "unsupported kernel");
    }

    #[test]
    fn invalid_triple_displays_triple_and_message() {
        let err = ProbeError::InvalidTargetTriple {
            triple: "x86_64".into(),
            message: "expected at least two components".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("x86_64"));
        assert!(msg.contains("at least two components"));
    }

    #[test]
    fn unknown_signal_displays_name() {
        let err = ProbeError::UnknownSignal {
            name: "__APPLE__".into(),
        };
        assert!(err.to_string().contains("__APPLE__"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ProbeError = io_err.into();
        assert!(matches!(err, ProbeError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: ProbeError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
