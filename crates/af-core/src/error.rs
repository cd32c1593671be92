//! Planner error kinds and the core error type.
//!
//! Every `af-*` crate defines its own error enum.  Each of them reports an
//! [`ErrorKind`] so callers can branch on the category of failure (for
//! example, printing a dedicated "no path" message) without matching on
//! every variant of every crate.

use std::fmt;

use thiserror::Error;

/// Category of a planning failure.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Malformed room graph: missing or duplicate start/end, duplicate room
    /// names, self-loops, links to unknown rooms.  Detected before any flow
    /// network is built.
    InvalidTopology,

    /// Start and end are not connected; no ant can ever move.
    NoRoute,

    /// A solver, decomposer or simulation invariant failed.  Always a bug.
    InternalInvariantViolation,

    /// Unreadable or syntactically invalid input, or a bad configuration.
    Input,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidTopology            => "invalid topology",
            ErrorKind::NoRoute                    => "no route",
            ErrorKind::InternalInvariantViolation => "internal invariant violation",
            ErrorKind::Input                      => "input error",
        };
        f.write_str(s)
    }
}

/// Errors raised by `af-core` itself (configuration validation).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Config(_) => ErrorKind::Input,
        }
    }
}

/// Shorthand result type for `af-core`.
pub type CoreResult<T> = Result<T, CoreError>;
