//! Flow-subsystem error type.

use thiserror::Error;

use af_core::{ErrorKind, VertexId};

/// Errors produced by `af-flow`.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Maximum flow is zero: no ant can ever leave the start room.
    #[error("no route from {from} to {to}")]
    NoRoute { from: VertexId, to: VertexId },

    /// A capacity, antisymmetry, conservation or decomposition invariant
    /// failed.  Indicates a bug, never a property of the input.
    #[error("flow invariant violated: {0}")]
    InvariantViolation(String),
}

impl FlowError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlowError::NoRoute { .. }         => ErrorKind::NoRoute,
            FlowError::InvariantViolation(_) => ErrorKind::InternalInvariantViolation,
        }
    }
}

pub type FlowResult<T> = Result<T, FlowError>;
