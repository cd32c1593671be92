//! Graph-subsystem error type.

use thiserror::Error;

use af_core::{ErrorKind, RoomId};

/// Errors produced by `af-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no start room designated")]
    MissingStart,

    #[error("no end room designated")]
    MissingEnd,

    #[error("start room designated more than once")]
    DuplicateStart,

    #[error("end room designated more than once")]
    DuplicateEnd,

    #[error("room {0:?} is both start and end")]
    StartIsEnd(String),

    #[error("duplicate room {0:?}")]
    DuplicateRoom(String),

    #[error("corridor links room {0:?} to itself")]
    SelfLoop(String),

    #[error("corridor references unknown room {0:?}")]
    UnknownRoom(String),

    #[error("corridor references unknown {0}")]
    UnknownRoomId(RoomId),

    #[error("invalid room name {0:?}")]
    InvalidRoomName(String),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("line {line}: {source}")]
    AtLine {
        line:   usize,
        #[source]
        source: Box<GraphError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Failure category, see [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::MissingStart
            | GraphError::MissingEnd
            | GraphError::DuplicateStart
            | GraphError::DuplicateEnd
            | GraphError::StartIsEnd(_)
            | GraphError::DuplicateRoom(_)
            | GraphError::SelfLoop(_)
            | GraphError::UnknownRoom(_)
            | GraphError::UnknownRoomId(_) => ErrorKind::InvalidTopology,
            GraphError::InvalidRoomName(_) | GraphError::Parse { .. } | GraphError::Io(_) => {
                ErrorKind::Input
            }
            GraphError::AtLine { source, .. } => source.kind(),
        }
    }

    /// Attach the input line number to an error raised while loading.
    pub(crate) fn at_line(self, line: usize) -> GraphError {
        match self {
            e @ (GraphError::Parse { .. } | GraphError::AtLine { .. }) => e,
            e => GraphError::AtLine { line, source: Box::new(e) },
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
