use thiserror::Error;

use af_core::{ErrorKind, PathId};

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("no paths to assign ants to")]
    NoPaths,

    #[error("ant count must be at least 1")]
    NoAnts,

    #[error("{path} has {rooms} room(s); a path needs at least start and end")]
    DegeneratePath { path: PathId, rooms: usize },
}

impl ScheduleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScheduleError::NoAnts => ErrorKind::Input,
            ScheduleError::NoPaths | ScheduleError::DegeneratePath { .. } => {
                ErrorKind::InternalInvariantViolation
            }
        }
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
