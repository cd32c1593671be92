use af_core::{CoreError, ErrorKind};
use af_flow::FlowError;
use af_graph::GraphError;
use af_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("simulation invariant violated: {0}")]
    InvariantViolation(String),
}

impl SimError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::Config(e)             => e.kind(),
            SimError::Graph(e)              => e.kind(),
            SimError::Flow(e)               => e.kind(),
            SimError::Schedule(e)           => e.kind(),
            SimError::InvariantViolation(_) => ErrorKind::InternalInvariantViolation,
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
