//! Surface error type.

use thiserror::Error;

use rr_agent::AgentError;
use rr_core::{AgentId, Coordinate, PositionError};

/// Errors produced by `rr-surface`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("surface coordinates are not valid: {0}")]
    InvalidBounds(Coordinate),

    #[error(transparent)]
    Position(#[from] PositionError),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("surface cannot hold more than {} agents", u32::MAX)]
    TooManyAgents,

    #[error(transparent)]
    Agent(#[from] AgentError),
}

impl SurfaceError {
    /// `true` if this is a step failure the round-robin driver sits out.
    pub fn is_absorbable(&self) -> bool {
        match self {
            SurfaceError::Agent(e) => e.is_absorbable(),
            SurfaceError::Position(_) => true,
            _ => false,
        }
    }
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;
