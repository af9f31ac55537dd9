use rr_core::{AgentId, PositionError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    /// The cursor reached the end of the program.  Expected, not a fault.
    #[error("agent {0} has no further instructions")]
    Exhausted(AgentId),

    #[error(transparent)]
    Position(#[from] PositionError),
}

impl AgentError {
    /// `true` for the errors the round-robin driver sits out instead of
    /// aborting on.
    #[inline]
    pub fn is_absorbable(&self) -> bool {
        matches!(self, AgentError::Exhausted(_) | AgentError::Position(_))
    }
}

pub type AgentResult<T> = Result<T, AgentError>;
