//! Run status and final result.

use std::fmt;

use rr_agent::AgentState;
use rr_core::Policy;

/// Run state machine: `Running → Done | Failed`.  Both end states are
/// terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum RunStatus {
    #[default]
    Running,
    /// Every agent executed its whole program.
    Done,
    /// The run stopped with instructions still pending, or aborted.
    Failed,
}

impl RunStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Running => "RUNNING",
            RunStatus::Done    => "DONE",
            RunStatus::Failed  => "FAILED",
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, RunStatus::Running)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final state of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub policy: Policy,
    pub status: RunStatus,
    /// Rounds executed, including the final idle round of a round-robin run.
    pub rounds: u64,
    /// One entry per agent, in input order.
    pub agents: Vec<AgentState>,
}

impl Outcome {
    #[inline]
    pub fn is_done(&self) -> bool {
        self.status == RunStatus::Done
    }
}
