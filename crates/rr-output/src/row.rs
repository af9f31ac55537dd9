//! Plain data row types written by output backends.

/// One agent's pose and progress at the end of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub round:    u64,
    pub agent_id: u32,
    pub x:        i64,
    pub y:        i64,
    /// Wire symbol: `N`, `E`, `S` or `W`.
    pub heading:  char,
    pub cursor:   u64,
    pub pending:  u64,
}

/// Summary statistics for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummaryRow {
    pub round:      u64,
    /// Agents that executed an instruction.
    pub progressed: u64,
    /// Agents whose move was rejected.
    pub blocked:    u64,
}
