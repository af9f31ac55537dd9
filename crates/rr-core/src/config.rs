//! Run configuration.
//!
//! Typically built from CLI flags or loaded from a TOML file by the
//! application crate (with the `serde` feature) and passed to the simulation
//! builder.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, MoveSymbol};

// ── Policy ────────────────────────────────────────────────────────────────────

/// How the driver schedules agents.  The two policies are not
/// interchangeable: they differ in failure semantics and in which end states
/// are reachable when agents block each other.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Policy {
    /// Agents take one instruction per round until a round makes no
    /// progress.  Blocked and exhausted agents sit their turn out; the run
    /// ends `DONE` or `FAILED`.
    #[default]
    RoundRobin,
    /// Each agent runs its whole program before the next one starts.  The
    /// first invalid move aborts the run.
    Sequential,
}

impl Policy {
    pub fn as_str(self) -> &'static str {
        match self {
            Policy::RoundRobin => "round-robin",
            Policy::Sequential => "sequential",
        }
    }

    /// `true` if the response carries a leading `DONE`/`FAILED` line.
    #[inline]
    pub fn reports_status(self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}

impl FromStr for Policy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round-robin" => Ok(Policy::RoundRobin),
            "sequential"  => Ok(Policy::Sequential),
            other => Err(CoreError::Config(format!(
                "unknown policy {other:?}: expected \"round-robin\" or \"sequential\""
            ))),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Per-deployment simulation settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Scheduling policy.  Default: round-robin.
    pub policy: Policy,

    /// Letter decoded as move-forward.  Default: `F`.
    pub move_symbol: MoveSymbol,
}
