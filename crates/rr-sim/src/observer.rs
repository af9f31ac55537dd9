//! Simulation observer trait for progress reporting and data collection.

use rr_core::{AgentId, Instruction, PositionError};
use rr_surface::Surface;

use crate::Outcome;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// round loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_round_end(&mut self, round: u64, progressed: usize) {
///         println!("round {round}: {progressed} agents moved");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each round, before any agent steps.
    fn on_round_start(&mut self, _round: u64) {}

    /// Called after `agent` successfully executed `instruction`.
    fn on_step(&mut self, _round: u64, _agent: AgentId, _instruction: Instruction) {}

    /// Called when `agent`'s move was rejected and it sits the round out.
    ///
    /// Exhausted agents are not reported; they skip every later round.
    fn on_blocked(&mut self, _round: u64, _agent: AgentId, _error: &PositionError) {}

    /// Called at the end of each round.
    ///
    /// `progressed` is the number of agents that executed an instruction.
    fn on_round_end(&mut self, _round: u64, _progressed: usize) {}

    /// Called after every round with read-only access to the surface, so
    /// output writers can record positions without the sim knowing about
    /// any output format.
    fn on_snapshot(&mut self, _round: u64, _surface: &Surface) {}

    /// Called once after the run completes successfully.
    fn on_sim_end(&mut self, _outcome: &Outcome) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
