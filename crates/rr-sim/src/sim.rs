//! The `Sim` struct and its round loops.

use tracing::{debug, info, trace};

use rr_core::{AgentId, Policy};
use rr_agent::AgentError;
use rr_surface::{Surface, SurfaceError};

use crate::{Outcome, RunStatus, SimError, SimObserver, SimResult};

/// Result of one agent's turn.
enum Turn {
    Stepped,
    Blocked,
    Idle,
}

/// The simulation runner.
///
/// Owns its [`Surface`] exclusively for the duration of one run.  Create via
/// [`SimBuilder`][crate::SimBuilder]; a `Sim` runs once.
pub struct Sim {
    pub policy: Policy,

    pub(crate) surface: Surface,
    pub(crate) status:  RunStatus,
    pub(crate) rounds:  u64,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Wrap a surface whose agents are already placed.
    ///
    /// Loaders that place agents while they parse use this instead of
    /// [`SimBuilder`][crate::SimBuilder].
    pub fn from_surface(surface: Surface, policy: Policy) -> Self {
        Self {
            policy,
            surface,
            status: RunStatus::Running,
            rounds: 0,
        }
    }

    /// Run to completion under `self.policy`.
    ///
    /// Round-robin runs always return `Ok` with a `Done` or `Failed`
    /// outcome unless a non-step error occurs.  Sequential runs return the
    /// first rejected move as an error and leave the status `Failed`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Outcome> {
        if self.status.is_terminal() {
            return Err(SimError::AlreadyFinished);
        }

        info!(
            policy = %self.policy,
            agents = self.surface.len(),
            instructions = self.surface.total_instructions(),
            "simulation started",
        );

        let result = match self.policy {
            Policy::RoundRobin => self.run_round_robin(observer),
            Policy::Sequential => self.run_sequential(observer),
        };
        if let Err(e) = result {
            self.status = RunStatus::Failed;
            info!(error = %e, rounds = self.rounds, "simulation aborted");
            return Err(e);
        }

        let outcome = self.outcome();
        info!(status = %outcome.status, rounds = outcome.rounds, "simulation finished");
        observer.on_sim_end(&outcome);
        Ok(outcome)
    }

    #[inline]
    pub fn status(&self) -> RunStatus {
        self.status
    }

    #[inline]
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Current state of every agent, whether or not the run has finished.
    pub fn outcome(&self) -> Outcome {
        Outcome {
            policy: self.policy,
            status: self.status,
            rounds: self.rounds,
            agents: self.surface.states(),
        }
    }

    // ── Round-robin ───────────────────────────────────────────────────────

    fn run_round_robin<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let max_rounds = self.surface.total_instructions() as u64 + 1;

        loop {
            self.rounds += 1;
            let round = self.rounds;
            observer.on_round_start(round);

            let mut progressed = 0;
            for agent in 0..self.surface.len() as u32 {
                if let Turn::Stepped = self.take_turn(round, AgentId(agent), observer)? {
                    progressed += 1;
                }
            }

            debug!(round, progressed, "round finished");
            observer.on_round_end(round, progressed);
            observer.on_snapshot(round, &self.surface);

            if progressed == 0 {
                break;
            }
        }
        debug_assert!(self.rounds <= max_rounds, "{} rounds > bound {max_rounds}", self.rounds);

        self.status = if self.surface.has_pending() {
            RunStatus::Failed
        } else {
            RunStatus::Done
        };
        Ok(())
    }

    /// One agent's turn in a round-robin round.  Exhausted and blocked
    /// agents sit the turn out; any other error aborts.
    fn take_turn<O: SimObserver>(
        &mut self,
        round:    u64,
        agent:    AgentId,
        observer: &mut O,
    ) -> SimResult<Turn> {
        match self.surface.step_agent(agent) {
            Ok(instruction) => {
                trace!(round, %agent, ?instruction, "step");
                observer.on_step(round, agent, instruction);
                Ok(Turn::Stepped)
            }
            Err(SurfaceError::Agent(AgentError::Exhausted(_))) => Ok(Turn::Idle),
            Err(SurfaceError::Agent(AgentError::Position(e))) => {
                debug!(round, %agent, error = %e, "move blocked");
                observer.on_blocked(round, agent, &e);
                Ok(Turn::Blocked)
            }
            Err(e) => Err(e.into()),
        }
    }

    // ── Sequential ────────────────────────────────────────────────────────

    fn run_sequential<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        for agent in 0..self.surface.len() as u32 {
            let agent = AgentId(agent);
            self.rounds += 1;
            let round = self.rounds;
            observer.on_round_start(round);

            let mut steps = 0;
            loop {
                match self.surface.step_agent(agent) {
                    Ok(instruction) => {
                        trace!(%agent, ?instruction, "step");
                        observer.on_step(round, agent, instruction);
                        steps += 1;
                    }
                    Err(SurfaceError::Agent(AgentError::Exhausted(_))) => break,
                    Err(e) => return Err(e.into()),
                }
            }

            debug!(%agent, steps, "agent finished");
            observer.on_round_end(round, steps);
            observer.on_snapshot(round, &self.surface);
        }

        self.status = RunStatus::Done;
        Ok(())
    }
}
