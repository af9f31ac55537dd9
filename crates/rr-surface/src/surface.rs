//! The `Surface` struct: bounds plus the agents placed on it.

use rr_agent::{Agent, AgentSpec, AgentState, PositionValidator};
use rr_core::{AgentId, Bounds, Coordinate, Instruction, PositionError};

use crate::{Occupancy, SurfaceError, SurfaceResult};

/// A bounded rectangular grid with its origin at `(0, 0)`.
///
/// Owns every agent placed on it.  A surface lives for one simulation run
/// and is never shared between runs.
#[derive(Debug, Clone)]
pub struct Surface {
    bounds: Bounds,
    /// Insertion-ordered; `agents[i].id() == AgentId(i)`.
    agents: Vec<Agent>,
}

impl Surface {
    /// Create an empty surface whose top-right corner is `top_right`.
    ///
    /// Fails with [`SurfaceError::InvalidBounds`] unless both coordinates are
    /// strictly positive.
    pub fn new(top_right: Coordinate) -> SurfaceResult<Self> {
        let bounds = Bounds::new(top_right).map_err(|_| SurfaceError::InvalidBounds(top_right))?;
        Ok(Self { bounds, agents: Vec::new() })
    }

    /// Check that an agent could be placed at `position` right now.
    ///
    /// Pure query: out-of-bounds is reported before occupancy.
    pub fn validate(&self, position: Coordinate) -> Result<(), PositionError> {
        Occupancy::all(self.bounds, &self.agents).validate(position)
    }

    /// Validate `spec.position`, then append a new agent.
    ///
    /// Returns the new agent's id, which is also its turn order.
    pub fn place_agent(&mut self, spec: AgentSpec) -> SurfaceResult<AgentId> {
        self.validate(spec.position)?;
        let id = AgentId::try_from(self.agents.len()).map_err(|_| SurfaceError::TooManyAgents)?;
        let agent = Agent::new(id, spec, &Occupancy::all(self.bounds, &self.agents))?;
        self.agents.push(agent);
        Ok(id)
    }

    /// Run one `step_once` for `id`, validating against everyone else.
    pub fn step_agent(&mut self, id: AgentId) -> SurfaceResult<Instruction> {
        if id.index() >= self.agents.len() {
            return Err(SurfaceError::AgentNotFound(id));
        }
        let (before, rest) = self.agents.split_at_mut(id.index());
        let (agent, after) = rest
            .split_first_mut()
            .ok_or(SurfaceError::AgentNotFound(id))?;
        let others = Occupancy::new(self.bounds, before, after);
        Ok(agent.step_once(&others)?)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// All agents in insertion order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Iterator over all `AgentId`s in turn order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// `true` if any agent still has unexecuted instructions.
    pub fn has_pending(&self) -> bool {
        self.agents.iter().any(|a| !a.is_exhausted())
    }

    /// Total instructions across all agents, processed or not.
    pub fn total_instructions(&self) -> usize {
        self.agents.iter().map(|a| a.instructions().len()).sum()
    }

    /// Snapshot of every agent in insertion order.
    pub fn states(&self) -> Vec<AgentState> {
        self.agents.iter().map(Agent::state).collect()
    }
}

impl PositionValidator for Surface {
    fn validate(&self, position: Coordinate) -> Result<(), PositionError> {
        Surface::validate(self, position)
    }
}
