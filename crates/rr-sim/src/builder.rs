//! Fluent builder for constructing a [`Sim`].

use rr_agent::AgentSpec;
use rr_core::{Coordinate, Policy, RunConfig};
use rr_surface::Surface;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - the surface's top-right corner
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                     |
/// |-----------------|-----------------------------|
/// | `.policy(p)`    | `Policy::RoundRobin`        |
/// | `.config(&c)`   | `RunConfig::default()`      |
/// | `.agent(s)`     | no agents                   |
/// | `.agents(iter)` | no agents                   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(Coordinate::new(5, 5))
///     .agent(AgentSpec::new(Coordinate::new(1, 2), Heading::North, program))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    top_right: Coordinate,
    policy:    Policy,
    agents:    Vec<AgentSpec>,
}

impl SimBuilder {
    pub fn new(top_right: Coordinate) -> Self {
        Self {
            top_right,
            policy: Policy::default(),
            agents: Vec::new(),
        }
    }

    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Take the scheduling policy from a run configuration.
    pub fn config(self, config: &RunConfig) -> Self {
        self.policy(config.policy)
    }

    /// Append one agent.  Agents take turns in the order they are added.
    pub fn agent(mut self, spec: AgentSpec) -> Self {
        self.agents.push(spec);
        self
    }

    pub fn agents<I: IntoIterator<Item = AgentSpec>>(mut self, specs: I) -> Self {
        self.agents.extend(specs);
        self
    }

    /// Build the surface and place every agent in order.
    ///
    /// Fails on the first invalid bound or starting position; no partial
    /// simulation is returned.
    pub fn build(self) -> SimResult<Sim> {
        let mut surface = Surface::new(self.top_right)?;
        for spec in self.agents {
            surface.place_agent(spec)?;
        }

        Ok(Sim::from_surface(surface, self.policy))
    }
}
