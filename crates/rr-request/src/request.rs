//! Decoded request.

use rr_agent::AgentSpec;
use rr_core::Coordinate;
use rr_sim::SimBuilder;

/// A surface corner plus agents in input order.  Nothing here has been
/// validated against the surface yet; that happens in
/// [`SimBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub top_right: Coordinate,
    pub agents:    Vec<AgentSpec>,
}

impl Request {
    /// Seed a [`SimBuilder`] with this request's surface and agents.
    pub fn into_builder(self) -> SimBuilder {
        SimBuilder::new(self.top_right).agents(self.agents)
    }
}
