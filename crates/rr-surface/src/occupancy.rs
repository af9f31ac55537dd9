//! A validator over "everyone except the agent that is moving".
//!
//! `Surface::step_agent` needs `&mut` to one agent and `&` to all the others
//! at the same time.  Splitting the agent slice around the moving agent gives
//! exactly that, and this view turns the two halves into a
//! [`PositionValidator`].  A single step never lands on the cell it started
//! from, so the mover can be left out.

use rr_agent::{Agent, PositionValidator};
use rr_core::{Bounds, Coordinate, PositionError};

/// Bounds plus the agents before and after the moving one.
pub struct Occupancy<'a> {
    bounds: Bounds,
    before: &'a [Agent],
    after:  &'a [Agent],
}

impl<'a> Occupancy<'a> {
    pub fn new(bounds: Bounds, before: &'a [Agent], after: &'a [Agent]) -> Self {
        Self { bounds, before, after }
    }

    /// View over a whole agent list (nobody excluded).
    pub fn all(bounds: Bounds, agents: &'a [Agent]) -> Self {
        Self { bounds, before: agents, after: &[] }
    }

    /// The agent standing at `position`, if any.
    pub fn occupant(&self, position: Coordinate) -> Option<&'a Agent> {
        self.before
            .iter()
            .chain(self.after.iter())
            .find(|a| a.position() == position)
    }
}

impl PositionValidator for Occupancy<'_> {
    fn validate(&self, position: Coordinate) -> Result<(), PositionError> {
        if !self.bounds.contains(position) {
            return Err(PositionError::out_of_bounds(position));
        }
        if self.occupant(position).is_some() {
            return Err(PositionError::occupied(position));
        }
        Ok(())
    }
}
