//! Decoded agent description.

use rr_core::{Coordinate, Heading, Instruction};

/// Starting pose plus program for one agent, as produced by the request
/// decoder.  Not yet validated against any surface.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSpec {
    pub position:     Coordinate,
    pub heading:      Heading,
    pub instructions: Vec<Instruction>,
}

impl AgentSpec {
    pub fn new(position: Coordinate, heading: Heading, instructions: Vec<Instruction>) -> Self {
        Self { position, heading, instructions }
    }
}
