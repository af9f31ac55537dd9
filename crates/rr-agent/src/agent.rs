//! The agent state machine.
//!
//! # States
//!
//! An agent is a pose (`position`, `heading`) plus an immutable program and
//! a cursor into it:
//!
//! ```text
//!   instructions: [ L  F  L  F  R  F ]
//!                   ───────  ──────────
//!                  processed   pending
//!                          ^ cursor
//! ```
//!
//! `step_once` applies `instructions[cursor]` and advances the cursor only on
//! success.  A rejected move leaves both cursor and position where they were,
//! so the blocked instruction stays at the head of `pending` and can be
//! retried on a later round.

use rr_core::{AgentId, Coordinate, Heading, Instruction, PositionError};

use crate::{AgentError, AgentResult, AgentSpec, PositionValidator};

// ── AgentState ────────────────────────────────────────────────────────────────

/// Read-only snapshot of one agent, used for results and trace output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub id:        AgentId,
    pub position:  Coordinate,
    pub heading:   Heading,
    /// Instructions consumed so far (== cursor).
    pub processed: usize,
    /// Instructions still waiting.
    pub pending:   usize,
}

// ── Agent ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    id:           AgentId,
    position:     Coordinate,
    heading:      Heading,
    instructions: Vec<Instruction>,
    /// Invariant: `cursor <= instructions.len()`, never decreases.
    cursor:       usize,
}

impl Agent {
    /// Build an agent from `spec`, rejecting a starting position that
    /// `validator` refuses.
    pub fn new<V: PositionValidator>(id: AgentId, spec: AgentSpec, validator: &V) -> AgentResult<Self> {
        validator.validate(spec.position)?;
        Ok(Self {
            id,
            position:     spec.position,
            heading:      spec.heading,
            instructions: spec.instructions,
            cursor:       0,
        })
    }

    /// Execute the next pending instruction.
    ///
    /// Returns the instruction that was applied.  Fails with
    /// [`AgentError::Exhausted`] when nothing is pending, or with
    /// [`AgentError::Position`] when a move is rejected; in both cases the
    /// agent is left untouched.
    pub fn step_once<V: PositionValidator>(&mut self, validator: &V) -> AgentResult<Instruction> {
        let instruction = *self
            .instructions
            .get(self.cursor)
            .ok_or(AgentError::Exhausted(self.id))?;

        match instruction {
            Instruction::TurnLeft  => self.heading = self.heading.turn_left(),
            Instruction::TurnRight => self.heading = self.heading.turn_right(),
            Instruction::MoveForward => {
                let candidate = self
                    .position
                    .advanced(self.heading)
                    .ok_or(PositionError::out_of_bounds(self.position))?;
                validator.validate(candidate)?;
                self.position = candidate;
            }
        }

        self.cursor += 1;
        Ok(instruction)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Coordinate {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The whole program, processed and pending.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Instructions already executed.
    pub fn processed(&self) -> &[Instruction] {
        &self.instructions[..self.cursor]
    }

    /// Instructions not yet executed, starting with the next one.
    pub fn pending(&self) -> &[Instruction] {
        &self.instructions[self.cursor..]
    }

    /// The instruction `step_once` would apply next.
    pub fn next_instruction(&self) -> Option<Instruction> {
        self.instructions.get(self.cursor).copied()
    }

    /// `true` once every instruction has been executed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.instructions.len()
    }

    pub fn state(&self) -> AgentState {
        AgentState {
            id:        self.id,
            position:  self.position,
            heading:   self.heading,
            processed: self.cursor,
            pending:   self.instructions.len() - self.cursor,
        }
    }
}
