//! Core error types.
//!
//! [`PositionError`] is shared by `rr-agent` and `rr-surface`: "out of
//! bounds" and "occupied" are one error tagged with a [`PositionErrorKind`].

use std::fmt;

use thiserror::Error;

use crate::Coordinate;

/// Errors produced while decoding symbols or building core values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("'{0}' is not a valid heading")]
    InvalidHeadingSymbol(String),

    #[error("'{0}' is not a valid instruction")]
    InvalidInstructionSymbol(char),

    #[error("surface coordinates are not valid: {0}")]
    InvalidBounds(Coordinate),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rr-core`.
pub type CoreResult<T> = Result<T, CoreError>;

// ── PositionError ─────────────────────────────────────────────────────────────

/// Why a position was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PositionErrorKind {
    OutOfBounds,
    Occupied,
}

impl fmt::Display for PositionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionErrorKind::OutOfBounds => f.write_str("position outside the surface limits"),
            PositionErrorKind::Occupied    => f.write_str("position occupied by another agent"),
        }
    }
}

/// A position that failed surface validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}: {position}")]
pub struct PositionError {
    pub kind:     PositionErrorKind,
    pub position: Coordinate,
}

impl PositionError {
    pub fn out_of_bounds(position: Coordinate) -> Self {
        Self { kind: PositionErrorKind::OutOfBounds, position }
    }

    pub fn occupied(position: Coordinate) -> Self {
        Self { kind: PositionErrorKind::Occupied, position }
    }
}
