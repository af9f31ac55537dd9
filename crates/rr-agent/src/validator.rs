//! The position-checking capability an agent borrows from its surface.
//!
//! # Pluggability
//!
//! `rr-surface` implements this for the full surface and for a per-step
//! view that excludes the moving agent.  Tests implement it directly to
//! exercise the agent in isolation.

use rr_core::{Bounds, Coordinate, PositionError};

/// Accepts or rejects a candidate position.
///
/// Implementations must be pure queries: checking a position never changes
/// what a later check returns.
pub trait PositionValidator {
    /// `Ok(())` if an agent may stand at `position`.
    ///
    /// Out-of-bounds is reported before occupancy.
    fn validate(&self, position: Coordinate) -> Result<(), PositionError>;
}

/// Bounds alone: an empty surface.
impl PositionValidator for Bounds {
    fn validate(&self, position: Coordinate) -> Result<(), PositionError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(PositionError::out_of_bounds(position))
        }
    }
}

impl<V: PositionValidator + ?Sized> PositionValidator for &V {
    fn validate(&self, position: Coordinate) -> Result<(), PositionError> {
        (**self).validate(position)
    }
}
