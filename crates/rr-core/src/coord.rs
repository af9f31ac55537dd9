//! Grid coordinates and the bounded rectangle agents live on.
//!
//! The origin corner is always `(0, 0)`; a [`Bounds`] only records the
//! top-right corner.  Coordinates are `i64` so decoded requests can carry
//! negative values that validation then rejects with a precise message.

use std::fmt;

use crate::{CoreError, Heading};

// ── Coordinate ────────────────────────────────────────────────────────────────

/// An integer point on the grid.
///
/// Immutable value type: moving produces a new `Coordinate`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit along `heading`.
    ///
    /// Returns `None` only if the step would overflow `i64`.
    pub fn advanced(self, heading: Heading) -> Option<Coordinate> {
        let (dx, dy) = heading.delta();
        Some(Coordinate {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// The closed rectangle `[0, max_x] x [0, max_y]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    max_x: i64,
    max_y: i64,
}

impl Bounds {
    /// Build bounds from the top-right corner.
    ///
    /// Both coordinates must be strictly positive.
    pub fn new(top_right: Coordinate) -> Result<Self, CoreError> {
        if top_right.x <= 0 || top_right.y <= 0 {
            return Err(CoreError::InvalidBounds(top_right));
        }
        Ok(Self { max_x: top_right.x, max_y: top_right.y })
    }

    #[inline]
    pub fn max_x(&self) -> i64 {
        self.max_x
    }

    #[inline]
    pub fn max_y(&self) -> i64 {
        self.max_y
    }

    #[inline]
    pub fn top_right(&self) -> Coordinate {
        Coordinate::new(self.max_x, self.max_y)
    }

    /// `true` if `c` lies inside the closed rectangle.
    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        (0..=self.max_x).contains(&c.x) && (0..=self.max_y).contains(&c.y)
    }
}
