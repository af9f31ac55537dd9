//! Cardinal heading shared by every agent.
//!
//! Rotation is cyclic, not numeric: turning right walks
//! North → East → South → West → North, turning left walks the reverse.
//! Unknown symbols are rejected by [`Heading::from_symbol`].

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// The direction an agent is facing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order starting from North.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Rotate 90° counter-clockwise.
    #[inline]
    pub fn turn_left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::East  => Heading::North,
            Heading::South => Heading::East,
            Heading::West  => Heading::South,
        }
    }

    /// Rotate 90° clockwise.
    #[inline]
    pub fn turn_right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East  => Heading::South,
            Heading::South => Heading::West,
            Heading::West  => Heading::North,
        }
    }

    /// Unit step `(dx, dy)` for one move forward.
    #[inline]
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::East  => (1, 0),
            Heading::South => (0, -1),
            Heading::West  => (-1, 0),
        }
    }

    /// Single-letter wire symbol.
    pub fn symbol(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East  => 'E',
            Heading::South => 'S',
            Heading::West  => 'W',
        }
    }

    /// Decode a wire symbol.  Matching is case-sensitive.
    pub fn from_symbol(symbol: char) -> Result<Heading, CoreError> {
        match symbol {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            other => Err(CoreError::InvalidHeadingSymbol(other.to_string())),
        }
    }
}

impl FromStr for Heading {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Heading::from_symbol(c),
            _ => Err(CoreError::InvalidHeadingSymbol(s.to_owned())),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
