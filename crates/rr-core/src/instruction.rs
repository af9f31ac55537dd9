//! Agent instructions and the letter used for "move forward".
//!
//! Deployments disagree on the move-forward letter (`F` or `M`), and the wire
//! format is not self-describing, so the letter is an explicit
//! [`MoveSymbol`] chosen per run.  `F` is the default.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Which letter encodes [`Instruction::MoveForward`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveSymbol {
    #[default]
    F,
    M,
}

impl MoveSymbol {
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            MoveSymbol::F => 'F',
            MoveSymbol::M => 'M',
        }
    }
}

impl fmt::Display for MoveSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for MoveSymbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(MoveSymbol::F),
            "M" => Ok(MoveSymbol::M),
            other => Err(CoreError::Config(format!(
                "unknown move symbol {other:?}: expected \"F\" or \"M\""
            ))),
        }
    }
}

/// One atomic command.  Closed set.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    TurnLeft,
    TurnRight,
    MoveForward,
}

impl Instruction {
    /// Decode one instruction letter.  `L` and `R` are fixed; the
    /// move-forward letter comes from `move_symbol`.
    pub fn from_symbol(symbol: char, move_symbol: MoveSymbol) -> Result<Instruction, CoreError> {
        match symbol {
            'L' => Ok(Instruction::TurnLeft),
            'R' => Ok(Instruction::TurnRight),
            c if c == move_symbol.as_char() => Ok(Instruction::MoveForward),
            other => Err(CoreError::InvalidInstructionSymbol(other)),
        }
    }

    /// Decode a whole program line.
    pub fn parse_program(line: &str, move_symbol: MoveSymbol) -> Result<Vec<Instruction>, CoreError> {
        line.chars()
            .map(|c| Instruction::from_symbol(c, move_symbol))
            .collect()
    }

    /// Encode back to a letter.
    pub fn symbol(self, move_symbol: MoveSymbol) -> char {
        match self {
            Instruction::TurnLeft    => 'L',
            Instruction::TurnRight   => 'R',
            Instruction::MoveForward => move_symbol.as_char(),
        }
    }

    /// `true` only for [`Instruction::MoveForward`].
    #[inline]
    pub fn is_move(self) -> bool {
        matches!(self, Instruction::MoveForward)
    }
}
