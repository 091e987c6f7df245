use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::GameError;

pub const GRID_SIZE: usize = 3;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Every character a player may mark the grid with.
pub const SYMBOL_ALPHABET: [char; 2] = ['X', 'O'];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::X => SYMBOL_ALPHABET[0],
            Symbol::O => SYMBOL_ALPHABET[1],
        }
    }

    pub fn opponent(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = GameError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'X' => Ok(Symbol::X),
            'O' => Ok(Symbol::O),
            other => Err(GameError::InvalidSymbol(other)),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Result of a successful placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The symbol just placed completed a line.
    Winner(Symbol),
    Draw,
    Continue,
}

/// Who opens a freshly constructed game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    #[default]
    Random,
    /// The first named player (always 'X') moves first.
    PlayerOne,
}
