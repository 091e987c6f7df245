use std::fmt;
use std::io;

use super::types::{GRID_SIZE, SYMBOL_ALPHABET, Symbol};

/// Coarse classification of a [`GameError`], for callers that only need to
/// decide how to react (reprompt, start over, abort).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Range,
    State,
    Format,
    EndOfInput,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug)]
pub enum GameError {
    BlankName,
    MultilineName(String),
    DuplicateName(String),
    InvalidSymbol(char),
    DuplicateSymbol(Symbol),
    CoordinateOutOfRange { axis: Axis, value: usize },
    CellOccupied { x: usize, y: usize },
    GameAlreadyOver,
    MalformedLine { line: String, reason: &'static str },
    UnexpectedEndOfInput { expected: &'static str },
    Io(io::Error),
}

impl GameError {
    pub(crate) fn malformed(line: impl Into<String>, reason: &'static str) -> Self {
        GameError::MalformedLine {
            line: line.into(),
            reason,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::BlankName
            | GameError::MultilineName(_)
            | GameError::DuplicateName(_)
            | GameError::InvalidSymbol(_)
            | GameError::DuplicateSymbol(_) => ErrorKind::Validation,
            GameError::CoordinateOutOfRange { .. } => ErrorKind::Range,
            GameError::CellOccupied { .. } | GameError::GameAlreadyOver => ErrorKind::State,
            GameError::MalformedLine { .. } => ErrorKind::Format,
            GameError::UnexpectedEndOfInput { .. } => ErrorKind::EndOfInput,
            GameError::Io(_) => ErrorKind::Io,
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BlankName => write!(f, "Player name must not be empty"),
            GameError::MultilineName(name) => {
                write!(f, "Player name {:?} must fit on a single line", name)
            }
            GameError::DuplicateName(name) => {
                write!(f, "Both players are named {:?}, names must differ", name)
            }
            GameError::InvalidSymbol(symbol) => write!(
                f,
                "Symbol {:?} is not valid, must be one of {:?}",
                symbol, SYMBOL_ALPHABET
            ),
            GameError::DuplicateSymbol(symbol) => {
                write!(f, "Both players use symbol {}", symbol)
            }
            GameError::CoordinateOutOfRange { axis, value } => write!(
                f,
                "{} coordinate {} is out of the grid, must be between 0 and {}",
                axis,
                value,
                GRID_SIZE - 1
            ),
            GameError::CellOccupied { x, y } => write!(f, "Cell ({}, {}) is not empty", x, y),
            GameError::GameAlreadyOver => write!(f, "Game is already over"),
            GameError::MalformedLine { line, reason } => {
                write!(f, "Malformed line {:?}: {}", line, reason)
            }
            GameError::UnexpectedEndOfInput { expected } => {
                write!(f, "Input ended while reading the {}", expected)
            }
            GameError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}
