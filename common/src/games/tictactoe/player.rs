use std::fmt;

use crate::line_io::{LineReader, LineWriter};

use super::error::GameError;
use super::text_format::expect_line;
use super::types::Symbol;

/// A named participant and the symbol they mark the grid with.
///
/// Immutable once built; every constructor runs the same validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: char) -> Result<Self, GameError> {
        let symbol = Symbol::try_from(symbol)?;
        Self::with_symbol(name, symbol)
    }

    pub fn with_symbol(name: impl Into<String>, symbol: Symbol) -> Result<Self, GameError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, symbol })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn serialize<W: LineWriter>(&self, writer: &mut W) -> Result<(), GameError> {
        writer.write_line(&format!("{}:{}", self.name, self.symbol))?;
        Ok(())
    }

    /// Reads one `name:symbol` line. The name may itself contain ':', the
    /// symbol is whatever follows the last one.
    pub fn deserialize<R: LineReader>(reader: &mut R) -> Result<Self, GameError> {
        let line = expect_line(reader, "player line")?;

        let Some((name, symbol)) = line.rsplit_once(':') else {
            return Err(GameError::malformed(&line, "expected `name:symbol`"));
        };
        if name.is_empty() {
            return Err(GameError::malformed(&line, "player name is empty"));
        }

        let mut chars = symbol.chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            return Err(GameError::malformed(&line, "symbol must be a single character"));
        };

        Player::new(name, symbol)
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), GameError> {
    if name.trim().is_empty() {
        return Err(GameError::BlankName);
    }
    if name.contains(['\n', '\r']) {
        return Err(GameError::MultilineName(name.to_string()));
    }
    Ok(())
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.symbol)
    }
}
