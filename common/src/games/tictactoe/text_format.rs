use crate::line_io::LineReader;

use super::error::GameError;

/// Line separating the sections of a serialized game.
pub const SEPARATOR: &str = "----------------";

pub(crate) fn expect_line<R: LineReader>(
    reader: &mut R,
    expected: &'static str,
) -> Result<String, GameError> {
    reader
        .next_line()?
        .ok_or(GameError::UnexpectedEndOfInput { expected })
}

pub(crate) fn expect_separator<R: LineReader>(reader: &mut R) -> Result<(), GameError> {
    let line = expect_line(reader, "section separator")?;
    if line != SEPARATOR {
        return Err(GameError::malformed(line, "expected a section separator"));
    }
    Ok(())
}

pub(crate) fn format_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

pub(crate) fn read_bool<R: LineReader>(
    reader: &mut R,
    expected: &'static str,
) -> Result<bool, GameError> {
    let line = expect_line(reader, expected)?;
    let value = line.trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(GameError::malformed(line, "expected True or False"))
    }
}
