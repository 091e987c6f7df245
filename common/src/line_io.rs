//! Sequential line sinks and sources used by the text save format.
//!
//! Any [`Write`] is a [`LineWriter`] and any [`BufRead`] is a [`LineReader`],
//! so game state can be written to files, stdout or an in-memory buffer alike.

use std::io::{self, BufRead, Write};

pub trait LineWriter {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

pub trait LineReader {
    /// Returns `Ok(None)` once the input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<W: Write> LineWriter for W {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self, "{}", line)
    }
}

impl<R: BufRead> LineReader for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        if self.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }

        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }
        Ok(Some(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_write_line_appends_newline() {
        let mut out: Vec<u8> = Vec::new();
        out.write_line("Ann:X").unwrap();
        out.write_line("").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Ann:X\n\n");
    }

    #[test]
    fn test_next_line_strips_line_endings() {
        let mut input = Cursor::new("first\r\nsecond\nlast");
        assert_eq!(input.next_line().unwrap(), Some("first".to_string()));
        assert_eq!(input.next_line().unwrap(), Some("second".to_string()));
        assert_eq!(input.next_line().unwrap(), Some("last".to_string()));
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn test_next_line_keeps_inner_whitespace() {
        let mut input = Cursor::new(" : :X\n");
        assert_eq!(input.next_line().unwrap(), Some(" : :X".to_string()));
    }
}
