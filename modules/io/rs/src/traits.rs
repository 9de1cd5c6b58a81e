use eyre::Result;
use std::io::{BufRead, Seek};

/// A rewindable source of text lines. Modeled after the `BufRead::read_line` API in the std.
///
/// Implemented for every `BufRead + Seek`, which covers both readers opened from a path
/// (`BufReader<File>`) and caller-provided handles (`Cursor`, `BufReader<File>`, etc.).
pub trait LineSource {
    /// Append the next line, including the line terminator, to the buffer.
    /// Returns the number of bytes read, 0 means the end of the input.
    fn read_line(&mut self, into: &mut String) -> Result<usize>;

    /// Move back to the start of the input so that it can be read again.
    fn rewind(&mut self) -> Result<()>;
}

impl<T: BufRead + Seek> LineSource for T {
    fn read_line(&mut self, into: &mut String) -> Result<usize> {
        Ok(BufRead::read_line(self, into)?)
    }

    fn rewind(&mut self) -> Result<()> {
        Seek::rewind(self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cursor_line_source() -> Result<()> {
        let mut source = Cursor::new("first\nsecond\n");
        let mut buffer = String::new();

        assert_eq!(LineSource::read_line(&mut source, &mut buffer)?, 6);
        assert_eq!(LineSource::read_line(&mut source, &mut buffer)?, 7);
        assert_eq!(buffer, "first\nsecond\n");
        assert_eq!(LineSource::read_line(&mut source, &mut buffer)?, 0);

        LineSource::rewind(&mut source)?;
        buffer.clear();
        LineSource::read_line(&mut source, &mut buffer)?;
        assert_eq!(buffer, "first\n");
        Ok(())
    }
}
