//! Line-oriented player input
//!
//! The game pulls one line per turn from an `InputSource`, which lets a
//! console, a pipe, or a scripted test sequence drive the same loop.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Pull-based source of input lines
pub trait InputSource {
    /// Next line without its line terminator, or `None` at end of input
    ///
    /// # Errors
    /// Returns an I/O error if the underlying reader fails.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader (stdin, a file, a `Cursor`)
pub struct LineReader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineReader<R> {
    /// Bytes that are not UTF-8 are replaced, so such a line reaches the
    /// game as a guess with invalid letters rather than as a read error.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Fixed sequence of lines, for tests and scripted play
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
