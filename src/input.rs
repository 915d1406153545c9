//! Line-oriented input sources
//!
//! [`LineInput`] is the one primitive every prompt is built on: read a
//! single newline-delimited line. `io::Stdin` locks the shared handle for
//! the duration of one read only, so a console never holds standard input
//! between calls.

use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin, StdinLock};

/// A source of newline-delimited lines
///
/// Lines are raw bytes; the console decodes them, replacing invalid UTF-8
/// so a stray byte is just another wrong answer.
pub trait LineInput {
    /// Append the next line, terminator included, to `buf`
    ///
    /// Returns the number of bytes read. `Ok(0)` means the input is closed.
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize>;
}

impl LineInput for Stdin {
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.lock().read_until(b'\n', buf)
    }
}

impl LineInput for StdinLock<'_> {
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.read_until(b'\n', buf)
    }
}

impl<R: Read> LineInput for BufReader<R> {
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.read_until(b'\n', buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for Cursor<T> {
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.read_until(b'\n', buf)
    }
}

impl LineInput for &[u8] {
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.read_until(b'\n', buf)
    }
}

/// Remove one trailing `\n` or `\r\n` in place
pub(crate) fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
