//! The console facade
//!
//! [`Console`] bundles a line source, an output sink and a masked reader,
//! and exposes every printing and prompting operation on top of them.
//! All calls are synchronous: each read blocks until a full line arrives
//! or the input closes.
//!
//! ```no_run
//! use termio::{style, Console};
//!
//! # fn main() -> termio::Result<()> {
//! let mut console = Console::stdio();
//! console.print_line(format!("{}Deploy{}", style::CYAN_BOLD, style::RESET))?;
//! if console.confirm("Continue?", true)? {
//!     let env = console.choose("Target", &["staging", "production"], true)?;
//!     console.print_line(format!("Selected option {:?}", env))?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # End of input
//!
//! A closed input stream is reported as [`ConsoleError::EndOfInput`] and is
//! never confused with an empty line. Repeating prompts stop with that error
//! instead of asking forever.

use crate::config::Settings;
use crate::error::{ConsoleError, Result};
use crate::input::{strip_line_ending, LineInput};
use crate::masked::{MaskedInput, Tty};
use std::fmt::Display;
use std::io::{self, Stdin, Stdout, Write};
use tracing::{debug, trace, warn};
use zeroize::{Zeroize, Zeroizing};

pub struct Console<R, W, M = Tty> {
    input: R,
    output: W,
    masked: M,
    settings: Settings,
}

impl Console<Stdin, Stdout, Tty> {
    /// Console over the process's standard input and output
    pub fn stdio() -> Self {
        Console::new(io::stdin(), io::stdout())
    }
}

impl<R: LineInput, W: Write> Console<R, W, Tty> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            masked: Tty,
            settings: Settings::default(),
        }
    }
}

impl<R, W, M> Console<R, W, M> {
    /// Replace the masked reader used by [`Console::read_password`]
    pub fn with_masked_input<N: MaskedInput>(self, masked: N) -> Console<R, W, N> {
        Console {
            input: self.input,
            output: self.output,
            masked,
            settings: self.settings,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn masked_input(&self) -> &M {
        &self.masked
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: LineInput, W: Write, M: MaskedInput> Console<R, W, M> {
    /// Write `value` with no trailing line break
    pub fn print(&mut self, value: impl Display) -> Result<()> {
        write!(self.output, "{}", value)?;
        Ok(())
    }

    /// Write `value` followed by a line break
    pub fn print_line(&mut self, value: impl Display) -> Result<()> {
        writeln!(self.output, "{}", value)?;
        Ok(())
    }

    /// Push buffered output to the underlying stream
    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }

    /// Write every item in order
    ///
    /// With `line_numbers`, each item gets a 1-based `[n] ` prefix. With
    /// `newline_per_item`, each item ends its own line; otherwise the items
    /// run together on one line. An empty sequence writes nothing.
    pub fn print_list<I>(
        &mut self,
        items: I,
        line_numbers: bool,
        newline_per_item: bool,
    ) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for (index, item) in items.into_iter().enumerate() {
            if line_numbers {
                write!(self.output, "[{}] ", index + 1)?;
            }
            write!(self.output, "{}", item)?;
            if newline_per_item {
                writeln!(self.output)?;
            }
        }
        Ok(())
    }

    /// Write `c` repeated `count` times, for separators and rules
    pub fn print_characters(&mut self, c: char, count: usize, newline: bool) -> Result<()> {
        let mut utf8 = [0u8; 4];
        let encoded = c.encode_utf8(&mut utf8).as_bytes();
        for _ in 0..count {
            self.output.write_all(encoded)?;
        }
        if newline {
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Scroll previous output away with `lines` line breaks
    ///
    /// This does not clear the terminal buffer; it only pushes text up.
    pub fn clear(&mut self, lines: usize) -> Result<()> {
        for _ in 0..lines {
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Print the configured pause message and wait for one line
    pub fn press_enter(&mut self) -> Result<()> {
        let message = self.settings.press_enter_message.clone();
        self.press_enter_with(&message)
    }

    /// Print `message` on its own line and wait for one line, discarding it
    pub fn press_enter_with(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        self.next_line()?;
        Ok(())
    }

    /// Ask a yes/no question
    ///
    /// Prints `"<message> [Y/N]: "` and reads one line. `y` and `n` match
    /// case-insensitively. Any other answer asks again when `repeat` is set,
    /// and returns `false` otherwise.
    pub fn confirm(&mut self, message: &str, repeat: bool) -> Result<bool> {
        let mut attempts = 0u32;
        loop {
            write!(self.output, "{} [Y/N]: ", message)?;
            let answer = self.next_line()?;
            attempts += 1;

            if answer.eq_ignore_ascii_case("y") {
                debug!(attempts, "Confirmed");
                return Ok(true);
            }
            if answer.eq_ignore_ascii_case("n") {
                debug!(attempts, "Declined");
                return Ok(false);
            }

            debug!(attempts, repeat, "Invalid confirmation answer");
            if !repeat {
                return Ok(false);
            }
        }
    }

    /// Ask the user to pick one of `options`
    ///
    /// Prints `"<message> [a,b,c]: "` with the options in order and reads one
    /// line. An answer that exactly equals an option (case and whitespace
    /// included) returns its 1-based position; the first occurrence wins when
    /// options repeat. Otherwise it asks again when `repeat` is set, and
    /// returns `None` when it is not.
    ///
    /// Options are joined with bare commas, so an option that contains a
    /// comma reads ambiguously in the prompt. With no options nothing can
    /// match: a single attempt returns `None` and a repeating prompt keeps
    /// asking until the input closes.
    pub fn choose<S: AsRef<str>>(
        &mut self,
        message: &str,
        options: &[S],
        repeat: bool,
    ) -> Result<Option<usize>> {
        let prompt = choice_prompt(message, options);
        let mut attempts = 0u32;
        loop {
            write!(self.output, "{}", prompt)?;
            let answer = self.next_line()?;
            attempts += 1;

            if let Some(index) = options.iter().position(|option| option.as_ref() == answer) {
                debug!(attempts, choice = index + 1, "Option selected");
                return Ok(Some(index + 1));
            }

            debug!(attempts, repeat, "Answer matched no option");
            if !repeat {
                return Ok(None);
            }
        }
    }

    /// Print `message` (no line break) and read one line
    ///
    /// The terminator is never included. With `trim`, surrounding whitespace
    /// is stripped too. Pass an empty message to read without a prompt.
    pub fn read_line(&mut self, message: &str, trim: bool) -> Result<String> {
        write!(self.output, "{}", message)?;
        let line = self.next_line()?;
        if trim {
            Ok(line.trim().to_string())
        } else {
            Ok(line)
        }
    }

    /// Print `message` (no line break) and read one line without echo
    ///
    /// Fails with [`ConsoleError::UnsupportedTerminal`] before printing or
    /// reading anything when echo cannot be suppressed. The captured text is
    /// wiped from memory when the returned value is dropped, and any
    /// intermediate copy made while trimming is wiped immediately.
    pub fn read_password(&mut self, message: &str, trim: bool) -> Result<Zeroizing<String>> {
        if !self.masked.supports_masking() {
            warn!("Masked input requested but standard input is not a terminal");
            return Err(ConsoleError::UnsupportedTerminal);
        }

        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut raw = self.masked.read_masked().map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => ConsoleError::EndOfInput,
            _ => ConsoleError::Io(e),
        })?;
        strip_line_ending(&mut raw);
        debug!("Read masked input");

        if trim {
            let trimmed = raw.trim().to_string();
            raw.zeroize();
            Ok(Zeroizing::new(trimmed))
        } else {
            Ok(Zeroizing::new(raw))
        }
    }

    /// Flush pending output, then read one line without its terminator
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than failing the read.
    fn next_line(&mut self) -> Result<String> {
        self.output.flush()?;

        let mut bytes = Vec::new();
        let read = self.input.read_line(&mut bytes)?;
        if read == 0 {
            debug!("Input closed");
            return Err(ConsoleError::EndOfInput);
        }
        let mut line = String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
        strip_line_ending(&mut line);
        trace!(bytes = read, "Read line");
        Ok(line)
    }
}

fn choice_prompt<S: AsRef<str>>(message: &str, options: &[S]) -> String {
    let joined = options
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");
    format!("{} [{}]: ", message, joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_choice_prompt_format() {
        assert_eq!(choice_prompt("Pick", &["a", "b", "c"]), "Pick [a,b,c]: ");
        assert_eq!(choice_prompt::<&str>("Pick", &[]), "Pick []: ");
    }

    #[test]
    fn test_print_list_numbered_per_line() {
        let mut c = console("");
        c.print_list(["alpha", "beta", "gamma"], true, true).unwrap();
        assert_eq!(written(c), "[1] alpha\n[2] beta\n[3] gamma\n");
    }

    #[test]
    fn test_print_list_inline_without_numbers() {
        let mut c = console("");
        c.print_list(vec![1, 2, 3], false, false).unwrap();
        assert_eq!(written(c), "123");
    }

    #[test]
    fn test_print_list_empty_is_noop() {
        let mut c = console("");
        c.print_list(Vec::<String>::new(), true, true).unwrap();
        assert_eq!(written(c), "");
    }

    #[test]
    fn test_print_characters_counts() {
        let mut c = console("");
        c.print_characters('=', 0, false).unwrap();
        c.print_characters('-', 5, false).unwrap();
        assert_eq!(written(c), "-----");
    }

    #[test]
    fn test_print_characters_multibyte_with_newline() {
        let mut c = console("");
        c.print_characters('─', 3, true).unwrap();
        assert_eq!(written(c), "───\n");
    }

    #[test]
    fn test_clear_emits_line_breaks() {
        let mut c = console("");
        c.clear(0).unwrap();
        c.clear(3).unwrap();
        assert_eq!(written(c), "\n\n\n");
    }

    #[test]
    fn test_read_line_strips_terminator_only() {
        let mut c = console("  spaced  \r\n");
        assert_eq!(c.read_line("", false).unwrap(), "  spaced  ");
    }

    #[test]
    fn test_empty_line_differs_from_end_of_input() {
        let mut c = console("\n");
        assert_eq!(c.read_line("> ", false).unwrap(), "");
        assert!(matches!(
            c.read_line("> ", false),
            Err(ConsoleError::EndOfInput)
        ));
    }

    #[test]
    fn test_confirm_is_case_insensitive() {
        let mut c = console("Y\nn\n");
        assert!(c.confirm("Sure?", false).unwrap());
        assert!(!c.confirm("Sure?", false).unwrap());
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut c = Console::new(Cursor::new(b"caf\xe9\n".to_vec()), Vec::new());
        assert_eq!(c.read_line("", false).unwrap(), "caf\u{FFFD}");
    }

    #[test]
    fn test_confirm_does_not_trim() {
        let mut c = console(" y\n");
        assert!(!c.confirm("Sure?", false).unwrap());
    }

    #[test]
    fn test_choose_first_duplicate_wins() {
        let mut c = console("b\n");
        assert_eq!(c.choose("Pick", &["a", "b", "b"], false).unwrap(), Some(2));
    }

    #[test]
    fn test_with_settings_changes_pause_message() {
        let settings = Settings {
            press_enter_message: "Hit it".to_string(),
            ..Settings::default()
        };
        let mut c = console("\n").with_settings(settings);
        c.press_enter().unwrap();
        assert_eq!(written(c), "Hit it\n");
    }
}
