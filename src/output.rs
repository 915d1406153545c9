//! Colored status messages for the `termio` binary
//!
//! Status lines go to stderr so that stdout only ever carries the answer a
//! script asked for. Coloring honors `colored`'s global override, which the
//! binary sets from the `color` setting.

use colored::{ColoredString, Colorize};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Info,
}

impl Status {
    fn symbol(self) -> &'static str {
        match self {
            Status::Success => "✓",
            Status::Error => "✗",
            Status::Info => "•",
        }
    }

    fn paint(self, text: String) -> ColoredString {
        match self {
            Status::Success => text.green().bold(),
            Status::Error => text.red().bold(),
            Status::Info => text.cyan().bold(),
        }
    }
}

/// Write one status line to `out`
pub fn write_status(out: &mut impl Write, status: Status, message: &str) -> io::Result<()> {
    let line = status.paint(format!("{} {}", status.symbol(), message));
    writeln!(out, "{}", line)
}

fn emit(status: Status, message: &str) {
    // stderr going away leaves nowhere to report the failure
    let _ = write_status(&mut io::stderr().lock(), status, message);
}

/// Print a success message in green to stderr
pub fn success(message: &str) {
    emit(Status::Success, message);
}

/// Print an error message in red to stderr
pub fn error(message: &str) {
    emit(Status::Error, message);
}

/// Print an info message in cyan to stderr
pub fn info(message: &str) {
    emit(Status::Info, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines_without_color() {
        // one test owns the global color override
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_status(&mut out, Status::Success, "done").unwrap();
        write_status(&mut out, Status::Error, "boom").unwrap();
        write_status(&mut out, Status::Info, "note").unwrap();
        colored::control::unset_override();
        assert_eq!(String::from_utf8(out).unwrap(), "✓ done\n✗ boom\n• note\n");
    }
}
