//! Echo-suppressed input for passwords
//!
//! [`Tty`] reads through `rpassword`, which turns terminal echo off for the
//! duration of one line and restores it before returning. Callers never get
//! a silent fallback to visible input: when standard input is not a
//! terminal, [`MaskedInput::supports_masking`] reports `false` and the
//! console refuses to read.

use std::io::{self, IsTerminal};

/// A source of lines read without echoing typed characters
pub trait MaskedInput {
    /// Whether echo can be suppressed right now
    fn supports_masking(&self) -> bool;

    /// Read one line with echo disabled, terminator excluded
    fn read_masked(&mut self) -> io::Result<String>;
}

/// The controlling terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct Tty;

impl MaskedInput for Tty {
    fn supports_masking(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_masked(&mut self) -> io::Result<String> {
        rpassword::read_password()
    }
}
