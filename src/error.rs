//! Error types for console operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Standard input is not a terminal that can suppress echo
    #[error("This terminal does not support masked input")]
    UnsupportedTerminal,

    /// The input stream closed before a line was available
    #[error("No more input available")]
    EndOfInput,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
