//! termio library
//!
//! Small terminal I/O helpers: ANSI style constants, printing helpers,
//! yes/no and multiple-choice prompts, line input and masked password
//! input. Everything is synchronous and goes through [`Console`].
//!
//! The `termio` binary wraps the same operations for shell scripts.

pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod logging;
pub mod masked;
pub mod output;
pub mod style;

pub use config::Settings;
pub use console::Console;
pub use error::{ConsoleError, Result};
pub use input::LineInput;
pub use masked::{MaskedInput, Tty};
