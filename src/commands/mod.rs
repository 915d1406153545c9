//! Command handling and routing
//!
//! Handlers are organized by what they do with the terminal:
//! - `display`: output-only commands (print, list, rule, clear, styles)
//! - `prompt`: interactive commands that read an answer
//!
//! Every handler returns the process exit code on success. Failures are
//! mapped to exit codes in [`exit_code`].

mod display;
mod prompt;

pub use display::{handle_clear, handle_list, handle_print, handle_rule, handle_styles};
pub use prompt::{handle_choose, handle_confirm, handle_password, handle_pause, handle_read};

use crate::cli::Command;
use crate::completions;
use crate::config::Settings;
use crate::console::Console;
use crate::error::ConsoleError;
use crate::output;
use std::io;
use thiserror::Error;
use tracing::error;

pub const EXIT_SUCCESS: i32 = 0;
/// "No" to a confirmation, or no valid selection
pub const EXIT_NEGATIVE: i32 = 1;
pub const EXIT_FAILURE: i32 = 2;
pub const EXIT_UNSUPPORTED_TERMINAL: i32 = 3;
pub const EXIT_END_OF_INPUT: i32 = 4;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error("Unknown style '{0}' (run `termio styles` to list them)")]
    UnknownStyle(String),
}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self {
        CommandError::Console(ConsoleError::Io(e))
    }
}

pub type CommandResult = Result<i32, CommandError>;

/// Exit code reported for a failed command
pub fn exit_code(error: &CommandError) -> i32 {
    match error {
        CommandError::Console(ConsoleError::UnsupportedTerminal) => EXIT_UNSUPPORTED_TERMINAL,
        CommandError::Console(ConsoleError::EndOfInput) => EXIT_END_OF_INPUT,
        CommandError::Console(ConsoleError::Io(_)) | CommandError::UnknownStyle(_) => EXIT_FAILURE,
    }
}

/// Route CLI commands to their handlers and return the exit code
///
/// Output commands write to stdout. Prompt commands draw on stderr and
/// print only the answer to stdout.
pub fn handle_command(command: Command, settings: &Settings) -> i32 {
    let mut screen = Console::stdio().with_settings(settings.clone());
    let mut prompter = Console::new(io::stdin(), io::stderr()).with_settings(settings.clone());
    let mut answer = io::stdout();

    let result = match command {
        Command::Print {
            text,
            no_newline,
            style,
        } => handle_print(&mut screen, &text, no_newline, style.as_deref()),
        Command::List {
            items,
            numbers,
            inline,
        } => handle_list(&mut screen, &items, numbers, inline),
        Command::Rule {
            character,
            width,
            no_newline,
        } => handle_rule(&mut screen, character, width, no_newline),
        Command::Clear { lines } => handle_clear(&mut screen, lines),
        Command::Styles => handle_styles(&mut screen),
        Command::Pause { message } => handle_pause(&mut prompter, message.as_deref()),
        Command::Confirm { message, once } => handle_confirm(&mut prompter, &message, once),
        Command::Choose {
            message,
            options,
            once,
        } => handle_choose(&mut prompter, &mut answer, &message, &options, once),
        Command::Read { message, trim } => {
            handle_read(&mut prompter, &mut answer, message.as_deref().unwrap_or(""), trim)
        }
        Command::Password { message, trim } => {
            handle_password(&mut prompter, &mut answer, &message, trim)
        }
        Command::Completions { shell } => {
            completions::handle_completions(shell);
            Ok(EXIT_SUCCESS)
        }
    };
    let result = result.and_then(|code| {
        screen.flush()?;
        Ok(code)
    });

    match result {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Command failed");
            output::error(&e.to_string());
            exit_code(&e)
        }
    }
}
