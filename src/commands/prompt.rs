//! Interactive commands
//!
//! The console passed in draws the prompt; `answer` receives only the
//! result so scripts can capture it.

use super::{CommandResult, EXIT_NEGATIVE, EXIT_SUCCESS};
use crate::console::Console;
use crate::input::LineInput;
use crate::masked::MaskedInput;
use crate::output;
use std::io::Write;
use tracing::info;

pub fn handle_pause<R: LineInput, W: Write, M: MaskedInput>(
    console: &mut Console<R, W, M>,
    message: Option<&str>,
) -> CommandResult {
    match message {
        Some(message) => console.press_enter_with(message)?,
        None => console.press_enter()?,
    }
    Ok(EXIT_SUCCESS)
}

pub fn handle_confirm<R: LineInput, W: Write, M: MaskedInput>(
    console: &mut Console<R, W, M>,
    message: &str,
    once: bool,
) -> CommandResult {
    if console.confirm(message, !once)? {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_NEGATIVE)
    }
}

pub fn handle_choose<R: LineInput, W: Write, M: MaskedInput>(
    console: &mut Console<R, W, M>,
    answer: &mut impl Write,
    message: &str,
    options: &[String],
    once: bool,
) -> CommandResult {
    match console.choose(message, options, !once)? {
        Some(position) => {
            writeln!(answer, "{}", position)?;
            Ok(EXIT_SUCCESS)
        }
        None => {
            info!("No valid option selected");
            output::info("No option selected");
            Ok(EXIT_NEGATIVE)
        }
    }
}

pub fn handle_read<R: LineInput, W: Write, M: MaskedInput>(
    console: &mut Console<R, W, M>,
    answer: &mut impl Write,
    message: &str,
    trim: bool,
) -> CommandResult {
    let line = console.read_line(message, trim)?;
    writeln!(answer, "{}", line)?;
    Ok(EXIT_SUCCESS)
}

pub fn handle_password<R: LineInput, W: Write, M: MaskedInput>(
    console: &mut Console<R, W, M>,
    answer: &mut impl Write,
    message: &str,
    trim: bool,
) -> CommandResult {
    let password = console.read_password(message, trim)?;
    writeln!(answer, "{}", password.as_str())?;
    answer.flush()?;
    Ok(EXIT_SUCCESS)
}
