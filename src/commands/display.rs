//! Output-only commands

use super::{CommandError, CommandResult, EXIT_SUCCESS};
use crate::console::Console;
use crate::input::LineInput;
use crate::masked::MaskedInput;
use crate::style;
use std::io::Write;

pub fn handle_print<R: LineInput, W: Write, M: MaskedInput>(
    console: &mut Console<R, W, M>,
    text: &[String],
    no_newline: bool,
    style_name: Option<&str>,
) -> CommandResult {
    let mut line = text.join(" ");
    if let Some(name) = style_name {
        let code = style::lookup(name).ok_or_else(|| CommandError::UnknownStyle(name.to_string()))?;
        line = style::paint(&line, code);
    }

    if no_newline {
        console.print(line)?;
    } else {
        console.print_line(line)?;
    }
    Ok(EXIT_SUCCESS)
}

pub fn handle_list<R: LineInput, W: Write, M: MaskedInput>(
    console: &mut Console<R, W, M>,
    items: &[String],
    numbers: bool,
    inline: bool,
) -> CommandResult {
    console.print_list(items, numbers, !inline)?;
    if inline && !items.is_empty() {
        console.print_line("")?;
    }
    Ok(EXIT_SUCCESS)
}

pub fn handle_rule<R: LineInput, W: Write, M: MaskedInput>(
    console: &mut Console<R, W, M>,
    character: char,
    width: usize,
    no_newline: bool,
) -> CommandResult {
    console.print_characters(character, width, !no_newline)?;
    Ok(EXIT_SUCCESS)
}

pub fn handle_clear<R: LineInput, W: Write, M: MaskedInput>(
    console: &mut Console<R, W, M>,
    lines: Option<usize>,
) -> CommandResult {
    let lines = lines.unwrap_or(console.settings().clear_lines);
    console.clear(lines)?;
    Ok(EXIT_SUCCESS)
}

/// Print every catalog name rendered in its own style
pub fn handle_styles<R: LineInput, W: Write, M: MaskedInput>(
    console: &mut Console<R, W, M>,
) -> CommandResult {
    for (name, code) in style::CATALOG {
        console.print_line(style::paint(name, code))?;
    }
    Ok(EXIT_SUCCESS)
}
