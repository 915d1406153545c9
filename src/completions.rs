//! Shell completion generation
//!
//! The script goes to stdout, installation hints go to stderr, so
//! `termio completions bash > termio.bash` captures only the script.

use crate::cli::Cli;
use crate::output;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io::{self, Write};

const BIN_NAME: &str = "termio";

/// Generate shell completions and print installation instructions
pub fn handle_completions(shell: Shell) {
    write_completions(shell, &mut io::stdout());
    output::success(&format!("Generated {} completions for '{}'", shell, BIN_NAME));

    eprintln!();
    eprintln!("{}", "Installation instructions:".green().bold());
    for line in install_hint(shell) {
        eprintln!("    {}", line.bright_black());
    }
}

/// Write the completion script for `shell` into `out`
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

fn install_hint(shell: Shell) -> Vec<String> {
    match shell {
        Shell::Bash => vec![
            "eval \"$(termio completions bash)\"   # in ~/.bashrc".to_string(),
            format!(
                "{BIN_NAME} completions bash > ~/.local/share/bash-completion/completions/{BIN_NAME}"
            ),
        ],
        Shell::Fish => vec![format!(
            "{BIN_NAME} completions fish > ~/.config/fish/completions/{BIN_NAME}.fish"
        )],
        Shell::Zsh => vec![
            "eval \"$(termio completions zsh)\"   # in ~/.zshrc".to_string(),
            format!("{BIN_NAME} completions zsh > /usr/local/share/zsh/site-functions/_{BIN_NAME}"),
        ],
        Shell::PowerShell => vec![format!(
            "{BIN_NAME} completions powershell | Out-String | Invoke-Expression"
        )],
        Shell::Elvish => vec![format!(
            "{BIN_NAME} completions elvish > ~/.config/elvish/lib/{BIN_NAME}.elv"
        )],
        _ => Vec::new(),
    }
}
