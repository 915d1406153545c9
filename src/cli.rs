//! Command-line interface definitions
//!
//! The `termio` binary exposes the console operations to shell scripts.
//! Prompts are drawn on stderr; stdout carries only the answer, so
//! `name=$(termio read "Name: " --trim)` works as expected.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "termio")]
#[command(about = "Terminal prompts and styled output for shell scripts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Print text, optionally in a named style")]
    Print {
        #[arg(help = "Text to print (joined with spaces)")]
        text: Vec<String>,
        #[arg(short = 'n', long, help = "Do not print a trailing line break")]
        no_newline: bool,
        #[arg(short, long, help = "Style name, e.g. red_bold or cyan-bright")]
        style: Option<String>,
    },

    #[command(about = "Print a list of items")]
    List {
        #[arg(help = "Items to print, in order")]
        items: Vec<String>,
        #[arg(short = 'N', long, help = "Prefix each item with [n]")]
        numbers: bool,
        #[arg(short, long, help = "Keep all items on one line")]
        inline: bool,
    },

    #[command(about = "Print a character repeated, e.g. a separator line")]
    Rule {
        #[arg(short = 'c', long = "char", default_value = "-", help = "Character to repeat")]
        character: char,
        #[arg(short = 'w', long, default_value = "40", help = "Number of repetitions")]
        width: usize,
        #[arg(short = 'n', long, help = "Do not print a trailing line break")]
        no_newline: bool,
    },

    #[command(about = "Push previous output off-screen with blank lines")]
    Clear {
        #[arg(help = "Number of blank lines (default from config)")]
        lines: Option<usize>,
    },

    #[command(about = "Wait for the user to press enter")]
    Pause {
        #[arg(help = "Message to show (default from config)")]
        message: Option<String>,
    },

    #[command(about = "Ask a yes/no question; exits 0 for yes, 1 for no")]
    Confirm {
        #[arg(help = "Question to ask")]
        message: String,
        #[arg(long, help = "Treat an invalid answer as no instead of asking again")]
        once: bool,
    },

    #[command(about = "Ask the user to pick an option; prints its 1-based position")]
    Choose {
        #[arg(help = "Question to ask")]
        message: String,
        #[arg(required = true, help = "Options to choose from")]
        options: Vec<String>,
        #[arg(long, help = "Exit 1 on an invalid answer instead of asking again")]
        once: bool,
    },

    #[command(about = "Read one line and print it")]
    Read {
        #[arg(help = "Prompt to show")]
        message: Option<String>,
        #[arg(short, long, help = "Strip surrounding whitespace")]
        trim: bool,
    },

    #[command(about = "Read one line without echo and print it")]
    Password {
        #[arg(default_value = "Password: ", help = "Prompt to show")]
        message: String,
        #[arg(short, long, help = "Strip surrounding whitespace")]
        trim: bool,
    },

    #[command(about = "Show every style in the catalog")]
    Styles,

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}
