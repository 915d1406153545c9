use clap::Parser;
use colored::control;
use termio::cli::Cli;
use termio::commands::{handle_command, EXIT_FAILURE};
use termio::config::{ColorMode, Settings};
use termio::{logging, output};
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.clone()) {
        Ok(settings) => settings,
        Err(e) => {
            logging::init(None);
            error!(error = %e, "Failed to load configuration");
            output::error(&format!("Failed to load configuration: {}", e));
            std::process::exit(EXIT_FAILURE);
        }
    };

    logging::init(settings.log_level.as_deref());
    debug!(?cli, "Parsed CLI arguments");

    match settings.color {
        ColorMode::Auto => {}
        ColorMode::Always => control::set_override(true),
        ColorMode::Never => control::set_override(false),
    }

    let code = handle_command(cli.command, &settings);
    debug!(code, "Command completed");
    std::process::exit(code);
}
