//! toastd: notification daemon settings
//!
//! Entry point for the toastd application.

use std::process::ExitCode;

use toastd::config::{CmdlineArgs, Command, write_default_config};
use toastd::settings::Settings;

mod app;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let args = CmdlineArgs::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &args.cli().command {
        return handle_init(output);
    }

    let logging = setup_tracing();

    // Load and resolve settings; verbosity takes effect as soon as it is known
    let settings = match Settings::load_with(&args, |verbosity| logging.apply(verbosity)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    if matches!(args.cli().command, Some(Command::Dump)) {
        return handle_dump(&settings);
    }

    tracing::info!("{settings}");
    exit_code::SUCCESS
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `dump` subcommand.
fn handle_dump(settings: &Settings) -> ExitCode {
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            println!("{json}");
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}
