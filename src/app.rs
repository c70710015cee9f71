//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use toastd::config::ConfigError;
use toastd::settings::Verbosity;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable or invalid config file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'toastd init' to generate a configuration template.");
        }
        ConfigError::TomlParse(_) => {
            eprintln!("\nSettings must be placed in sections such as [global] or [urgency_low].");
        }
        _ => {}
    }
}

/// Handle for changing the log filter after startup.
pub struct LogHandle(reload::Handle<EnvFilter, Registry>);

impl LogHandle {
    /// Switches the log filter to `verbosity`. `RUST_LOG` directives still
    /// apply on top of it.
    pub fn apply(&self, verbosity: Verbosity) {
        if let Err(e) = self.0.reload(filter_for(verbosity)) {
            eprintln!("Failed to apply verbosity '{verbosity}': {e}");
        }
    }
}

fn filter_for(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(verbosity.level_filter().into())
        .from_env_lossy()
}

/// Sets up the tracing subscriber for logging to stderr.
///
/// Starts at the default verbosity; call [`LogHandle::apply`] once the
/// configured verbosity is known.
pub fn setup_tracing() -> LogHandle {
    let (filter, handle) = reload::Layer::new(filter_for(Verbosity::Message));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    LogHandle(handle)
}
