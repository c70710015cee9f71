//! CLI argument parsing using clap.
//!
//! The fixed part of the interface (config path, subcommands) is derived on
//! [`Cli`]. One override flag per entry of [`flags::ALL`] is added on top
//! with the builder API, and the resulting matches serve as the
//! [`CmdlineSource`] for resolution.

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};

use super::flags::{self, Flag, FlagKind};
use super::source::CmdlineSource;

/// toastd: notification daemon settings
///
/// Resolves settings from built-in defaults, the config file and
/// command-line overrides.
#[derive(Debug, Clone, Parser)]
#[command(name = "toastd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file ('-' reads from stdin)
    #[arg(long, short, visible_alias = "conf", global = true)]
    pub config: Option<PathBuf>,
}

/// Subcommands for toastd
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "toastdrc.toml")]
        output: PathBuf,
    },
    /// Print the fully resolved settings as JSON
    Dump,
}

/// Parsed command line: the derived [`Cli`] plus the override flags.
#[derive(Debug, Clone)]
pub struct CmdlineArgs {
    cli: Cli,
    matches: ArgMatches,
}

impl CmdlineArgs {
    /// Builds the full clap command, override flags included.
    #[must_use]
    pub fn command() -> clap::Command {
        flags::ALL
            .iter()
            .fold(Cli::command(), |cmd, flag| cmd.arg(override_arg(flag)))
    }

    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::from_matches(Self::command().get_matches())
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::from_matches(Self::command().get_matches_from(iter))
    }

    /// Parses CLI arguments from an iterator, returning errors instead of exiting.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags or malformed values.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(iter)?;
        let cli = Cli::from_arg_matches(&matches)?;
        Ok(Self { cli, matches })
    }

    fn from_matches(matches: ArgMatches) -> Self {
        let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
        Self { cli, matches }
    }

    /// The derived part of the command line.
    #[must_use]
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.cli.command, Some(Command::Init { .. }))
    }
}

impl CmdlineSource for CmdlineArgs {
    fn get(&self, aliases: &[&str]) -> Option<&str> {
        // Every spelling of a flag maps to its canonical id.
        let id = aliases.iter().find_map(|name| flags::lookup(name))?.id();

        if self.matches.value_source(id) != Some(ValueSource::CommandLine) {
            return None;
        }

        self.matches
            .try_get_one::<String>(id)
            .ok()
            .flatten()
            .map(String::as_str)
    }
}

fn override_arg(flag: &Flag) -> Arg {
    let arg = Arg::new(flag.id())
        .long(flag.id())
        .visible_aliases(flag.names[1..].iter().copied())
        .help(flag.help)
        .help_heading("Overrides")
        .global(true)
        .action(ArgAction::Set)
        .value_parser(clap::value_parser!(String));

    match flag.kind {
        FlagKind::Value => arg.value_name("VALUE"),
        FlagKind::Toggle => arg
            .value_name("BOOL")
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true"),
    }
}
