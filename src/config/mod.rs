//! Configuration layer for toastd.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`], [`CmdlineArgs`])
//! - Override flag table ([`flags`])
//! - Configuration file loading ([`ConfigFile`])
//! - Provider traits consumed by resolution ([`KeyValueSource`], [`CmdlineSource`])
//! - Typed option resolution ([`Resolver`]) and raw value decoding ([`decode`])
//! - Legacy option aliasing ([`deprecated`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Every setting is resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI flag** - any spelling of the setting's flag
//! 2. **Config file** - the key in the setting's section
//! 3. **Built-in defaults** - compiled-in values
//!
//! A value that is present but cannot be decoded is logged and replaced by
//! the default; it never aborts the load. The only fatal conditions are an
//! explicitly named config file that cannot be read and a file that is not
//! valid TOML.
//!
//! # Legacy Options
//!
//! Options that were renamed or moved still work. The legacy value is read
//! first and used in place of the compiled default; the canonical option,
//! if set, wins over it. See [`deprecated::TABLE`].
//!
//! # Sections
//!
//! The sections listed in [`section::RESERVED`] hold global settings. Every
//! other section of the file defines a rule (see [`crate::rules`]).

mod cli;
pub mod decode;
pub mod defaults;
pub mod deprecated;
mod error;
mod file;
pub mod flags;
mod resolve;
pub mod section;
mod source;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod decode_tests;
#[cfg(test)]
mod resolve_tests;

pub use cli::{Cli, CmdlineArgs, Command};
pub use decode::Timeout;
pub use error::{ConfigError, UnknownValue, ValueError};
pub use file::{
    ConfigFile, default_config_template, search_paths, search_paths_in, write_default_config,
};
pub use resolve::Resolver;
pub use source::{CmdlineSource, KeyValueSource, NoCmdline};
