//! Error types for configuration loading and value decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Only covers the conditions that abort a load. Bad values inside a
/// readable file never surface here; they are logged and replaced by
/// their defaults during resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read an explicitly requested configuration file.
    #[error("Cannot read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the configuration from standard input (`--config -`).
    #[error("Failed to read config from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Error produced when a raw string cannot be decoded into a typed value.
///
/// Never aborts resolution; the resolver logs it and keeps the default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Not one of the accepted boolean spellings.
    #[error("'{0}' is not a boolean (expected true/false, yes/no, on/off, 1/0)")]
    Bool(String),

    /// Not a base-10 integer in range.
    #[error("'{0}' is not an integer")]
    Int(String),

    /// Not a duration (`<number>[ms|s|m|h|d]`).
    #[error("'{0}' is not a duration (expected a number with optional ms/s/m/h/d suffix)")]
    Time(String),
}

/// Error returned by enum decoders for a value outside their vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct UnknownValue {
    /// Human-readable name of the setting kind (e.g. "markup mode").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownValue {
    /// Creates an error for `value` rejected by the `kind` decoder.
    #[must_use]
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
