//! Three-tier option resolution.
//!
//! Every typed getter follows the same order: an explicitly given command
//! line flag, then the key in the config file section, then the compiled
//! default. A value that fails to decode logs one warning and yields the
//! default.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::decode::{self, Timeout};
use super::deprecated::Deprecation;
use super::error::UnknownValue;
use super::source::{CmdlineSource, KeyValueSource};

/// Resolves settings against a config file and a command line.
///
/// Resolution is pure: it only reads from the two providers.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    file: &'a dyn KeyValueSource,
    cmdline: &'a dyn CmdlineSource,
}

impl fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("sections", &self.file.sections())
            .finish_non_exhaustive()
    }
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over the given providers.
    #[must_use]
    pub const fn new(file: &'a dyn KeyValueSource, cmdline: &'a dyn CmdlineSource) -> Self {
        Self { file, cmdline }
    }

    /// Returns the raw value, without decoding.
    ///
    /// `None` means the setting is unset in both sources; an explicitly
    /// empty value is `Some("")`.
    #[must_use]
    pub fn raw(&self, section: &str, key: &str, aliases: &[&str]) -> Option<&'a str> {
        if !aliases.is_empty() && self.cmdline.is_set(aliases) {
            if let Some(value) = self.cmdline.get(aliases) {
                return Some(value);
            }
        }

        self.file.get(section, key)
    }

    /// Resolves a setting with a custom decoder.
    ///
    /// `default` is returned unchanged when the setting is unset, and also
    /// (after a warning) when `decode` rejects the value.
    pub fn resolve<T, E>(
        &self,
        section: &str,
        key: &str,
        aliases: &[&str],
        default: T,
        decode: impl FnOnce(&str) -> Result<T, E>,
    ) -> T
    where
        E: fmt::Display,
    {
        match self.raw(section, key, aliases) {
            None => default,
            Some(raw) => decode(raw).unwrap_or_else(|e| {
                tracing::warn!(section, key, "{e}, using default");
                default
            }),
        }
    }

    /// Resolves a boolean setting.
    #[must_use]
    pub fn bool(&self, section: &str, key: &str, aliases: &[&str], default: bool) -> bool {
        self.resolve(section, key, aliases, default, decode::parse_bool)
    }

    /// Resolves an integer setting.
    #[must_use]
    pub fn int(&self, section: &str, key: &str, aliases: &[&str], default: i32) -> i32 {
        self.resolve(section, key, aliases, default, decode::parse_int)
    }

    /// Resolves a duration setting.
    #[must_use]
    pub fn time(&self, section: &str, key: &str, aliases: &[&str], default: Timeout) -> Timeout {
        self.resolve(section, key, aliases, default, decode::parse_time)
    }

    /// Resolves a string setting.
    #[must_use]
    pub fn string(&self, section: &str, key: &str, aliases: &[&str], default: &str) -> String {
        self.raw(section, key, aliases)
            .unwrap_or(default)
            .to_string()
    }

    /// Resolves a string setting that has no default.
    ///
    /// Distinguishes unset (`None`) from explicitly empty (`Some("")`).
    #[must_use]
    pub fn opt_string(&self, section: &str, key: &str, aliases: &[&str]) -> Option<String> {
        self.raw(section, key, aliases).map(str::to_string)
    }

    /// Resolves a filesystem path, expanding `~` and environment variables.
    #[must_use]
    pub fn path(&self, section: &str, key: &str, aliases: &[&str], default: &str) -> PathBuf {
        decode::expand_path(self.raw(section, key, aliases).unwrap_or(default))
    }

    /// Resolves a shell command line, expanding `~` and environment variables.
    ///
    /// The result is still a single string; see [`decode::split_command`]
    /// for turning it into argv.
    #[must_use]
    pub fn command(&self, section: &str, key: &str, aliases: &[&str], default: &str) -> String {
        decode::expand(self.raw(section, key, aliases).unwrap_or(default))
    }

    /// Resolves an enumerated setting.
    ///
    /// An empty value keeps `default` silently; an unknown one keeps it
    /// with a warning.
    #[must_use]
    pub fn choice<T>(&self, section: &str, key: &str, aliases: &[&str], default: T) -> T
    where
        T: FromStr<Err = UnknownValue>,
    {
        match self.raw(section, key, aliases) {
            Some(raw) if !raw.is_empty() => decode::decode_or(raw, default),
            _ => default,
        }
    }

    /// Resolves a boolean that only exists on the command line.
    #[must_use]
    pub fn switch(&self, aliases: &[&str], default: bool) -> bool {
        match self.cmdline.get(aliases) {
            None => default,
            Some(raw) => decode::parse_bool(raw).unwrap_or_else(|e| {
                tracing::warn!(flag = aliases.first().copied().unwrap_or_default(), "{e}, using default");
                default
            }),
        }
    }

    /// Resolves a setting that has a legacy location.
    ///
    /// A decodable legacy value replaces `default`; the canonical value, if
    /// set, wins over both and falls back to the legacy value when it fails
    /// to decode. See [`Deprecation::raw`].
    pub fn aliased<T, E>(
        &self,
        deprecation: &Deprecation,
        default: T,
        decode: impl Fn(&str) -> Result<T, E>,
    ) -> T
    where
        E: fmt::Display,
    {
        let (seed, canonical) = deprecation.values(self);
        let Deprecation {
            legacy: old,
            canonical: new,
            ..
        } = deprecation;

        let fallback = match seed {
            None => default,
            Some(raw) => decode(raw.as_str()).unwrap_or_else(|e| {
                tracing::warn!(section = old.section, key = old.key, "{e}, using default");
                default
            }),
        };

        match canonical {
            None => fallback,
            Some(raw) => decode(raw).unwrap_or_else(|e| {
                tracing::warn!(section = new.section, key = new.key, "{e}, using previous value");
                fallback
            }),
        }
    }
}
