//! Raw string decoding for option values.
//!
//! Decoders report failures as [`ValueError`]/[`UnknownValue`]; turning a
//! failure into a warning plus fallback is the caller's job (see
//! [`Resolver`](super::Resolver) and [`decode_or`]).

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use super::error::{UnknownValue, ValueError};

/// A timeout or threshold that may be disabled.
///
/// Configured values `<= 0` decode to [`Timeout::Infinite`]: the
/// notification never expires, or the threshold never triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeout {
    /// No timeout.
    Infinite,
    /// Expires after the given duration.
    After(Duration),
}

impl Timeout {
    /// Creates a timeout of `secs` seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self::After(Duration::from_secs(secs))
    }

    /// Returns `true` for [`Timeout::Infinite`].
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Returns the finite duration, if any.
    #[must_use]
    pub const fn as_duration(self) -> Option<Duration> {
        match self {
            Self::Infinite => None,
            Self::After(duration) => Some(duration),
        }
    }
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infinite => f.write_str("infinite"),
            Self::After(duration) => write!(f, "{}ms", duration.as_millis()),
        }
    }
}

/// Parses a boolean (`true/false`, `yes/no`, `on/off`, `1/0`, any case).
///
/// # Errors
///
/// Returns [`ValueError::Bool`] for anything else.
pub fn parse_bool(raw: &str) -> Result<bool, ValueError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ValueError::Bool(raw.to_string())),
    }
}

/// Parses a base-10 integer, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`ValueError::Int`] if the value is not an `i32`.
pub fn parse_int(raw: &str) -> Result<i32, ValueError> {
    raw.trim()
        .parse()
        .map_err(|_| ValueError::Int(raw.to_string()))
}

/// Parses a duration such as `10`, `10s`, `500ms`, `2m`, `1h` or `1d`.
///
/// A bare number is in seconds. Values `<= 0` mean [`Timeout::Infinite`].
///
/// # Errors
///
/// Returns [`ValueError::Time`] for a missing number, an unknown unit, or
/// a duration that overflows.
pub fn parse_time(raw: &str) -> Result<Timeout, ValueError> {
    let invalid = || ValueError::Time(raw.to_string());

    let trimmed = raw.trim();
    let unit_start = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);
    let (number, unit) = trimmed.split_at(unit_start);

    let value: i64 = number.parse().map_err(|_| invalid())?;
    let millis_per_unit: u64 = match unit.trim() {
        "" | "s" => 1_000,
        "ms" => 1,
        "m" => 60_000,
        "h" => 3_600_000,
        "d" => 86_400_000,
        _ => return Err(invalid()),
    };

    if value <= 0 {
        return Ok(Timeout::Infinite);
    }

    u64::try_from(value)
        .ok()
        .and_then(|v| v.checked_mul(millis_per_unit))
        .map(|millis| Timeout::After(Duration::from_millis(millis)))
        .ok_or_else(invalid)
}

/// Expands a leading `~` and `$NAME`/`${NAME}` environment references.
///
/// Unset variables expand to the empty string. A `$` not followed by a
/// name is kept literally.
#[must_use]
pub fn expand(raw: &str) -> String {
    expand_vars(&expand_tilde(raw))
}

/// Expands `raw` like [`expand`] and returns it as a path.
#[must_use]
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(expand(raw))
}

fn expand_tilde(raw: &str) -> Cow<'_, str> {
    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/") {
        rest
    } else {
        return Cow::Borrowed(raw);
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => Cow::Owned(home.display().to_string()),
        Some(home) => Cow::Owned(home.join(rest).display().to_string()),
        None => Cow::Borrowed(raw),
    }
}

fn expand_vars(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        if name.is_empty() {
            out.push('$');
            rest = after;
        } else {
            out.push_str(&std::env::var(name).unwrap_or_default());
            rest = &after[consumed..];
        }
    }

    out.push_str(rest);
    out
}

/// Splits a command line into argv using shell quoting rules.
///
/// Returns `None` (and logs a warning naming `feature`) when the line
/// cannot be split or contains no words; callers treat that as the
/// feature being disabled.
#[must_use]
pub fn split_command(line: &str, feature: &str) -> Option<Vec<String>> {
    match shlex::split(line) {
        Some(argv) if !argv.is_empty() => Some(argv),
        Some(_) => {
            tracing::warn!("Empty {feature} command. {feature} functionality will be disabled.");
            None
        }
        None => {
            tracing::warn!(
                command = line,
                "Unable to parse {feature} command. {feature} functionality will be disabled."
            );
            None
        }
    }
}

/// Decodes an enumerated value, falling back on unknown input.
///
/// Logs exactly one warning when `raw` is not in the vocabulary of `T`.
pub fn decode_or<T>(raw: &str, fallback: T) -> T
where
    T: FromStr<Err = UnknownValue>,
{
    raw.parse().unwrap_or_else(|e: UnknownValue| {
        tracing::warn!("{e}");
        fallback
    })
}
