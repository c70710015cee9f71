//! toastd: notification daemon settings
//!
//! Resolves the daemon's settings from compiled defaults, a TOML config
//! file and command-line overrides, and builds the notification rule
//! table from the config file's rule sections.

pub mod config;
pub mod rules;
pub mod settings;

#[cfg(test)]
mod test_support;
