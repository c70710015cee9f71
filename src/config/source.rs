//! Provider traits consumed by the resolver.
//!
//! The resolver never parses text itself. It reads already-materialized
//! key/value pairs through [`KeyValueSource`] (the configuration file) and
//! [`CmdlineSource`] (command-line overrides), so tests can feed it any
//! in-memory state.

/// Sectioned key/value lookup backed by a configuration file.
pub trait KeyValueSource {
    /// Returns the raw value of `key` in `section`, if present.
    ///
    /// An explicitly empty value is returned as `Some("")`.
    fn get(&self, section: &str, key: &str) -> Option<&str>;

    /// Returns the names of all sections in file order.
    fn sections(&self) -> Vec<&str>;

    /// Returns the keys present in `section`, in file order.
    fn keys(&self, section: &str) -> Vec<&str>;

    /// Returns `true` if `key` is present in `section`.
    fn has_key(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }
}

/// Command-line override lookup.
///
/// Each setting is addressed by the full list of its flag spellings; an
/// implementation matches if any of them was given.
pub trait CmdlineSource {
    /// Returns the value given for any of `aliases`.
    fn get(&self, aliases: &[&str]) -> Option<&str>;

    /// Returns `true` if any of `aliases` was explicitly given.
    fn is_set(&self, aliases: &[&str]) -> bool {
        self.get(aliases).is_some()
    }
}

/// A command line with no overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCmdline;

impl CmdlineSource for NoCmdline {
    fn get(&self, _aliases: &[&str]) -> Option<&str> {
        None
    }
}
