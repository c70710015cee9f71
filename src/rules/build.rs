//! Building the rule table from config sections.

use std::fmt::Display;
use std::str::FromStr;

use crate::config::decode;
use crate::config::section;
use crate::config::{KeyValueSource, UnknownValue};

use super::{Rule, RuleSet};

/// Builds the rule table from every non-reserved section of `file`.
///
/// Starts from the built-in rules, then visits sections in file order. A
/// section merges into the rule of the same name, creating it if needed,
/// and only touches the keys it sets. Values that fail to decode keep the
/// rule's current value and log a warning; unknown keys are ignored with
/// a warning.
#[must_use]
pub fn build(file: &dyn KeyValueSource) -> RuleSet {
    let mut rules = RuleSet::with_defaults();

    for name in file.sections() {
        if section::is_reserved(name) {
            continue;
        }

        let rule = rules.find_or_insert(name);
        rule.name = name.to_string();

        for key in file.keys(name) {
            let Some(raw) = file.get(name, key) else {
                continue;
            };
            if !rule.merge(key, raw) {
                tracing::warn!(rule = name, key, "Unknown rule key, ignoring");
            }
        }

        tracing::debug!(rule = name, "Loaded rule");
    }

    rules
}

impl Rule {
    /// Applies one `key = raw` pair. Returns `false` for unknown keys.
    fn merge(&mut self, key: &str, raw: &str) -> bool {
        let text = || Some(raw.to_string());

        match key {
            "appname" => self.appname = text(),
            "summary" => self.summary = text(),
            "body" => self.body = text(),
            "icon" => self.icon = text(),
            "category" => self.category = text(),
            "stack_tag" => self.stack_tag = text(),
            "new_icon" => self.new_icon = text(),
            "foreground" => self.foreground = text(),
            "background" => self.background = text(),
            "frame_color" => self.frame_color = text(),
            "format" => self.format = text(),
            "set_stack_tag" => self.set_stack_tag = text(),
            "script" => self.script = Some(decode::expand_path(raw)),

            "timeout" => self.timeout = self.decoded(key, raw, self.timeout, decode::parse_time),
            "match_transient" => {
                self.match_transient = self.decoded(key, raw, self.match_transient, decode::parse_bool);
            }
            "history_ignore" => {
                self.history_ignore = self.decoded(key, raw, self.history_ignore, decode::parse_bool);
            }
            "set_transient" => {
                self.set_transient = self.decoded(key, raw, self.set_transient, decode::parse_bool);
            }

            "markup" => self.markup = self.choice(raw, self.markup),
            "fullscreen" => self.fullscreen = self.choice(raw, self.fullscreen),
            "urgency" | "msg_urgency" if raw.is_empty() => {}
            "urgency" => self.urgency = self.choice(raw, self.urgency),
            "msg_urgency" => self.msg_urgency = self.choice(raw, self.msg_urgency),

            _ => return false,
        }

        true
    }

    fn decoded<T, E: Display>(
        &self,
        key: &str,
        raw: &str,
        current: Option<T>,
        decode: impl FnOnce(&str) -> Result<T, E>,
    ) -> Option<T> {
        match decode(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(rule = %self.name, key, "{e}, keeping previous value");
                current
            }
        }
    }

    fn choice<T>(&self, raw: &str, current: Option<T>) -> Option<T>
    where
        T: FromStr<Err = UnknownValue>,
    {
        match raw.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(rule = %self.name, "{e}");
                current
            }
        }
    }
}
