//! Notification rules.
//!
//! A rule is a named set of match predicates and override actions that the
//! matching stage applies to incoming notifications. Every config section
//! that is not [reserved](crate::config::section::RESERVED) defines or
//! extends one rule, see [`build`].
//!
//! Rule names are unique: a [`RuleSet`] keeps rules in insertion order and
//! indexes them by name, so a section that names an existing rule merges
//! into that rule instead of creating a second one.

mod build;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::config::Timeout;
use crate::settings::{Fullscreen, MarkupMode, Urgency};

pub use build::build;

/// A single rule. Every field except `name` is optional; `None` means the
/// rule neither matches on nor overrides that attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Section name the rule was defined in.
    pub name: String,

    // Match predicates
    pub appname: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub stack_tag: Option<String>,
    /// Matches the notification's own urgency.
    pub msg_urgency: Option<Urgency>,
    pub match_transient: Option<bool>,

    // Actions
    pub timeout: Option<Timeout>,
    /// Replaces the notification's urgency.
    pub urgency: Option<Urgency>,
    pub markup: Option<MarkupMode>,
    pub history_ignore: Option<bool>,
    pub set_transient: Option<bool>,
    pub fullscreen: Option<Fullscreen>,
    pub new_icon: Option<String>,
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub frame_color: Option<String>,
    pub format: Option<String>,
    /// Script run when the rule matches.
    pub script: Option<PathBuf>,
    pub set_stack_tag: Option<String>,
}

impl Rule {
    /// Creates an empty rule called `name`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// The built-in rules, present even with an empty configuration.
///
/// - `ignore_transient_in_history`: transient notifications skip history.
/// - `fullscreen_show_critical`: critical notifications show over
///   fullscreen windows.
#[must_use]
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            match_transient: Some(true),
            history_ignore: Some(true),
            ..Rule::named("ignore_transient_in_history")
        },
        Rule {
            msg_urgency: Some(Urgency::Critical),
            fullscreen: Some(Fullscreen::Show),
            ..Rule::named("fullscreen_show_critical")
        },
    ]
}

/// Rules in insertion order, indexed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl RuleSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding the [`default_rules`].
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        for rule in default_rules() {
            let name = rule.name.clone();
            *set.find_or_insert(&name) = rule;
        }
        set
    }

    /// Returns the rule called `name`, appending an empty one if missing.
    pub fn find_or_insert(&mut self, name: &str) -> &mut Rule {
        let position = match self.index.get(name) {
            Some(&position) => position,
            None => {
                self.rules.push(Rule::named(name));
                let position = self.rules.len() - 1;
                self.index.insert(name.to_string(), position);
                position
            }
        };
        &mut self.rules[position]
    }

    /// Returns the rule called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.index.get(name).map(|&position| &self.rules[position])
    }

    /// Iterates over the rules in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.rules)
    }
}
