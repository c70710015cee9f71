//! Helpers shared by unit tests.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::config::{CmdlineArgs, CmdlineSource, ConfigFile};

/// Parses a command line; the program name is prepended.
pub fn cli(args: &[&str]) -> CmdlineArgs {
    CmdlineArgs::try_parse_from_iter(std::iter::once("toastd").chain(args.iter().copied()))
        .unwrap()
}

/// Parses a TOML config file.
pub fn file(content: &str) -> ConfigFile {
    ConfigFile::parse(content).unwrap()
}

/// A command line given as `(flag, value)` pairs.
///
/// A pair matches a lookup if its flag is any of the requested spellings.
#[derive(Debug, Default)]
pub struct FakeCmdline(pub Vec<(&'static str, &'static str)>);

impl CmdlineSource for FakeCmdline {
    fn get(&self, aliases: &[&str]) -> Option<&str> {
        self.0
            .iter()
            .find(|(flag, _)| aliases.contains(flag))
            .map(|(_, value)| *value)
    }
}

/// A log event recorded by [`capture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logged {
    pub level: Level,
    pub message: String,
}

/// Events recorded while running a closure.
#[derive(Debug, Default)]
pub struct Captured(Vec<Logged>);

impl Captured {
    /// Messages logged at `level`.
    pub fn at(&self, level: Level) -> Vec<&str> {
        self.0
            .iter()
            .filter(|event| event.level == level)
            .map(|event| event.message.as_str())
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.at(Level::WARN)
    }

    pub fn infos(&self) -> Vec<&str> {
        self.at(Level::INFO)
    }
}

struct Recorder(Arc<Mutex<Vec<Logged>>>);

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Logged {
                level: *event.metadata().level(),
                message: visitor.0,
            });
    }
}

/// Runs `f` with a subscriber that records every event.
pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Captured) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = Registry::default().with(Recorder(Arc::clone(&events)));
    let value = tracing::subscriber::with_default(subscriber, f);
    let events = std::mem::take(&mut *events.lock().unwrap_or_else(PoisonError::into_inner));
    (value, Captured(events))
}

/// Runs `f` and returns its result plus the number of warnings it logged.
pub fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let (value, captured) = capture(f);
    let warnings = captured.warnings().len();
    (value, warnings)
}
