//! Configuration file loading.
//!
//! The file is TOML: every top-level table is a section, and every scalar
//! inside it is exposed to the resolver as a string. Section order is kept
//! as written, since rules are built in that order.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use super::ConfigError;
use super::source::KeyValueSource;

/// Directory name under each XDG config dir.
pub const CONFIG_DIR_NAME: &str = "toastd";

/// File name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "toastdrc.toml";

/// A loaded configuration file.
///
/// Holds only string values; the file handle is closed as soon as the
/// content has been read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    sections: Vec<Section>,
    origin: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn from_table(name: String, table: Table) -> Self {
        let mut entries = Vec::with_capacity(table.len());

        for (key, value) in table {
            match scalar_to_string(&value) {
                Some(text) => entries.push((key, text)),
                None => tracing::warn!(
                    section = %name,
                    key = %key,
                    "Ignoring {} value: only strings, numbers and booleans are supported",
                    value.type_str()
                ),
            }
        }

        Self { name, entries }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, key: String, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(d) => Some(d.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}

impl ConfigFile {
    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let table: Table = toml::from_str(content)?;
        let mut file = Self::default();

        for (name, value) in table {
            match value {
                Value::Table(entries) => file.sections.push(Section::from_table(name, entries)),
                other => tracing::warn!(
                    key = %name,
                    "Ignoring top-level {} value: settings must be placed in a [section]",
                    other.type_str()
                ),
            }
        }

        Ok(file)
    }

    /// Loads configuration from a TOML file, then merges its drop-ins.
    ///
    /// Drop-ins are the `*.toml` files in `<path>.d/`, applied in lexical
    /// order. A missing drop-in directory is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file (or a drop-in) cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut file = Self::parse(&content)?;
        file.origin = Some(path.to_path_buf());

        for dropin in dropin_paths(path) {
            tracing::debug!(path = %dropin.display(), "Loading drop-in");
            let content = std::fs::read_to_string(&dropin).map_err(|e| ConfigError::FileRead {
                path: dropin.clone(),
                source: e,
            })?;
            file.merge(Self::parse(&content)?);
        }

        Ok(file)
    }

    /// Reads configuration from standard input.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin cannot be read or is not valid TOML.
    pub fn from_stdin() -> Result<Self, ConfigError> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(ConfigError::Stdin)?;
        Self::parse(&content)
    }

    /// Finds and loads the configuration file.
    ///
    /// An `explicit` path must be readable (`-` reads stdin). Without one,
    /// the XDG locations from [`search_paths`] are tried in order; finding
    /// none is logged and yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file cannot be read, or if the
    /// file that was found is not valid TOML.
    pub fn locate(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) if path == Path::new("-") => Self::from_stdin(),
            Some(path) => Self::load(path),
            None => Self::locate_in(&search_paths()),
        }
    }

    /// Loads the first readable file among `candidates`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file that was found cannot be parsed.
    pub fn locate_in(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        for candidate in candidates {
            match Self::load(candidate) {
                Ok(file) => {
                    tracing::debug!(path = %candidate.display(), "Using config file");
                    return Ok(file);
                }
                Err(ConfigError::FileRead { path, source })
                    if path == *candidate && source.kind() == io::ErrorKind::NotFound => {}
                Err(ConfigError::FileRead { path, source }) if path == *candidate => {
                    tracing::warn!(path = %path.display(), "Skipping unreadable config file: {source}");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::warn!("No config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Overlays `other` onto this configuration.
    ///
    /// Keys in `other` replace existing ones; sections not yet present are
    /// appended, so section order stays first-seen order.
    pub fn merge(&mut self, other: Self) {
        for section in other.sections {
            if let Some(existing) = self.sections.iter_mut().find(|s| s.name == section.name) {
                for (key, value) in section.entries {
                    existing.set(key, value);
                }
            } else {
                self.sections.push(section);
            }
        }
    }

    /// Path the configuration was loaded from, if it came from a file.
    #[must_use]
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Returns `true` if the configuration has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

impl KeyValueSource for ConfigFile {
    fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    fn sections(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    fn keys(&self, section: &str) -> Vec<&str> {
        self.section(section)
            .map(|s| s.entries.iter().map(|(k, _)| k.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Returns the drop-in files for `path`, sorted by name.
fn dropin_paths(path: &Path) -> Vec<PathBuf> {
    let mut dir = path.as_os_str().to_owned();
    dir.push(".d");

    let Ok(entries) = std::fs::read_dir(PathBuf::from(dir)) else {
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();
    paths
}

/// Returns the default search locations, most specific first.
///
/// Uses the user config dir (`$XDG_CONFIG_HOME`) and `$XDG_CONFIG_DIRS`
/// (default `/etc/xdg`).
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    let system: Vec<PathBuf> = std::env::var("XDG_CONFIG_DIRS")
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "/etc/xdg".to_string())
        .split(':')
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .collect();

    search_paths_in(dirs::config_dir(), &system)
}

/// Builds the search list from a user dir and system dirs.
///
/// `<dir>/toastd/toastdrc.toml` is tried in every dir before falling back to
/// the older flat `<dir>/toastdrc.toml` layout.
#[must_use]
pub fn search_paths_in(user: Option<PathBuf>, system: &[PathBuf]) -> Vec<PathBuf> {
    let bases: Vec<&PathBuf> = user.iter().chain(system).collect();

    let nested = bases
        .iter()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    let flat = bases.iter().map(|dir| dir.join(CONFIG_FILE_NAME));

    nested.chain(flat).collect()
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_config_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# toastd configuration file
#
# Every setting can also be given on the command line, which takes
# precedence: e.g. `--font "Sans 10"` or `--sort=false`.

[global]
# One of: crit, warn, mesg, info, debug
verbosity = "mesg"

font = "Monospace 8"

# Markup handling: full, strip or no
markup = "full"

# %a appname, %s summary, %b body, %i icon name, %I icon path, %p progress
format = "<b>%s</b>\n%b"

sort = true
indicate_hidden = true

# left, center or right
alignment = "left"

# Show the age of messages older than this many seconds (-1 to disable)
show_age_threshold = 60

word_wrap = true
# start, middle or end
ellipsize = "middle"
ignore_newline = false
stack_duplicates = true
hide_duplicate_count = false
show_indicators = true

# [{width}]x{height}[+/-{x}+/-{y}]
geometry = "300x5-30+20"
shrink = false
transparency = 0

# Don't time out notifications if the user is idle longer than this (0 to disable)
idle_threshold = 120

monitor = 0
# none, mouse or keyboard
follow = "mouse"

sticky_history = true
history_length = 20

line_height = 0
separator_height = 2
padding = 8
horizontal_padding = 8
# auto, foreground, frame or a color
separator_color = "frame"

frame_width = 3
frame_color = "#aaaaaa"

startup_notification = false

dmenu = "/usr/bin/dmenu -p toastd:"
browser = "/usr/bin/firefox -new-tab"

always_run_script = true

title = "toastd"
class = "toastd"
corner_radius = 0

# left, right or off
icon_position = "off"
max_icon_size = 32
icon_path = "/usr/share/icons/gnome/16x16/status/:/usr/share/icons/gnome/16x16/devices/"

# none, do_action, close_current or close_all
mouse_left_click = "close_current"
mouse_middle_click = "do_action"
mouse_right_click = "close_all"

[experimental]
per_monitor_dpi = false

[shortcuts]
close = "ctrl+space"
close_all = "ctrl+shift+space"
history = "ctrl+grave"
context = "ctrl+shift+period"

[urgency_low]
background = "#222222"
foreground = "#888888"
timeout = 10

[urgency_normal]
background = "#285577"
foreground = "#ffffff"
timeout = 10

[urgency_critical]
background = "#900000"
foreground = "#ffffff"
frame_color = "#ff0000"
# 0 means the notification stays until dismissed
timeout = 0

# Every other section is a rule. Match keys: appname, summary, body, icon,
# category, stack_tag, msg_urgency, match_transient. Action keys: timeout,
# markup, urgency, foreground, background, frame_color, format, new_icon,
# history_ignore, set_transient, fullscreen (show, delay, pushback),
# script, set_stack_tag.
#
# [signed_on]
# appname = "Pidgin"
# summary = "*signed on*"
# urgency = "low"
#
# [ignore_spotify]
# appname = "Spotify"
# format = ""
"##
    .to_string()
}
