//! The settings aggregate.
//!
//! [`Settings`] is built once per load from a config file and a command
//! line and is read-only afterwards; a reload builds a new value and
//! replaces the old one wholesale.
//!
//! # Assembly order
//!
//! 1. verbosity, reported to the caller before anything else is resolved,
//!    so logging can be reconfigured before further warnings are emitted
//! 2. global and experimental settings, including legacy options
//! 3. the three urgency blocks; each `frame` defaults to the global
//!    `frame_color`
//! 4. shortcuts
//! 5. the rule table
//! 6. derived values: geometry and the `dmenu`/`browser` argv
//!
//! No step can fail: bad values are logged and replaced by defaults. Only
//! locating the config file ([`Settings::load`]) returns errors.

mod geometry;
mod types;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::section::{EXPERIMENTAL, GLOBAL, SHORTCUTS};
use crate::config::{
    CmdlineArgs, CmdlineSource, ConfigError, ConfigFile, KeyValueSource, Resolver, Timeout,
    UnknownValue, decode, defaults, deprecated, flags,
};
use crate::rules::{self, RuleSet};

pub use geometry::{Geometry, GeometryError};
pub use types::{
    Alignment, Ellipsize, FollowMode, Fullscreen, IconPosition, MarkupMode, MouseAction,
    SeparatorColor, Urgency, Verbosity,
};

/// A shell command line and its argv.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    /// The command as configured, after `~` and variable expansion.
    pub line: String,
    /// The split command, `None` if the line could not be split.
    pub argv: Option<Vec<String>>,
}

impl CommandLine {
    /// Splits `line`; on failure logs a warning naming `feature`.
    #[must_use]
    pub fn parse(line: String, feature: &str) -> Self {
        let argv = decode::split_command(&line, feature);
        Self { line, argv }
    }

    /// Returns `true` if the command can be run.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.argv.is_some()
    }
}

/// Colors, timeout and icon for one urgency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrgencyStyle {
    pub background: String,
    pub foreground: String,
    /// Frame color; the global `frame_color` unless set per urgency.
    pub frame: String,
    pub timeout: Timeout,
    pub icon: String,
}

/// The three urgency blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrgencyStyles {
    pub low: UrgencyStyle,
    pub normal: UrgencyStyle,
    pub critical: UrgencyStyle,
}

impl UrgencyStyles {
    /// Returns the style for `urgency`.
    #[must_use]
    pub const fn get(&self, urgency: Urgency) -> &UrgencyStyle {
        match urgency {
            Urgency::Low => &self.low,
            Urgency::Normal => &self.normal,
            Urgency::Critical => &self.critical,
        }
    }

    const fn get_mut(&mut self, urgency: Urgency) -> &mut UrgencyStyle {
        match urgency {
            Urgency::Low => &mut self.low,
            Urgency::Normal => &mut self.normal,
            Urgency::Critical => &mut self.critical,
        }
    }

    fn defaults(frame: &str) -> Self {
        let style = |background: &str, foreground: &str, timeout, icon: &str| UrgencyStyle {
            background: background.to_string(),
            foreground: foreground.to_string(),
            frame: frame.to_string(),
            timeout,
            icon: icon.to_string(),
        };

        Self {
            low: style(
                defaults::LOW_BACKGROUND,
                defaults::LOW_FOREGROUND,
                defaults::LOW_TIMEOUT,
                defaults::LOW_ICON,
            ),
            normal: style(
                defaults::NORMAL_BACKGROUND,
                defaults::NORMAL_FOREGROUND,
                defaults::NORMAL_TIMEOUT,
                defaults::NORMAL_ICON,
            ),
            critical: style(
                defaults::CRITICAL_BACKGROUND,
                defaults::CRITICAL_FOREGROUND,
                defaults::CRITICAL_TIMEOUT,
                defaults::CRITICAL_ICON,
            ),
        }
    }
}

/// Command-line flags of one urgency section.
struct UrgencyFlags {
    background: flags::Flag,
    foreground: flags::Flag,
    frame: flags::Flag,
    timeout: flags::Flag,
    icon: flags::Flag,
}

const fn urgency_flags(urgency: Urgency) -> UrgencyFlags {
    match urgency {
        Urgency::Low => UrgencyFlags {
            background: flags::LOW_BACKGROUND,
            foreground: flags::LOW_FOREGROUND,
            frame: flags::LOW_FRAME,
            timeout: flags::LOW_TIMEOUT,
            icon: flags::LOW_ICON,
        },
        Urgency::Normal => UrgencyFlags {
            background: flags::NORMAL_BACKGROUND,
            foreground: flags::NORMAL_FOREGROUND,
            frame: flags::NORMAL_FRAME,
            timeout: flags::NORMAL_TIMEOUT,
            icon: flags::NORMAL_ICON,
        },
        Urgency::Critical => UrgencyFlags {
            background: flags::CRITICAL_BACKGROUND,
            foreground: flags::CRITICAL_FOREGROUND,
            frame: flags::CRITICAL_FRAME,
            timeout: flags::CRITICAL_TIMEOUT,
            icon: flags::CRITICAL_ICON,
        },
    }
}

/// Keyboard shortcuts, as key strings such as `ctrl+space`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcuts {
    pub close: String,
    pub close_all: String,
    pub history: String,
    pub context: String,
}

impl Default for Shortcuts {
    fn default() -> Self {
        Self {
            close: defaults::SHORTCUT.to_string(),
            close_all: defaults::SHORTCUT.to_string(),
            history: defaults::SHORTCUT.to_string(),
            context: defaults::SHORTCUT.to_string(),
        }
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)] // one field per boolean option
pub struct Settings {
    pub verbosity: Verbosity,

    // [experimental]
    pub per_monitor_dpi: bool,
    pub repopup_on_idle: bool,

    // Text
    pub font: String,
    pub markup: MarkupMode,
    pub format: String,
    pub word_wrap: bool,
    pub ellipsize: Ellipsize,
    pub ignore_newline: bool,
    pub alignment: Alignment,
    pub line_height: i32,
    pub show_age_threshold: Timeout,
    pub show_indicators: bool,
    pub sort: bool,
    pub indicate_hidden: bool,
    pub stack_duplicates: bool,
    pub hide_duplicate_count: bool,

    // Window
    pub force_xinerama: bool,
    pub monitor: i32,
    pub follow: FollowMode,
    pub title: String,
    pub class: String,
    pub geometry: Geometry,
    pub shrink: bool,
    pub notification_height: i32,
    pub separator_height: i32,
    pub padding: i32,
    pub horizontal_padding: i32,
    pub transparency: i32,
    pub corner_radius: i32,
    pub separator_color: SeparatorColor,
    pub frame_width: i32,
    pub frame_color: String,
    pub icon_position: IconPosition,
    pub max_icon_size: i32,
    /// Colon-separated icon directories.
    pub icon_path: String,

    // Behavior
    pub idle_threshold: Timeout,
    pub sticky_history: bool,
    pub history_length: i32,
    pub startup_notification: bool,
    pub dmenu: CommandLine,
    pub browser: CommandLine,
    pub mouse_left_click: MouseAction,
    pub mouse_middle_click: MouseAction,
    pub mouse_right_click: MouseAction,
    pub always_run_script: bool,
    pub print_notifications: bool,

    pub urgency: UrgencyStyles,
    pub shortcuts: Shortcuts,
    pub rules: RuleSet,
}

impl Default for Settings {
    /// The compiled defaults, including the built-in rules.
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Message,

            per_monitor_dpi: defaults::PER_MONITOR_DPI,
            repopup_on_idle: defaults::REPOPUP_ON_IDLE,

            font: defaults::FONT.to_string(),
            markup: MarkupMode::No,
            format: defaults::FORMAT.to_string(),
            word_wrap: defaults::WORD_WRAP,
            ellipsize: Ellipsize::Middle,
            ignore_newline: defaults::IGNORE_NEWLINE,
            alignment: Alignment::Left,
            line_height: defaults::LINE_HEIGHT,
            show_age_threshold: defaults::SHOW_AGE_THRESHOLD,
            show_indicators: defaults::SHOW_INDICATORS,
            sort: defaults::SORT,
            indicate_hidden: defaults::INDICATE_HIDDEN,
            stack_duplicates: defaults::STACK_DUPLICATES,
            hide_duplicate_count: defaults::HIDE_DUPLICATE_COUNT,

            force_xinerama: defaults::FORCE_XINERAMA,
            monitor: defaults::MONITOR,
            follow: FollowMode::None,
            title: defaults::TITLE.to_string(),
            class: defaults::CLASS.to_string(),
            geometry: Geometry::default(),
            shrink: defaults::SHRINK,
            notification_height: defaults::NOTIFICATION_HEIGHT,
            separator_height: defaults::SEPARATOR_HEIGHT,
            padding: defaults::PADDING,
            horizontal_padding: defaults::HORIZONTAL_PADDING,
            transparency: defaults::TRANSPARENCY,
            corner_radius: defaults::CORNER_RADIUS,
            separator_color: SeparatorColor::Auto,
            frame_width: defaults::FRAME_WIDTH,
            frame_color: defaults::FRAME_COLOR.to_string(),
            icon_position: IconPosition::Off,
            max_icon_size: defaults::MAX_ICON_SIZE,
            icon_path: defaults::ICON_PATH.to_string(),

            idle_threshold: defaults::IDLE_THRESHOLD,
            sticky_history: defaults::STICKY_HISTORY,
            history_length: defaults::HISTORY_LENGTH,
            startup_notification: defaults::STARTUP_NOTIFICATION,
            dmenu: CommandLine::parse(defaults::DMENU.to_string(), "dmenu"),
            browser: CommandLine::parse(defaults::BROWSER.to_string(), "browser"),
            mouse_left_click: MouseAction::CloseCurrent,
            mouse_middle_click: MouseAction::DoAction,
            mouse_right_click: MouseAction::CloseAll,
            always_run_script: defaults::ALWAYS_RUN_SCRIPT,
            print_notifications: defaults::PRINT_NOTIFICATIONS,

            urgency: UrgencyStyles::defaults(defaults::FRAME_COLOR),
            shortcuts: Shortcuts::default(),
            rules: RuleSet::with_defaults(),
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let command = |cmd: &CommandLine| {
            if cmd.is_enabled() {
                cmd.line.clone()
            } else {
                "disabled".to_string()
            }
        };

        write!(
            f,
            "Settings {{ verbosity: {}, font: {}, markup: {}, geometry: {}x{}{:+}{:+}, \
             timeouts: {}/{}/{}, frame: {}px {}, dmenu: {}, browser: {}, rules: {} }}",
            self.verbosity,
            self.font,
            self.markup,
            self.geometry.width,
            self.geometry.height,
            self.geometry.x,
            self.geometry.y,
            self.urgency.low.timeout,
            self.urgency.normal.timeout,
            self.urgency.critical.timeout,
            self.frame_width,
            self.frame_color,
            command(&self.dmenu),
            command(&self.browser),
            self.rules.len(),
        )
    }
}

impl Settings {
    /// Locates the config file named by (or implied by) `args` and
    /// resolves settings against it.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named config file cannot be read,
    /// or if the config file is not valid TOML.
    pub fn load(args: &CmdlineArgs) -> Result<Self, ConfigError> {
        Self::load_with(args, |_| {})
    }

    /// Like [`Settings::load`], reporting the verbosity as soon as it is
    /// known.
    ///
    /// # Errors
    ///
    /// See [`Settings::load`].
    pub fn load_with(
        args: &CmdlineArgs,
        on_verbosity: impl FnOnce(Verbosity),
    ) -> Result<Self, ConfigError> {
        let file = ConfigFile::locate(args.cli().config.as_deref())?;
        if let Some(origin) = file.origin() {
            tracing::debug!(path = %origin.display(), "Resolving settings");
        }
        Ok(Self::resolve_with(&file, args, on_verbosity))
    }

    /// Resolves settings from already loaded sources.
    #[must_use]
    pub fn resolve(file: &dyn KeyValueSource, cmdline: &dyn CmdlineSource) -> Self {
        Self::resolve_with(file, cmdline, |_| {})
    }

    /// Resolves settings, calling `on_verbosity` before anything else is
    /// resolved.
    pub fn resolve_with(
        file: &dyn KeyValueSource,
        cmdline: &dyn CmdlineSource,
        on_verbosity: impl FnOnce(Verbosity),
    ) -> Self {
        let r = Resolver::new(file, cmdline);
        let mut settings = Self::default();

        settings.verbosity = r.choice(GLOBAL, "verbosity", flags::VERBOSITY.names, settings.verbosity);
        on_verbosity(settings.verbosity);

        settings.resolve_experimental(&r);
        settings.resolve_text(&r);
        settings.resolve_window(&r);
        settings.resolve_behavior(&r);
        settings.resolve_urgencies(&r);
        settings.resolve_shortcuts(&r);
        settings.rules = rules::build(file);
        settings.resolve_derived(&r);

        settings
    }

    fn resolve_experimental(&mut self, r: &Resolver<'_>) {
        self.per_monitor_dpi = r.bool(EXPERIMENTAL, "per_monitor_dpi", &[], self.per_monitor_dpi);
        self.repopup_on_idle = r.bool(EXPERIMENTAL, "repopup_on_idle", &[], self.repopup_on_idle);
    }

    fn resolve_text(&mut self, r: &Resolver<'_>) {
        self.font = r.string(GLOBAL, "font", flags::FONT.names, &self.font);
        let markup = self.markup;
        self.markup = r.aliased(&deprecated::ALLOW_MARKUP, markup, |raw| keyword(raw, markup));
        self.format = r.string(GLOBAL, "format", flags::FORMAT.names, &self.format);
        self.word_wrap = r.bool(GLOBAL, "word_wrap", flags::WORD_WRAP.names, self.word_wrap);
        self.ellipsize = r.choice(GLOBAL, "ellipsize", flags::ELLIPSIZE.names, self.ellipsize);
        self.ignore_newline =
            r.bool(GLOBAL, "ignore_newline", flags::IGNORE_NEWLINE.names, self.ignore_newline);
        self.alignment = r.choice(GLOBAL, "alignment", flags::ALIGNMENT.names, self.alignment);
        self.line_height = r.int(GLOBAL, "line_height", flags::LINE_HEIGHT.names, self.line_height);
        self.show_age_threshold = r.time(
            GLOBAL,
            "show_age_threshold",
            flags::SHOW_AGE_THRESHOLD.names,
            self.show_age_threshold,
        );
        self.show_indicators =
            r.bool(GLOBAL, "show_indicators", flags::SHOW_INDICATORS.names, self.show_indicators);
        self.sort = r.bool(GLOBAL, "sort", flags::SORT.names, self.sort);
        self.indicate_hidden =
            r.bool(GLOBAL, "indicate_hidden", flags::INDICATE_HIDDEN.names, self.indicate_hidden);
        self.stack_duplicates = r.bool(
            GLOBAL,
            "stack_duplicates",
            flags::STACK_DUPLICATES.names,
            self.stack_duplicates,
        );
        self.hide_duplicate_count = r.bool(
            GLOBAL,
            "hide_duplicate_count",
            flags::HIDE_DUPLICATE_COUNT.names,
            self.hide_duplicate_count,
        );
    }

    fn resolve_window(&mut self, r: &Resolver<'_>) {
        self.force_xinerama =
            r.bool(GLOBAL, "force_xinerama", flags::FORCE_XINERAMA.names, self.force_xinerama);
        self.monitor = r.int(GLOBAL, "monitor", flags::MONITOR.names, self.monitor);
        self.follow = r.choice(GLOBAL, "follow", flags::FOLLOW.names, self.follow);
        self.title = r.string(GLOBAL, "title", flags::TITLE.names, &self.title);
        self.class = r.string(GLOBAL, "class", flags::CLASS.names, &self.class);
        self.shrink = r.bool(GLOBAL, "shrink", flags::SHRINK.names, self.shrink);
        self.notification_height = r.int(
            GLOBAL,
            "notification_height",
            flags::NOTIFICATION_HEIGHT.names,
            self.notification_height,
        );
        self.separator_height = r.int(
            GLOBAL,
            "separator_height",
            flags::SEPARATOR_HEIGHT.names,
            self.separator_height,
        );
        self.padding = r.int(GLOBAL, "padding", flags::PADDING.names, self.padding);
        self.horizontal_padding = r.int(
            GLOBAL,
            "horizontal_padding",
            flags::HORIZONTAL_PADDING.names,
            self.horizontal_padding,
        );
        self.transparency =
            r.int(GLOBAL, "transparency", flags::TRANSPARENCY.names, self.transparency);
        self.corner_radius =
            r.int(GLOBAL, "corner_radius", flags::CORNER_RADIUS.names, self.corner_radius);
        self.separator_color = r.choice(
            GLOBAL,
            "separator_color",
            flags::SEPARATOR_COLOR.names,
            self.separator_color.clone(),
        );
        self.frame_width =
            r.aliased(&deprecated::FRAME_WIDTH, self.frame_width, decode::parse_int);
        self.frame_color =
            r.aliased(&deprecated::FRAME_COLOR, self.frame_color.clone(), verbatim);
        self.icon_position =
            r.choice(GLOBAL, "icon_position", flags::ICON_POSITION.names, self.icon_position);
        self.max_icon_size =
            r.int(GLOBAL, "max_icon_size", flags::MAX_ICON_SIZE.names, self.max_icon_size);
        self.icon_path = r.aliased(&deprecated::ICON_FOLDERS, self.icon_path.clone(), verbatim);
    }

    fn resolve_behavior(&mut self, r: &Resolver<'_>) {
        self.idle_threshold =
            r.time(GLOBAL, "idle_threshold", flags::IDLE_THRESHOLD.names, self.idle_threshold);
        self.sticky_history =
            r.bool(GLOBAL, "sticky_history", flags::STICKY_HISTORY.names, self.sticky_history);
        self.history_length =
            r.int(GLOBAL, "history_length", flags::HISTORY_LENGTH.names, self.history_length);
        self.startup_notification = r.bool(
            GLOBAL,
            "startup_notification",
            flags::STARTUP_NOTIFICATION.names,
            self.startup_notification,
        );
        self.mouse_left_click = r.choice(
            GLOBAL,
            "mouse_left_click",
            flags::MOUSE_LEFT_CLICK.names,
            self.mouse_left_click,
        );
        self.mouse_middle_click = r.choice(
            GLOBAL,
            "mouse_middle_click",
            flags::MOUSE_MIDDLE_CLICK.names,
            self.mouse_middle_click,
        );
        self.mouse_right_click = r.choice(
            GLOBAL,
            "mouse_right_click",
            flags::MOUSE_RIGHT_CLICK.names,
            self.mouse_right_click,
        );
        self.always_run_script = r.bool(
            GLOBAL,
            "always_run_script",
            flags::ALWAYS_RUN_SCRIPT.names,
            self.always_run_script,
        );
        self.print_notifications = r.switch(flags::PRINT.names, self.print_notifications);
    }

    fn resolve_urgencies(&mut self, r: &Resolver<'_>) {
        for urgency in Urgency::ALL {
            let section = urgency.section();
            let flags = urgency_flags(urgency);
            let style = self.urgency.get_mut(urgency);

            style.background = r.string(section, "background", flags.background.names, &style.background);
            style.foreground = r.string(section, "foreground", flags.foreground.names, &style.foreground);
            style.frame = r.string(section, "frame_color", flags.frame.names, &self.frame_color);
            style.timeout = r.time(section, "timeout", flags.timeout.names, style.timeout);
            style.icon = r.string(section, "icon", flags.icon.names, &style.icon);
        }
    }

    fn resolve_shortcuts(&mut self, r: &Resolver<'_>) {
        let keys = &mut self.shortcuts;
        keys.close = r.string(SHORTCUTS, "close", flags::CLOSE_KEY.names, &keys.close);
        keys.close_all = r.string(SHORTCUTS, "close_all", flags::CLOSE_ALL_KEY.names, &keys.close_all);
        keys.history = r.string(SHORTCUTS, "history", flags::HISTORY_KEY.names, &keys.history);
        keys.context = r.string(SHORTCUTS, "context", flags::CONTEXT_KEY.names, &keys.context);
    }

    fn resolve_derived(&mut self, r: &Resolver<'_>) {
        if let Some(raw) = r.opt_string(GLOBAL, "geometry", flags::GEOMETRY.names) {
            self.geometry = Geometry::parse(&raw).unwrap_or_else(|e| {
                tracing::warn!("{e}, using default geometry");
                Geometry::default()
            });
        }

        let dmenu = r.command(GLOBAL, "dmenu", flags::DMENU.names, defaults::DMENU);
        self.dmenu = CommandLine::parse(dmenu, "dmenu");
        let browser = r.command(GLOBAL, "browser", flags::BROWSER.names, defaults::BROWSER);
        self.browser = CommandLine::parse(browser, "browser");
    }
}

/// Decodes a keyword, keeping `default` for an empty value.
fn keyword<T>(raw: &str, default: T) -> Result<T, UnknownValue>
where
    T: FromStr<Err = UnknownValue>,
{
    if raw.is_empty() {
        Ok(default)
    } else {
        raw.parse()
    }
}

#[allow(clippy::unnecessary_wraps)] // matches the decoder signature
fn verbatim(raw: &str) -> Result<String, Infallible> {
    Ok(raw.to_string())
}
