//! Command-line override flags.
//!
//! Every setting that can be overridden from the command line has one
//! [`Flag`] here. The resolver addresses settings by these alias lists and
//! the CLI builds one `--<name>` argument per entry, so the two can never
//! drift apart.

/// How a flag takes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Requires a value: `--font "Sans 9"`.
    Value,
    /// Boolean; a bare `--sort` means `true`, `--sort=false` is accepted.
    Toggle,
}

/// A command-line flag with all of its accepted spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    /// Spellings without the leading dashes; the first is canonical.
    pub names: &'static [&'static str],
    /// Value style.
    pub kind: FlagKind,
    /// Help text shown by `--help`.
    pub help: &'static str,
}

impl Flag {
    const fn value(names: &'static [&'static str], help: &'static str) -> Self {
        Self {
            names,
            kind: FlagKind::Value,
            help,
        }
    }

    const fn toggle(names: &'static [&'static str], help: &'static str) -> Self {
        Self {
            names,
            kind: FlagKind::Toggle,
            help,
        }
    }

    /// Canonical spelling, also used as the clap argument id.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.names[0]
    }
}

pub const VERBOSITY: Flag = Flag::value(
    &["verbosity"],
    "The verbosity to log (one of 'crit', 'warn', 'mesg', 'info', 'debug')",
);
pub const FORCE_XINERAMA: Flag =
    Flag::toggle(&["force_xinerama"], "Force the use of the Xinerama extension");
pub const FONT: Flag = Flag::value(&["font", "fn"], "The font to use");
pub const MARKUP: Flag = Flag::value(&["markup"], "Specify how markup should be handled");
pub const FORMAT: Flag = Flag::value(&["format"], "The format template for the notifications");
pub const SORT: Flag = Flag::toggle(&["sort"], "Sort notifications by urgency and date");
pub const INDICATE_HIDDEN: Flag =
    Flag::toggle(&["indicate_hidden"], "Show how many notifications are hidden");
pub const WORD_WRAP: Flag = Flag::toggle(&["word_wrap"], "Word wrap instead of truncating");
pub const ELLIPSIZE: Flag = Flag::value(
    &["ellipsize"],
    "Ellipsize truncated lines on the start/middle/end",
);
pub const IGNORE_NEWLINE: Flag =
    Flag::toggle(&["ignore_newline"], "Ignore newline characters in notifications");
pub const IDLE_THRESHOLD: Flag = Flag::value(
    &["idle_threshold"],
    "Don't time out notifications while the user is idle longer than this",
);
pub const MONITOR: Flag = Flag::value(
    &["monitor", "mon"],
    "Monitor on which notifications are displayed",
);
pub const FOLLOW: Flag = Flag::value(&["follow"], "Follow mouse, keyboard or none");
pub const TITLE: Flag = Flag::value(&["title", "t"], "Title of spawned windows");
pub const CLASS: Flag = Flag::value(&["class", "c"], "Class of spawned windows");
pub const GEOMETRY: Flag = Flag::value(&["geometry", "geom"], "Geometry for the window");
pub const SHRINK: Flag = Flag::toggle(&["shrink"], "Shrink window if smaller than the width");
pub const LINE_HEIGHT: Flag =
    Flag::value(&["line_height", "lh"], "Add spacing between lines of text");
pub const NOTIFICATION_HEIGHT: Flag = Flag::value(
    &["notification_height", "nh"],
    "Minimum height of a notification",
);
pub const ALIGNMENT: Flag = Flag::value(&["alignment", "align"], "Text alignment left/center/right");
pub const SHOW_AGE_THRESHOLD: Flag = Flag::value(
    &["show_age_threshold"],
    "Show the age of notifications older than this",
);
pub const HIDE_DUPLICATE_COUNT: Flag = Flag::toggle(
    &["hide_duplicate_count"],
    "Hide the count of stacked duplicate notifications",
);
pub const STICKY_HISTORY: Flag = Flag::toggle(
    &["sticky_history"],
    "Don't time out notifications popped up from history",
);
pub const HISTORY_LENGTH: Flag =
    Flag::value(&["history_length"], "Max amount of notifications kept in history");
pub const SHOW_INDICATORS: Flag = Flag::toggle(
    &["show_indicators"],
    "Show indicators for actions \"(A)\" and URLs \"(U)\"",
);
pub const SEPARATOR_HEIGHT: Flag = Flag::value(
    &["separator_height", "sep_height"],
    "Height of the separator line",
);
pub const PADDING: Flag = Flag::value(&["padding"], "Padding between text and separator");
pub const HORIZONTAL_PADDING: Flag = Flag::value(&["horizontal_padding"], "Horizontal padding");
pub const TRANSPARENCY: Flag = Flag::value(&["transparency"], "Transparency, range 0-100");
pub const CORNER_RADIUS: Flag = Flag::value(&["corner_radius"], "Window corner radius");
pub const SEPARATOR_COLOR: Flag = Flag::value(
    &["separator_color", "sep_color"],
    "Color of the separator line (or 'auto', 'foreground', 'frame')",
);
pub const STACK_DUPLICATES: Flag = Flag::toggle(
    &["stack_duplicates"],
    "Stack together notifications with the same content",
);
pub const STARTUP_NOTIFICATION: Flag =
    Flag::toggle(&["startup_notification"], "Show a notification on startup");
pub const DMENU: Flag = Flag::value(&["dmenu"], "Command line of the context menu program");
pub const BROWSER: Flag = Flag::value(&["browser"], "Command line used to open URLs");
pub const ICON_POSITION: Flag = Flag::value(&["icon_position"], "Align icons left/right/off");
pub const MAX_ICON_SIZE: Flag = Flag::value(
    &["max_icon_size"],
    "Scale larger icons down to this size, 0 to disable",
);
pub const ICON_FOLDERS: Flag = Flag::value(
    &["icon_folders"],
    "Folders with default icons (deprecated, use --icon_path)",
);
pub const ICON_PATH: Flag = Flag::value(&["icon_path"], "Colon-separated paths to default icons");
pub const FRAME_WIDTH: Flag = Flag::value(&["frame_width"], "Width of the frame around the window");
pub const FRAME_COLOR: Flag = Flag::value(&["frame_color"], "Color of the frame around the window");
pub const MOUSE_LEFT_CLICK: Flag = Flag::value(
    &["mouse_left_click", "left_click"],
    "Action of the left mouse button",
);
pub const MOUSE_MIDDLE_CLICK: Flag =
    Flag::value(&["mouse_middle_click"], "Action of the middle mouse button");
pub const MOUSE_RIGHT_CLICK: Flag =
    Flag::value(&["mouse_right_click"], "Action of the right mouse button");
pub const ALWAYS_RUN_SCRIPT: Flag = Flag::toggle(
    &["always_run_script"],
    "Run rule scripts even if the notification is suppressed",
);
pub const PRINT: Flag = Flag::toggle(&["print"], "Print notifications to stdout (debugging)");

pub const LOW_BACKGROUND: Flag = Flag::value(&["lb"], "Background color for low urgency");
pub const LOW_FOREGROUND: Flag = Flag::value(&["lf"], "Foreground color for low urgency");
pub const LOW_FRAME: Flag = Flag::value(&["lfr"], "Frame color for low urgency");
pub const LOW_TIMEOUT: Flag = Flag::value(&["lto"], "Timeout for low urgency");
pub const LOW_ICON: Flag = Flag::value(&["li"], "Icon for low urgency");

pub const NORMAL_BACKGROUND: Flag = Flag::value(&["nb"], "Background color for normal urgency");
pub const NORMAL_FOREGROUND: Flag = Flag::value(&["nf"], "Foreground color for normal urgency");
pub const NORMAL_FRAME: Flag = Flag::value(&["nfr"], "Frame color for normal urgency");
pub const NORMAL_TIMEOUT: Flag = Flag::value(&["nto"], "Timeout for normal urgency");
pub const NORMAL_ICON: Flag = Flag::value(&["ni"], "Icon for normal urgency");

pub const CRITICAL_BACKGROUND: Flag =
    Flag::value(&["cb"], "Background color for critical urgency");
pub const CRITICAL_FOREGROUND: Flag =
    Flag::value(&["cf"], "Foreground color for critical urgency");
pub const CRITICAL_FRAME: Flag = Flag::value(&["cfr"], "Frame color for critical urgency");
pub const CRITICAL_TIMEOUT: Flag = Flag::value(&["cto"], "Timeout for critical urgency");
pub const CRITICAL_ICON: Flag = Flag::value(&["ci"], "Icon for critical urgency");

pub const CLOSE_KEY: Flag = Flag::value(&["key"], "Shortcut for closing one notification");
pub const CLOSE_ALL_KEY: Flag =
    Flag::value(&["all_key"], "Shortcut for closing all notifications");
pub const HISTORY_KEY: Flag = Flag::value(
    &["history_key"],
    "Shortcut to pop the last notification from history",
);
pub const CONTEXT_KEY: Flag = Flag::value(&["context_key"], "Shortcut for the context menu");

/// Every override flag, in `--help` order.
pub const ALL: &[Flag] = &[
    VERBOSITY,
    FORCE_XINERAMA,
    FONT,
    MARKUP,
    FORMAT,
    SORT,
    INDICATE_HIDDEN,
    WORD_WRAP,
    ELLIPSIZE,
    IGNORE_NEWLINE,
    IDLE_THRESHOLD,
    MONITOR,
    FOLLOW,
    TITLE,
    CLASS,
    GEOMETRY,
    SHRINK,
    LINE_HEIGHT,
    NOTIFICATION_HEIGHT,
    ALIGNMENT,
    SHOW_AGE_THRESHOLD,
    HIDE_DUPLICATE_COUNT,
    STICKY_HISTORY,
    HISTORY_LENGTH,
    SHOW_INDICATORS,
    SEPARATOR_HEIGHT,
    PADDING,
    HORIZONTAL_PADDING,
    TRANSPARENCY,
    CORNER_RADIUS,
    SEPARATOR_COLOR,
    STACK_DUPLICATES,
    STARTUP_NOTIFICATION,
    DMENU,
    BROWSER,
    ICON_POSITION,
    MAX_ICON_SIZE,
    ICON_FOLDERS,
    ICON_PATH,
    FRAME_WIDTH,
    FRAME_COLOR,
    MOUSE_LEFT_CLICK,
    MOUSE_MIDDLE_CLICK,
    MOUSE_RIGHT_CLICK,
    ALWAYS_RUN_SCRIPT,
    PRINT,
    LOW_BACKGROUND,
    LOW_FOREGROUND,
    LOW_FRAME,
    LOW_TIMEOUT,
    LOW_ICON,
    NORMAL_BACKGROUND,
    NORMAL_FOREGROUND,
    NORMAL_FRAME,
    NORMAL_TIMEOUT,
    NORMAL_ICON,
    CRITICAL_BACKGROUND,
    CRITICAL_FOREGROUND,
    CRITICAL_FRAME,
    CRITICAL_TIMEOUT,
    CRITICAL_ICON,
    CLOSE_KEY,
    CLOSE_ALL_KEY,
    HISTORY_KEY,
    CONTEXT_KEY,
];

/// Finds the flag accepting the spelling `name`.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Flag> {
    ALL.iter().find(|flag| flag.names.contains(&name))
}
