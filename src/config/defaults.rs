//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.
//! Enumerated defaults live next to their types in [`crate::settings`].

use super::decode::Timeout;

pub const FONT: &str = "Monospace 8";
pub const FORMAT: &str = "<b>%s</b>\n%b";
pub const SORT: bool = true;
pub const INDICATE_HIDDEN: bool = true;
pub const WORD_WRAP: bool = false;
pub const IGNORE_NEWLINE: bool = false;
pub const FORCE_XINERAMA: bool = false;
pub const PER_MONITOR_DPI: bool = false;
pub const REPOPUP_ON_IDLE: bool = false;

/// Idle detection is off by default.
pub const IDLE_THRESHOLD: Timeout = Timeout::Infinite;

pub const MONITOR: i32 = 0;
pub const TITLE: &str = "toastd";
pub const CLASS: &str = "toastd";
pub const SHRINK: bool = false;
pub const LINE_HEIGHT: i32 = 0;
pub const NOTIFICATION_HEIGHT: i32 = 0;

/// Ages are never shown by default.
pub const SHOW_AGE_THRESHOLD: Timeout = Timeout::Infinite;

pub const HIDE_DUPLICATE_COUNT: bool = false;
pub const STICKY_HISTORY: bool = true;
pub const HISTORY_LENGTH: i32 = 20;
pub const SHOW_INDICATORS: bool = true;
pub const SEPARATOR_HEIGHT: i32 = 2;
pub const PADDING: i32 = 0;
pub const HORIZONTAL_PADDING: i32 = 0;
pub const TRANSPARENCY: i32 = 0;
pub const CORNER_RADIUS: i32 = 0;
pub const STACK_DUPLICATES: bool = true;
pub const STARTUP_NOTIFICATION: bool = false;
pub const DMENU: &str = "/usr/bin/dmenu";
pub const BROWSER: &str = "/usr/bin/firefox";
pub const MAX_ICON_SIZE: i32 = 0;
pub const ICON_PATH: &str =
    "/usr/share/icons/gnome/16x16/status/:/usr/share/icons/gnome/16x16/devices/";
pub const FRAME_WIDTH: i32 = 0;
pub const FRAME_COLOR: &str = "#888888";
pub const ALWAYS_RUN_SCRIPT: bool = true;
pub const PRINT_NOTIFICATIONS: bool = false;

pub const LOW_BACKGROUND: &str = "#222222";
pub const LOW_FOREGROUND: &str = "#888888";
pub const LOW_TIMEOUT: Timeout = Timeout::from_secs(10);
pub const LOW_ICON: &str = "dialog-information";

pub const NORMAL_BACKGROUND: &str = "#285577";
pub const NORMAL_FOREGROUND: &str = "#ffffff";
pub const NORMAL_TIMEOUT: Timeout = Timeout::from_secs(10);
pub const NORMAL_ICON: &str = "dialog-information";

pub const CRITICAL_BACKGROUND: &str = "#900000";
pub const CRITICAL_FOREGROUND: &str = "#ffffff";
/// Critical notifications stay until dismissed.
pub const CRITICAL_TIMEOUT: Timeout = Timeout::Infinite;
pub const CRITICAL_ICON: &str = "dialog-warning";

/// Shortcuts are unbound unless configured.
pub const SHORTCUT: &str = "none";

