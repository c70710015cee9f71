//! Well-known section names.
//!
//! Use these constants for compile-time safety when addressing sections.

/// Main settings.
pub const GLOBAL: &str = "global";
/// Legacy frame section, superseded by `frame_*` keys in [`GLOBAL`].
pub const FRAME: &str = "frame";
/// Settings that may change or disappear.
pub const EXPERIMENTAL: &str = "experimental";
/// Keyboard shortcuts.
pub const SHORTCUTS: &str = "shortcuts";
/// Defaults for low urgency notifications.
pub const URGENCY_LOW: &str = "urgency_low";
/// Defaults for normal urgency notifications.
pub const URGENCY_NORMAL: &str = "urgency_normal";
/// Defaults for critical urgency notifications.
pub const URGENCY_CRITICAL: &str = "urgency_critical";

/// Sections that never become rules.
pub const RESERVED: [&str; 7] = [
    GLOBAL,
    FRAME,
    EXPERIMENTAL,
    SHORTCUTS,
    URGENCY_LOW,
    URGENCY_NORMAL,
    URGENCY_CRITICAL,
];

/// Returns `true` if `name` is one of the [`RESERVED`] sections.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}
