//! Enumerated setting values.
//!
//! Each type decodes from a fixed, case-sensitive vocabulary through
//! [`FromStr`]; rejected input yields [`UnknownValue`], which callers turn
//! into a warning plus fallback (see [`decode_or`](crate::config::decode::decode_or)).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::level_filters::LevelFilter;

use crate::config::UnknownValue;
use crate::config::section;

/// Declares a keyword enum with `as_str`, `Display` and `FromStr`.
///
/// Extra spellings can be listed after the keyword with `|`; they decode
/// to the same variant but are never produced by `as_str`.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $keyword:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $keyword)]
                $variant,
            )+
        }

        impl $name {
            /// Name used in warnings about unknown values.
            pub const KIND: &'static str = $kind;

            /// Returns the canonical keyword.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($keyword $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(UnknownValue::new(Self::KIND, s)),
                }
            }
        }
    };
}

keyword_enum! {
    /// How markup in notification text is treated.
    pub enum MarkupMode ("markup mode") {
        /// Remove markup tags, show the text.
        Strip => "strip",
        /// Show markup verbatim.
        No => "no",
        /// Render markup.
        Full => "full" | "yes",
    }
}

keyword_enum! {
    /// Which monitor notifications follow.
    pub enum FollowMode ("follow mode") {
        /// Use the configured monitor.
        None => "none",
        /// Monitor under the mouse pointer.
        Mouse => "mouse",
        /// Monitor with keyboard focus.
        Keyboard => "keyboard",
    }
}

keyword_enum! {
    /// Action bound to a mouse button.
    pub enum MouseAction ("mouse action") {
        None => "none",
        DoAction => "do_action",
        CloseCurrent => "close_current",
        CloseAll => "close_all",
    }
}

keyword_enum! {
    /// Notification urgency.
    pub enum Urgency ("urgency") {
        Low => "low",
        Normal => "normal",
        Critical => "critical",
    }
}

impl Urgency {
    /// All urgencies, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Normal, Self::Critical];

    /// Section holding this urgency's defaults.
    #[must_use]
    pub const fn section(self) -> &'static str {
        match self {
            Self::Low => section::URGENCY_LOW,
            Self::Normal => section::URGENCY_NORMAL,
            Self::Critical => section::URGENCY_CRITICAL,
        }
    }
}

keyword_enum! {
    /// Horizontal text alignment.
    pub enum Alignment ("alignment") {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

keyword_enum! {
    /// Where icons are drawn.
    pub enum IconPosition ("icon position") {
        Left => "left",
        Right => "right",
        Off => "off",
    }
}

keyword_enum! {
    /// Behavior while a fullscreen window has focus.
    pub enum Fullscreen ("fullscreen behavior") {
        /// Show the notification anyway.
        Show => "show",
        /// Hold it back until fullscreen ends.
        Delay => "delay",
        /// Like `Delay`, and also push already shown notifications back.
        Pushback => "pushback",
    }
}

keyword_enum! {
    /// Where truncated lines are shortened.
    pub enum Ellipsize ("ellipsize value") {
        Start => "start",
        Middle => "middle",
        End => "end",
    }
}

keyword_enum! {
    /// Log verbosity.
    pub enum Verbosity ("verbosity") {
        Critical => "crit",
        Warning => "warn",
        Message => "mesg",
        Info => "info",
        Debug => "debug",
    }
}

impl Verbosity {
    /// Maximum tracing level shown at this verbosity.
    ///
    /// `mesg` and `info` both map to INFO; `debug` enables everything.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Critical => LevelFilter::ERROR,
            Self::Warning => LevelFilter::WARN,
            Self::Message | Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::TRACE,
        }
    }
}

/// Color of the line between notifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorColor {
    /// Chosen automatically from the notification colors.
    Auto,
    /// The notification's foreground color.
    Foreground,
    /// The frame color.
    Frame,
    /// An explicit color string.
    Custom(String),
}

impl FromStr for SeparatorColor {
    type Err = UnknownValue;

    /// Never fails: anything that is not a keyword is a custom color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "auto" => Self::Auto,
            "foreground" => Self::Foreground,
            "frame" => Self::Frame,
            custom => Self::Custom(custom.to_string()),
        })
    }
}

impl fmt::Display for SeparatorColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Foreground => f.write_str("foreground"),
            Self::Frame => f.write_str("frame"),
            Self::Custom(color) => f.write_str(color),
        }
    }
}
