//! Legacy option locations.
//!
//! Options that were renamed or moved keep working through the entries of
//! [`TABLE`]. All entries are resolved by [`Deprecation::raw`]:
//!
//! 1. the legacy value (flag, then file) is read and translated into the
//!    canonical vocabulary; this is the *seed*, and its use is reported;
//! 2. the canonical value (flag, then file), if present, replaces the seed;
//! 3. if neither exists the caller's compiled default applies.
//!
//! An explicit canonical value therefore always wins, and a legacy-only
//! value still takes effect.

use std::borrow::Cow;

use super::decode;
use super::flags;
use super::resolve::Resolver;
use super::section;

/// Where an option lives: section, key and command-line spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Config file section.
    pub section: &'static str,
    /// Key within the section.
    pub key: &'static str,
    /// Command-line spellings; empty if the option has no flag.
    pub aliases: &'static [&'static str],
}

/// How a legacy value is merged and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// A renamed key: the legacy value seeds the canonical one, and an
    /// info-level migration notice is logged.
    SeedThenOverride,
    /// A key whose whole section is deprecated: the value is redirected
    /// into the canonical section with a warning.
    WarnAndRedirect,
}

/// A legacy option location and how it maps to the canonical one.
#[derive(Debug, Clone, Copy)]
pub struct Deprecation {
    /// Where the option used to live.
    pub legacy: Location,
    /// Where the option lives now.
    pub canonical: Location,
    /// Merge and reporting policy.
    pub policy: MergePolicy,
    /// Converts a legacy raw value into a canonical raw value.
    translate: fn(&str) -> Option<String>,
}

impl Deprecation {
    /// Returns the raw canonical value, seeded from the legacy location.
    ///
    /// Logs a migration notice whenever the legacy location is set.
    #[must_use]
    pub fn raw<'a>(&self, resolver: &Resolver<'a>) -> Option<Cow<'a, str>> {
        let (seed, canonical) = self.values(resolver);
        canonical.map(Cow::Borrowed).or_else(|| seed.map(Cow::Owned))
    }

    /// Returns the translated seed and the raw canonical value, unmerged.
    ///
    /// Logs a migration notice whenever the legacy location is set.
    #[must_use]
    pub fn values<'a>(&self, resolver: &Resolver<'a>) -> (Option<String>, Option<&'a str>) {
        let seed = self.seed(resolver);
        let canonical = resolver.raw(
            self.canonical.section,
            self.canonical.key,
            self.canonical.aliases,
        );
        (seed, canonical)
    }

    fn seed(&self, resolver: &Resolver<'_>) -> Option<String> {
        let raw = resolver.raw(self.legacy.section, self.legacy.key, self.legacy.aliases)?;
        self.notice();
        (self.translate)(raw)
    }

    fn notice(&self) {
        let Self {
            legacy, canonical, ..
        } = self;

        match self.policy {
            MergePolicy::SeedThenOverride => tracing::info!(
                "The option '{}' is deprecated, please use '{}' instead.",
                legacy.key,
                canonical.key
            ),
            MergePolicy::WarnAndRedirect => tracing::warn!(
                "The [{}] section is deprecated, '{}' has been renamed to '{}' and moved to the [{}] section.",
                legacy.section,
                legacy.key,
                canonical.key,
                canonical.section
            ),
        }
    }
}

fn identity(raw: &str) -> Option<String> {
    Some(raw.to_string())
}

fn markup_from_allow_markup(raw: &str) -> Option<String> {
    let allow = decode::parse_bool(raw).unwrap_or_else(|e| {
        tracing::warn!(key = "allow_markup", "{e}, treating as false");
        false
    });
    Some(if allow { "full" } else { "strip" }.to_string())
}

/// `allow_markup = true|false` became `markup = full|strip`.
pub const ALLOW_MARKUP: Deprecation = Deprecation {
    legacy: Location {
        section: section::GLOBAL,
        key: "allow_markup",
        aliases: &[],
    },
    canonical: Location {
        section: section::GLOBAL,
        key: "markup",
        aliases: flags::MARKUP.names,
    },
    policy: MergePolicy::SeedThenOverride,
    translate: markup_from_allow_markup,
};

/// `icon_folders` was renamed to `icon_path`.
pub const ICON_FOLDERS: Deprecation = Deprecation {
    legacy: Location {
        section: section::GLOBAL,
        key: "icon_folders",
        aliases: flags::ICON_FOLDERS.names,
    },
    canonical: Location {
        section: section::GLOBAL,
        key: "icon_path",
        aliases: flags::ICON_PATH.names,
    },
    policy: MergePolicy::SeedThenOverride,
    translate: identity,
};

/// `[frame] width` moved to `[global] frame_width`.
pub const FRAME_WIDTH: Deprecation = Deprecation {
    legacy: Location {
        section: section::FRAME,
        key: "width",
        aliases: &[],
    },
    canonical: Location {
        section: section::GLOBAL,
        key: "frame_width",
        aliases: flags::FRAME_WIDTH.names,
    },
    policy: MergePolicy::WarnAndRedirect,
    translate: identity,
};

/// `[frame] color` moved to `[global] frame_color`.
pub const FRAME_COLOR: Deprecation = Deprecation {
    legacy: Location {
        section: section::FRAME,
        key: "color",
        aliases: &[],
    },
    canonical: Location {
        section: section::GLOBAL,
        key: "frame_color",
        aliases: flags::FRAME_COLOR.names,
    },
    policy: MergePolicy::WarnAndRedirect,
    translate: identity,
};

/// Every legacy location still honoured.
pub const TABLE: &[Deprecation] = &[ALLOW_MARKUP, ICON_FOLDERS, FRAME_WIDTH, FRAME_COLOR];
