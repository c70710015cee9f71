//! Window geometry strings.
//!
//! Grammar: `[-][=][{width}][x{height}][{+-}{x}[{+-}{y}]]`, e.g.
//! `300x5-30+20`. A leading `-` on the width means "screen width minus
//! this much". Height is counted in notifications.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static GEOMETRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-)?=?(\d+)?(?:[xX](\d+))?(?:([+-])(\d+)(?:([+-])(\d+))?)?$")
        .expect("geometry pattern is a valid regex")
});

/// Error for a geometry string that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Does not match the geometry grammar.
    #[error("Invalid geometry '{0}' (expected [{{width}}]x{{height}}[+/-{{x}}+/-{{y}}])")]
    Invalid(String),

    /// A component does not fit the target integer type.
    #[error("Geometry component '{component}' out of range in '{geometry}'")]
    OutOfRange {
        /// The rejected number.
        component: String,
        /// The full geometry string.
        geometry: String,
    },
}

/// Parsed window geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[allow(clippy::struct_excessive_bools)] // X geometry flags are naturally boolean
pub struct Geometry {
    /// Window width in pixels; 0 means the full screen width.
    pub width: u32,
    /// Maximum number of notifications shown at once; 0 means unlimited.
    pub height: u32,
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
    /// A width was given explicitly.
    pub width_set: bool,
    /// Width is relative to the screen width.
    pub negative_width: bool,
    /// `x` is measured from the right edge.
    pub negative_x: bool,
    /// `y` is measured from the bottom edge.
    pub negative_y: bool,
}

impl Geometry {
    /// Parses a geometry string.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if `raw` does not match the grammar or a
    /// number overflows.
    pub fn parse(raw: &str) -> Result<Self, GeometryError> {
        let trimmed = raw.trim();
        let caps = GEOMETRY_RE
            .captures(trimmed)
            .filter(|_| !trimmed.is_empty())
            .ok_or_else(|| GeometryError::Invalid(raw.to_string()))?;

        let number = |index: usize| -> Result<Option<u32>, GeometryError> {
            caps.get(index)
                .map(|m| {
                    m.as_str().parse::<u32>().map_err(|_| GeometryError::OutOfRange {
                        component: m.as_str().to_string(),
                        geometry: raw.to_string(),
                    })
                })
                .transpose()
        };
        let offset = |index: usize| -> Result<i32, GeometryError> {
            number(index)?
                .map_or(Ok(0), i32::try_from)
                .map_err(|_| GeometryError::OutOfRange {
                    component: caps
                        .get(index)
                        .map_or_else(String::new, |m| m.as_str().to_string()),
                    geometry: raw.to_string(),
                })
        };
        let is_minus = |index: usize| caps.get(index).is_some_and(|m| m.as_str() == "-");

        let width = number(2)?;
        let height = number(3)?;

        let mut geometry = Self {
            width: width.unwrap_or_default(),
            height: height.unwrap_or_default(),
            x: offset(5)?,
            y: offset(7)?,
            width_set: width.is_some(),
            negative_width: caps.get(1).is_some(),
            negative_x: is_minus(4),
            negative_y: is_minus(6),
        };

        // A relative width needs a number.
        if geometry.negative_width && !geometry.width_set {
            return Err(GeometryError::Invalid(raw.to_string()));
        }
        if geometry.negative_x {
            geometry.x = -geometry.x;
        }
        if geometry.negative_y {
            geometry.y = -geometry.y;
        }

        Ok(geometry)
    }
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
