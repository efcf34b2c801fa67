//! The light/middle/dark subdivision of a feature.
//!
//! Display order is fixed by [`Shade::rank`], which mirrors the `shades`
//! lookup table created by the schema (`light = 0`, `middle = 1`,
//! `dark = 2`). Feature types are always presented in that order no matter
//! how they were inserted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three shade variants of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shade {
    Light,
    Middle,
    Dark,
}

/// Returned when a stored or submitted shade name is not one of the three known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shade '{0}' (expected light, middle or dark)")]
pub struct ParseShadeError(pub String);

impl Shade {
    /// All shades in display order.
    pub const ALL: [Shade; 3] = [Shade::Light, Shade::Middle, Shade::Dark];

    /// Position of this shade in display order.
    pub const fn rank(self) -> i64 {
        match self {
            Shade::Light => 0,
            Shade::Middle => 1,
            Shade::Dark => 2,
        }
    }

    /// Storage name (`"light"`, `"middle"`, `"dark"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Shade::Light => "light",
            Shade::Middle => "middle",
            Shade::Dark => "dark",
        }
    }

    /// Capitalized name used when synthesizing default type names.
    pub const fn label(self) -> &'static str {
        match self {
            Shade::Light => "Light",
            Shade::Middle => "Middle",
            Shade::Dark => "Dark",
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shade {
    type Err = ParseShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Shade::Light),
            "middle" => Ok(Shade::Middle),
            "dark" => Ok(Shade::Dark),
            other => Err(ParseShadeError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Shade {
    type Error = ParseShadeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
