//! The two-valued display mode and its string identifiers.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Both variants, light first.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Identifier written to storage and to the root `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Human-readable label shown next to the toggle icon.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// The other variant.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolve a persisted value. `fallback` runs only when the value is
    /// missing or unrecognized.
    pub fn from_stored_or(raw: Option<&str>, fallback: impl FnOnce() -> Self) -> Self {
        match raw.map(str::parse::<Self>) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                log::debug!("theme: ignoring stored value: {e}");
                fallback()
            }
            None => fallback(),
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_owned())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
