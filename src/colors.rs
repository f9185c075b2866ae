//! Theme-aware color tables.
//!
//! `ThemeColors` is what page scripts read when they need semantic colors;
//! `ChartPalette` is the narrower set pushed into the charting runtime.

#[cfg(test)]
#[path = "colors_test.rs"]
mod colors_test;

use serde::Serialize;

use crate::theme::Theme;

/// Semantic color roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Tertiary,
    Accent,
    Success,
    Warning,
    Danger,
    Info,
    Background,
    Surface,
    Border,
}

impl ColorRole {
    pub const ALL: [ColorRole; 11] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Tertiary,
        ColorRole::Accent,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Danger,
        ColorRole::Info,
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::Border,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::Border => "border",
        }
    }

    /// Status and accent colors read the same in both themes.
    #[must_use]
    pub fn is_theme_invariant(self) -> bool {
        matches!(self, Self::Accent | Self::Success | Self::Warning | Self::Danger | Self::Info)
    }
}

/// Full role-to-color mapping for one theme. Values are `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub info: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
}

const ACCENT: &str = "#3b82f6";
const SUCCESS: &str = "#10b981";
const WARNING: &str = "#f59e0b";
const DANGER: &str = "#ef4444";
const INFO: &str = "#06b6d4";

pub const LIGHT_COLORS: ThemeColors = ThemeColors {
    primary: "#0f172a",
    secondary: "#475569",
    tertiary: "#64748b",
    accent: ACCENT,
    success: SUCCESS,
    warning: WARNING,
    danger: DANGER,
    info: INFO,
    background: "#ffffff",
    surface: "#f8fafc",
    border: "#e2e8f0",
};

pub const DARK_COLORS: ThemeColors = ThemeColors {
    primary: "#f8fafc",
    secondary: "#cbd5e1",
    tertiary: "#94a3b8",
    accent: ACCENT,
    success: SUCCESS,
    warning: WARNING,
    danger: DANGER,
    info: INFO,
    background: "#020617",
    surface: "#1e293b",
    border: "#334155",
};

impl ThemeColors {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT_COLORS,
            Theme::Dark => DARK_COLORS,
        }
    }

    /// Look up a single role.
    #[must_use]
    pub fn get(&self, role: ColorRole) -> &'static str {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Tertiary => self.tertiary,
            ColorRole::Accent => self.accent,
            ColorRole::Success => self.success,
            ColorRole::Warning => self.warning,
            ColorRole::Danger => self.danger,
            ColorRole::Info => self.info,
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Border => self.border,
        }
    }
}

/// Colors written into the charting runtime's defaults and live instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPalette {
    /// Default text color, also used for tick labels.
    pub text: &'static str,
    /// Default border color, also used for grid lines.
    pub grid: &'static str,
    pub background: &'static str,
}

impl ChartPalette {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        let colors = ThemeColors::for_theme(theme);
        let background = match theme {
            Theme::Light => LIGHT_COLORS.background,
            // Charts sit on cards, not the page canvas.
            Theme::Dark => DARK_COLORS.surface,
        };
        Self { text: colors.secondary, grid: colors.border, background }
    }
}
