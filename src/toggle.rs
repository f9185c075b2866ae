//! Toggle control icon.
//!
//! The control advertises the theme a click switches *to*, so a light page
//! shows the moon and a dark page shows the sun.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::theme::Theme;

const SUN_PATH: &str = "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z";
const MOON_PATH: &str = "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Offers a switch to the light theme.
    Sun,
    /// Offers a switch to the dark theme.
    Moon,
}

impl ToggleIcon {
    /// Icon for a page currently showing `current`.
    #[must_use]
    pub fn for_current(current: Theme) -> Self {
        Self::for_target(current.toggled())
    }

    #[must_use]
    pub fn for_target(target: Theme) -> Self {
        match target {
            Theme::Light => Self::Sun,
            Theme::Dark => Self::Moon,
        }
    }

    /// Theme that activating the control will switch to.
    #[must_use]
    pub fn target(self) -> Theme {
        match self {
            Self::Sun => Theme::Light,
            Self::Moon => Theme::Dark,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.target().label()
    }

    /// Inner HTML of the control: an outline SVG followed by the label.
    #[must_use]
    pub fn markup(self) -> String {
        let path = match self {
            Self::Sun => SUN_PATH,
            Self::Moon => MOON_PATH,
        };
        format!(
            concat!(
                r#"<svg class="theme-toggle-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">"#,
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="{}"/>"#,
                "</svg><span>{}</span>"
            ),
            path,
            self.label()
        )
    }
}
