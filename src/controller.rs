//! Theme state and its propagation to storage, document, and charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is the only writer of the theme. Collaborators are injected
//! at construction; each one failing degrades that side effect to a logged
//! no-op and never surfaces to the page.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::chart::ThemeSink;
use crate::colors::{ChartPalette, ThemeColors};
use crate::config::ThemeConfig;
use crate::document::{ThemeDocument, ToggleAction, ToggleSpec};
use crate::store::ThemeStore;
use crate::theme::Theme;
use crate::toggle::ToggleIcon;

pub struct ThemeController {
    config: ThemeConfig,
    current: Theme,
    store: Box<dyn ThemeStore>,
    document: Box<dyn ThemeDocument>,
    sink: Option<Box<dyn ThemeSink>>,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("config", &self.config)
            .field("current", &self.current)
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    /// Build a controller. Nothing is read or written until
    /// [`initialize`](Self::initialize).
    #[must_use]
    pub fn new(
        config: ThemeConfig,
        store: Box<dyn ThemeStore>,
        document: Box<dyn ThemeDocument>,
        sink: Option<Box<dyn ThemeSink>>,
    ) -> Self {
        Self { config, current: Theme::default(), store, document, sink }
    }

    #[must_use]
    pub fn current_theme(&self) -> Theme {
        self.current
    }

    /// Resolve the startup theme: the stored value when valid, otherwise the
    /// system preference (if enabled), otherwise light.
    #[must_use]
    pub fn read_preference(&self) -> Theme {
        let stored = match self.store.load(&self.config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("theme: reading preference failed: {e}");
                None
            }
        };
        Theme::from_stored_or(stored.as_deref(), || self.unstored_default())
    }

    fn unstored_default(&self) -> Theme {
        if self.config.follow_system_preference && self.document.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Startup sequence: apply the stored theme, ensure the toggle control
    /// exists, and restyle charts. `on_activate` is wired to the control if
    /// one gets created.
    pub fn initialize(&mut self, on_activate: ToggleAction) -> Theme {
        let theme = self.read_preference();
        self.apply_theme(theme);
        self.create_theme_toggle(on_activate);
        self.update_chart_theme();
        log::debug!("theme: initialized as {theme}");
        theme
    }

    /// Set the root attribute, the in-memory theme, and the stored value.
    pub fn apply_theme(&mut self, theme: Theme) {
        if let Err(e) = self.document.set_root_attribute(&self.config.root_attribute, theme.as_str()) {
            log::warn!("theme: setting {} failed: {e}", self.config.root_attribute);
        }
        self.current = theme;
        if let Err(e) = self.store.save(&self.config.storage_key, theme.as_str()) {
            log::warn!("theme: persisting preference failed: {e}");
        }
    }

    /// Switch to the other theme and refresh charts and the control icon.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply_theme(next);
        self.update_chart_theme();
        self.update_theme_toggle();
        next
    }

    #[must_use]
    pub fn theme_colors(&self) -> ThemeColors {
        ThemeColors::for_theme(self.current)
    }

    /// Icon the control should show: the theme a click switches to.
    #[must_use]
    pub fn toggle_icon(&self) -> ToggleIcon {
        ToggleIcon::for_current(self.current)
    }

    /// Push the current palette into the chart sink. Returns the number of
    /// redrawn charts; zero when no sink was injected.
    pub fn update_chart_theme(&mut self) -> usize {
        let Some(sink) = self.sink.as_mut() else {
            return 0;
        };
        match sink.apply(&ChartPalette::for_theme(self.current)) {
            Ok(redrawn) => redrawn,
            Err(e) => {
                log::warn!("theme: chart update failed: {e}");
                0
            }
        }
    }

    /// Insert the toggle control unless one carrying the marker class already
    /// exists. Returns whether a control was inserted.
    pub fn create_theme_toggle(&mut self, on_activate: ToggleAction) -> bool {
        match self.document.has_toggle(&self.config.toggle_class) {
            Ok(true) => return false,
            Ok(false) => {}
            Err(e) => {
                log::warn!("theme: toggle lookup failed: {e}");
                return false;
            }
        }
        let spec = ToggleSpec {
            class: self.config.toggle_class.clone(),
            aria_label: self.config.toggle_label.clone(),
            icon: self.toggle_icon(),
        };
        match self.document.insert_toggle(&spec, on_activate) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("theme: inserting toggle failed: {e}");
                false
            }
        }
    }

    fn update_theme_toggle(&mut self) {
        let icon = self.toggle_icon();
        match self.document.set_toggle_icon(&self.config.toggle_class, icon) {
            Ok(true) => {}
            Ok(false) => log::debug!("theme: no toggle control to update"),
            Err(e) => log::warn!("theme: updating toggle icon failed: {e}"),
        }
    }
}
