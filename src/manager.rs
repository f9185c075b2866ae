//! Shared handle over the single controller of a page.
//!
//! DESIGN
//! ======
//! The page constructs one `ThemeManager` at startup and clones it into every
//! consumer that needs theme state. The toggle control's click handler holds
//! its own strong reference: the control lives as long as the page, and so
//! does the controller behind it, whether or not the host keeps a handle.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::colors::ThemeColors;
use crate::controller::ThemeController;
use crate::document::ToggleAction;
use crate::theme::Theme;

#[derive(Debug, Clone)]
pub struct ThemeManager {
    inner: Rc<RefCell<ThemeController>>,
}

impl ThemeManager {
    #[must_use]
    pub fn new(controller: ThemeController) -> Self {
        Self { inner: Rc::new(RefCell::new(controller)) }
    }

    /// Run the controller's startup sequence with the control wired back to
    /// [`toggle_theme`](Self::toggle_theme).
    pub fn initialize(&self) -> Theme {
        let action = activation(Rc::clone(&self.inner));
        self.inner.borrow_mut().initialize(action)
    }

    pub fn toggle_theme(&self) -> Theme {
        self.inner.borrow_mut().toggle_theme()
    }

    pub fn apply_theme(&self, theme: Theme) {
        self.inner.borrow_mut().apply_theme(theme);
    }

    pub fn update_chart_theme(&self) -> usize {
        self.inner.borrow_mut().update_chart_theme()
    }

    #[must_use]
    pub fn current_theme(&self) -> Theme {
        self.inner.borrow().current_theme()
    }

    #[must_use]
    pub fn theme_colors(&self) -> ThemeColors {
        self.inner.borrow().theme_colors()
    }
}

fn activation(controller: Rc<RefCell<ThemeController>>) -> ToggleAction {
    Box::new(move || match controller.try_borrow_mut() {
        Ok(mut controller) => {
            controller.toggle_theme();
        }
        Err(_) => log::warn!("theme: toggle activated re-entrantly, ignoring"),
    })
}
