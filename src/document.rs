//! Document-side effects: the root attribute and the toggle control.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::ThemeError;
use crate::toggle::ToggleIcon;

/// Callback run when the user activates the toggle control.
pub type ToggleAction = Box<dyn FnMut()>;

/// Whether a `document.readyState` value means the body has been parsed and
/// the control can be inserted.
#[must_use]
pub fn document_parsed(ready_state: &str) -> bool {
    matches!(ready_state, "interactive" | "complete")
}

/// Everything needed to build the toggle control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSpec {
    /// Marker class; at most one element carrying it may exist.
    pub class: String,
    pub aria_label: String,
    pub icon: ToggleIcon,
}

/// The parts of the page the controller mutates.
pub trait ThemeDocument {
    /// Set `name` on the root element (`<html>`).
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Whether a control carrying `class` is already present.
    fn has_toggle(&self, class: &str) -> Result<bool, ThemeError>;

    /// Append a new control to the body, wired to `on_activate`.
    fn insert_toggle(&mut self, spec: &ToggleSpec, on_activate: ToggleAction) -> Result<(), ThemeError>;

    /// Replace the icon of the control carrying `class`. Returns `false` when
    /// no such control exists.
    fn set_toggle_icon(&mut self, class: &str, icon: ToggleIcon) -> Result<bool, ThemeError>;

    /// Whether the host environment prefers a dark color scheme.
    fn prefers_dark(&self) -> bool {
        false
    }
}

#[derive(Default)]
struct MemoryPage {
    root_attributes: BTreeMap<String, String>,
    toggles: Vec<MemoryToggle>,
    prefers_dark: bool,
}

struct MemoryToggle {
    spec: ToggleSpec,
    on_activate: Option<ToggleAction>,
}

/// In-process page model. Clones share the same page, so a caller can keep a
/// clone to observe what the controller did and to simulate clicks.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    page: Rc<RefCell<MemoryPage>>,
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.page.borrow();
        f.debug_struct("MemoryDocument")
            .field("root_attributes", &page.root_attributes)
            .field("toggles", &page.toggles.iter().map(|t| &t.spec).collect::<Vec<_>>())
            .field("prefers_dark", &page.prefers_dark)
            .finish()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.page.borrow_mut().prefers_dark = prefers_dark;
    }

    #[must_use]
    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.page.borrow().root_attributes.get(name).cloned()
    }

    #[must_use]
    pub fn toggle_count(&self) -> usize {
        self.page.borrow().toggles.len()
    }

    /// Spec of the first control carrying `class`.
    #[must_use]
    pub fn toggle(&self, class: &str) -> Option<ToggleSpec> {
        self.page
            .borrow()
            .toggles
            .iter()
            .find(|t| t.spec.class == class)
            .map(|t| t.spec.clone())
    }

    /// Simulate a user click on the first control carrying `class`. Returns
    /// `false` when there is no such control or it was inserted without a
    /// handler.
    pub fn click(&self, class: &str) -> bool {
        // The handler re-enters the document, so it must run with the page
        // released.
        let taken = self.take_handler(class);
        let Some((index, mut action)) = taken else {
            return false;
        };
        action();
        if let Some(toggle) = self.page.borrow_mut().toggles.get_mut(index) {
            toggle.on_activate = Some(action);
        }
        true
    }

    fn take_handler(&self, class: &str) -> Option<(usize, ToggleAction)> {
        let mut page = self.page.borrow_mut();
        let index = page.toggles.iter().position(|t| t.spec.class == class)?;
        let action = page.toggles[index].on_activate.take()?;
        Some((index, action))
    }

    /// Insert a control without a handler, as server-rendered markup would.
    pub fn insert_static_toggle(&self, spec: ToggleSpec) {
        self.page.borrow_mut().toggles.push(MemoryToggle { spec, on_activate: None });
    }
}

impl ThemeDocument for MemoryDocument {
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.page.borrow_mut().root_attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn has_toggle(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.page.borrow().toggles.iter().any(|t| t.spec.class == class))
    }

    fn insert_toggle(&mut self, spec: &ToggleSpec, on_activate: ToggleAction) -> Result<(), ThemeError> {
        self.page.borrow_mut().toggles.push(MemoryToggle { spec: spec.clone(), on_activate: Some(on_activate) });
        Ok(())
    }

    fn set_toggle_icon(&mut self, class: &str, icon: ToggleIcon) -> Result<bool, ThemeError> {
        let mut page = self.page.borrow_mut();
        let Some(toggle) = page.toggles.iter_mut().find(|t| t.spec.class == class) else {
            return Ok(false);
        };
        toggle.spec.icon = icon;
        Ok(true)
    }

    fn prefers_dark(&self) -> bool {
        self.page.borrow().prefers_dark
    }
}
