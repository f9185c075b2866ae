//! The live DOM as a [`ThemeDocument`].

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlCollection, HtmlElement, Window};

use super::js_error;
use crate::config::ThemeConfig;
use crate::document::{ThemeDocument, ToggleAction, ToggleSpec};
use crate::error::ThemeError;
use crate::toggle::ToggleIcon;

pub struct BrowserDocument {
    window: Window,
    document: Document,
}

impl BrowserDocument {
    pub fn from_window() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or_else(|| ThemeError::Dom("no window".into()))?;
        let document = window.document().ok_or_else(|| ThemeError::Dom("no document".into()))?;
        Ok(Self { window, document })
    }

    /// Read a JSON config override from the element with `id`. Defaults when
    /// the element is absent.
    pub fn read_config(&self, id: &str) -> Result<ThemeConfig, ThemeError> {
        match self.document.get_element_by_id(id).and_then(|el| el.text_content()) {
            Some(raw) => ThemeConfig::from_json(&raw),
            None => Ok(ThemeConfig::default()),
        }
    }

    /// First element carrying `class`. Looked up by class name rather than a
    /// CSS selector so names like `1x` or `a.b` need no escaping.
    fn find_toggle(&self, class: &str) -> Option<Element> {
        let matches: HtmlCollection = self.document.get_elements_by_class_name(class);
        matches.item(0)
    }
}

impl ThemeDocument for BrowserDocument {
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("no root element".into()))?;
        root.set_attribute(name, value).map_err(|e| ThemeError::Dom(js_error(e)))
    }

    fn has_toggle(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.find_toggle(class).is_some())
    }

    fn insert_toggle(&mut self, spec: &ToggleSpec, on_activate: ToggleAction) -> Result<(), ThemeError> {
        let body: HtmlElement = self.document.body().ok_or_else(|| ThemeError::Dom("no body".into()))?;
        let button = self
            .document
            .create_element("button")
            .map_err(|e| ThemeError::Dom(js_error(e)))?;
        button.set_class_name(&spec.class);
        button.set_attribute("type", "button").map_err(|e| ThemeError::Dom(js_error(e)))?;
        button
            .set_attribute("aria-label", &spec.aria_label)
            .map_err(|e| ThemeError::Dom(js_error(e)))?;
        button.set_inner_html(&spec.icon.markup());

        let handler = Closure::wrap(on_activate);
        button
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Dom(js_error(e)))?;
        // Lives as long as the button, which is the page.
        handler.forget();

        body.append_child(&button).map_err(|e| ThemeError::Dom(js_error(e)))?;
        Ok(())
    }

    fn set_toggle_icon(&mut self, class: &str, icon: ToggleIcon) -> Result<bool, ThemeError> {
        let Some(toggle) = self.find_toggle(class) else {
            return Ok(false);
        };
        toggle.set_inner_html(&icon.markup());
        Ok(true)
    }

    fn prefers_dark(&self) -> bool {
        match self.window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(e) => {
                log::debug!("theme: matchMedia failed: {}", js_error(e));
                false
            }
        }
    }
}
