//! Browser bindings, compiled only with the `hydrate` feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page loads the wasm module and then either calls
//! [`install_theme_toggle`], which builds the controller as soon as the
//! document is parsed, or constructs one [`ThemeHandle`] itself after
//! `DOMContentLoaded` to keep access to colors and toggling from JS. Either
//! way the toggle control keeps the controller alive for the page's lifetime;
//! nothing is installed on `window`.

mod chart;
mod document;
mod storage;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

pub use chart::ChartJsSink;
pub use document::BrowserDocument;
pub use storage::LocalStorage;

use crate::chart::ThemeSink;
use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::document::document_parsed;
use crate::manager::ThemeManager;
use crate::theme::Theme;

/// Id of an optional `<script type="application/json">` holding a
/// [`ThemeConfig`] override.
pub const CONFIG_ELEMENT_ID: &str = "theme-config";

/// Install the panic hook and console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("theme: keeping host logger: {e}");
    }
}

/// Build the page's controller once the document is parsed: immediately when
/// it already is, otherwise on `DOMContentLoaded`. For hosts that only need
/// the toggle control and never call back into the controller.
#[wasm_bindgen(js_name = installThemeToggle)]
pub fn install_theme_toggle() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document_parsed(&document.ready_state()) {
        ThemeHandle::new()?;
        return Ok(());
    }
    let on_parsed = Closure::once(|| {
        if let Err(e) = ThemeHandle::new() {
            log::warn!("theme: install failed: {}", js_error(e));
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_parsed.as_ref().unchecked_ref())?;
    // DOMContentLoaded fires once per page.
    on_parsed.forget();
    Ok(())
}

/// JS-facing handle over the page's theme controller.
///
/// Construct it after the document is parsed (`DOMContentLoaded`), since the
/// constructor inserts the toggle control into `<body>`. Dropping or never
/// storing the handle leaves the control working; keep it only to call
/// `toggleTheme`, `getThemeColors`, and friends from JS.
#[wasm_bindgen]
pub struct ThemeHandle {
    manager: ThemeManager,
}

#[wasm_bindgen]
impl ThemeHandle {
    /// Build the controller against `window`, apply the stored theme, insert
    /// the toggle control, and restyle any charts already on the page.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ThemeHandle, JsValue> {
        let document = BrowserDocument::from_window().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let config = document.read_config(CONFIG_ELEMENT_ID).unwrap_or_else(|e| {
            log::warn!("theme: ignoring config element: {e}");
            ThemeConfig::default()
        });
        let sink = ChartJsSink::detect().map(|sink| Box::new(sink) as Box<dyn ThemeSink>);
        if sink.is_none() {
            log::debug!("theme: no charting runtime on the page");
        }
        let controller = ThemeController::new(config, Box::new(LocalStorage::from_window()), Box::new(document), sink);
        let manager = ThemeManager::new(controller);
        manager.initialize();
        Ok(Self { manager })
    }

    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) -> String {
        self.manager.toggle_theme().as_str().to_owned()
    }

    #[wasm_bindgen(js_name = applyTheme)]
    pub fn apply_theme(&self, theme: &str) -> Result<(), JsValue> {
        let theme: Theme = theme.parse().map_err(|e: crate::ThemeError| JsValue::from_str(&e.to_string()))?;
        self.manager.apply_theme(theme);
        Ok(())
    }

    #[wasm_bindgen(js_name = currentTheme)]
    pub fn current_theme(&self) -> String {
        self.manager.current_theme().as_str().to_owned()
    }

    /// Current colors as a plain object keyed by role.
    #[wasm_bindgen(js_name = getThemeColors)]
    pub fn theme_colors(&self) -> Result<JsValue, JsValue> {
        let raw = serde_json::to_string(&self.manager.theme_colors()).map_err(|e| JsValue::from_str(&e.to_string()))?;
        js_sys::JSON::parse(&raw)
    }

    #[wasm_bindgen(js_name = updateChartTheme)]
    pub fn update_chart_theme(&self) -> usize {
        self.manager.update_chart_theme()
    }
}

/// Render a thrown JS value for logs and errors.
pub(crate) fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
