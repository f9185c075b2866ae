//! Controller configuration.
//!
//! Every field has a default matching the stylesheet and storage contract, so
//! hosts usually supply nothing. A host that does override values passes a
//! JSON object; missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ThemeError;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ROOT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOGGLE_CLASS: &str = "theme-toggle";
pub const DEFAULT_TOGGLE_LABEL: &str = "Toggle theme";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Key under which the theme identifier is persisted.
    pub storage_key: String,
    /// Attribute set on the document root element.
    pub root_attribute: String,
    /// Marker class identifying the toggle control.
    pub toggle_class: String,
    /// Accessible label of the toggle control.
    pub toggle_label: String,
    /// Consult the system color-scheme preference when nothing valid is stored.
    pub follow_system_preference: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            root_attribute: DEFAULT_ROOT_ATTRIBUTE.to_owned(),
            toggle_class: DEFAULT_TOGGLE_CLASS.to_owned(),
            toggle_label: DEFAULT_TOGGLE_LABEL.to_owned(),
            follow_system_preference: false,
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a JSON config object.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the controller write nowhere.
    pub fn validate(&self) -> Result<(), ThemeError> {
        require_non_empty("storage_key", &self.storage_key)?;
        require_non_empty("root_attribute", &self.root_attribute)?;
        require_non_empty("toggle_class", &self.toggle_class)?;
        require_non_empty("toggle_label", &self.toggle_label)?;
        if self.toggle_class.chars().any(char::is_whitespace) {
            return Err(ThemeError::Config(format!(
                "toggle_class must be a single class name, got {:?}",
                self.toggle_class
            )));
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ThemeError> {
    if value.trim().is_empty() {
        return Err(ThemeError::Config(format!("{field} must not be empty")));
    }
    Ok(())
}
