//! `window.localStorage` as a [`ThemeStore`].

use web_sys::Storage;

use super::js_error;
use crate::error::ThemeError;
use crate::store::ThemeStore;

/// Storage handle captured at startup. `None` when the browser denies access
/// (private browsing, storage disabled).
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn from_window() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(e)) => {
                log::warn!("theme: localStorage denied: {}", js_error(e));
                None
            }
            None => None,
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, ThemeError> {
        self.storage.as_ref().ok_or_else(|| ThemeError::Storage("localStorage unavailable".into()))
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?.get_item(key).map_err(|e| ThemeError::Storage(js_error(e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?.set_item(key, value).map_err(|e| ThemeError::Storage(js_error(e)))
    }
}
