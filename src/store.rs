//! Persistent key-value storage for the theme preference.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;

/// Origin-scoped storage that survives reloads (`localStorage` in browsers).
pub trait ThemeStore {
    /// Read the value for `key`, `None` when absent.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Write `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

#[derive(Debug, Default)]
struct MemoryEntries {
    values: HashMap<String, String>,
    writes: usize,
    unavailable: bool,
}

/// In-process store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryEntries>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().values.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Make every subsequent load and save fail, as a disabled or full
    /// browser storage would.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.borrow_mut().unavailable = unavailable;
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().values.get(key).cloned()
    }

    /// Number of successful saves since construction.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let entries = self.inner.borrow();
        if entries.unavailable {
            return Err(ThemeError::Storage("store unavailable".into()));
        }
        Ok(entries.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut entries = self.inner.borrow_mut();
        if entries.unavailable {
            return Err(ThemeError::Storage("store unavailable".into()));
        }
        entries.values.insert(key.to_owned(), value.to_owned());
        entries.writes += 1;
        Ok(())
    }
}
