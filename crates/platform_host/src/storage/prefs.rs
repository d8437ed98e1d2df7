//! Lightweight preference storage contracts and adapters.
//!
//! Preference values are short strings stored per key. The browser adapter is synchronous at the
//! `localStorage` boundary, so the contract is synchronous too; callers on the UI thread observe
//! a write's outcome before they return.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for lightweight preference values (plain text per key).
pub trait PrefsStore {
    /// Loads the raw stored string for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves a raw string for a preference key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write (quota, permissions).
    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _raw: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryPrefsState {
    values: HashMap<String, String>,
    write_error: Option<String>,
    read_error: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, so a test can keep one handle for inspection while the
/// runtime owns another.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<MemoryPrefsState>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with one key/value pair.
    pub fn with_value(key: impl Into<String>, raw: impl Into<String>) -> Self {
        let store = Self::default();
        store
            .inner
            .borrow_mut()
            .values
            .insert(key.into(), raw.into());
        store
    }

    /// Returns the currently stored value for `key`, bypassing any injected read failure.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().values.get(key).cloned()
    }

    /// Makes every subsequent write fail with `message` until cleared with `None`.
    pub fn fail_writes(&self, message: Option<&str>) {
        self.inner.borrow_mut().write_error = message.map(str::to_string);
    }

    /// Makes every subsequent read fail with `message` until cleared with `None`.
    pub fn fail_reads(&self, message: Option<&str>) {
        self.inner.borrow_mut().read_error = message.map(str::to_string);
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        let state = self.inner.borrow();
        if let Some(err) = &state.read_error {
            return Err(err.clone());
        }
        Ok(state.values.get(key).cloned())
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        let mut state = self.inner.borrow_mut();
        if let Some(err) = &state.write_error {
            return Err(err.clone());
        }
        state.values.insert(key.to_string(), raw.to_string());
        Ok(())
    }
}
