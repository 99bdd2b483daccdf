//! Persistence of options, theme, and language in a key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the store is `localStorage`; tests and native hosts use
//! [`MemoryStore`]. Every failure is reported as [`StorageError`] and absorbed
//! by the caller: a broken store never blocks the wheel from starting.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::i18n::Language;
use crate::options::WheelOption;
use crate::palette::Theme;

pub const OPTIONS_KEY: &str = "wheelOptions";
pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available in this environment")]
    Unavailable,
    #[error("failed to serialize options: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the backend refuses the read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the backend refuses the write
    /// (quota exceeded, private mode).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `localStorage`.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Open the window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] outside a browser or when the
    /// user agent has storage disabled.
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|err| StorageError::Backend(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }
}

/// Read the persisted option list.
///
/// Returns `None` when nothing is stored or the stored value cannot be read
/// or parsed; the latter cases are logged.
pub fn load_options<S: KeyValueStore + ?Sized>(store: &S) -> Option<Vec<WheelOption>> {
    let raw = match store.get(OPTIONS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("could not read saved options: {err}");
            return None;
        }
    };
    match serde_json::from_str::<Vec<WheelOption>>(&raw) {
        Ok(records) => Some(records),
        Err(err) => {
            log::warn!("discarding malformed saved options: {err}");
            None
        }
    }
}

/// Write the option list.
///
/// # Errors
///
/// Returns [`StorageError`] if serialization or the backend write fails.
pub fn save_options<S: KeyValueStore + ?Sized>(store: &mut S, options: &[WheelOption]) -> Result<(), StorageError> {
    let raw = serde_json::to_string(options)?;
    store.set(OPTIONS_KEY, &raw)
}

/// Persisted theme, if any valid one is stored.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Option<Theme> {
    match store.get(THEME_KEY) {
        Ok(raw) => raw.as_deref().and_then(Theme::parse),
        Err(err) => {
            log::warn!("could not read saved theme: {err}");
            None
        }
    }
}

/// # Errors
///
/// Returns [`StorageError`] if the backend write fails.
pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_KEY, theme.as_str())
}

/// Raw persisted language code. Validation happens in [`Language::detect`].
pub fn load_language<S: KeyValueStore + ?Sized>(store: &S) -> Option<String> {
    match store.get(LANGUAGE_KEY) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("could not read saved language: {err}");
            None
        }
    }
}

/// # Errors
///
/// Returns [`StorageError`] if the backend write fails.
pub fn save_language<S: KeyValueStore + ?Sized>(store: &mut S, language: Language) -> Result<(), StorageError> {
    store.set(LANGUAGE_KEY, language.code())
}
