//! Local persistence helpers for small client settings.
//!
//! The site persists exactly one user preference (the selected language), so the
//! surface is a flat string key-value store:
//! - Web/WASM: `window.localStorage`.
//! - Native (tests, `dx serve` desktop previews): a JSON map in the platform data
//!   directory (`directories`), falling back to memory if that is unavailable.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Storage key holding the active locale code.
pub const LANGUAGE_KEY: &str = "selectedLanguage";

#[derive(Debug)]
pub enum StorageError {
    Unavailable(String),
    Write(String),
    Encode(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
            Self::Write(msg) => write!(f, "storage write failed: {msg}"),
            Self::Encode(msg) => write!(f, "storage encode failed: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Flat string key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile store; used by tests and as the last-resort fallback.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The platform's persistent store.
pub fn default_store() -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        match BrowserStorage::local() {
            Ok(storage) => return Rc::new(storage),
            Err(err) => {
                dioxus::logger::tracing::warn!("[storage] {err}; settings will not persist");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Some(storage) = FileStorage::in_data_dir() {
            return Rc::new(storage);
        }
        dioxus::logger::tracing::warn!("[storage] no data directory; settings will not persist");
    }

    Rc::new(MemoryStorage::new())
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage` wrapper.
    pub struct BrowserStorage {
        storage: web_sys::Storage,
    }

    impl BrowserStorage {
        pub fn local() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".into()))?;
            let storage = window
                .local_storage()
                .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(key, value)
                .map_err(|err| StorageError::Write(format!("{err:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;

    use directories::ProjectDirs;

    use super::{KeyValueStore, StorageError};

    const FILE_NAME: &str = "settings.json";

    /// JSON map on disk. Every write rewrites the whole (tiny) file.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        path: PathBuf,
    }

    impl FileStorage {
        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn in_data_dir() -> Option<Self> {
            ProjectDirs::from("de", "mirko-rinke", "folio")
                .map(|dirs| Self::at(dirs.data_dir().join(FILE_NAME)))
        }

        fn read_all(&self) -> BTreeMap<String, String> {
            fs::read_to_string(&self.path)
                .ok()
                .and_then(|raw| serde_json::from_str(&raw).ok())
                .unwrap_or_default()
        }

        fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent).map_err(|err| StorageError::Write(err.to_string()))?;
            }
            let raw = serde_json::to_string_pretty(entries)
                .map_err(|err| StorageError::Encode(err.to_string()))?;
            fs::write(&self.path, raw).map_err(|err| StorageError::Write(err.to_string()))
        }
    }

    impl KeyValueStore for FileStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.read_all().remove(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = self.read_all();
            entries.insert(key.to_string(), value.to_string());
            self.write_all(&entries)
        }
    }
}
