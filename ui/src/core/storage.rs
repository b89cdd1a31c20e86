//! Local persistence helpers for settings.
//!
//! Preferences are plain string values under string keys. The browser build
//! keeps them in `localStorage`; native builds keep a small JSON object in the
//! platform config directory. The theme preference is stored as a JSON
//! boolean (`true` = dark).

use thiserror::Error;

use super::theme::Theme;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored preference is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Key/value backend for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read the theme preference stored under `key`.
///
/// `Ok(None)` when nothing (or an empty value) is stored.
pub fn load_theme(store: &dyn PreferenceStore, key: &str) -> Result<Option<Theme>, StorageError> {
    match store.get(key)? {
        Some(raw) if !raw.is_empty() => {
            let dark: bool = serde_json::from_str(&raw)?;
            Ok(Some(Theme::from_dark(dark)))
        }
        _ => Ok(None),
    }
}

pub fn save_theme(store: &dyn PreferenceStore, key: &str, theme: Theme) -> Result<(), StorageError> {
    let raw = serde_json::to_string(&theme.is_dark())?;
    store.set(key, &raw)
}

/// The preference store for the current platform.
pub fn platform_store() -> Result<Box<dyn PreferenceStore>, StorageError> {
    #[cfg(target_arch = "wasm32")]
    {
        Ok(Box::new(BrowserStore::new()?))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(Box::new(FileStore::default_location()?))
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn new() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    use super::{PreferenceStore, StorageError};

    const PREFERENCES_FILE: &str = "preferences.json";

    /// Preferences kept as one JSON object in a file.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `preferences.json` inside the platform config directory.
        pub fn default_location() -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("dev", "Lychee", "Lychee")
                .ok_or(StorageError::Unavailable)?;
            Ok(Self::at(dirs.config_dir().join(PREFERENCES_FILE)))
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
                Ok(raw) => Ok(serde_json::from_str(&raw)?),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(err) => Err(err.into()),
            }
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.read_all()?.remove(key))
        }

        /// A corrupt file is replaced rather than blocking every later write.
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = match self.read_all() {
                Ok(entries) => entries,
                Err(StorageError::Parse(err)) => {
                    tracing::warn!(%err, path = %self.path.display(), "replacing corrupt preferences file");
                    BTreeMap::new()
                }
                Err(err) => return Err(err),
            };
            entries.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            // Write beside the target and rename so a cut-short write never
            // leaves half a JSON object behind.
            let staging = self.path.with_extension("json.tmp");
            fs::write(&staging, serde_json::to_string_pretty(&entries)?)?;
            fs::rename(&staging, &self.path)?;
            Ok(())
        }
    }
}

/// In-memory store for unit tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryStore(std::cell::RefCell<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.0.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}
