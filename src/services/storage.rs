use crate::config::Config;
use crate::models::error::ThemeError;

/// Persistent slot for the theme preference.
pub trait PreferenceStore {
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<String>, ThemeError>;

    fn save(&self, value: &str) -> Result<(), ThemeError>;
}

/// Preference kept in `window.localStorage` as a bare, non-JSON string.
///
/// Disabled or denied storage surfaces as [`ThemeError::StorageUnavailable`].
#[derive(Clone, Debug)]
pub struct LocalPreferenceStore {
    key: &'static str,
}

impl LocalPreferenceStore {
    pub fn new() -> Self {
        Self {
            key: Config::STORAGE_KEY,
        }
    }

    fn storage() -> Result<web_sys::Storage, ThemeError> {
        web_sys::window()
            .ok_or_else(|| ThemeError::StorageUnavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))?
            .ok_or_else(|| ThemeError::StorageUnavailable("localStorage disabled".to_string()))
    }
}

impl Default for LocalPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(self.key)
            .map_err(|e| ThemeError::StorageRead(format!("{e:?}")))
    }

    fn save(&self, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(self.key, value)
            .map_err(|e| ThemeError::StorageWrite(format!("{e:?}")))
    }
}
