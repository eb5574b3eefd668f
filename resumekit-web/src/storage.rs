//! Web preference storage using localStorage

use crate::dom;
use resumekit_core::PreferenceStore;
use web_sys::Storage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// `localStorage`-backed store. When the browser denies storage access the
/// store still exists; every call then reports [`WebStorageError::Unavailable`].
pub struct LocalStore {
    storage: Result<Storage, String>,
}

impl LocalStore {
    #[must_use]
    pub fn open() -> Self {
        let storage = dom::local_storage().map_err(|err| dom::js_error_message(&err));
        if let Err(reason) = &storage {
            log::warn!("Preferences will not persist: {reason}");
        }
        Self { storage }
    }

    fn handle(&self) -> Result<&Storage, WebStorageError> {
        self.storage
            .as_ref()
            .map_err(|reason| WebStorageError::Unavailable(reason.clone()))
    }
}

impl PreferenceStore for LocalStore {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.handle()?
            .get_item(key)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.handle()?
            .set_item(key, value)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))
    }
}
