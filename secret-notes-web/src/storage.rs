//! `localStorage` adapter for the core progress repository.
use crate::dom;
use secret_notes_game::KeyValueStore;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage {op} of {key:?} failed: {message}")]
    Access {
        op: &'static str,
        key: String,
        message: String,
    },
}

impl WebStorageError {
    fn access(op: &'static str, key: &str, err: &JsValue) -> Self {
        Self::Access {
            op,
            key: key.to_string(),
            message: dom::js_error_message(err),
        }
    }
}

/// Handle to the page's `localStorage`. Resolved on every call so a store
/// that becomes unavailable mid-session degrades into logged errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, WebStorageError> {
        dom::local_storage()
            .map_err(|err| WebStorageError::Unavailable(dom::js_error_message(&err)))
    }
}

impl KeyValueStore for BrowserStorage {
    type Error = WebStorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| WebStorageError::access("read", key, &err))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| WebStorageError::access("write", key, &err))
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .remove_item(key)
            .map_err(|err| WebStorageError::access("remove", key, &err))
    }
}
