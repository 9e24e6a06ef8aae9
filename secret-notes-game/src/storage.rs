//! Persistence of the player's name and unlocked letters through a string
//! key/value store.
use crate::config::StorageKeys;
use crate::progress::{Progress, UnlockedSet};
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

/// Minimal string key/value store, shaped like the browser's `localStorage`.
pub trait KeyValueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete a value. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the delete.
    fn remove_item(&self, key: &str) -> Result<(), Self::Error>;
}

pub type MemoryStoreError = Infallible;

/// In-memory store. Clones share the same map, so a test can keep a handle and
/// inspect what the app wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a raw value.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = MemoryStoreError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Reads and writes [`Progress`] through a [`KeyValueStore`].
///
/// Failures never propagate: unreadable data loads as empty and failed writes
/// are logged. The in-memory state stays authoritative for the session.
#[derive(Debug, Clone)]
pub struct ProgressRepository<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> ProgressRepository<S> {
    pub const fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    #[must_use]
    pub fn load(&self) -> Progress {
        Progress {
            user_name: self.load_name(),
            unlocked: self.load_unlocked(),
        }
    }

    /// Stored name, trimmed. A blank entry reads as no name.
    #[must_use]
    pub fn load_name(&self) -> String {
        match self.store.get_item(&self.keys.name_key) {
            Ok(name) => name.map(|name| name.trim().to_string()).unwrap_or_default(),
            Err(err) => {
                log::warn!("reading stored name failed: {err}");
                String::new()
            }
        }
    }

    /// Load the unlocked set. Malformed payloads load as empty; out-of-range
    /// ids are dropped.
    #[must_use]
    pub fn load_unlocked(&self) -> UnlockedSet {
        let raw = match self.store.get_item(&self.keys.unlocked_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return UnlockedSet::new(),
            Err(err) => {
                log::warn!("reading unlocked letters failed: {err}");
                return UnlockedSet::new();
            }
        };
        match serde_json::from_str::<Vec<i64>>(&raw) {
            Ok(ids) => {
                let set = UnlockedSet::from_raw(ids.iter().copied());
                if set.len() != ids.len() {
                    log::warn!("dropped invalid or duplicate ids from unlocked payload {raw:?}");
                }
                set
            }
            Err(err) => {
                log::warn!("unlocked payload {raw:?} is malformed, starting empty: {err}");
                UnlockedSet::new()
            }
        }
    }

    pub fn save_name(&self, name: &str) {
        if let Err(err) = self.store.set_item(&self.keys.name_key, name) {
            log::warn!("saving name failed: {err}");
        }
    }

    pub fn clear_name(&self) {
        if let Err(err) = self.store.remove_item(&self.keys.name_key) {
            log::warn!("clearing name failed: {err}");
        }
    }

    pub fn save_unlocked(&self, unlocked: &UnlockedSet) {
        let payload = match serde_json::to_string(unlocked) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("encoding unlocked letters failed: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set_item(&self.keys.unlocked_key, &payload) {
            log::warn!("saving unlocked letters failed: {err}");
        }
    }
}
