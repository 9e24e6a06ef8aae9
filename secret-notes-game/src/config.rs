//! Runtime configuration shared by the web front end and the tester.
use crate::constants::CELEBRATION_MS;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME_KEY: &str = "secretNotesUserName";
pub const DEFAULT_UNLOCKED_KEY: &str = "secretNotesUnlocked";
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 100;

/// Key names used for the two persisted entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub name_key: String,
    pub unlocked_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            name_key: DEFAULT_NAME_KEY.to_string(),
            unlocked_key: DEFAULT_UNLOCKED_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageKeys,
    /// How long the celebration banner stays up after a win.
    pub celebration_ms: u64,
    /// Browser interval period used to drive pending timers.
    pub tick_interval_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            celebration_ms: CELEBRATION_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl AppConfig {
    /// Parse `json`, falling back to defaults when it is malformed.
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|err| {
            log::warn!("config parse failed, using defaults: {err}");
            Self::default()
        })
    }
}
