//! Embedded static data.
use once_cell::sync::Lazy;
use secret_notes_game::{AppConfig, ContentStore, GameKind, Letter};

const CONFIG_JSON: &str = include_str!("../static/assets/data/config.json");

static CONFIG: Lazy<AppConfig> = Lazy::new(|| AppConfig::from_json(CONFIG_JSON));

/// Configuration shipped with the page, or defaults if it fails to parse.
#[must_use]
pub fn app_config() -> AppConfig {
    CONFIG.clone()
}

#[must_use]
pub fn content() -> &'static ContentStore {
    ContentStore::embedded()
}

/// Title shown above a running game.
#[must_use]
pub fn game_title(kind: GameKind) -> &'static str {
    content()
        .letter_for_kind(kind)
        .map_or(kind.key(), |letter: &Letter| letter.game_title.as_str())
}
