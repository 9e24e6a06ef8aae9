//! Static letter registry
use crate::constants::LETTER_COUNT;
use crate::games::GameKind;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const DEFAULT_LETTER_DATA: &str =
    include_str!("../../secret-notes-web/static/assets/data/letters.json");

static EMBEDDED: Lazy<ContentStore> = Lazy::new(|| {
    ContentStore::from_json(DEFAULT_LETTER_DATA)
        .expect("embedded letters.json is validated by the content tests")
});

/// Identifier of one of the five letters. Only 1..=5 can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LetterId(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("letter id {0} is outside 1..=5")]
pub struct InvalidLetterId(pub i64);

impl LetterId {
    pub const ALL: [Self; LETTER_COUNT] = [Self(1), Self(2), Self(3), Self(4), Self(5)];

    /// # Errors
    ///
    /// Returns [`InvalidLetterId`] when `raw` is not in 1..=5.
    pub fn new(raw: i64) -> Result<Self, InvalidLetterId> {
        u8::try_from(raw)
            .ok()
            .filter(|id| (1..=LETTER_COUNT as u8).contains(id))
            .map(Self)
            .ok_or(InvalidLetterId(raw))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position in the registry.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u8> for LetterId {
    type Error = InvalidLetterId;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<LetterId> for u8 {
    fn from(id: LetterId) -> Self {
        id.0
    }
}

impl fmt::Display for LetterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    pub id: LetterId,
    pub title: String,
    pub content: String,
    pub game: GameKind,
    pub game_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurpriseLetter {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("letter data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected {expected} letters, found {found}")]
    LetterCount { expected: usize, found: usize },
    #[error("letter at position {position} has id {id}")]
    OutOfOrder { position: usize, id: LetterId },
    #[error("letter {id} is bound to {found:?}, expected {expected:?}")]
    WrongGame {
        id: LetterId,
        expected: GameKind,
        found: GameKind,
    },
}

/// Read-only registry of the five letters and the final surprise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStore {
    letters: Vec<Letter>,
    surprise: SurpriseLetter,
}

impl ContentStore {
    /// Parse and validate a letter document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, if there are not exactly five
    /// letters in id order, or if a letter is bound to the wrong game.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let store: Self = serde_json::from_str(json)?;
        store.validate()?;
        Ok(store)
    }

    /// The registry compiled into the crate.
    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.letters.len() != LETTER_COUNT {
            return Err(ContentError::LetterCount {
                expected: LETTER_COUNT,
                found: self.letters.len(),
            });
        }
        for (position, (letter, expected_id)) in
            self.letters.iter().zip(LetterId::ALL).enumerate()
        {
            if letter.id != expected_id {
                return Err(ContentError::OutOfOrder {
                    position,
                    id: letter.id,
                });
            }
            let expected = GameKind::for_letter(letter.id);
            if letter.game != expected {
                return Err(ContentError::WrongGame {
                    id: letter.id,
                    expected,
                    found: letter.game,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn letter_by_id(&self, id: LetterId) -> Option<&Letter> {
        self.letters.get(id.index())
    }

    /// Look up by raw integer; anything outside 1..=5 yields `None`.
    #[must_use]
    pub fn letter_by_raw_id(&self, raw: i64) -> Option<&Letter> {
        LetterId::new(raw)
            .ok()
            .and_then(|id| self.letter_by_id(id))
    }

    #[must_use]
    pub fn letter_for_kind(&self, kind: GameKind) -> Option<&Letter> {
        self.letters.iter().find(|letter| letter.game == kind)
    }

    /// All letters, id ascending.
    #[must_use]
    pub fn all_letters(&self) -> &[Letter] {
        &self.letters
    }

    #[must_use]
    pub const fn surprise(&self) -> &SurpriseLetter {
        &self.surprise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_is_valid() {
        let store = ContentStore::from_json(DEFAULT_LETTER_DATA).unwrap();
        assert_eq!(store.all_letters().len(), LETTER_COUNT);
        let ids: Vec<u8> = store.all_letters().iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(!store.surprise().content.is_empty());
    }

    #[test]
    fn letter_ids_reject_out_of_range() {
        assert!(LetterId::new(0).is_err());
        assert!(LetterId::new(6).is_err());
        assert!(LetterId::new(-1).is_err());
        assert!(LetterId::new(300).is_err());
        assert_eq!(LetterId::new(3).unwrap().get(), 3);
    }

    #[test]
    fn lookup_by_raw_id_handles_unknown() {
        let store = ContentStore::embedded();
        assert!(store.letter_by_raw_id(0).is_none());
        assert!(store.letter_by_raw_id(9).is_none());
        assert_eq!(store.letter_by_raw_id(4).unwrap().game, GameKind::Math);
    }

    #[test]
    fn every_kind_maps_to_its_letter() {
        let store = ContentStore::embedded();
        for kind in GameKind::ALL {
            let letter = store.letter_for_kind(kind).unwrap();
            assert_eq!(letter.id, kind.letter_id());
        }
    }

    #[test]
    fn rejects_wrong_letter_count() {
        let json = r#"{"letters": [], "surprise": {"title": "t", "content": "c"}}"#;
        assert!(matches!(
            ContentStore::from_json(json),
            Err(ContentError::LetterCount { found: 0, .. })
        ));
    }

    #[test]
    fn rejects_swapped_game_binding() {
        let mut value: serde_json::Value = serde_json::from_str(DEFAULT_LETTER_DATA).unwrap();
        value["letters"][0]["game"] = serde_json::Value::from("quiz");
        let err = ContentStore::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::WrongGame { .. }));
    }

    #[test]
    fn rejects_invalid_id_in_document() {
        let mut value: serde_json::Value = serde_json::from_str(DEFAULT_LETTER_DATA).unwrap();
        value["letters"][2]["id"] = serde_json::Value::from(7);
        assert!(matches!(
            ContentStore::from_json(&value.to_string()),
            Err(ContentError::Json(_))
        ));
    }
}
