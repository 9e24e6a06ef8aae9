//! Player progress: display name and the set of unlocked letters.
use crate::constants::LETTER_COUNT;
use crate::content::LetterId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unlocked letter ids, always sorted ascending and free of duplicates.
///
/// Serialises as a plain JSON array of integers, e.g. `[1,2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnlockedSet(BTreeSet<LetterId>);

impl UnlockedSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Build a set from raw integers, dropping anything outside 1..=5.
    pub fn from_raw<I: IntoIterator<Item = i64>>(raw: I) -> Self {
        Self(
            raw.into_iter()
                .filter_map(|id| LetterId::new(id).ok())
                .collect(),
        )
    }

    /// Insert `id`. Returns `true` if it was not already present.
    pub fn insert(&mut self, id: LetterId) -> bool {
        self.0.insert(id)
    }

    #[must_use]
    pub fn contains(&self, id: LetterId) -> bool {
        self.0.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterId> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().map(LetterId::get).collect()
    }
}

impl FromIterator<LetterId> for UnlockedSet {
    fn from_iter<T: IntoIterator<Item = LetterId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Empty means no name has been entered yet.
    pub user_name: String,
    pub unlocked: UnlockedSet,
}

impl Progress {
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.user_name.is_empty()
    }

    #[must_use]
    pub fn is_unlocked(&self, id: LetterId) -> bool {
        self.unlocked.contains(id)
    }

    /// Record `id` as unlocked. Idempotent; returns `true` only on first unlock.
    pub fn unlock(&mut self, id: LetterId) -> bool {
        self.unlocked.insert(id)
    }

    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    #[must_use]
    pub fn is_all_unlocked(&self) -> bool {
        self.unlocked.len() == LETTER_COUNT
    }

    /// Fraction of letters unlocked, in `[0, 1]`.
    #[must_use]
    pub fn completion(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.unlocked.len() as f32 / LETTER_COUNT as f32;
        ratio
    }

    /// Completion as a whole percentage for progress bars.
    #[must_use]
    pub fn completion_pct(&self) -> u8 {
        u8::try_from(self.unlocked.len() * 100 / LETTER_COUNT).unwrap_or(100)
    }
}
