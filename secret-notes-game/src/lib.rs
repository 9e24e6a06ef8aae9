//! Secret Notes core
//!
//! Platform-agnostic logic for the Secret Notes greeting: the screen state
//! machine, unlock progress and its persistence, the letter content, and the
//! five mini-games that guard each letter. Nothing here touches the browser.

pub mod app;
pub mod config;
pub mod constants;
pub mod content;
pub mod games;
pub mod progress;
pub mod scheduler;
pub mod storage;

pub use app::{Action, AppModel, TransitionError, View};
pub use config::{AppConfig, StorageKeys};
pub use content::{ContentError, ContentStore, InvalidLetterId, Letter, LetterId, SurpriseLetter};
pub use games::{
    ClickGame, Feedback, GameEvent, GameInput, GameKind, GameSession, InputOutcome, MathGame,
    MemoryGame, MiniGame, QuizGame, WordGame,
};
pub use progress::{Progress, UnlockedSet};
pub use scheduler::{Scheduler, TaskId};
pub use storage::{KeyValueStore, MemoryStore, MemoryStoreError, ProgressRepository};
