//! Application state: which screen is showing, the player's progress, the
//! live mini-game (if any) and the celebration banner.
//!
//! [`AppModel`] owns everything and is the only thing that writes to storage.
//! Front ends feed it [`Action`]s and render from its accessors.
use crate::config::AppConfig;
use crate::content::{InvalidLetterId, LetterId};
use crate::games::{GameEvent, GameInput, GameKind, GameSession, InputOutcome, MiniGame};
use crate::progress::{Progress, UnlockedSet};
use crate::scheduler::{Scheduler, TaskId};
use crate::storage::{KeyValueStore, ProgressRepository};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Landing,
    LetterList,
    ActiveGame(LetterId),
    LetterReading(LetterId),
    Surprise,
}

impl View {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::LetterList => "letters",
            Self::ActiveGame(_) => "game",
            Self::LetterReading(_) => "letter",
            Self::Surprise => "surprise",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("{action} is not available on the {} screen", .from.name())]
    NotAvailable { action: &'static str, from: View },
    #[error("letter {0} is still locked")]
    Locked(LetterId),
    #[error("letter {0} is already unlocked")]
    AlreadyUnlocked(LetterId),
    #[error("the surprise needs all letters unlocked")]
    SurpriseNotReady,
    #[error(transparent)]
    UnknownLetter(#[from] InvalidLetterId),
}

/// Everything a front end can ask the model to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    SubmitName(String),
    /// Open a letter if unlocked, otherwise start its game.
    SelectLetter(LetterId),
    Back,
    OpenSurprise,
    StartFresh,
    StartOver,
    Game(GameInput),
    Tick(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppTimer {
    EndCelebration,
}

#[derive(Debug, Clone)]
pub struct AppModel<S> {
    view: View,
    progress: Progress,
    session: Option<GameSession>,
    /// Pending end of the celebration banner, if it is showing.
    celebration: Option<TaskId>,
    timers: Scheduler<AppTimer>,
    repo: ProgressRepository<S>,
    config: AppConfig,
    rng: ChaCha20Rng,
}

impl<S: KeyValueStore> AppModel<S> {
    /// Restore progress from `store` and pick the initial screen.
    ///
    /// `seed` drives every game session started from this model.
    pub fn load(store: S, config: AppConfig, seed: u64) -> Self {
        let repo = ProgressRepository::new(store, config.storage.clone());
        let progress = repo.load();
        let view = if progress.has_name() {
            View::LetterList
        } else {
            View::Landing
        };
        log::debug!(
            "loaded progress: named={} unlocked={:?}, starting on {}",
            progress.has_name(),
            progress.unlocked.to_vec(),
            view.name()
        );
        Self {
            view,
            progress,
            session: None,
            celebration: None,
            timers: Scheduler::new(),
            repo,
            config,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub const fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.progress.user_name
    }

    #[must_use]
    pub const fn unlocked(&self) -> &UnlockedSet {
        &self.progress.unlocked
    }

    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Whether anything is waiting on the clock. Front ends only need to drive
    /// [`Self::tick`] while this holds.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_idle() || self.session.as_ref().is_some_and(|s| s.pending_tasks() > 0)
    }

    fn require(&self, action: &'static str, expected: View) -> Result<(), TransitionError> {
        if self.view == expected {
            Ok(())
        } else {
            Err(TransitionError::NotAvailable {
                action,
                from: self.view,
            })
        }
    }

    fn go(&mut self, view: View) {
        log::debug!("view {} -> {}", self.view.name(), view.name());
        self.view = view;
    }

    /// Accept the player's name and show the letters.
    ///
    /// # Errors
    ///
    /// [`TransitionError::EmptyName`] when the trimmed name is empty, or
    /// [`TransitionError::NotAvailable`] outside the landing screen.
    pub fn submit_name(&mut self, raw: &str) -> Result<(), TransitionError> {
        self.require("submit name", View::Landing)?;
        let name = raw.trim();
        if name.is_empty() {
            return Err(TransitionError::EmptyName);
        }
        self.progress.user_name = name.to_string();
        self.repo.save_name(name);
        self.go(View::LetterList);
        Ok(())
    }

    /// Open the letter when it is unlocked, otherwise start its game.
    ///
    /// # Errors
    ///
    /// [`TransitionError::NotAvailable`] outside the letter list.
    pub fn select_letter(&mut self, id: LetterId) -> Result<(), TransitionError> {
        if self.progress.is_unlocked(id) {
            self.read_letter(id)
        } else {
            self.start_game(id)
        }
    }

    /// [`Self::select_letter`] for an id that has not been validated yet.
    ///
    /// # Errors
    ///
    /// [`TransitionError::UnknownLetter`] when `raw` is outside 1..=5.
    pub fn select_raw(&mut self, raw: i64) -> Result<(), TransitionError> {
        let id = LetterId::new(raw)?;
        self.select_letter(id)
    }

    /// # Errors
    ///
    /// [`TransitionError::AlreadyUnlocked`] for an unlocked letter, or
    /// [`TransitionError::NotAvailable`] outside the letter list.
    pub fn start_game(&mut self, id: LetterId) -> Result<(), TransitionError> {
        self.require("start game", View::LetterList)?;
        if self.progress.is_unlocked(id) {
            return Err(TransitionError::AlreadyUnlocked(id));
        }
        let kind = GameKind::for_letter(id);
        let seed = self.rng.next_u64();
        log::debug!("starting {} game with seed {seed:#x}", kind.key());
        self.session = Some(GameSession::initialize(kind, seed));
        self.go(View::ActiveGame(id));
        Ok(())
    }

    /// # Errors
    ///
    /// [`TransitionError::Locked`] for a locked letter, or
    /// [`TransitionError::NotAvailable`] outside the letter list.
    pub fn read_letter(&mut self, id: LetterId) -> Result<(), TransitionError> {
        self.require("read letter", View::LetterList)?;
        if !self.progress.is_unlocked(id) {
            return Err(TransitionError::Locked(id));
        }
        self.go(View::LetterReading(id));
        Ok(())
    }

    /// Return to the letter list from a game, a letter, or the surprise.
    ///
    /// Leaving a game discards it along with everything it had scheduled.
    ///
    /// # Errors
    ///
    /// [`TransitionError::NotAvailable`] from the landing screen or the list.
    pub fn back(&mut self) -> Result<(), TransitionError> {
        match self.view {
            View::ActiveGame(_) => {
                self.end_session();
                self.go(View::LetterList);
                Ok(())
            }
            View::LetterReading(_) | View::Surprise => {
                self.go(View::LetterList);
                Ok(())
            }
            from @ (View::Landing | View::LetterList) => Err(TransitionError::NotAvailable {
                action: "back",
                from,
            }),
        }
    }

    /// # Errors
    ///
    /// [`TransitionError::SurpriseNotReady`] until every letter is unlocked.
    pub fn open_surprise(&mut self) -> Result<(), TransitionError> {
        self.require("open surprise", View::LetterList)?;
        if !self.progress.is_all_unlocked() {
            return Err(TransitionError::SurpriseNotReady);
        }
        self.go(View::Surprise);
        Ok(())
    }

    /// Lock every letter again but keep the name.
    ///
    /// # Errors
    ///
    /// [`TransitionError::NotAvailable`] outside the surprise screen.
    pub fn start_fresh(&mut self) -> Result<(), TransitionError> {
        self.require("start fresh", View::Surprise)?;
        self.progress.unlocked.clear();
        self.repo.save_unlocked(&self.progress.unlocked);
        log::info!("progress cleared, keeping name");
        self.go(View::LetterList);
        Ok(())
    }

    /// Forget the name and go back to the landing screen. Unlocked letters
    /// are kept.
    ///
    /// # Errors
    ///
    /// [`TransitionError::NotAvailable`] outside the letter list.
    pub fn start_over(&mut self) -> Result<(), TransitionError> {
        self.require("start over", View::LetterList)?;
        self.progress.user_name.clear();
        self.repo.clear_name();
        self.go(View::Landing);
        Ok(())
    }

    /// Forward input to the running game. A winning input unlocks its letter.
    ///
    /// # Errors
    ///
    /// [`TransitionError::NotAvailable`] when no game is showing.
    pub fn handle_game_input(&mut self, input: GameInput) -> Result<InputOutcome, TransitionError> {
        let Some(session) = self.session.as_mut() else {
            return Err(TransitionError::NotAvailable {
                action: "game input",
                from: self.view,
            });
        };
        let outcome = session.handle_input(input);
        if session.is_won() {
            self.finish_session();
        }
        Ok(outcome)
    }

    /// Move every clock forward by `elapsed_ms`. Returns what the running game
    /// did in that time.
    pub fn tick(&mut self, elapsed_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let mut remaining = elapsed_ms;
        if let Some(session) = self.session.as_mut() {
            let started = session.clock_ms();
            events = session.advance(elapsed_ms);
            if session.is_won() {
                let won_after = session.clock_ms().saturating_sub(started).min(elapsed_ms);
                self.run_timers(won_after);
                remaining -= won_after;
                self.finish_session();
            }
        }
        self.run_timers(remaining);
        events
    }

    fn run_timers(&mut self, elapsed_ms: u64) {
        for timer in self.timers.advance(elapsed_ms) {
            match timer {
                AppTimer::EndCelebration => self.celebration = None,
            }
        }
    }

    /// Record `id` as unlocked, celebrate, and open the letter.
    ///
    /// Returns `true` when the letter was newly unlocked.
    pub fn unlock(&mut self, id: LetterId) -> bool {
        self.end_session();
        let fresh = self.progress.unlock(id);
        self.repo.save_unlocked(&self.progress.unlocked);
        if fresh {
            log::info!(
                "unlocked letter {id} ({}/{})",
                self.progress.unlocked_count(),
                crate::constants::LETTER_COUNT
            );
        }
        self.celebrate();
        self.go(View::LetterReading(id));
        fresh
    }

    /// Apply a front-end action.
    ///
    /// # Errors
    ///
    /// Whatever the underlying transition rejects; state is unchanged.
    pub fn apply(&mut self, action: Action) -> Result<(), TransitionError> {
        match action {
            Action::SubmitName(name) => self.submit_name(&name),
            Action::SelectLetter(id) => self.select_letter(id),
            Action::Back => self.back(),
            Action::OpenSurprise => self.open_surprise(),
            Action::StartFresh => self.start_fresh(),
            Action::StartOver => self.start_over(),
            Action::Game(input) => self.handle_game_input(input).map(|_| ()),
            Action::Tick(elapsed_ms) => {
                self.tick(elapsed_ms);
                Ok(())
            }
        }
    }

    fn celebrate(&mut self) {
        if let Some(previous) = self.celebration.take() {
            self.timers.cancel(previous);
        }
        self.celebration = Some(
            self.timers
                .schedule(self.config.celebration_ms, AppTimer::EndCelebration),
        );
    }

    fn finish_session(&mut self) {
        if let Some(session) = self.session.as_ref() {
            let id = session.letter_id();
            self.unlock(id);
        }
    }

    fn end_session(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.teardown();
        }
    }
}
