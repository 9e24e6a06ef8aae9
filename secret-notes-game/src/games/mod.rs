//! The five unlock mini-games and the session type that dispatches between them.
//!
//! Every game implements [`MiniGame`]. Input is applied synchronously; anything
//! that should happen "a moment later" (clearing feedback, flipping cards back,
//! ticking a countdown) is queued on the game's own [`Scheduler`] and runs when
//! the owner calls [`MiniGame::advance`].
//!
//! [`Scheduler`]: crate::scheduler::Scheduler

pub mod click;
pub mod math;
pub mod memory;
pub mod quiz;
pub mod word;

use crate::content::LetterId;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

pub use click::{ClickGame, TargetPosition};
pub use math::{MathGame, MathProblem, Operator};
pub use memory::{MemoryCard, MemoryGame};
pub use quiz::{QUIZ_QUESTIONS, QuizGame, QuizQuestion};
pub use word::{WORD_TARGETS, WordGame};

/// Random source used by every game. Seeded per session for reproducible play.
pub type GameRng = ChaCha20Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Memory,
    Quiz,
    Click,
    Math,
    Word,
}

impl GameKind {
    pub const ALL: [Self; 5] = [Self::Memory, Self::Quiz, Self::Click, Self::Math, Self::Word];

    /// The game that guards a given letter.
    #[must_use]
    pub const fn for_letter(id: LetterId) -> Self {
        Self::ALL[id.index()]
    }

    /// The letter this game unlocks.
    #[must_use]
    pub const fn letter_id(self) -> LetterId {
        LetterId::ALL[self as usize]
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Quiz => "quiz",
            Self::Click => "click",
            Self::Math => "math",
            Self::Word => "word",
        }
    }
}

/// Player input, shared across games. Each game ignores the variants it has no
/// use for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameInput {
    /// Flip the memory card at this index.
    Card(usize),
    /// Pick a quiz option.
    Choice(usize),
    /// Hit the click target.
    Tap,
    /// Replace the text draft (math answer or word guess).
    Edit(String),
    /// Submit the current text draft.
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Correct,
    Wrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputOutcome {
    /// Input did not apply in the current state.
    Ignored,
    /// Input changed state without a verdict (card flip, draft edit, hit).
    Accepted,
    /// Input was judged; transient feedback is now showing.
    Answered(Feedback),
    /// Input completed the game.
    Won,
}

/// Something a scheduled task did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Transient feedback or a face-up pair was resolved.
    Settled,
    /// Moved on to the next question, problem, or word.
    NextItem,
    /// One second elapsed on a countdown.
    CountdownTick,
    /// Countdown expired before the goal; the round starts over.
    Reset,
    Won,
}

/// Uniform contract for every mini-game.
pub trait MiniGame {
    fn kind(&self) -> GameKind;

    fn handle_input(&mut self, input: GameInput) -> InputOutcome;

    /// Advance the game's clock and run every task that comes due.
    fn advance(&mut self, elapsed_ms: u64) -> Vec<GameEvent>;

    /// Current reading of the game's clock. A win stops it where the win
    /// happened.
    fn clock_ms(&self) -> u64;

    fn is_won(&self) -> bool;

    /// Number of scheduled tasks still waiting to run.
    fn pending_tasks(&self) -> usize;

    /// Cancel all scheduled work. The game must not change after this.
    fn teardown(&mut self);
}

/// One live play of a mini-game.
#[derive(Debug, Clone, PartialEq)]
pub enum GameSession {
    Memory(MemoryGame),
    Quiz(QuizGame),
    Click(ClickGame),
    Math(MathGame),
    Word(WordGame),
}

impl GameSession {
    /// Start a fresh game of `kind` with randomness drawn from `seed`.
    #[must_use]
    pub fn initialize(kind: GameKind, seed: u64) -> Self {
        let mut rng = GameRng::seed_from_u64(seed);
        match kind {
            GameKind::Memory => Self::Memory(MemoryGame::new(&mut rng)),
            GameKind::Quiz => Self::Quiz(QuizGame::new()),
            GameKind::Click => Self::Click(ClickGame::new(rng)),
            GameKind::Math => Self::Math(MathGame::new(&mut rng)),
            GameKind::Word => Self::Word(WordGame::new()),
        }
    }

    #[must_use]
    pub fn letter_id(&self) -> LetterId {
        self.kind().letter_id()
    }

    fn inner(&self) -> &dyn MiniGame {
        match self {
            Self::Memory(game) => game,
            Self::Quiz(game) => game,
            Self::Click(game) => game,
            Self::Math(game) => game,
            Self::Word(game) => game,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn MiniGame {
        match self {
            Self::Memory(game) => game,
            Self::Quiz(game) => game,
            Self::Click(game) => game,
            Self::Math(game) => game,
            Self::Word(game) => game,
        }
    }
}

impl MiniGame for GameSession {
    fn kind(&self) -> GameKind {
        self.inner().kind()
    }

    fn handle_input(&mut self, input: GameInput) -> InputOutcome {
        self.inner_mut().handle_input(input)
    }

    fn advance(&mut self, elapsed_ms: u64) -> Vec<GameEvent> {
        self.inner_mut().advance(elapsed_ms)
    }

    fn clock_ms(&self) -> u64 {
        self.inner().clock_ms()
    }

    fn is_won(&self) -> bool {
        self.inner().is_won()
    }

    fn pending_tasks(&self) -> usize {
        self.inner().pending_tasks()
    }

    fn teardown(&mut self) {
        self.inner_mut().teardown();
    }
}

/// Case-fold a typed guess. Whitespace is significant.
pub(crate) fn fold_case(raw: &str) -> String {
    raw.to_uppercase()
}
