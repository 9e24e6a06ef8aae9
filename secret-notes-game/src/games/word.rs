//! Word puzzle: type each of five words. Wrong guesses cost nothing.
use super::{Feedback, GameEvent, GameInput, GameKind, InputOutcome, MiniGame, fold_case};
use crate::constants::WORD_FEEDBACK_MS;
use crate::scheduler::Scheduler;

pub const WORD_TARGETS: [&str; 5] = ["TRUST", "CARE", "LOVE", "HOPE", "REAL"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordTask {
    Continue,
    ClearFeedback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordGame {
    words: &'static [&'static str],
    index: usize,
    completed: Vec<&'static str>,
    draft: String,
    feedback: Option<Feedback>,
    won: bool,
    scheduler: Scheduler<WordTask>,
}

impl Default for WordGame {
    fn default() -> Self {
        Self::new()
    }
}

impl WordGame {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: &WORD_TARGETS,
            index: 0,
            completed: Vec::new(),
            draft: String::new(),
            feedback: None,
            won: false,
            scheduler: Scheduler::new(),
        }
    }

    #[must_use]
    pub fn target(&self) -> Option<&'static str> {
        self.words.get(self.index).copied()
    }

    /// Letter count of the current word, for the blanks hint.
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.target().map_or(0, |word| word.chars().count())
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn completed(&self) -> &[&'static str] {
        &self.completed
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// A correct guess is waiting for the advance delay.
    fn is_advancing(&self) -> bool {
        self.feedback == Some(Feedback::Correct)
    }

    fn submit(&mut self) -> InputOutcome {
        if self.won || self.is_advancing() {
            return InputOutcome::Ignored;
        }
        let Some(target) = self.target() else {
            return InputOutcome::Ignored;
        };
        if fold_case(&self.draft) == target {
            self.completed.push(target);
            self.feedback = Some(Feedback::Correct);
            self.scheduler.cancel_all();
            self.scheduler.schedule(WORD_FEEDBACK_MS, WordTask::Continue);
            InputOutcome::Answered(Feedback::Correct)
        } else {
            self.draft.clear();
            self.feedback = Some(Feedback::Wrong);
            self.scheduler.cancel_all();
            self.scheduler
                .schedule(WORD_FEEDBACK_MS, WordTask::ClearFeedback);
            InputOutcome::Answered(Feedback::Wrong)
        }
    }

    fn run(&mut self, task: WordTask, events: &mut Vec<GameEvent>) {
        match task {
            WordTask::Continue => {
                if self.index + 1 < self.words.len() {
                    self.index += 1;
                    self.draft.clear();
                    self.feedback = None;
                    events.push(GameEvent::NextItem);
                } else {
                    self.won = true;
                    events.push(GameEvent::Won);
                }
            }
            WordTask::ClearFeedback => {
                self.feedback = None;
                events.push(GameEvent::Settled);
            }
        }
    }
}

impl MiniGame for WordGame {
    fn kind(&self) -> GameKind {
        GameKind::Word
    }

    fn handle_input(&mut self, input: GameInput) -> InputOutcome {
        match input {
            GameInput::Edit(text) if !self.won && !self.is_advancing() => {
                self.draft = text;
                InputOutcome::Accepted
            }
            GameInput::Submit => self.submit(),
            _ => InputOutcome::Ignored,
        }
    }

    fn advance(&mut self, elapsed_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let deadline = self.scheduler.deadline(elapsed_ms);
        while !self.won {
            let Some(task) = self.scheduler.poll_until(deadline) else {
                break;
            };
            self.run(task, &mut events);
        }
        events
    }

    fn clock_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    fn is_won(&self) -> bool {
        self.won
    }

    fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    fn teardown(&mut self) {
        self.scheduler.cancel_all();
    }
}
