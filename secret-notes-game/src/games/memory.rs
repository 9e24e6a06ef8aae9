//! Memory match: find the eight pairs among sixteen face-down cards.
use super::{GameEvent, GameInput, GameKind, InputOutcome, MiniGame};
use crate::constants::{
    MEMORY_MATCH_REVEAL_MS, MEMORY_MISMATCH_REVEAL_MS, MEMORY_PAIR_COUNT, MEMORY_WIN_DELAY_MS,
};
use crate::scheduler::Scheduler;
use rand::Rng;
use rand::seq::SliceRandom;

pub const MEMORY_SYMBOLS: [char; MEMORY_PAIR_COUNT] =
    ['💜', '⭐', '✨', '🌟', '💫', '💛', '🎯', '🔮'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryCard {
    pub symbol: char,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl MemoryCard {
    const fn face_down(symbol: char) -> Self {
        Self {
            symbol,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Whether the card's face should be shown.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemoryTask {
    SettleMatch(usize, usize),
    FlipBack(usize, usize),
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryGame {
    cards: Vec<MemoryCard>,
    /// Face-up cards of the current attempt, at most two.
    selected: Vec<usize>,
    moves: u32,
    won: bool,
    scheduler: Scheduler<MemoryTask>,
}

impl MemoryGame {
    /// Deal a freshly shuffled board.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut symbols: Vec<char> = MEMORY_SYMBOLS
            .iter()
            .chain(MEMORY_SYMBOLS.iter())
            .copied()
            .collect();
        symbols.shuffle(rng);
        Self::with_symbols(&symbols)
    }

    /// Deal a board in a fixed order.
    #[must_use]
    pub fn with_symbols(symbols: &[char]) -> Self {
        Self {
            cards: symbols.iter().copied().map(MemoryCard::face_down).collect(),
            selected: Vec::with_capacity(2),
            moves: 0,
            won: false,
            scheduler: Scheduler::new(),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched).count() / 2
    }

    /// True while a revealed pair is waiting to be resolved.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.selected.len() == 2
    }

    fn flip(&mut self, index: usize) -> InputOutcome {
        if self.won || self.is_resolving() {
            return InputOutcome::Ignored;
        }
        let Some(card) = self.cards.get_mut(index) else {
            return InputOutcome::Ignored;
        };
        if card.is_matched || card.is_flipped {
            return InputOutcome::Ignored;
        }
        card.is_flipped = true;
        self.selected.push(index);

        if let [first, second] = self.selected[..] {
            self.moves += 1;
            if self.cards[first].symbol == self.cards[second].symbol {
                self.scheduler
                    .schedule(MEMORY_MATCH_REVEAL_MS, MemoryTask::SettleMatch(first, second));
            } else {
                self.scheduler
                    .schedule(MEMORY_MISMATCH_REVEAL_MS, MemoryTask::FlipBack(first, second));
            }
        }
        InputOutcome::Accepted
    }

    fn run(&mut self, task: MemoryTask, events: &mut Vec<GameEvent>) {
        match task {
            MemoryTask::SettleMatch(first, second) => {
                for idx in [first, second] {
                    self.cards[idx].is_matched = true;
                }
                self.selected.clear();
                events.push(GameEvent::Settled);
                if self.cards.iter().all(|card| card.is_matched) {
                    self.scheduler
                        .schedule(MEMORY_WIN_DELAY_MS, MemoryTask::Complete);
                }
            }
            MemoryTask::FlipBack(first, second) => {
                for idx in [first, second] {
                    self.cards[idx].is_flipped = false;
                }
                self.selected.clear();
                events.push(GameEvent::Settled);
            }
            MemoryTask::Complete => {
                self.won = true;
                events.push(GameEvent::Won);
            }
        }
    }
}

impl MiniGame for MemoryGame {
    fn kind(&self) -> GameKind {
        GameKind::Memory
    }

    fn handle_input(&mut self, input: GameInput) -> InputOutcome {
        match input {
            GameInput::Card(index) => self.flip(index),
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
