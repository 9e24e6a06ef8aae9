//! Star catcher: tap the moving target twelve times before the countdown runs out.
//!
//! Running out of time is not a loss: the round resets and the countdown
//! restarts, so the game can be retried indefinitely.
use super::{GameEvent, GameInput, GameKind, GameRng, InputOutcome, MiniGame};
use crate::constants::{
    CLICK_COUNTDOWN_SECS, CLICK_SAFE_MIN_PCT, CLICK_SAFE_SPAN_PCT, CLICK_TARGET_HITS,
    CLICK_TICK_MS,
};
use crate::scheduler::Scheduler;
use rand::Rng;

/// Target centre as percentages of the play area, kept away from the edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPosition {
    pub x_pct: f32,
    pub y_pct: f32,
}

impl TargetPosition {
    fn random(rng: &mut GameRng) -> Self {
        let upper = CLICK_SAFE_MIN_PCT + CLICK_SAFE_SPAN_PCT;
        Self {
            x_pct: rng.gen_range(CLICK_SAFE_MIN_PCT..upper),
            y_pct: rng.gen_range(CLICK_SAFE_MIN_PCT..upper),
        }
    }

    #[must_use]
    pub fn is_within_safe_area(&self) -> bool {
        let range = CLICK_SAFE_MIN_PCT..CLICK_SAFE_MIN_PCT + CLICK_SAFE_SPAN_PCT;
        range.contains(&self.x_pct) && range.contains(&self.y_pct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClickTask {
    Tick,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClickGame {
    hits: u32,
    seconds_left: u32,
    target: TargetPosition,
    resets: u32,
    won: bool,
    rng: GameRng,
    scheduler: Scheduler<ClickTask>,
}

impl ClickGame {
    /// Start the round: place a target and begin the countdown.
    #[must_use]
    pub fn new(mut rng: GameRng) -> Self {
        let target = TargetPosition::random(&mut rng);
        let mut scheduler = Scheduler::new();
        scheduler.schedule(CLICK_TICK_MS, ClickTask::Tick);
        Self {
            hits: 0,
            seconds_left: CLICK_COUNTDOWN_SECS,
            target,
            resets: 0,
            won: false,
            rng,
            scheduler,
        }
    }

    #[must_use]
    pub const fn hits(&self) -> u32 {
        self.hits
    }

    #[must_use]
    pub const fn goal(&self) -> u32 {
        CLICK_TARGET_HITS
    }

    #[must_use]
    pub const fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    #[must_use]
    pub const fn target(&self) -> TargetPosition {
        self.target
    }

    /// How many times the countdown expired and the round restarted.
    #[must_use]
    pub const fn resets(&self) -> u32 {
        self.resets
    }

    fn tap(&mut self) -> InputOutcome {
        if self.won {
            return InputOutcome::Ignored;
        }
        self.hits += 1;
        if self.hits >= CLICK_TARGET_HITS {
            self.won = true;
            self.scheduler.cancel_all();
            return InputOutcome::Won;
        }
        self.target = TargetPosition::random(&mut self.rng);
        InputOutcome::Accepted
    }

    fn run(&mut self, task: ClickTask, events: &mut Vec<GameEvent>) {
        match task {
            ClickTask::Tick => {
                if self.won {
                    return;
                }
                self.seconds_left = self.seconds_left.saturating_sub(1);
                events.push(GameEvent::CountdownTick);
                if self.seconds_left == 0 {
                    self.hits = 0;
                    self.seconds_left = CLICK_COUNTDOWN_SECS;
                    self.target = TargetPosition::random(&mut self.rng);
                    self.resets += 1;
                    events.push(GameEvent::Reset);
                }
                self.scheduler.schedule(CLICK_TICK_MS, ClickTask::Tick);
            }
        }
    }
}

impl MiniGame for ClickGame {
    fn kind(&self) -> GameKind {
        GameKind::Click
    }

    fn handle_input(&mut self, input: GameInput) -> InputOutcome {
        match input {
            GameInput::Tap => self.tap(),
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
