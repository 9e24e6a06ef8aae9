//! Tunable timings and sizes shared by the mini-games and the app model.

/// Number of letters (and therefore mini-games) in the registry.
pub const LETTER_COUNT: usize = 5;

/// How long the unlock celebration flag stays raised.
pub const CELEBRATION_MS: u64 = 3_000;

// Memory match
pub const MEMORY_PAIR_COUNT: usize = 8;
pub const MEMORY_MATCH_REVEAL_MS: u64 = 400;
pub const MEMORY_MISMATCH_REVEAL_MS: u64 = 800;
pub const MEMORY_WIN_DELAY_MS: u64 = 500;

// Quiz
pub const QUIZ_FEEDBACK_MS: u64 = 800;

// Click target
pub const CLICK_TARGET_HITS: u32 = 12;
pub const CLICK_COUNTDOWN_SECS: u32 = 20;
pub const CLICK_TICK_MS: u64 = 1_000;
/// Lower bound of the target position, as a percentage of the play area.
pub const CLICK_SAFE_MIN_PCT: f32 = 12.5;
/// Width of the band the target may land in, as a percentage of the play area.
pub const CLICK_SAFE_SPAN_PCT: f32 = 75.0;

// Arithmetic
pub const MATH_PROBLEM_COUNT: usize = 5;
pub const MATH_LEFT_MIN: i64 = 5;
pub const MATH_LEFT_MAX: i64 = 29;
pub const MATH_RIGHT_MIN: i64 = 1;
pub const MATH_RIGHT_MAX: i64 = 20;
pub const MATH_FEEDBACK_MS: u64 = 800;

// Word guess
pub const WORD_FEEDBACK_MS: u64 = 500;
