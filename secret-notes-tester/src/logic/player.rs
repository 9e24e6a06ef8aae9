//! Scripted players that drive a running mini-game to completion through the
//! same `AppModel` calls the browser makes.
use anyhow::{Result, bail};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use secret_notes_game::constants::{
    CLICK_TICK_MS, MATH_FEEDBACK_MS, MEMORY_MATCH_REVEAL_MS, MEMORY_MISMATCH_REVEAL_MS,
    MEMORY_WIN_DELAY_MS, QUIZ_FEEDBACK_MS, WORD_FEEDBACK_MS,
};
use secret_notes_game::games::{QUIZ_QUESTIONS, WORD_TARGETS};
use secret_notes_game::{
    AppModel, GameInput, GameSession, InputOutcome, KeyValueStore, MiniGame, View,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::AddAssign;

/// Upper bound on inputs for a single game before the player gives up.
pub const MAX_INPUTS: usize = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayStyle {
    /// Always knows the answer.
    Perfect,
    /// Guesses, fumbles, and lets timers run.
    Sloppy,
}

impl PlayStyle {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Sloppy => "sloppy",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStats {
    pub inputs: usize,
    /// Inputs the game rejected, e.g. taps during a feedback delay.
    pub ignored: usize,
    /// Game time the player let pass.
    pub elapsed_ms: u64,
}

impl AddAssign for PlayStats {
    fn add_assign(&mut self, other: Self) {
        self.inputs += other.inputs;
        self.ignored += other.ignored;
        self.elapsed_ms += other.elapsed_ms;
    }
}

struct Driver<'a, S> {
    app: &'a mut AppModel<S>,
    stats: PlayStats,
}

impl<S: KeyValueStore> Driver<'_, S> {
    fn input(&mut self, input: GameInput) -> Result<InputOutcome> {
        if self.stats.inputs >= MAX_INPUTS {
            bail!("gave up after {MAX_INPUTS} inputs");
        }
        self.stats.inputs += 1;
        let outcome = self.app.handle_game_input(input)?;
        if outcome == InputOutcome::Ignored {
            self.stats.ignored += 1;
        }
        Ok(outcome)
    }

    fn wait(&mut self, ms: u64) {
        self.stats.elapsed_ms += ms;
        self.app.tick(ms);
    }

    fn session(&self) -> Option<&GameSession> {
        self.app.session()
    }

    fn playing(&self) -> bool {
        matches!(self.app.view(), View::ActiveGame(_))
    }
}

/// Play the game currently on screen until it is won.
///
/// # Errors
///
/// Fails if no game is running, an input is rejected by the model, or the game
/// is still going after [`MAX_INPUTS`] inputs.
pub fn play_current_game<S: KeyValueStore>(
    app: &mut AppModel<S>,
    style: PlayStyle,
    rng: &mut ChaCha20Rng,
) -> Result<PlayStats> {
    let Some(session) = app.session() else {
        bail!("no game is running (view {:?})", app.view());
    };
    let kind = session.kind();
    let mut driver = Driver {
        app,
        stats: PlayStats::default(),
    };
    log::debug!("playing {} as {}", kind.key(), style.label());

    while driver.playing() {
        match (driver.session(), style) {
            (Some(GameSession::Memory(_)), PlayStyle::Perfect) => memory_perfect(&mut driver)?,
            (Some(GameSession::Memory(_)), PlayStyle::Sloppy) => memory_sloppy(&mut driver, rng)?,
            (Some(GameSession::Quiz(_)), _) => quiz_round(&mut driver, style, rng)?,
            (Some(GameSession::Click(_)), _) => click_round(&mut driver, style, rng)?,
            (Some(GameSession::Math(_)), _) => math_round(&mut driver, style, rng)?,
            (Some(GameSession::Word(_)), _) => word_round(&mut driver, style, rng)?,
            (None, _) => bail!("session vanished while on the game screen"),
        }
    }
    Ok(driver.stats)
}

fn memory_pairs(session: Option<&GameSession>) -> Vec<(usize, usize)> {
    let Some(GameSession::Memory(game)) = session else {
        return Vec::new();
    };
    let mut by_symbol: HashMap<char, Vec<usize>> = HashMap::new();
    for (idx, card) in game.cards().iter().enumerate() {
        if !card.is_matched {
            by_symbol.entry(card.symbol).or_default().push(idx);
        }
    }
    by_symbol
        .into_values()
        .filter_map(|idx| match idx[..] {
            [a, b] => Some((a, b)),
            _ => None,
        })
        .collect()
}

fn memory_perfect<S: KeyValueStore>(driver: &mut Driver<'_, S>) -> Result<()> {
    for (a, b) in memory_pairs(driver.session()) {
        driver.input(GameInput::Card(a))?;
        driver.input(GameInput::Card(b))?;
        driver.wait(MEMORY_MATCH_REVEAL_MS);
    }
    driver.wait(MEMORY_WIN_DELAY_MS);
    Ok(())
}

/// Flip two random cards per move, occasionally clicking during resolution.
fn memory_sloppy<S: KeyValueStore>(driver: &mut Driver<'_, S>, rng: &mut ChaCha20Rng) -> Result<()> {
    let hidden: Vec<usize> = match driver.session() {
        Some(GameSession::Memory(game)) => game
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.is_face_up())
            .map(|(idx, _)| idx)
            .collect(),
        _ => return Ok(()),
    };
    if hidden.len() < 2 {
        driver.wait(MEMORY_MISMATCH_REVEAL_MS.max(MEMORY_WIN_DELAY_MS));
        return Ok(());
    }
    let picks: Vec<usize> = hidden.choose_multiple(rng, 2).copied().collect();
    driver.input(GameInput::Card(picks[0]))?;
    driver.input(GameInput::Card(picks[1]))?;
    if rng.gen_bool(0.3) {
        driver.input(GameInput::Card(picks[0]))?;
    }
    driver.wait(MEMORY_MISMATCH_REVEAL_MS);
    if !rng.gen_bool(0.2) {
        return Ok(());
    }
    // Every so often remember a real pair.
    if let Some(&(a, b)) = memory_pairs(driver.session()).first() {
        driver.input(GameInput::Card(a))?;
        driver.input(GameInput::Card(b))?;
        driver.wait(MEMORY_MATCH_REVEAL_MS + MEMORY_WIN_DELAY_MS);
    }
    Ok(())
}

fn quiz_round<S: KeyValueStore>(
    driver: &mut Driver<'_, S>,
    style: PlayStyle,
    rng: &mut ChaCha20Rng,
) -> Result<()> {
    let index = match driver.session() {
        Some(GameSession::Quiz(game)) => game.index(),
        _ => return Ok(()),
    };
    let Some(question) = QUIZ_QUESTIONS.get(index) else {
        bail!("quiz index {index} out of range");
    };
    let choice = match style {
        PlayStyle::Perfect => question.correct,
        PlayStyle::Sloppy => rng.gen_range(0..question.options.len()),
    };
    driver.input(GameInput::Choice(choice))?;
    if style == PlayStyle::Sloppy {
        driver.input(GameInput::Choice(question.correct))?;
    }
    driver.wait(QUIZ_FEEDBACK_MS);
    Ok(())
}

fn click_round<S: KeyValueStore>(
    driver: &mut Driver<'_, S>,
    style: PlayStyle,
    rng: &mut ChaCha20Rng,
) -> Result<()> {
    driver.input(GameInput::Tap)?;
    if style == PlayStyle::Sloppy {
        driver.wait(rng.gen_range(0..=CLICK_TICK_MS * 2));
    }
    Ok(())
}

fn math_round<S: KeyValueStore>(
    driver: &mut Driver<'_, S>,
    style: PlayStyle,
    rng: &mut ChaCha20Rng,
) -> Result<()> {
    let answer = match driver.session() {
        Some(GameSession::Math(game)) => game.current().map(|problem| problem.answer),
        _ => return Ok(()),
    };
    let Some(answer) = answer else {
        bail!("math game has no current problem");
    };
    let typed = match style {
        PlayStyle::Perfect => answer.to_string(),
        PlayStyle::Sloppy => match rng.gen_range(0..3) {
            0 => answer.to_string(),
            1 => format!(" {} ", answer + rng.gen_range(1..5)),
            _ => "dunno".to_string(),
        },
    };
    driver.input(GameInput::Edit(typed))?;
    driver.input(GameInput::Submit)?;
    driver.wait(MATH_FEEDBACK_MS);
    Ok(())
}

fn word_round<S: KeyValueStore>(
    driver: &mut Driver<'_, S>,
    style: PlayStyle,
    rng: &mut ChaCha20Rng,
) -> Result<()> {
    let index = match driver.session() {
        Some(GameSession::Word(game)) => game.index(),
        _ => return Ok(()),
    };
    let Some(target) = WORD_TARGETS.get(index) else {
        bail!("word index {index} out of range");
    };
    if style == PlayStyle::Sloppy && rng.gen_bool(0.5) {
        let mut scrambled: Vec<char> = target.chars().collect();
        scrambled.reverse();
        driver.input(GameInput::Edit(scrambled.into_iter().collect()))?;
        driver.input(GameInput::Submit)?;
        driver.wait(WORD_FEEDBACK_MS);
        return Ok(());
    }
    let typed = if rng.gen_bool(0.5) {
        target.to_lowercase()
    } else {
        (*target).to_string()
    };
    driver.input(GameInput::Edit(typed))?;
    driver.input(GameInput::Submit)?;
    driver.wait(WORD_FEEDBACK_MS);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use secret_notes_game::{AppConfig, GameKind, LetterId, MemoryStore};

    fn app_on(kind: GameKind) -> AppModel<MemoryStore> {
        let mut app = AppModel::load(MemoryStore::new(), AppConfig::default(), 4);
        app.submit_name("Tester").unwrap();
        app.start_game(kind.letter_id()).unwrap();
        app
    }

    #[test]
    fn both_styles_finish_every_game() {
        for style in [PlayStyle::Perfect, PlayStyle::Sloppy] {
            for kind in GameKind::ALL {
                let mut rng = ChaCha20Rng::seed_from_u64(21);
                let mut app = app_on(kind);
                let stats = play_current_game(&mut app, style, &mut rng).unwrap();
                assert_eq!(app.view(), View::LetterReading(kind.letter_id()), "{kind:?} {style:?}");
                assert!(stats.inputs > 0);
            }
        }
    }

    #[test]
    fn perfect_memory_uses_eight_moves() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut app = app_on(GameKind::Memory);
        let stats = play_current_game(&mut app, PlayStyle::Perfect, &mut rng).unwrap();
        assert_eq!(stats.inputs, 16);
        assert_eq!(stats.ignored, 0);
        assert_eq!(stats.elapsed_ms, 8 * MEMORY_MATCH_REVEAL_MS + MEMORY_WIN_DELAY_MS);
        assert!(app.progress().is_unlocked(LetterId::new(1).unwrap()));
    }

    #[test]
    fn refuses_to_play_without_a_game() {
        let mut app = AppModel::load(MemoryStore::new(), AppConfig::default(), 4);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert!(play_current_game(&mut app, PlayStyle::Perfect, &mut rng).is_err());
    }
}
