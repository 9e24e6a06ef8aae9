use anyhow::{Result, anyhow, ensure};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use secret_notes_game::constants::{CLICK_COUNTDOWN_SECS, CLICK_TICK_MS};
use secret_notes_game::{
    AppConfig, AppModel, GameInput, GameKind, GameSession, KeyValueStore, LetterId, MemoryStore,
    MiniGame, View,
};

use super::player::{PlayStats, PlayStyle, play_current_game};

pub type ScenarioFn = fn(&mut ScenarioCtx) -> Result<()>;

/// One named check run against a fresh in-memory store.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub run: ScenarioFn,
}

/// Per-iteration state handed to a scenario.
pub struct ScenarioCtx {
    pub seed: u64,
    pub rng: ChaCha20Rng,
    pub store: MemoryStore,
    pub config: AppConfig,
    /// Totals over every game the scenario played.
    pub play: PlayStats,
}

impl ScenarioCtx {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            store: MemoryStore::new(),
            config: AppConfig::default(),
            play: PlayStats::default(),
        }
    }

    /// Boot the app against the shared store, as a page reload would.
    #[must_use]
    pub fn boot(&self) -> AppModel<MemoryStore> {
        AppModel::load(self.store.clone(), self.config.clone(), self.seed)
    }

    fn raw_unlocked(&self) -> Option<String> {
        self.store.raw(&self.config.storage.unlocked_key)
    }

    fn raw_name(&self) -> Option<String> {
        self.store.raw(&self.config.storage.name_key)
    }
}

const CATALOG: [Scenario; 9] = [
    Scenario {
        key: "smoke",
        name: "Smoke",
        description: "Fresh load shows the name entry and accepts a name",
        run: smoke,
    },
    Scenario {
        key: "full-unlock",
        name: "Full Unlock",
        description: "Perfect play unlocks every letter in order and opens the surprise",
        run: full_unlock,
    },
    Scenario {
        key: "sloppy-unlock",
        name: "Sloppy Unlock",
        description: "Guessing play in random order still unlocks everything",
        run: sloppy_unlock,
    },
    Scenario {
        key: "back-cancels",
        name: "Back Cancels Games",
        description: "Leaving a game mid-play drops its timers and unlocks nothing",
        run: back_cancels,
    },
    Scenario {
        key: "persistence",
        name: "Persistence",
        description: "Name and unlocked letters survive a reload",
        run: persistence,
    },
    Scenario {
        key: "corrupted-storage",
        name: "Corrupted Storage",
        description: "Malformed or out-of-range saved data loads as a clean slate",
        run: corrupted_storage,
    },
    Scenario {
        key: "start-over",
        name: "Start Over",
        description: "Start over forgets the name but keeps unlocked letters",
        run: start_over,
    },
    Scenario {
        key: "start-fresh",
        name: "Start Fresh",
        description: "Start fresh locks every letter and keeps the name",
        run: start_fresh,
    },
    Scenario {
        key: "click-reset",
        name: "Click Countdown Reset",
        description: "An expired click countdown resets the hits and the game stays winnable",
        run: click_reset,
    },
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.description)).collect()
}

#[must_use]
pub fn scenario_keys() -> Vec<&'static str> {
    CATALOG.iter().map(|s| s.key).collect()
}

/// Look up a scenario by key, ignoring case.
#[must_use]
pub fn get_scenario(key: &str) -> Option<Scenario> {
    CATALOG
        .iter()
        .find(|s| s.key.eq_ignore_ascii_case(key))
        .copied()
}

fn enter(ctx: &ScenarioCtx, name: &str) -> Result<AppModel<MemoryStore>> {
    let mut app = ctx.boot();
    ensure!(
        app.view() == View::Landing,
        "expected landing on first load, got {:?}",
        app.view()
    );
    app.submit_name(name)?;
    Ok(app)
}

fn unlock_with(
    app: &mut AppModel<impl KeyValueStore>,
    id: LetterId,
    style: PlayStyle,
    rng: &mut ChaCha20Rng,
) -> Result<PlayStats> {
    app.select_letter(id)?;
    let stats = play_current_game(app, style, rng)?;
    ensure!(
        app.view() == View::LetterReading(id),
        "winning letter {id} landed on {:?}",
        app.view()
    );
    ensure!(app.is_celebrating(), "no celebration after unlocking {id}");
    app.back()?;
    Ok(stats)
}

fn smoke(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut app = ctx.boot();
    ensure!(app.view() == View::Landing, "fresh load on {:?}", app.view());
    ensure!(app.submit_name("   ").is_err(), "blank name was accepted");
    app.submit_name("  Robin ")?;
    ensure!(app.view() == View::LetterList, "name entry led to {:?}", app.view());
    ensure!(app.user_name() == "Robin", "name not trimmed: {:?}", app.user_name());
    ensure!(app.unlocked().is_empty(), "fresh progress is not empty");
    ensure!(
        ctx.raw_name().as_deref() == Some("Robin"),
        "name not persisted: {:?}",
        ctx.raw_name()
    );
    ensure!(app.open_surprise().is_err(), "surprise opened with no letters");
    Ok(())
}

fn full_unlock(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut app = enter(ctx, "Robin")?;
    for id in LetterId::ALL {
        ctx.play += unlock_with(&mut app, id, PlayStyle::Perfect, &mut ctx.rng)?;
    }
    ensure!(app.progress().is_all_unlocked(), "not every letter unlocked");
    ensure!(
        ctx.raw_unlocked().as_deref() == Some("[1,2,3,4,5]"),
        "persisted set is {:?}",
        ctx.raw_unlocked()
    );
    app.open_surprise()?;
    ensure!(app.view() == View::Surprise, "surprise did not open");
    Ok(())
}

fn sloppy_unlock(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut app = enter(ctx, "Robin")?;
    let mut order = LetterId::ALL.to_vec();
    order.shuffle(&mut ctx.rng);
    for (done, id) in order.iter().enumerate() {
        ctx.play += unlock_with(&mut app, *id, PlayStyle::Sloppy, &mut ctx.rng)?;
        ensure!(
            app.progress().unlocked_count() == done + 1,
            "expected {} unlocked, found {}",
            done + 1,
            app.progress().unlocked_count()
        );
    }
    // Unlocked letters open for reading instead of replaying.
    let again = order[0];
    app.select_letter(again)?;
    ensure!(
        app.view() == View::LetterReading(again),
        "unlocked letter {again} did not open"
    );
    Ok(())
}

fn back_cancels(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut app = enter(ctx, "Robin")?;
    for kind in GameKind::ALL {
        app.select_letter(kind.letter_id())?;
        let opening = match kind {
            GameKind::Memory => vec![GameInput::Card(0), GameInput::Card(1)],
            GameKind::Quiz => vec![GameInput::Choice(0)],
            GameKind::Click => vec![GameInput::Tap],
            GameKind::Math | GameKind::Word => {
                vec![GameInput::Edit("0".to_string()), GameInput::Submit]
            }
        };
        for input in opening {
            app.handle_game_input(input)?;
        }
        app.back()?;
        ensure!(app.session().is_none(), "{} session survived back", kind.key());
        ensure!(
            !app.has_pending_timers(),
            "{} left timers running",
            kind.key()
        );
        app.tick(60_000);
        ensure!(
            app.view() == View::LetterList,
            "late timers moved the view to {:?}",
            app.view()
        );
    }
    ensure!(app.unlocked().is_empty(), "abandoned games unlocked letters");
    Ok(())
}

fn persistence(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut app = enter(ctx, "Robin")?;
    let mut ids = LetterId::ALL.to_vec();
    ids.shuffle(&mut ctx.rng);
    ids.truncate(3);
    for id in &ids {
        ctx.play += unlock_with(&mut app, *id, PlayStyle::Perfect, &mut ctx.rng)?;
    }

    let reloaded = ctx.boot();
    ensure!(
        reloaded.view() == View::LetterList,
        "reload with a name landed on {:?}",
        reloaded.view()
    );
    ensure!(reloaded.user_name() == "Robin", "name lost on reload");
    for id in ids {
        ensure!(reloaded.progress().is_unlocked(id), "letter {id} lost on reload");
    }
    ensure!(
        reloaded.progress().unlocked_count() == 3,
        "reload unlocked {} letters",
        reloaded.progress().unlocked_count()
    );
    Ok(())
}

fn corrupted_storage(ctx: &mut ScenarioCtx) -> Result<()> {
    let key = ctx.config.storage.unlocked_key.clone();
    for garbage in ["{not json", "\"1,2\"", "null", "{\"ids\":[1]}"] {
        ctx.store.set_item(&key, garbage)?;
        let app = ctx.boot();
        ensure!(
            app.unlocked().is_empty(),
            "payload {garbage:?} loaded as {:?}",
            app.unlocked().to_vec()
        );
    }

    ctx.store.set_item(&key, "[0,3,3,9,-1,5]")?;
    let app = ctx.boot();
    ensure!(
        app.unlocked().to_vec() == vec![3, 5],
        "filtered payload loaded as {:?}",
        app.unlocked().to_vec()
    );
    Ok(())
}

fn start_over(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut app = enter(ctx, "Robin")?;
    let id = *LetterId::ALL
        .choose(&mut ctx.rng)
        .ok_or_else(|| anyhow!("no letters"))?;
    ctx.play += unlock_with(&mut app, id, PlayStyle::Perfect, &mut ctx.rng)?;

    app.start_over()?;
    ensure!(app.view() == View::Landing, "start over went to {:?}", app.view());
    ensure!(ctx.raw_name().is_none(), "name still stored after start over");
    ensure!(app.progress().is_unlocked(id), "start over dropped letter {id}");

    let reloaded = ctx.boot();
    ensure!(reloaded.view() == View::Landing, "reload after start over skipped landing");
    ensure!(reloaded.progress().is_unlocked(id), "letter {id} lost after reload");
    Ok(())
}

fn start_fresh(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut app = enter(ctx, "Robin")?;
    for id in LetterId::ALL {
        ctx.play += unlock_with(&mut app, id, PlayStyle::Perfect, &mut ctx.rng)?;
    }
    app.open_surprise()?;
    app.start_fresh()?;
    ensure!(app.view() == View::LetterList, "start fresh went to {:?}", app.view());
    ensure!(app.unlocked().is_empty(), "letters still unlocked");
    ensure!(
        ctx.raw_unlocked().as_deref() == Some("[]"),
        "persisted set is {:?}",
        ctx.raw_unlocked()
    );
    ensure!(ctx.raw_name().as_deref() == Some("Robin"), "name was cleared");
    ensure!(app.open_surprise().is_err(), "surprise still open after start fresh");
    Ok(())
}

fn click_reset(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut app = enter(ctx, "Robin")?;
    let id = GameKind::Click.letter_id();
    app.select_letter(id)?;
    for _ in 0..3 {
        app.handle_game_input(GameInput::Tap)?;
    }
    app.tick(20 * CLICK_TICK_MS);
    match app.session() {
        Some(GameSession::Click(game)) => {
            ensure!(game.resets() == 1, "expected one reset, saw {}", game.resets());
            ensure!(game.hits() == 0, "hits kept after reset: {}", game.hits());
            ensure!(game.seconds_left() == CLICK_COUNTDOWN_SECS, "countdown not restored");
        }
        other => return Err(anyhow!("expected click game, found {:?}", other.map(|s| s.kind()))),
    }
    ctx.play += play_current_game(&mut app, PlayStyle::Perfect, &mut ctx.rng)?;
    ensure!(app.progress().is_unlocked(id), "click letter still locked");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keys_are_unique() {
        let mut keys = scenario_keys();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CATALOG.len());
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(get_scenario("SMOKE").map(|s| s.key), Some("smoke"));
        assert!(get_scenario("missing").is_none());
    }

    #[test]
    fn every_scenario_passes_for_a_few_seeds() {
        for scenario in CATALOG {
            for seed in [1, 1337, 0xDEAD_BEEF] {
                let mut ctx = ScenarioCtx::new(seed);
                if let Err(err) = (scenario.run)(&mut ctx) {
                    panic!("{} failed for seed {seed}: {err:#}", scenario.key);
                }
            }
        }
    }
}
