use secret_notes_game::constants::{
    CLICK_COUNTDOWN_SECS, CLICK_TARGET_HITS, CLICK_TICK_MS, MATH_FEEDBACK_MS,
    MEMORY_MATCH_REVEAL_MS, MEMORY_MISMATCH_REVEAL_MS, MEMORY_WIN_DELAY_MS, QUIZ_FEEDBACK_MS,
    WORD_FEEDBACK_MS,
};
use secret_notes_game::games::{MathGame, MemoryGame, QUIZ_QUESTIONS, QuizGame, WORD_TARGETS};
use secret_notes_game::{
    AppConfig, AppModel, ContentStore, GameEvent, GameInput, GameKind, GameSession, KeyValueStore,
    LetterId, MemoryStore, MiniGame, View,
};
use std::collections::HashMap;

fn id(raw: i64) -> LetterId {
    LetterId::new(raw).unwrap()
}

fn fresh_app(store: &MemoryStore) -> AppModel<MemoryStore> {
    AppModel::load(store.clone(), AppConfig::default(), 0x5EC2E7)
}

/// Find the partner of every symbol and flip the pairs in order.
fn solve_memory(game: &mut MemoryGame) {
    let mut by_symbol: HashMap<char, Vec<usize>> = HashMap::new();
    for (idx, card) in game.cards().iter().enumerate() {
        by_symbol.entry(card.symbol).or_default().push(idx);
    }
    for pair in by_symbol.values() {
        game.handle_input(GameInput::Card(pair[0]));
        game.handle_input(GameInput::Card(pair[1]));
        game.advance(MEMORY_MATCH_REVEAL_MS);
    }
    game.advance(MEMORY_WIN_DELAY_MS);
}

/// Drive whatever game is running in `app` to a win.
fn win_current_game(app: &mut AppModel<MemoryStore>) {
    let kind = app.session().map(|s| s.kind()).expect("game running");
    match kind {
        GameKind::Memory => {
            let pairs: Vec<(usize, usize)> = match app.session() {
                Some(GameSession::Memory(game)) => {
                    let mut by_symbol: HashMap<char, Vec<usize>> = HashMap::new();
                    for (idx, card) in game.cards().iter().enumerate() {
                        by_symbol.entry(card.symbol).or_default().push(idx);
                    }
                    by_symbol.into_values().map(|v| (v[0], v[1])).collect()
                }
                _ => unreachable!(),
            };
            for (a, b) in pairs {
                app.handle_game_input(GameInput::Card(a)).unwrap();
                app.handle_game_input(GameInput::Card(b)).unwrap();
                app.tick(MEMORY_MATCH_REVEAL_MS);
            }
            app.tick(MEMORY_WIN_DELAY_MS);
        }
        GameKind::Quiz => {
            for question in &QUIZ_QUESTIONS {
                app.handle_game_input(GameInput::Choice(question.correct)).unwrap();
                app.tick(QUIZ_FEEDBACK_MS);
            }
        }
        GameKind::Click => {
            for _ in 0..CLICK_TARGET_HITS {
                app.handle_game_input(GameInput::Tap).unwrap();
            }
        }
        GameKind::Math => {
            for _ in 0..5 {
                let answer = match app.session() {
                    Some(GameSession::Math(game)) => game.current().map(|p| p.answer),
                    _ => None,
                };
                let Some(answer) = answer else { break };
                app.handle_game_input(GameInput::Edit(answer.to_string())).unwrap();
                app.handle_game_input(GameInput::Submit).unwrap();
                app.tick(MATH_FEEDBACK_MS);
            }
        }
        GameKind::Word => {
            for word in WORD_TARGETS {
                app.handle_game_input(GameInput::Edit(word.to_lowercase())).unwrap();
                app.handle_game_input(GameInput::Submit).unwrap();
                app.tick(WORD_FEEDBACK_MS);
            }
        }
    }
}

#[test]
fn fresh_load_then_name_entry() {
    let store = MemoryStore::new();
    let mut app = fresh_app(&store);
    assert_eq!(app.view(), View::Landing);

    app.submit_name("Sam").unwrap();
    assert_eq!(app.view(), View::LetterList);
    assert_eq!(store.raw("secretNotesUserName").as_deref(), Some("Sam"));
    assert!(app.unlocked().is_empty());

    let reloaded = fresh_app(&store);
    assert_eq!(reloaded.view(), View::LetterList);
    assert_eq!(reloaded.user_name(), "Sam");
}

#[test]
fn every_game_unlocks_its_letter_and_surprise_follows() {
    let store = MemoryStore::new();
    let mut app = fresh_app(&store);
    app.submit_name("Sam").unwrap();

    for letter in ContentStore::embedded().all_letters() {
        app.select_letter(letter.id).unwrap();
        assert_eq!(app.view(), View::ActiveGame(letter.id));
        assert_eq!(app.session().map(|s| s.kind()), Some(letter.game));
        win_current_game(&mut app);
        assert_eq!(app.view(), View::LetterReading(letter.id), "{}", letter.game_title);
        assert!(app.is_celebrating());
        app.back().unwrap();
    }

    assert!(app.progress().is_all_unlocked());
    assert_eq!(store.raw("secretNotesUnlocked").as_deref(), Some("[1,2,3,4,5]"));
    app.open_surprise().unwrap();
    assert_eq!(app.view(), View::Surprise);
}

#[test]
fn start_fresh_clears_letters_but_keeps_name() {
    let store = MemoryStore::new();
    let mut app = fresh_app(&store);
    app.submit_name("Sam").unwrap();
    for id in LetterId::ALL {
        app.unlock(id);
        app.back().unwrap();
    }
    app.open_surprise().unwrap();
    app.start_fresh().unwrap();

    assert_eq!(app.view(), View::LetterList);
    assert!(app.unlocked().is_empty());
    assert_eq!(app.user_name(), "Sam");
    assert_eq!(store.raw("secretNotesUnlocked").as_deref(), Some("[]"));
    assert_eq!(store.raw("secretNotesUserName").as_deref(), Some("Sam"));
}

#[test]
fn start_over_returns_to_landing_with_progress_intact() {
    let store = MemoryStore::new();
    let mut app = fresh_app(&store);
    app.submit_name("Sam").unwrap();
    app.unlock(id(4));
    app.back().unwrap();
    app.start_over().unwrap();

    let mut reloaded = fresh_app(&store);
    assert_eq!(reloaded.view(), View::Landing);
    assert_eq!(reloaded.unlocked().to_vec(), vec![4]);
    reloaded.submit_name("Alex").unwrap();
    assert!(reloaded.progress().is_unlocked(id(4)));
}

#[test]
fn leaving_a_game_cancels_its_timers() {
    let store = MemoryStore::new();
    let mut app = fresh_app(&store);
    app.submit_name("Sam").unwrap();

    app.start_game(id(2)).unwrap();
    for question in &QUIZ_QUESTIONS[..4] {
        app.handle_game_input(GameInput::Choice(question.correct)).unwrap();
        app.tick(QUIZ_FEEDBACK_MS);
    }
    app.handle_game_input(GameInput::Choice(QUIZ_QUESTIONS[4].correct))
        .unwrap();
    assert!(app.has_pending_timers());
    app.back().unwrap();

    assert!(!app.has_pending_timers());
    assert!(app.tick(60_000).is_empty());
    assert!(app.unlocked().is_empty());
    assert_eq!(app.view(), View::LetterList);
    assert_eq!(store.raw("secretNotesUnlocked"), None);
}

#[test]
fn corrupted_unlock_payload_loads_empty() {
    let store = MemoryStore::new();
    store.set_item("secretNotesUserName", "Sam").unwrap();
    store.set_item("secretNotesUnlocked", "[1, 2").unwrap();
    let app = fresh_app(&store);
    assert_eq!(app.view(), View::LetterList);
    assert!(app.unlocked().is_empty());
}

#[test]
fn configured_keys_are_respected() {
    let store = MemoryStore::new();
    let mut config = AppConfig::default();
    config.storage.name_key = "n".into();
    config.storage.unlocked_key = "u".into();
    let mut app = AppModel::load(store.clone(), config, 1);
    app.submit_name("Sam").unwrap();
    app.unlock(id(5));
    assert_eq!(store.raw("n").as_deref(), Some("Sam"));
    assert_eq!(store.raw("u").as_deref(), Some("[5]"));
    assert_eq!(store.raw("secretNotesUserName"), None);
}

#[test]
fn memory_shuffles_hold_each_symbol_twice_and_are_solvable() {
    use rand::SeedableRng;
    for seed in 0..20 {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);
        let mut game = MemoryGame::new(&mut rng);
        let mut counts: HashMap<char, usize> = HashMap::new();
        for card in game.cards() {
            *counts.entry(card.symbol).or_default() += 1;
        }
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&n| n == 2));

        solve_memory(&mut game);
        assert!(game.is_won());
        assert_eq!(game.moves(), 8);
    }
}

#[test]
fn memory_single_flip_does_not_count_a_move() {
    let mut game = MemoryGame::with_symbols(&['a', 'a', 'b', 'b']);
    let first = game.cards()[0].symbol;
    let other = game
        .cards()
        .iter()
        .position(|c| c.symbol != first)
        .unwrap();
    game.handle_input(GameInput::Card(0));
    assert_eq!(game.moves(), 0);
    game.handle_input(GameInput::Card(other));
    assert_eq!(game.moves(), 1);
    assert_eq!(game.advance(MEMORY_MISMATCH_REVEAL_MS), vec![GameEvent::Settled]);
    assert!(game.cards().iter().all(|c| !c.is_face_up()));
}

#[test]
fn quiz_wins_for_every_correctness_pattern() {
    for mask in 0u32..32 {
        let mut game = QuizGame::new();
        let mut expected = 0;
        for (idx, question) in QUIZ_QUESTIONS.iter().enumerate() {
            let right = mask & (1 << idx) != 0;
            let choice = if right {
                expected += 1;
                question.correct
            } else {
                (question.correct + 1) % question.options.len()
            };
            game.handle_input(GameInput::Choice(choice));
            game.advance(QUIZ_FEEDBACK_MS);
        }
        assert!(game.is_won(), "mask {mask:05b}");
        assert_eq!(game.score(), expected);
    }
}

#[test]
fn math_wins_even_when_every_answer_is_wrong() {
    use rand::SeedableRng;
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(99);
    let mut game = MathGame::new(&mut rng);
    for _ in 0..game.total() {
        game.handle_input(GameInput::Edit("not a number".into()));
        game.handle_input(GameInput::Submit);
        game.advance(MATH_FEEDBACK_MS);
    }
    assert!(game.is_won());
    assert_eq!(game.score(), 0);
}

#[test]
fn click_expiry_resets_and_can_still_be_won() {
    let mut session = GameSession::initialize(GameKind::Click, 42);
    for _ in 0..CLICK_TARGET_HITS - 1 {
        session.handle_input(GameInput::Tap);
    }
    let events = session.advance(u64::from(CLICK_COUNTDOWN_SECS) * CLICK_TICK_MS);
    assert!(events.contains(&GameEvent::Reset));
    assert!(!session.is_won());
    let GameSession::Click(game) = &session else {
        unreachable!()
    };
    assert_eq!(game.hits(), 0);
    assert_eq!(game.seconds_left(), CLICK_COUNTDOWN_SECS);

    for _ in 0..CLICK_TARGET_HITS {
        session.handle_input(GameInput::Tap);
    }
    assert!(session.is_won());
}

#[test]
fn word_guess_is_case_insensitive_and_mismatch_clears() {
    let mut session = GameSession::initialize(GameKind::Word, 0);
    for word in &WORD_TARGETS[..2] {
        session.handle_input(GameInput::Edit((*word).to_string()));
        session.handle_input(GameInput::Submit);
        session.advance(WORD_FEEDBACK_MS);
    }
    session.handle_input(GameInput::Edit("lvoe".into()));
    session.handle_input(GameInput::Submit);
    let GameSession::Word(game) = &session else {
        unreachable!()
    };
    assert_eq!(game.draft(), "");
    assert_eq!(game.target(), Some("LOVE"));

    session.handle_input(GameInput::Edit("love".into()));
    session.handle_input(GameInput::Submit);
    session.advance(WORD_FEEDBACK_MS);
    let GameSession::Word(game) = &session else {
        unreachable!()
    };
    assert_eq!(game.target(), Some("HOPE"));
}

#[test]
fn unlocked_set_stays_within_range_under_random_play() {
    use rand::{Rng, SeedableRng};
    let store = MemoryStore::new();
    let mut app = fresh_app(&store);
    app.submit_name("Sam").unwrap();
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
    for _ in 0..400 {
        match rng.gen_range(0..4) {
            0 => {
                let _ = app.select_raw(rng.gen_range(0..8));
            }
            1 => {
                let _ = app.back();
            }
            2 => {
                let input = GameInput::Card(rng.gen_range(0..16));
                let _ = app.handle_game_input(input);
                let _ = app.handle_game_input(GameInput::Tap);
            }
            _ => {
                app.tick(rng.gen_range(0..1_500));
            }
        }
        let ids = app.unlocked().to_vec();
        assert!(ids.iter().all(|id| (1..=5).contains(id)));
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
