use futures::executor::block_on;
use secret_notes_game::{Action, AppConfig, AppModel, GameInput, LetterId, MemoryStore};
use secret_notes_web::app::{AppStore, view};
use yew::LocalServerRenderer;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
struct HarnessProps {
    actions: Vec<Action>,
}

/// Replays `actions` through the reducer, then renders the resulting screen.
#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let actions = props.actions.clone();
    let store = use_reducer(move || {
        let model = AppModel::load(MemoryStore::new(), AppConfig::default(), 9);
        let mut state = std::rc::Rc::new(AppStore::new(model));
        for action in actions {
            state = state.reduce(action);
        }
        std::rc::Rc::unwrap_or_clone(state)
    });
    let dispatch = {
        let store = store.clone();
        Callback::from(move |action: Action| store.dispatch(action))
    };
    view::render(store.model(), &dispatch)
}

fn render(actions: Vec<Action>) -> String {
    block_on(LocalServerRenderer::<Harness>::with_props(HarnessProps { actions }).render())
}

fn id(raw: i64) -> LetterId {
    LetterId::new(raw).unwrap()
}

#[test]
fn fresh_visit_lands_on_name_entry() {
    let html = render(vec![]);
    assert!(html.contains("data-view=\"landing\""));
}

#[test]
fn blank_name_stays_on_landing() {
    let html = render(vec![Action::SubmitName("   ".into())]);
    assert!(html.contains("data-view=\"landing\""));
}

#[test]
fn named_visit_shows_letters() {
    let html = render(vec![Action::SubmitName("Sam".into())]);
    assert!(html.contains("data-view=\"letters\""));
    assert!(html.contains("Hi Sam"));
}

#[test]
fn winning_click_game_opens_letter_with_celebration() {
    let mut actions = vec![
        Action::SubmitName("Sam".into()),
        Action::SelectLetter(id(3)),
    ];
    actions.extend(std::iter::repeat_n(Action::Game(GameInput::Tap), 12));
    let html = render(actions);
    assert!(html.contains("data-view=\"letter\""));
    assert!(html.contains("Little Things"));
    assert!(html.contains("Letter unlocked!"));
}

#[test]
fn celebration_clears_after_its_timer() {
    let mut actions = vec![
        Action::SubmitName("Sam".into()),
        Action::SelectLetter(id(3)),
    ];
    actions.extend(std::iter::repeat_n(Action::Game(GameInput::Tap), 12));
    actions.push(Action::Tick(3_000));
    let html = render(actions);
    assert!(html.contains("data-view=\"letter\""));
    assert!(!html.contains("Letter unlocked!"));
}

#[test]
fn back_from_game_returns_to_list() {
    let html = render(vec![
        Action::SubmitName("Sam".into()),
        Action::SelectLetter(id(1)),
        Action::Game(GameInput::Card(0)),
        Action::Back,
        Action::Tick(5_000),
    ]);
    assert!(html.contains("data-view=\"letters\""));
    assert!(html.contains("0 of 5 letters unlocked"));
}
