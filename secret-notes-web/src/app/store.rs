use secret_notes_game::{Action, AppModel, KeyValueStore};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer wrapper around [`AppModel`]. Every user action and every timer
/// tick goes through [`Reducible::reduce`], so callbacks never act on a stale
/// copy of the model.
#[derive(Debug, Clone)]
pub struct AppStore<S> {
    model: AppModel<S>,
}

impl<S: KeyValueStore> AppStore<S> {
    pub const fn new(model: AppModel<S>) -> Self {
        Self { model }
    }

    pub const fn model(&self) -> &AppModel<S> {
        &self.model
    }
}

impl<S> Reducible for AppStore<S>
where
    S: KeyValueStore + Clone + 'static,
{
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut model = self.model.clone();
        match model.apply(action) {
            Ok(()) => Rc::new(Self { model }),
            Err(err) => {
                log::debug!("ignored action: {err}");
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secret_notes_game::{AppConfig, GameInput, LetterId, MemoryStore, View};

    fn store() -> Rc<AppStore<MemoryStore>> {
        Rc::new(AppStore::new(AppModel::load(
            MemoryStore::new(),
            AppConfig::default(),
            3,
        )))
    }

    #[test]
    fn rejected_actions_keep_the_same_state() {
        let before = store();
        let after = before.clone().reduce(Action::Back);
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn accepted_actions_produce_new_state() {
        let state = store().reduce(Action::SubmitName("Sam".into()));
        assert_eq!(state.model().view(), View::LetterList);
        let id = LetterId::new(3).unwrap();
        let state = state.reduce(Action::SelectLetter(id));
        assert_eq!(state.model().view(), View::ActiveGame(id));
        let state = state.reduce(Action::Game(GameInput::Tap));
        let state = state.reduce(Action::Tick(1_000));
        assert!(state.model().has_pending_timers());
    }
}
