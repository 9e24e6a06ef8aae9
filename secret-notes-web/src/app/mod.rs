#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub mod store;
pub mod ticker;
pub mod view;

pub use store::AppStore;

/// Seed for game sessions derived from a wall-clock reading.
#[must_use]
pub fn seed_from_clock(now_ms: f64) -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let millis = now_ms.max(0.0) as u64;
    millis ^ 0x5EC2_E7A0_7E5D_u64
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    use crate::storage::BrowserStorage;
    use secret_notes_game::{Action, AppModel};

    let store = use_reducer(|| {
        let model = AppModel::load(
            BrowserStorage,
            crate::data::app_config(),
            seed_from_clock(crate::dom::now_ms()),
        );
        AppStore::new(model)
    });

    let dispatch = {
        let store = store.clone();
        Callback::from(move |action: Action| store.dispatch(action))
    };

    let model = store.model();
    ticker::use_ticker(
        model.has_pending_timers(),
        model.config().tick_interval_ms,
        dispatch.reform(Action::Tick),
    );

    view::render(model, &dispatch)
}
