use crate::components::celebration::Celebration;
use crate::data;
use crate::pages::{
    game::GamePage, landing::LandingPage, letter::LetterPage, letter_list::LetterListPage,
    surprise::SurprisePage,
};
use secret_notes_game::{Action, AppModel, KeyValueStore, LetterId, View};
use yew::prelude::*;

/// Render the current screen of `model`, sending every interaction to
/// `dispatch`.
pub fn render<S: KeyValueStore>(model: &AppModel<S>, dispatch: &Callback<Action>) -> Html {
    let back = dispatch.reform(|()| Action::Back);
    let screen = match model.view() {
        View::Landing => html! {
            <LandingPage on_submit={dispatch.reform(Action::SubmitName)} />
        },
        View::LetterList => html! {
            <LetterListPage
                user_name={AttrValue::from(model.user_name().to_string())}
                unlocked={model.unlocked().clone()}
                on_select={dispatch.reform(Action::SelectLetter)}
                on_surprise={dispatch.reform(|()| Action::OpenSurprise)}
                on_start_over={dispatch.reform(|()| Action::StartOver)}
            />
        },
        View::ActiveGame(id) => match model.session() {
            Some(session) => html! {
                <GamePage
                    session={session.clone()}
                    on_input={dispatch.reform(Action::Game)}
                    on_back={back}
                />
            },
            None => missing_letter(id),
        },
        View::LetterReading(id) => match data::content().letter_by_id(id) {
            Some(letter) => html! {
                <LetterPage letter={letter.clone()} on_back={back} />
            },
            None => missing_letter(id),
        },
        View::Surprise => html! {
            <SurprisePage
                user_name={AttrValue::from(model.user_name().to_string())}
                surprise={data::content().surprise().clone()}
                on_back={back}
                on_start_fresh={dispatch.reform(|()| Action::StartFresh)}
            />
        },
    };

    html! {
        <main class="secret-notes" data-view={model.view().name()}>
            { screen }
            if model.is_celebrating() {
                <Celebration />
            }
        </main>
    }
}

fn missing_letter(id: LetterId) -> Html {
    log::warn!("nothing to show for letter {id}");
    Html::default()
}

