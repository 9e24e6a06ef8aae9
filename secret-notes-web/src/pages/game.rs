use crate::components::games::{
    click::ClickField, math::MathView, memory::MemoryBoard, quiz::QuizView, word::WordView,
};
use crate::data;
use secret_notes_game::{GameInput, GameSession, MiniGame};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct GamePageProps {
    pub session: GameSession,
    pub on_input: Callback<GameInput>,
    pub on_back: Callback<()>,
}

#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let on_back = props.on_back.reform(|_: MouseEvent| ());
    let on_input = props.on_input.clone();
    let board = match &props.session {
        GameSession::Memory(game) => html! { <MemoryBoard game={game.clone()} {on_input} /> },
        GameSession::Quiz(game) => html! { <QuizView game={game.clone()} {on_input} /> },
        GameSession::Click(game) => html! { <ClickField game={game.clone()} {on_input} /> },
        GameSession::Math(game) => html! { <MathView game={game.clone()} {on_input} /> },
        GameSession::Word(game) => html! { <WordView game={game.clone()} {on_input} /> },
    };

    html! {
        <section class="game" data-game={props.session.kind().key()}>
            <header class="game-header">
                <button type="button" class="btn btn-ghost" onclick={on_back}>{ "← Back" }</button>
                <h2>{ data::game_title(props.session.kind()) }</h2>
            </header>
            { board }
        </section>
    }
}
