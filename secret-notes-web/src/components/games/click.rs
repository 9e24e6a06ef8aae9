use secret_notes_game::{ClickGame, GameInput};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ClickFieldProps {
    pub game: ClickGame,
    pub on_input: Callback<GameInput>,
}

#[function_component(ClickField)]
pub fn click_field(props: &ClickFieldProps) -> Html {
    let game = &props.game;
    let target = game.target();
    let style = format!("left: {:.1}%; top: {:.1}%;", target.x_pct, target.y_pct);
    let onclick = props.on_input.reform(|_: MouseEvent| GameInput::Tap);

    html! {
        <section class="click-game" data-testid="click-game">
            <p class="game-stats">
                { format!("Stars: {}/{} · Time: {}s", game.hits(), game.goal(), game.seconds_left()) }
            </p>
            if game.resets() > 0 {
                <p class="hint">{ "Time ran out, try again!" }</p>
            }
            <div class="click-area">
                <button type="button" class="click-target" {style} {onclick} aria-label="Catch the star">
                    { "⭐" }
                </button>
            </div>
        </section>
    }
}
