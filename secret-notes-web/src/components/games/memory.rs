use secret_notes_game::constants::MEMORY_PAIR_COUNT;
use secret_notes_game::{GameInput, MemoryGame};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MemoryBoardProps {
    pub game: MemoryGame,
    pub on_input: Callback<GameInput>,
}

#[function_component(MemoryBoard)]
pub fn memory_board(props: &MemoryBoardProps) -> Html {
    let cards = props.game.cards().iter().enumerate().map(|(idx, card)| {
        let onclick = props.on_input.reform(move |_: MouseEvent| GameInput::Card(idx));
        let class = classes!(
            "memory-card",
            card.is_face_up().then_some("flipped"),
            card.is_matched.then_some("matched"),
        );
        let face = if card.is_face_up() {
            card.symbol.to_string()
        } else {
            "?".to_string()
        };
        html! {
            <button
                type="button"
                {class}
                {onclick}
                disabled={card.is_matched}
                aria-label={format!("Card {}", idx + 1)}
            >
                { face }
            </button>
        }
    });

    html! {
        <section class="memory-game" data-testid="memory-game">
            <p class="game-stats">
                { format!("Moves: {} · Pairs: {}/{MEMORY_PAIR_COUNT}", props.game.moves(), props.game.matched_pairs()) }
            </p>
            <div class="memory-grid">{ for cards }</div>
        </section>
    }
}
