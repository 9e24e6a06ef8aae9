use super::answer_form::AnswerForm;
use super::feedback_line;
use secret_notes_game::{Feedback, GameInput, WordGame};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct WordViewProps {
    pub game: WordGame,
    pub on_input: Callback<GameInput>,
}

/// Underscores, one per letter of the hidden word.
#[must_use]
pub fn blanks(len: usize) -> String {
    vec!["_"; len].join(" ")
}

#[function_component(WordView)]
pub fn word_view(props: &WordViewProps) -> Html {
    let game = &props.game;
    let completed = game.completed().iter().map(|word| {
        html! { <li class="badge">{ *word }</li> }
    });

    html! {
        <section class="word-game" data-testid="word-game">
            <p class="game-stats">{ format!("Word {} of {}", game.index() + 1, game.total()) }</p>
            <p class="word-blanks" aria-label="hidden word">{ blanks(game.target_len()) }</p>
            <AnswerForm
                draft={AttrValue::from(game.draft().to_string())}
                placeholder="Guess the word"
                locked={game.feedback() == Some(Feedback::Correct)}
                on_input={props.on_input.clone()}
            />
            { feedback_line(game.feedback(), "You got it!", "Try again!") }
            <ul class="word-completed">{ for completed }</ul>
        </section>
    }
}
