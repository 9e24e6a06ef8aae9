use super::feedback_line;
use secret_notes_game::{GameInput, QuizGame};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct QuizViewProps {
    pub game: QuizGame,
    pub on_input: Callback<GameInput>,
}

#[function_component(QuizView)]
pub fn quiz_view(props: &QuizViewProps) -> Html {
    let game = &props.game;
    let Some(question) = game.current() else {
        return Html::default();
    };
    let locked = game.feedback().is_some();
    let options = question.options.iter().enumerate().map(|(idx, option)| {
        let onclick = props.on_input.reform(move |_: MouseEvent| GameInput::Choice(idx));
        html! {
            <button type="button" class="btn quiz-option" {onclick} disabled={locked}>
                { *option }
            </button>
        }
    });

    html! {
        <section class="quiz-game" data-testid="quiz-game">
            <p class="game-stats">
                { format!("Question {} of {} · Score: {}", game.index() + 1, game.total(), game.score()) }
            </p>
            <h3 class="quiz-question">{ question.question }</h3>
            <div class="quiz-options">{ for options }</div>
            { feedback_line(game.feedback(), "Nice! 💜", "Not quite, but that's okay!") }
        </section>
    }
}
