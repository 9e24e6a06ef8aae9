use super::answer_form::AnswerForm;
use super::feedback_line;
use secret_notes_game::{GameInput, MathGame};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MathViewProps {
    pub game: MathGame,
    pub on_input: Callback<GameInput>,
}

#[function_component(MathView)]
pub fn math_view(props: &MathViewProps) -> Html {
    let game = &props.game;
    let Some(problem) = game.current() else {
        return Html::default();
    };

    html! {
        <section class="math-game" data-testid="math-game">
            <p class="game-stats">
                { format!("Problem {} of {} · Score: {}", game.index() + 1, game.total(), game.score()) }
            </p>
            <h3 class="math-problem">{ format!("{problem} = ?") }</h3>
            <AnswerForm
                draft={AttrValue::from(game.draft().to_string())}
                placeholder="Your answer"
                input_mode="numeric"
                locked={game.feedback().is_some()}
                on_input={props.on_input.clone()}
            />
            { feedback_line(game.feedback(), "Correct!", &format!("The answer was {}", problem.answer)) }
        </section>
    }
}
