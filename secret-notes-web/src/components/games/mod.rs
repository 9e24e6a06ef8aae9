//! One view per mini-game. Each renders straight from the game's state and
//! reports raw [`GameInput`]s upward.
//!
//! [`GameInput`]: secret_notes_game::GameInput

pub mod answer_form;
pub mod click;
pub mod math;
pub mod memory;
pub mod quiz;
pub mod word;

use secret_notes_game::Feedback;
use yew::prelude::*;

/// Transient verdict line shown under a question.
#[must_use]
pub fn feedback_line(feedback: Option<Feedback>, correct: &str, wrong: &str) -> Html {
    match feedback {
        Some(Feedback::Correct) => html! {
            <p class="feedback correct" role="status">{ correct.to_string() }</p>
        },
        Some(Feedback::Wrong) => html! {
            <p class="feedback wrong" role="status">{ wrong.to_string() }</p>
        },
        None => html! { <p class="feedback" aria-hidden="true"></p> },
    }
}
