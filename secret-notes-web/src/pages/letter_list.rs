use crate::components::letter_card::LetterCard;
use crate::components::progress_meter::ProgressMeter;
use crate::data;
use secret_notes_game::{LetterId, Progress, UnlockedSet};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LetterListPageProps {
    pub user_name: AttrValue,
    pub unlocked: UnlockedSet,
    pub on_select: Callback<LetterId>,
    pub on_surprise: Callback<()>,
    pub on_start_over: Callback<()>,
}

#[function_component(LetterListPage)]
pub fn letter_list_page(props: &LetterListPageProps) -> Html {
    let progress = Progress {
        user_name: props.user_name.to_string(),
        unlocked: props.unlocked.clone(),
    };
    let cards = data::content().all_letters().iter().map(|letter| {
        html! {
            <LetterCard
                letter={letter.clone()}
                unlocked={progress.is_unlocked(letter.id)}
                on_select={props.on_select.clone()}
            />
        }
    });
    let on_surprise = props.on_surprise.reform(|_: MouseEvent| ());
    let on_start_over = props.on_start_over.reform(|_: MouseEvent| ());

    html! {
        <section class="letter-list" data-testid="letter-list">
            <h2 class="greeting">{ format!("Hi {} 💜", props.user_name) }</h2>
            <ProgressMeter unlocked={progress.unlocked_count()} percent={progress.completion_pct()} />
            <div class="letter-grid">{ for cards }</div>
            if progress.is_all_unlocked() {
                <button type="button" class="btn btn-primary surprise-btn" onclick={on_surprise}>
                    { "🎁 Open your surprise" }
                </button>
            }
            <button type="button" class="btn btn-ghost" onclick={on_start_over}>
                { "Not you? Start over" }
            </button>
        </section>
    }
}
