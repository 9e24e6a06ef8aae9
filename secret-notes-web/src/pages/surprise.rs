use super::letter::paragraphs;
use secret_notes_game::SurpriseLetter;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SurprisePageProps {
    pub user_name: AttrValue,
    pub surprise: SurpriseLetter,
    pub on_back: Callback<()>,
    pub on_start_fresh: Callback<()>,
}

#[function_component(SurprisePage)]
pub fn surprise_page(props: &SurprisePageProps) -> Html {
    let on_back = props.on_back.reform(|_: MouseEvent| ());
    let on_start_fresh = props.on_start_fresh.reform(|_: MouseEvent| ());
    let body = paragraphs(&props.surprise.content)
        .into_iter()
        .map(|p| html! { <p>{ p.to_string() }</p> });

    html! {
        <article class="letter surprise" data-testid="surprise">
            <h2 class="letter-title">{ props.surprise.title.clone() }</h2>
            <p class="salutation">{ format!("For {}", props.user_name) }</p>
            <div class="letter-body">{ for body }</div>
            <div class="actions">
                <button type="button" class="btn" onclick={on_back}>{ "← Back to letters" }</button>
                <button type="button" class="btn btn-ghost" onclick={on_start_fresh}>{ "Start fresh" }</button>
            </div>
        </article>
    }
}
