use secret_notes_game::Letter;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LetterPageProps {
    pub letter: Letter,
    pub on_back: Callback<()>,
}

/// Split letter text into paragraphs on blank lines.
#[must_use]
pub fn paragraphs(content: &str) -> Vec<&str> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

#[function_component(LetterPage)]
pub fn letter_page(props: &LetterPageProps) -> Html {
    let on_back = props.on_back.reform(|_: MouseEvent| ());
    let body = paragraphs(&props.letter.content)
        .into_iter()
        .map(|p| html! { <p>{ p.to_string() }</p> });

    html! {
        <article class="letter" data-testid="letter">
            <h2 class="letter-title">{ props.letter.title.clone() }</h2>
            <div class="letter-body">{ for body }</div>
            <button type="button" class="btn" onclick={on_back}>{ "← Back to letters" }</button>
        </article>
    }
}
