use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LandingPageProps {
    pub on_submit: Callback<String>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let draft = use_state(String::new);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let onsubmit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*draft).clone());
        })
    };

    html! {
        <section class="landing card" data-testid="landing">
            <h1 class="title">{ "Secret Notes" }</h1>
            <p class="subtitle">{ "Someone left you a few letters. Who are they for?" }</p>
            <form class="name-form" {onsubmit}>
                <label for="name-input" class="sr-only">{ "Your name" }</label>
                <input
                    id="name-input"
                    type="text"
                    class="answer-input"
                    placeholder="Enter your name"
                    autocomplete="given-name"
                    value={(*draft).clone()}
                    {oninput}
                />
                <button type="submit" class="btn btn-primary">{ "Open my letters" }</button>
            </form>
        </section>
    }
}
