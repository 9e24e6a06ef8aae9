use secret_notes_game::GameInput;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AnswerFormProps {
    pub draft: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_mode: AttrValue,
    #[prop_or_default]
    pub locked: bool,
    pub on_input: Callback<GameInput>,
}

/// Text field plus submit button shared by the typed-answer games. The draft
/// lives in the game, so every keystroke is forwarded as [`GameInput::Edit`].
#[function_component(AnswerForm)]
pub fn answer_form(props: &AnswerFormProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(GameInput::Edit(input.value()));
        })
    };
    let onsubmit = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_input.emit(GameInput::Submit);
        })
    };

    html! {
        <form class="answer-form" {onsubmit}>
            <input
                type="text"
                class="answer-input"
                autocomplete="off"
                inputmode={props.input_mode.clone()}
                placeholder={props.placeholder.clone()}
                value={props.draft.clone()}
                disabled={props.locked}
                {oninput}
            />
            <button type="submit" class="btn" disabled={props.locked}>{ "Submit" }</button>
        </form>
    }
}
