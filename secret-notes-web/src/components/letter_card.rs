use secret_notes_game::{Letter, LetterId};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LetterCardProps {
    pub letter: Letter,
    pub unlocked: bool,
    pub on_select: Callback<LetterId>,
}

/// One envelope in the letter list. Locked letters advertise their game.
#[function_component(LetterCard)]
pub fn letter_card(props: &LetterCardProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let id = props.letter.id;
        Callback::from(move |_| on_select.emit(id))
    };
    let (class, icon, caption) = if props.unlocked {
        ("letter-card unlocked", "💌", AttrValue::from("Tap to read"))
    } else {
        (
            "letter-card locked",
            "🔒",
            AttrValue::from(format!("Play {} to unlock", props.letter.game_title)),
        )
    };

    html! {
        <button
            type="button"
            {class}
            {onclick}
            data-letter={props.letter.id.to_string()}
        >
            <span class="letter-icon" aria-hidden="true">{ icon }</span>
            <span class="letter-title">{ props.letter.title.clone() }</span>
            <span class="letter-caption">{ caption }</span>
        </button>
    }
}
