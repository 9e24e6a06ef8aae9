use yew::prelude::*;

/// Banner raised for a few seconds after a letter unlocks.
#[function_component(Celebration)]
pub fn celebration() -> Html {
    html! {
        <div class="celebration" role="status" aria-live="polite" data-testid="celebration">
            <span class="celebration-burst" aria-hidden="true">{ "🎉" }</span>
            <p>{ "Letter unlocked!" }</p>
        </div>
    }
}
