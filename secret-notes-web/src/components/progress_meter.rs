use secret_notes_game::constants::LETTER_COUNT;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct ProgressMeterProps {
    pub unlocked: usize,
    pub percent: u8,
}

#[function_component(ProgressMeter)]
pub fn progress_meter(props: &ProgressMeterProps) -> Html {
    let label = format!("{} of {LETTER_COUNT} letters unlocked", props.unlocked);
    html! {
        <div class="progress-meter" data-testid="progress">
            <progress
                max="100"
                value={props.percent.to_string()}
                aria-label={label.clone()}
            />
            <span class="progress-label">{ label }</span>
        </div>
    }
}
