use crate::dom::{self, Interval};
use std::cell::Cell;
use yew::prelude::*;

/// Emit elapsed wall-clock milliseconds every `period_ms` while `active`.
///
/// The interval exists only while `active` holds and is cleared when it turns
/// false or the component unmounts.
#[hook]
pub fn use_ticker(active: bool, period_ms: u32, on_tick: Callback<u64>) {
    use_effect_with((active, period_ms), move |&(active, period_ms)| {
        let interval = if active {
            let last = Cell::new(dom::now_ms());
            match Interval::start(period_ms, move || {
                let now = dom::now_ms();
                on_tick.emit(dom::elapsed_between(last.replace(now), now));
            }) {
                Ok(interval) => Some(interval),
                Err(err) => {
                    log::warn!("could not start ticker: {}", dom::js_error_message(&err));
                    None
                }
            }
        } else {
            None
        };
        move || drop(interval)
    });
}
