use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Wall-clock milliseconds since the epoch.
#[must_use]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// A repeating browser timer. Dropping it clears the interval.
pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Call `tick` every `period_ms` milliseconds until dropped.
    ///
    /// # Errors
    /// Returns an error if the browser refuses to schedule the interval.
    pub fn start<F>(period_ms: u32, tick: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut()>::new(tick);
        let handle = window().set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            i32::try_from(period_ms).unwrap_or(i32::MAX),
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

/// Milliseconds between two clock readings, clamped to what one tick may
/// reasonably cover.
#[must_use]
pub fn elapsed_between(previous_ms: f64, now_ms: f64) -> u64 {
    let delta = (now_ms - previous_ms).max(0.0).min(MAX_TICK_MS);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let delta = delta.round() as u64;
    delta
}

/// Upper bound on the time a single tick may cover.
const MAX_TICK_MS: f64 = 1_000.0;

#[cfg(test)]
mod tests {
    use super::elapsed_between;

    #[test]
    fn elapsed_is_rounded_and_clamped() {
        assert_eq!(elapsed_between(1_000.0, 1_100.4), 100);
        assert_eq!(elapsed_between(1_000.0, 999.0), 0);
        assert_eq!(elapsed_between(0.0, 90_000.0), 1_000);
    }
}
