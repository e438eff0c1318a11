//! JavaScript entry point: `new Slidezy(selector, options)`.

use gloo::console;
use wasm_bindgen::prelude::*;

use crate::dom::Slidezy;
use crate::logic::config::SlidezyOptions;
use crate::logic::error::SlidezyError;

/// Handle exported to JavaScript as `Slidezy`.
///
/// Construction never throws: failures are logged and leave an inert handle
/// whose methods do nothing.
#[wasm_bindgen(js_name = Slidezy)]
pub struct SlidezyHandle {
    widget: Option<Slidezy>,
}

#[wasm_bindgen(js_class = Slidezy)]
impl SlidezyHandle {
    /// Mount a slider on the element matching `selector`.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(selector: &str, options: JsValue) -> Self {
        console_error_panic_hook::set_once();
        let widget = match parse_options(&options) {
            Ok(options) => Slidezy::mount(selector, &options).ok(),
            Err(err) => {
                console::error!("slidezy:", err.to_string());
                None
            }
        };
        Self { widget }
    }

    /// Move by `step` panels.
    #[wasm_bindgen(js_name = moveSlide)]
    pub fn move_slide(&self, step: i32) {
        if let Some(widget) = &self.widget {
            widget.move_slide(isize::try_from(step).unwrap_or_default());
        }
    }

    /// Stop timers and detach listeners.
    pub fn dispose(&self) {
        if let Some(widget) = &self.widget {
            widget.dispose();
        }
    }

    /// Current index into the padded track, if mounted.
    #[wasm_bindgen(getter, js_name = currentIndex)]
    #[must_use]
    pub fn current_index(&self) -> Option<u32> {
        self.widget
            .as_ref()
            .and_then(|widget| u32::try_from(widget.current_index()).ok())
    }

    /// Whether construction succeeded.
    #[wasm_bindgen(getter, js_name = isMounted)]
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.widget.is_some()
    }
}

fn parse_options(value: &JsValue) -> Result<SlidezyOptions, SlidezyError> {
    if value.is_undefined() || value.is_null() {
        return Ok(SlidezyOptions::default());
    }
    let json: String = js_sys::JSON::stringify(value)
        .map_err(|err| SlidezyError::InvalidOptions(format!("{err:?}")))?
        .into();
    SlidezyOptions::from_json(&json)
}
