//! Slider options and their defaults.
//!
//! # Design
//! - Keys mirror the JavaScript option object (camelCase) so a plain object
//!   can be handed over as JSON.
//! - Every key is optional; anything not supplied keeps its default.

use serde::Deserialize;

use crate::logic::error::SlidezyError;

/// Default number of panels visible at once.
pub const DEFAULT_ITEMS: usize = 1;
/// Default transition duration in milliseconds.
pub const DEFAULT_SPEED_MS: u32 = 300;
/// Default autoplay interval in milliseconds.
pub const DEFAULT_AUTOPLAY_TIMEOUT_MS: u32 = 3000;

/// Step size used by the prev/next controls and autoplay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSlideBy")]
pub enum SlideBy {
    /// Move by a fixed number of panels (negative values run backwards).
    Count(isize),
    /// Move by one page, i.e. `items` panels.
    Page,
}

impl Default for SlideBy {
    fn default() -> Self {
        Self::Count(1)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSlideBy {
    Count(isize),
    Literal(String),
}

impl TryFrom<RawSlideBy> for SlideBy {
    type Error = String;

    fn try_from(raw: RawSlideBy) -> Result<Self, Self::Error> {
        match raw {
            RawSlideBy::Count(count) => Ok(Self::Count(count)),
            RawSlideBy::Literal(text) if text == "page" => Ok(Self::Page),
            RawSlideBy::Literal(text) => Err(format!(
                "slideBy must be an integer or \"page\", got \"{text}\""
            )),
        }
    }
}

/// Options accepted by the slider. Immutable once the slider is built.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlidezyOptions {
    /// Panels visible simultaneously; also the clone padding width when looping.
    pub items: usize,
    /// Transition duration and settle delay in milliseconds.
    pub speed: u32,
    /// Pad the track with clones and wrap the index around.
    #[serde(rename = "loop")]
    pub looped: bool,
    /// Keep the paging dots in sync with the current page.
    pub nav: bool,
    /// Build prev/next controls.
    pub controls: bool,
    /// Labels for the generated prev/next buttons.
    pub control_text: [String; 2],
    /// Selector of an existing element to use as the prev control.
    pub prev_button: Option<String>,
    /// Selector of an existing element to use as the next control.
    pub next_button: Option<String>,
    /// Step used by controls and autoplay.
    pub slide_by: SlideBy,
    /// Advance automatically.
    pub auto_play: bool,
    /// Autoplay tick interval in milliseconds.
    pub auto_play_timeout: u32,
    /// Pause autoplay while the pointer is over the container.
    pub auto_play_hover_pause: bool,
}

impl Default for SlidezyOptions {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEMS,
            speed: DEFAULT_SPEED_MS,
            looped: false,
            nav: true,
            controls: true,
            control_text: ["<".to_string(), ">".to_string()],
            prev_button: None,
            next_button: None,
            slide_by: SlideBy::default(),
            auto_play: false,
            auto_play_timeout: DEFAULT_AUTOPLAY_TIMEOUT_MS,
            auto_play_hover_pause: true,
        }
    }
}

impl SlidezyOptions {
    /// Parse options from a JSON object, filling gaps with defaults.
    ///
    /// # Errors
    /// Returns [`SlidezyError::InvalidOptions`] when the JSON is malformed or a
    /// value has the wrong shape, and [`SlidezyError::InvalidItems`] when
    /// `items` is zero.
    pub fn from_json(raw: &str) -> Result<Self, SlidezyError> {
        let options: Self = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }

    /// Check the invariants the layout arithmetic depends on.
    ///
    /// # Errors
    /// Returns [`SlidezyError::InvalidItems`] when `items` is zero.
    pub fn validate(&self) -> Result<(), SlidezyError> {
        if self.items == 0 {
            return Err(SlidezyError::InvalidItems);
        }
        Ok(())
    }

    /// Selectors of existing prev/next elements to wire, or `None` where a
    /// button gets generated. Both are `None` when controls are off.
    #[must_use]
    pub fn external_controls(&self) -> [Option<&str>; 2] {
        if !self.controls {
            return [None, None];
        }
        [self.prev_button.as_deref(), self.next_button.as_deref()]
    }

    /// Resolve `slideBy` into a signed panel step.
    #[must_use]
    pub fn step(&self) -> isize {
        match self.slide_by {
            SlideBy::Count(count) => count,
            SlideBy::Page => isize::try_from(self.items).unwrap_or(isize::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let options = SlidezyOptions::from_json("{}").unwrap();
        assert_eq!(options, SlidezyOptions::default());
        assert_eq!(options.items, 1);
        assert_eq!(options.speed, 300);
        assert_eq!(options.control_text, ["<".to_string(), ">".to_string()]);
        assert!(options.nav && options.controls && options.auto_play_hover_pause);
        assert!(!options.looped && !options.auto_play);
    }

    #[test]
    fn supplied_keys_override_defaults() {
        let options = SlidezyOptions::from_json(
            r##"{"items":3,"loop":true,"slideBy":"page","autoPlay":true,
                "autoPlayTimeout":1500,"prevButton":"#prev","controlText":["prev","next"]}"##,
        )
        .unwrap();
        assert_eq!(options.items, 3);
        assert!(options.looped);
        assert_eq!(options.slide_by, SlideBy::Page);
        assert!(options.auto_play);
        assert_eq!(options.auto_play_timeout, 1500);
        assert_eq!(options.prev_button.as_deref(), Some("#prev"));
        assert_eq!(options.next_button, None);
        assert_eq!(options.control_text[1], "next");
        assert_eq!(options.speed, DEFAULT_SPEED_MS);
    }

    #[test]
    fn page_step_resolves_to_items() {
        let options = SlidezyOptions {
            items: 4,
            slide_by: SlideBy::Page,
            ..SlidezyOptions::default()
        };
        assert_eq!(options.step(), 4);

        let backwards = SlidezyOptions {
            slide_by: SlideBy::Count(-2),
            ..SlidezyOptions::default()
        };
        assert_eq!(backwards.step(), -2);
    }

    #[test]
    fn external_controls_follow_selectors_and_toggle() {
        let options =
            SlidezyOptions::from_json(r##"{"prevButton":"#back","nextButton":null}"##).unwrap();
        assert_eq!(options.external_controls(), [Some("#back"), None]);

        let hidden = SlidezyOptions {
            controls: false,
            ..options
        };
        assert_eq!(hidden.external_controls(), [None, None]);
    }

    #[test]
    fn unknown_slide_by_literal_is_rejected() {
        let err = SlidezyOptions::from_json(r#"{"slideBy":"screen"}"#).unwrap_err();
        assert!(matches!(err, SlidezyError::InvalidOptions(_)));
    }

    #[test]
    fn zero_items_is_rejected() {
        let err = SlidezyOptions::from_json(r#"{"items":0}"#).unwrap_err();
        assert_eq!(err, SlidezyError::InvalidItems);
    }

    #[test]
    fn negative_items_fail_to_decode() {
        assert!(SlidezyOptions::from_json(r#"{"items":-1}"#).is_err());
    }
}
