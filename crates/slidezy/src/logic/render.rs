//! Visual frames computed from the navigation state.

use std::fmt;

/// How the track moves to a new frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Jump without animation (loop snap-back).
    Instant,
    /// Ease over the given number of milliseconds.
    Animated(u32),
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instant => f.write_str("none"),
            Self::Animated(ms) => write!(f, "transform {ms}ms ease"),
        }
    }
}

/// Position of the track at one point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Track index the frame shows.
    pub index: usize,
    /// Transition used to reach it.
    pub transition: Transition,
    /// Horizontal translation in percent of the viewport.
    pub offset_percent: f64,
}

impl Frame {
    /// Frame for `index` when `items` panels share the viewport.
    #[must_use]
    pub fn new(index: usize, items: usize, transition: Transition) -> Self {
        let width = 100.0 / items.max(1) as f64;
        Self {
            index,
            transition,
            // `+ 0.0` folds -0 into 0 for index zero
            offset_percent: -(index as f64 * width) + 0.0,
        }
    }

    /// Whether the frame skips animation.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        matches!(self.transition, Transition::Instant)
    }

    /// Value for the track's `transition` style property.
    #[must_use]
    pub fn transition_css(&self) -> String {
        self.transition.to_string()
    }

    /// Value for the track's `transform` style property.
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!("translateX({}%)", self.offset_percent)
    }
}

/// Value for each panel's `flex-basis` style property.
#[must_use]
pub fn flex_basis_css(items: usize) -> String {
    format!("calc(100% / {})", items.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_scale_with_visible_items() {
        let frame = Frame::new(3, 2, Transition::Animated(300));
        assert!((frame.offset_percent + 150.0).abs() < f64::EPSILON);
        assert_eq!(frame.transform_css(), "translateX(-150%)");
        assert_eq!(frame.transition_css(), "transform 300ms ease");
    }

    #[test]
    fn instant_frames_disable_transition() {
        let frame = Frame::new(0, 1, Transition::Instant);
        assert!(frame.is_instant());
        assert_eq!(frame.transition_css(), "none");
        assert_eq!(frame.transform_css(), "translateX(0%)");
    }

    #[test]
    fn flex_basis_divides_viewport() {
        assert_eq!(flex_basis_css(3), "calc(100% / 3)");
    }
}
