//! Navigation state machine for a single slider.
//!
//! # Design
//! - A move runs in two phases: `Animating` until the caller reports the
//!   transition finished via [`Slider::settle`], then back to `Idle`.
//! - While animating, further moves are refused. Timers are never cancelled
//!   to resolve overlap; the guard alone keeps moves from stacking.
//! - The machine only computes frames. Callers apply them to a surface and
//!   own the timers.

use crate::logic::config::SlidezyOptions;
use crate::logic::layout::TrackLayout;
use crate::logic::render::{Frame, Transition};

/// Where the slider is in its move cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Ready to accept a move.
    Idle,
    /// A move to `target` is animating; a settle is pending.
    Animating {
        /// Index the pending move landed on.
        target: usize,
    },
}

/// Frame to apply plus the dot to highlight, if nav sync applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Render {
    /// Track position to apply.
    pub frame: Frame,
    /// Page whose dot becomes active; `None` leaves the dots untouched.
    pub active_page: Option<usize>,
}

/// Result of a [`Slider::move_slide`] request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// A move was already in flight; nothing changed.
    Ignored,
    /// The move started. Apply the render and call [`Slider::settle`] after
    /// [`Slider::speed`] milliseconds.
    Started(Render),
}

/// Navigation state for one slider instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    layout: TrackLayout,
    speed: u32,
    nav: bool,
    current: usize,
    phase: Phase,
    last: Frame,
}

impl Slider {
    /// Build the state for `real_count` panels under `options`.
    #[must_use]
    pub fn new(real_count: usize, options: &SlidezyOptions) -> Self {
        Self::with_layout(
            TrackLayout::new(real_count, options.items, options.looped),
            options.speed,
            options.nav,
        )
    }

    /// Build the state for an explicit layout.
    #[must_use]
    pub fn with_layout(layout: TrackLayout, speed: u32, nav: bool) -> Self {
        let current = layout.start_index();
        Self {
            layout,
            speed,
            nav,
            current,
            phase: Phase::Idle,
            last: Frame::new(current, layout.items(), Transition::Animated(speed)),
        }
    }

    /// Track shape the slider navigates.
    #[must_use]
    pub const fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Current track index.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a move is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    /// Transition length and settle delay in milliseconds.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    /// Last frame handed out.
    #[must_use]
    pub const fn last_frame(&self) -> Frame {
        self.last
    }

    /// Page the current index belongs to.
    #[must_use]
    pub fn active_page(&self) -> usize {
        self.layout.page_of(self.current)
    }

    /// Render for the position right after construction.
    #[must_use]
    pub fn initial_render(&mut self) -> Render {
        self.animated()
    }

    /// Advance by `step` panels, clamped to the track.
    pub fn move_slide(&mut self, step: isize) -> MoveOutcome {
        if self.is_animating() {
            return MoveOutcome::Ignored;
        }
        self.current = self.layout.clamp_step(self.current, step);
        self.phase = Phase::Animating {
            target: self.current,
        };
        MoveOutcome::Started(self.animated())
    }

    /// Finish the in-flight move.
    ///
    /// On a looping track that landed on clones the index snaps to the real
    /// panels they mirror; the returned render is instant and leaves the
    /// dots alone. Returns `None` when no snap is needed or nothing was in
    /// flight.
    pub fn settle(&mut self) -> Option<Render> {
        if !self.is_animating() {
            return None;
        }
        self.phase = Phase::Idle;
        let corrected = self.layout.wrap_correction(self.current)?;
        self.current = corrected;
        self.last = Frame::new(corrected, self.layout.items(), Transition::Instant);
        Some(Render {
            frame: self.last,
            active_page: None,
        })
    }

    /// Jump straight to the first index of `page`.
    ///
    /// Dot jumps bypass the in-flight guard. Returns `None` for pages that do
    /// not exist.
    pub fn jump_to_page(&mut self, page: usize) -> Option<Render> {
        if page >= self.layout.page_count() {
            return None;
        }
        self.current = self.layout.page_target(page);
        Some(self.animated())
    }

    /// Drop any in-flight move so the slider can be torn down or reused.
    pub fn dispose(&mut self) {
        self.phase = Phase::Idle;
    }

    fn animated(&mut self) -> Render {
        self.last = Frame::new(
            self.current,
            self.layout.items(),
            Transition::Animated(self.speed),
        );
        Render {
            frame: self.last,
            active_page: self.nav.then(|| self.active_page()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(real: usize, items: usize, looped: bool) -> Slider {
        Slider::with_layout(TrackLayout::new(real, items, looped), 300, true)
    }

    fn started(outcome: MoveOutcome) -> Render {
        match outcome {
            MoveOutcome::Started(render) => render,
            MoveOutcome::Ignored => panic!("move was ignored"),
        }
    }

    #[test]
    fn flat_track_clamps_at_the_end() {
        let mut slider = slider(5, 1, false);
        assert_eq!(slider.current_index(), 0);
        for expected in 1..=4 {
            started(slider.move_slide(1));
            assert_eq!(slider.settle(), None);
            assert_eq!(slider.current_index(), expected);
        }
        let render = started(slider.move_slide(1));
        assert_eq!(render.frame.index, 4);
        assert_eq!(slider.current_index(), 4);
    }

    #[test]
    fn looped_backward_step_snaps_to_real_panel() {
        let mut slider = slider(3, 1, true);
        assert_eq!(slider.current_index(), 1);

        let render = started(slider.move_slide(-1));
        assert_eq!(render.frame.index, 0);
        assert_eq!(render.frame.transition, Transition::Animated(300));
        assert_eq!(render.active_page, Some(2));

        let snap = slider.settle().unwrap();
        assert_eq!(snap.frame.index, 3);
        assert!(snap.frame.is_instant());
        assert_eq!(snap.active_page, None);
        assert_eq!(slider.current_index(), 3);
        assert_eq!(slider.phase(), Phase::Idle);
    }

    #[test]
    fn moves_are_refused_while_animating() {
        let mut slider = slider(5, 1, false);
        started(slider.move_slide(1));
        assert_eq!(slider.phase(), Phase::Animating { target: 1 });
        assert_eq!(slider.move_slide(1), MoveOutcome::Ignored);
        assert_eq!(slider.current_index(), 1);
        slider.settle();
        started(slider.move_slide(1));
        assert_eq!(slider.current_index(), 2);
    }

    #[test]
    fn settle_without_move_is_a_no_op() {
        let mut slider = slider(3, 1, true);
        assert_eq!(slider.settle(), None);
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn nav_disabled_skips_dot_sync() {
        let mut slider = Slider::with_layout(TrackLayout::new(4, 1, false), 200, false);
        let render = started(slider.move_slide(1));
        assert_eq!(render.active_page, None);
        assert_eq!(render.frame.transition, Transition::Animated(200));
    }

    #[test]
    fn dot_jump_ignores_guard_and_rejects_unknown_pages() {
        let mut slider = slider(9, 3, true);
        started(slider.move_slide(3));
        let render = slider.jump_to_page(2).unwrap();
        assert_eq!(render.frame.index, 9);
        assert_eq!(render.active_page, Some(2));
        assert_eq!(slider.jump_to_page(3), None);
    }

    #[test]
    fn settle_after_dot_jump_snaps_to_mirrored_index() {
        let mut slider = slider(5, 2, true);
        assert_eq!(slider.current_index(), 2);
        started(slider.move_slide(1));

        let jump = slider.jump_to_page(2).unwrap();
        assert_eq!(jump.frame.index, 6);
        assert_eq!(jump.active_page, Some(2));
        assert!(slider.is_animating());

        let snap = slider.settle().unwrap();
        assert_eq!(snap.frame.index, 1);
        assert!(snap.frame.is_instant());
        assert_eq!(snap.active_page, None);
        let layout = slider.layout();
        assert_eq!(layout.real_index(1), layout.real_index(6));
        assert_eq!(slider.active_page(), 2);
        assert_eq!(slider.phase(), Phase::Idle);
    }

    #[test]
    fn dispose_clears_in_flight_move() {
        let mut slider = slider(5, 1, false);
        started(slider.move_slide(2));
        slider.dispose();
        assert!(!slider.is_animating());
        assert_eq!(slider.settle(), None);
    }

    #[test]
    fn options_drive_layout() {
        let options = SlidezyOptions {
            items: 2,
            looped: true,
            speed: 450,
            ..SlidezyOptions::default()
        };
        let mut slider = Slider::new(6, &options);
        assert_eq!(slider.layout().padded_len(), 10);
        assert_eq!(slider.current_index(), 2);
        assert_eq!(slider.speed(), 450);
        let render = slider.initial_render();
        assert_eq!(render.active_page, Some(0));
        assert_eq!(slider.last_frame(), render.frame);
    }
}
