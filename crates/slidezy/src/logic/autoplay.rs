//! Autoplay timer slot shared by the DOM widget and the Yew component.

/// Holds the repeating timer handle while autoplay runs.
///
/// `H` is whatever keeps the timer alive (a `gloo` interval in the browser,
/// anything in tests). Dropping the handle cancels the timer.
#[derive(Debug)]
pub struct AutoplayTimer<H> {
    handle: Option<H>,
    hover_pause: bool,
}

impl<H> AutoplayTimer<H> {
    /// Empty slot; `hover_pause` decides whether pointer hover stops ticks.
    #[must_use]
    pub const fn new(hover_pause: bool) -> Self {
        Self {
            handle: None,
            hover_pause,
        }
    }

    /// Whether a timer is armed.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether hover should pause this timer.
    #[must_use]
    pub const fn pauses_on_hover(&self) -> bool {
        self.hover_pause
    }

    /// Arm a timer unless one is already running.
    ///
    /// `arm` is only called when the slot is empty. Returns whether a new
    /// timer was armed.
    pub fn start(&mut self, arm: impl FnOnce() -> H) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(arm());
        true
    }

    /// Take the running timer out of the slot; dropping it cancels it.
    pub fn stop(&mut self) -> Option<H> {
        self.handle.take()
    }

    /// Pointer entered the container.
    pub fn pointer_enter(&mut self) -> Option<H> {
        if self.hover_pause { self.stop() } else { None }
    }

    /// Pointer left the container. Returns whether a timer was armed.
    pub fn pointer_leave(&mut self, arm: impl FnOnce() -> H) -> bool {
        self.hover_pause && self.start(arm)
    }
}
