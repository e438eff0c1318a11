#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
//! Slidezy: a carousel widget for the browser.
//!
//! The index arithmetic and navigation state machine live in [`logic`] and
//! build on every target. The DOM widget, its JavaScript bindings and the Yew
//! component are only compiled for wasm32.

pub mod logic;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use logic::autoplay::AutoplayTimer;
pub use logic::config::{SlideBy, SlidezyOptions};
pub use logic::error::SlidezyError;
pub use logic::layout::{PanelSource, TrackLayout};
pub use logic::machine::{MoveOutcome, Phase, Render, Slider};
pub use logic::render::{Frame, Transition, flex_basis_css};

#[cfg(target_arch = "wasm32")]
pub use components::carousel::{SlidezyCarousel, SlidezyCarouselProps};
#[cfg(target_arch = "wasm32")]
pub use dom::Slidezy;

/// Class names external stylesheets target.
pub mod classes {
    /// Container element.
    pub const WRAPPER: &str = "slidezy-wrapper";
    /// Wrapper around the track and generated controls.
    pub const CONTENT: &str = "slidezy-content";
    /// Horizontally translated strip of panels.
    pub const TRACK: &str = "slidezy-track";
    /// Every panel, clones included.
    pub const SLIDE: &str = "slidezy-slide";
    /// Generated previous button.
    pub const PREV: &str = "slidezy-prev";
    /// Generated next button.
    pub const NEXT: &str = "slidezy-next";
    /// Row of paging dots.
    pub const NAV: &str = "slidezy-nav";
    /// One paging dot.
    pub const DOT: &str = "slidezy-dot";
    /// Marker on the dot for the visible page.
    pub const ACTIVE: &str = "active";
}
