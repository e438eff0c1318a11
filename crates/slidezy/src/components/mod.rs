//! Yew components built on the slider state machine.
pub mod carousel;
