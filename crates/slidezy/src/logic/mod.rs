//! DOM-free slider primitives, testable outside wasm.
pub mod autoplay;
pub mod config;
pub mod error;
pub mod layout;
pub mod machine;
pub mod render;
