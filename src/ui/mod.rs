//! Presentation layer
//!
//! - `wheel`: pure geometry and easing math for the wheel animation,
//!   kept platform-free so it is testable on any target
//! - `dom`: browser rendering glue (canvas drawing, list/HUD updates)

pub mod wheel;

#[cfg(target_arch = "wasm32")]
pub mod dom;
