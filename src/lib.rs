//! Auction page view switcher.
//!
//! `core` holds the view states and the binder and builds on any target so it
//! can be tested on the host. The DOM surface and the JavaScript entry points
//! only exist on wasm32.

pub mod constants;
pub mod core;
pub mod style;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;

pub use crate::core::{BindError, StateBinder, Surface, ViewState};
