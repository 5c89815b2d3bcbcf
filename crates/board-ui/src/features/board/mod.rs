//! Board feature slice: post list/detail state, actions and views.
//!
//! # Design
//! - Keep state transitions pure so they can be tested natively.
//! - Views stay behind the wasm gate and only dispatch through these helpers.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
