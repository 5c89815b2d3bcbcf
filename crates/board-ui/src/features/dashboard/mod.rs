//! Dashboard feature: chart dataset transforms and chart cards.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
