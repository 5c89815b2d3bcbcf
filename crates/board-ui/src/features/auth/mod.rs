//! Sign-in feature.
#[cfg(target_arch = "wasm32")]
pub mod view;
