//! Backend access: the REST client and its error type.
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod error;
