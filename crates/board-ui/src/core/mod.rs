//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod charts;
pub mod config;
pub mod logic;
pub mod query;
pub mod routes;
pub mod store;
pub mod sync;
pub mod token;
pub mod validation;
