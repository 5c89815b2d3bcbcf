//! Feature slices grouped by screen.
pub mod auth;
pub mod board;
pub mod dashboard;
