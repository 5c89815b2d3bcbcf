//! Reusable UI components.
pub(crate) mod charts;
pub(crate) mod scroll_sentinel;
pub(crate) mod search_input;
pub(crate) mod shell;
pub(crate) mod toast;
