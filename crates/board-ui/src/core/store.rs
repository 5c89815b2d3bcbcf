//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - The session is written here only after storage has been updated.
//! - Toasts are capped so a burst of failures cannot flood the screen.

use yewdux::store::Store;

use crate::core::auth::Session;
use crate::features::board::state::BoardState;
use crate::models::{Toast, ToastKind};

/// Most toasts shown at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Session and sign-in flow state.
    pub auth: AuthSlice,
    /// Post list and detail cache.
    pub board: BoardState,
    /// Visible toasts.
    pub toasts: ToastSlice,
}

/// Shared authentication state for the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSlice {
    /// Active session.
    pub session: Session,
    /// Sign-in request outstanding.
    pub login_busy: bool,
    /// Sign-in error message.
    pub login_error: Option<String>,
}

impl AuthSlice {
    /// Slice seeded with a persisted session.
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }
}

/// Toast queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastSlice {
    /// Visible toasts, oldest first.
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastSlice {
    /// Show a toast, evicting the oldest beyond [`MAX_TOASTS`].
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            message: message.into(),
            kind,
        });
        if self.items.len() > MAX_TOASTS {
            let excess = self.items.len() - MAX_TOASTS;
            self.items.drain(..excess);
        }
        self.next_id
    }

    /// Remove a toast by id.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_is_signed_out() {
        let store = AppStore::default();
        assert!(!store.auth.session.is_authenticated());
        assert!(store.board.list.items().is_empty());
        let seeded = AuthSlice::with_session(Session::new(Some("t".into()), None));
        assert!(seeded.session.is_authenticated());
        assert!(!seeded.login_busy);
    }

    #[test]
    fn toasts_are_capped_and_dismissable() {
        let mut toasts = ToastSlice::default();
        for index in 0..6 {
            toasts.push(ToastKind::Info, format!("t{index}"));
        }
        assert_eq!(toasts.items.len(), MAX_TOASTS);
        assert_eq!(toasts.items[0].message, "t2");
        let last = toasts.items[3].id;
        toasts.dismiss(last);
        assert_eq!(toasts.items.len(), 3);
        assert!(toasts.items.iter().all(|toast| toast.id != last));
    }
}
