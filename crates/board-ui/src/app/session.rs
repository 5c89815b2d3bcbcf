//! Sign-in/sign-out side effects shared by every screen.
//!
//! # Design
//! - Storage is written first, then the API client, then the store.
//! - A rejected token anywhere signs the user out; the route guard does the redirect.

use board_api_models::LoginResponse;
use yewdux::prelude::Dispatch;

use crate::app::api::ApiCtx;
use crate::app::preferences::LocalSessionStore;
use crate::core::auth::{persist_login, persist_logout};
use crate::core::store::{AppStore, AuthSlice};
use crate::features::board::state::BoardState;
use crate::models::ToastKind;
use crate::services::error::ApiError;

pub(crate) fn sign_in(api: &ApiCtx, response: LoginResponse) {
    let session = persist_login(&LocalSessionStore, response.token, response.user);
    api.authorize(&session);
    Dispatch::<AppStore>::new().reduce_mut(move |store| {
        store.auth = AuthSlice::with_session(session);
    });
}

pub(crate) fn sign_out(api: &ApiCtx) {
    api.revoke();
    Dispatch::<AppStore>::new().reduce_mut(|store| {
        persist_logout(&LocalSessionStore, &mut store.auth.session);
        store.auth = AuthSlice::default();
        store.board = BoardState::default();
    });
}

/// Sign out when `err` is a 401; returns whether it was.
pub(crate) fn handle_unauthorized(api: &ApiCtx, err: &ApiError) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    tracing::warn!("session rejected by backend; signing out");
    sign_out(api);
    true
}

pub(crate) fn push_toast(kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    Dispatch::<AppStore>::new().reduce_mut(move |store| {
        store.toasts.push(kind, message);
    });
}
