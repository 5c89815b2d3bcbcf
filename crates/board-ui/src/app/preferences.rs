//! Persistence and environment helpers for the app shell.

use board_api_models::User;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

use crate::core::auth::{Session, SessionStore};
use crate::core::config::BoardConfig;

pub(crate) const AUTH_TOKEN_KEY: &str = "board.auth.token";
pub(crate) const AUTH_USER_KEY: &str = "board.auth.user";
pub(crate) const API_BASE_URL_KEY: &str = "board.api_base_url";

/// Session persisted in `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Session {
        let token = LocalStorage::get::<String>(AUTH_TOKEN_KEY).ok();
        let user = LocalStorage::get::<User>(AUTH_USER_KEY).ok();
        Session::new(token, user)
    }

    fn save(&self, session: &Session) {
        match session.token() {
            Some(token) => set_storage(AUTH_TOKEN_KEY, token),
            None => delete_storage(AUTH_TOKEN_KEY),
        }
        match session.user() {
            Some(user) => set_storage(AUTH_USER_KEY, user),
            None => delete_storage(AUTH_USER_KEY),
        }
    }

    fn clear(&self) {
        delete_storage(AUTH_TOKEN_KEY);
        delete_storage(AUTH_USER_KEY);
    }
}

/// Resolve configuration from the window location and stored overrides.
pub(crate) fn load_config() -> BoardConfig {
    let href = window().location().href().ok();
    let api_override = LocalStorage::get::<String>(API_BASE_URL_KEY).ok();
    BoardConfig::resolve(href.as_deref(), api_override.as_deref())
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    tracing::warn!(operation, key, detail, "storage operation failed");
}
