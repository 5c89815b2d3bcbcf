//! Session state and the protected-route guard.
//!
//! # Design
//! - The session is plain data; persistence goes through [`SessionStore`] so
//!   the browser storage and the in-memory copy are updated by one call.
//! - The guard is a pure decision over a route, the requested location and the
//!   current session.
//! - Return targets only ever point back into the protected area.

use std::cell::RefCell;

use board_api_models::User;
use serde::{Deserialize, Serialize};

use crate::core::routes::{DEFAULT_LANDING_PATH, Route};
use crate::core::token::user_from_token;
use yew_router::Routable;

/// Error text shown when the sign-in form is submitted with a blank field.
pub const MISSING_CREDENTIALS: &str = "Email and password are required";
/// Fallback text for a rejected sign-in.
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Authenticated identity plus the bearer token backing it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// Build a session from stored parts. Blank tokens are dropped.
    #[must_use]
    pub fn new(token: Option<String>, user: Option<User>) -> Self {
        let token = token.filter(|value| !value.trim().is_empty());
        let user = token.as_ref().and(user);
        Self { token, user }
    }

    /// Replace the session with a freshly issued token.
    ///
    /// When `user` is absent the identity is recovered from the token claims.
    pub fn login(&mut self, token: impl Into<String>, user: Option<User>) {
        let token = token.into();
        let user = user.or_else(|| user_from_token(&token));
        *self = Self::new(Some(token), user);
    }

    /// Drop token and identity.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Whether a usable token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }

    /// Current bearer token.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Current identity, when known.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether the signed-in user wrote the post owned by `author_id`.
    #[must_use]
    pub fn is_author(&self, author_id: &str) -> bool {
        self.is_authenticated() && self.user.as_ref().is_some_and(|user| user.id == author_id)
    }
}

/// Persistence seam for the session.
pub trait SessionStore {
    /// Read the persisted session, or an anonymous one.
    fn load(&self) -> Session;
    /// Persist the session.
    fn save(&self, session: &Session);
    /// Remove any persisted session.
    fn clear(&self);
}

/// Session store kept in memory, used when browser storage is unavailable.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RefCell<Option<Session>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Session {
        self.inner.borrow().clone().unwrap_or_default()
    }

    fn save(&self, session: &Session) {
        *self.inner.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        *self.inner.borrow_mut() = None;
    }
}

/// Persist a new login and return the session to publish in memory.
///
/// Storage is written before the caller updates its in-memory copy.
pub fn persist_login<S: SessionStore + ?Sized>(
    store: &S,
    token: impl Into<String>,
    user: Option<User>,
) -> Session {
    let mut session = Session::default();
    session.login(token, user);
    store.save(&session);
    tracing::info!(
        user = session.user().map_or("unknown", |user| user.id.as_str()),
        "signed in"
    );
    session
}

/// Clear the persisted session and the in-memory copy.
pub fn persist_logout<S: SessionStore + ?Sized>(store: &S, session: &mut Session) {
    store.clear();
    session.logout();
    tracing::info!("signed out");
}

/// Outcome of the protected-route check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested route.
    Allow,
    /// Send the visitor to the login screen, remembering where they were going.
    RedirectToLogin {
        /// Requested path and query string.
        return_to: String,
    },
}

/// Decide whether `route`, requested as `requested` (path plus query), may render.
#[must_use]
pub fn guard(route: &Route, requested: &str, session: &Session) -> GuardDecision {
    if !route.is_protected() || session.is_authenticated() {
        return GuardDecision::Allow;
    }
    GuardDecision::RedirectToLogin {
        return_to: return_target(Some(requested)),
    }
}

/// Resolve where to go after sign-in.
///
/// Anything that does not resolve to a protected route falls back to the post list.
#[must_use]
pub fn return_target(requested: Option<&str>) -> String {
    requested
        .map(str::trim)
        .filter(|value| value.starts_with('/') && !value.starts_with("//"))
        .filter(|value| {
            let path = value.split(['?', '#']).next().unwrap_or_default();
            Route::recognize(path).is_some_and(|route| route.is_protected())
        })
        .map_or_else(|| DEFAULT_LANDING_PATH.to_string(), ToString::to_string)
}

/// Local check applied before the sign-in request is sent.
///
/// # Errors
///
/// Returns [`MISSING_CREDENTIALS`] when either field is blank.
pub fn check_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{id}@example.com"),
        }
    }

    #[test]
    fn blank_token_is_anonymous() {
        let session = Session::new(Some("   ".to_string()), Some(user("a")));
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn login_then_logout_round_trips_store() {
        let store = MemorySessionStore::default();
        let mut session = persist_login(&store, "tok", Some(user("u1")));
        assert!(session.is_authenticated());
        assert_eq!(store.load(), session);

        persist_logout(&store, &mut session);
        assert!(!session.is_authenticated());
        assert_eq!(store.load(), Session::default());
    }

    #[test]
    fn author_check_requires_matching_id() {
        let mut session = Session::default();
        session.login("tok", Some(user("u1")));
        assert!(session.is_author("u1"));
        assert!(!session.is_author("u2"));

        let unknown = Session::new(Some("opaque".to_string()), None);
        assert!(!unknown.is_author("u1"));
    }

    #[test]
    fn guard_redirects_anonymous_visitors_with_return_path() {
        let decision = guard(
            &Route::Posts,
            "/posts?category=QNA&page=1",
            &Session::default(),
        );
        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin {
                return_to: "/posts?category=QNA&page=1".to_string()
            }
        );
    }

    #[test]
    fn guard_allows_public_and_authenticated_routes() {
        assert_eq!(
            guard(&Route::Login, "/auth/login", &Session::default()),
            GuardDecision::Allow
        );
        let session = Session::new(Some("tok".to_string()), None);
        assert_eq!(
            guard(&Route::Dashboard, "/dashboard", &session),
            GuardDecision::Allow
        );
    }

    #[test]
    fn return_target_rejects_login_and_foreign_urls() {
        assert_eq!(return_target(None), DEFAULT_LANDING_PATH);
        assert_eq!(return_target(Some("/auth/login")), DEFAULT_LANDING_PATH);
        assert_eq!(return_target(Some("//evil.test/posts")), DEFAULT_LANDING_PATH);
        assert_eq!(return_target(Some("https://evil.test")), DEFAULT_LANDING_PATH);
        assert_eq!(return_target(Some("/posts/7/edit")), "/posts/7/edit");
    }

    #[test]
    fn credentials_must_be_present() {
        assert_eq!(check_credentials(" ", "pw"), Err(MISSING_CREDENTIALS));
        assert_eq!(check_credentials("a@b.c", ""), Err(MISSING_CREDENTIALS));
        assert!(check_credentials("a@b.c", "pw").is_ok());
    }
}
