//! Route table for the board application.

use yew_router::prelude::*;

/// Application routes.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Sign-in screen.
    #[at("/auth/login")]
    Login,
    /// Bare root; redirects to the post list.
    #[at("/")]
    Home,
    /// Post list with query-string filters.
    #[at("/posts")]
    Posts,
    /// Create form.
    #[at("/posts/new")]
    NewPost,
    /// Single post view.
    #[at("/posts/:id")]
    PostDetail {
        /// Post identifier.
        id: String,
    },
    /// Edit form for an existing post.
    #[at("/posts/:id/edit")]
    EditPost {
        /// Post identifier.
        id: String,
    },
    /// Chart dashboard.
    #[at("/dashboard")]
    Dashboard,
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Path the app lands on after sign-in when no return target was recorded.
pub const DEFAULT_LANDING_PATH: &str = "/posts";

impl Route {
    /// Whether the route requires an authenticated session.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Posts
                | Self::NewPost
                | Self::PostDetail { .. }
                | Self::EditPost { .. }
                | Self::Dashboard
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_segments_win_over_ids() {
        assert_eq!(Route::recognize("/posts/new"), Some(Route::NewPost));
        assert_eq!(
            Route::recognize("/posts/abc"),
            Some(Route::PostDetail {
                id: "abc".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/posts/abc/edit"),
            Some(Route::EditPost {
                id: "abc".to_string()
            })
        );
    }

    #[test]
    fn protection_covers_board_and_dashboard() {
        assert!(Route::Posts.is_protected());
        assert!(Route::Dashboard.is_protected());
        assert!(!Route::Login.is_protected());
        assert!(!Route::NotFound.is_protected());
    }
}
