//! Request path builders and display formatting shared by views and the API client.

use board_api_models::{Category, PageCursor, Post};
use chrono::{DateTime, Utc};

use crate::core::query::{ListQuery, encode_pairs};

/// Sign-in endpoint.
pub const LOGIN_PATH: &str = "/auth/login";
/// Weekly mood survey dataset.
pub const MOOD_TREND_PATH: &str = "/mock/weekly-mood-trend";
/// Snack brand share dataset.
pub const SNACK_BRANDS_PATH: &str = "/mock/popular-snack-brands";
/// Weekly workout minutes dataset.
pub const WORKOUT_TREND_PATH: &str = "/mock/weekly-workout-trend";
/// Coffee consumption impact dataset.
pub const COFFEE_CONSUMPTION_PATH: &str = "/mock/coffee-consumption";

/// Build the `GET /posts` path for a query and optional continuation.
///
/// A numeric continuation replaces the page; a token is sent as `cursor` instead.
#[must_use]
pub fn build_posts_path(query: &ListQuery, cursor: Option<&PageCursor>) -> String {
    let mut pairs = query.to_pairs();
    match cursor {
        Some(PageCursor::Page(page)) => {
            if let Some(slot) = pairs.iter_mut().find(|(key, _)| *key == "page") {
                slot.1 = page.to_string();
            }
        }
        Some(PageCursor::Token(token)) => {
            pairs.retain(|(key, _)| *key != "page");
            pairs.push(("cursor", token.clone()));
        }
        None => {}
    }
    format!("/posts?{}", encode_pairs(&pairs))
}

/// Path for a single post.
#[must_use]
pub fn post_path(id: &str) -> String {
    format!("/posts/{}", urlencoding::encode(id))
}

/// Calendar date shown in the list and detail views.
#[must_use]
pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at.format("%Y-%m-%d").to_string()
}

/// Author label: the embedded email when present, otherwise the author id.
#[must_use]
pub fn author_label(post: &Post) -> &str {
    post.user
        .as_ref()
        .map(|user| user.email.as_str())
        .filter(|email| !email.is_empty())
        .unwrap_or(&post.user_id)
}

/// Human label for a category badge.
#[must_use]
pub const fn category_label(category: Category) -> &'static str {
    match category {
        Category::Notice => "Notice",
        Category::Qna => "Q&A",
        Category::Free => "Free",
    }
}

/// Badge modifier class for a category.
#[must_use]
pub const fn category_badge_class(category: Category) -> &'static str {
    match category {
        Category::Notice => "badge-notice",
        Category::Qna => "badge-qna",
        Category::Free => "badge-free",
    }
}
