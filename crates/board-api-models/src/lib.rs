#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Board REST API.
//!
//! These types mirror the backend wire contract (camelCase JSON) so the web UI
//! never hand-builds payloads. Conversions and display helpers live with the UI.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod dashboard;

/// Board category attached to every post.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Announcements from staff.
    Notice,
    /// Questions and answers.
    Qna,
    /// Free-form discussion.
    Free,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 3] = [Self::Notice, Self::Qna, Self::Free];

    /// Wire/URL representation of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Notice => "NOTICE",
            Self::Qna => "QNA",
            Self::Free => "FREE",
        }
    }

    /// Parse a category from its wire representation (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Authenticated user identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Stable user identifier.
    pub id: String,
    /// Login email address.
    pub email: String,
}

/// A single board post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post identifier.
    pub id: String,
    /// Identifier of the author.
    pub user_id: String,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
    /// Board category.
    pub category: Category,
    /// Ordered tag list.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Embedded author record, when the backend expands it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Opaque continuation marker returned alongside a page of posts.
///
/// Numeric markers name the next page; string markers are echoed back
/// verbatim as the `cursor` query parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PageCursor {
    /// Page number continuation.
    Page(u32),
    /// Server-issued token continuation.
    Token(String),
}

/// Response body for `GET /posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    /// Posts on this page.
    #[serde(default, alias = "data")]
    pub items: Vec<Post>,
    /// Continuation for the preceding page, if any.
    #[serde(default)]
    pub prev_cursor: Option<PageCursor>,
    /// Continuation for the following page; absent when exhausted.
    #[serde(default)]
    pub next_cursor: Option<PageCursor>,
}

/// Request body for `POST /posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePost {
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
    /// Board category.
    pub category: Category,
    /// Tag list (already normalised by the client).
    pub tags: Vec<String>,
}

/// Request body for `PATCH /posts/:id`. Absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UpdatePost {
    /// Replacement title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Replacement category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Replacement tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl From<CreatePost> for UpdatePost {
    fn from(value: CreatePost) -> Self {
        Self {
            title: Some(value.title),
            body: Some(value.body),
            category: Some(value.category),
            tags: Some(value.tags),
        }
    }
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
}

/// Response body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Issued bearer token.
    #[serde(alias = "accessToken")]
    pub token: String,
    /// Authenticated user, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Error body returned by the backend on rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorBody {
    /// Human-readable message (single string or a list of validation messages).
    #[serde(default)]
    pub message: Option<ErrorMessage>,
}

/// Backend error message payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorMessage {
    /// Single message.
    One(String),
    /// Multiple messages, typically one per invalid field.
    Many(Vec<String>),
}

impl ErrorBody {
    /// Flatten the message into display text; `None` when nothing usable was sent.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let text = match self.message.as_ref()? {
            ErrorMessage::One(message) => message.trim().to_string(),
            ErrorMessage::Many(messages) => messages
                .iter()
                .map(|message| message.trim())
                .filter(|message| !message.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
        };
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_post() -> serde_json::Value {
        json!({
            "id": "p-1",
            "userId": "u-1",
            "title": "Hello",
            "body": "World",
            "category": "QNA",
            "tags": ["rust"],
            "createdAt": "2024-12-02T10:00:00Z"
        })
    }

    #[test]
    fn post_uses_camel_case_wire_names() {
        let post: Post = serde_json::from_value(sample_post()).unwrap();
        assert_eq!(post.user_id, "u-1");
        assert_eq!(post.category, Category::Qna);
        assert!(post.user.is_none());

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["userId"], "u-1");
        assert!(value.get("user").is_none());
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(Category::parse("notice"), Some(Category::Notice));
        assert_eq!(Category::parse(" FREE "), Some(Category::Free));
        assert_eq!(Category::parse("misc"), None);
        assert_eq!(
            serde_json::to_value(Category::Qna).unwrap(),
            json!("QNA")
        );
    }

    #[test]
    fn list_response_accepts_numeric_and_token_cursors() {
        let numeric: PostListResponse = serde_json::from_value(json!({
            "items": [sample_post()],
            "prevCursor": null,
            "nextCursor": 2
        }))
        .unwrap();
        assert_eq!(numeric.next_cursor, Some(PageCursor::Page(2)));
        assert_eq!(numeric.items.len(), 1);

        let token: PostListResponse = serde_json::from_value(json!({
            "items": [],
            "nextCursor": "opaque-abc"
        }))
        .unwrap();
        assert_eq!(
            token.next_cursor,
            Some(PageCursor::Token("opaque-abc".to_string()))
        );
        assert!(token.prev_cursor.is_none());
    }

    #[test]
    fn list_response_accepts_legacy_data_field() {
        let legacy: PostListResponse =
            serde_json::from_value(json!({ "data": [sample_post()], "total": 1 })).unwrap();
        assert_eq!(legacy.items.len(), 1);
        assert!(legacy.next_cursor.is_none());
    }

    #[test]
    fn update_post_omits_unset_fields() {
        let update = UpdatePost {
            title: Some("t".into()),
            ..UpdatePost::default()
        };
        assert_eq!(serde_json::to_value(update).unwrap(), json!({ "title": "t" }));
    }

    #[test]
    fn login_response_accepts_access_token_alias() {
        let response: LoginResponse =
            serde_json::from_value(json!({ "accessToken": "jwt" })).unwrap();
        assert_eq!(response.token, "jwt");
        assert!(response.user.is_none());
    }

    #[test]
    fn error_body_flattens_message_lists() {
        let single: ErrorBody = serde_json::from_value(json!({ "message": "nope" })).unwrap();
        assert_eq!(single.text().as_deref(), Some("nope"));
        let many: ErrorBody =
            serde_json::from_value(json!({ "message": ["title too short", " ", "body empty"] }))
                .unwrap();
        assert_eq!(many.text().as_deref(), Some("title too short; body empty"));
        assert_eq!(ErrorBody::default().text(), None);
    }
}
