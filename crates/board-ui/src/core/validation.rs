//! Post form validation.
//!
//! # Design
//! - Validation is pure; a failing draft never reaches the network.
//! - Field errors and the global banned-word error are reported together.
//! - Tags are normalised here so create and edit submit the same shape.

use std::collections::HashSet;

use board_api_models::{Category, CreatePost};

/// Minimum trimmed title length in characters.
pub const TITLE_MIN_CHARS: usize = 2;
/// Maximum trimmed title length in characters.
pub const TITLE_MAX_CHARS: usize = 80;
/// Maximum trimmed body length in characters.
pub const BODY_MAX_CHARS: usize = 2000;
/// Maximum number of tags per post.
pub const MAX_TAGS: usize = 5;
/// Maximum length of one tag in characters.
pub const TAG_MAX_CHARS: usize = 24;

/// Which form is being submitted; selects the message wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormIntent {
    /// New post.
    Create,
    /// Existing post.
    Update,
}

impl FormIntent {
    /// Message shown when the backend rejects the submission without a reason.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::Create => "Failed to create post. Please try again.",
            Self::Update => "Failed to update post. Please try again.",
        }
    }

    const fn banned_prefix(self) -> &'static str {
        match self {
            Self::Create => "Failed to post",
            Self::Update => "Failed to update",
        }
    }
}

/// Raw form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostDraft {
    /// Title as typed.
    pub title: String,
    /// Body as typed.
    pub body: String,
    /// Selected category.
    pub category: Category,
    /// Tags as entered; may contain blanks and duplicates.
    pub tags: Vec<String>,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            category: Category::Free,
            tags: Vec::new(),
        }
    }
}

/// Per-field and global validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    /// Title problem.
    pub title: Option<String>,
    /// Body problem.
    pub body: Option<String>,
    /// Tag problem.
    pub tags: Option<String>,
    /// Form-wide problem (banned words, backend rejection).
    pub global: Option<String>,
}

impl FormErrors {
    /// No messages at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.tags.is_none() && self.global.is_none()
    }

    /// Errors holding only a global message.
    #[must_use]
    pub fn global(message: impl Into<String>) -> Self {
        Self {
            global: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Split comma-separated tag input into trimmed, non-empty entries.
#[must_use]
pub fn parse_tag_input(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Trim, drop blanks and remove case-insensitive duplicates keeping the first spelling.
#[must_use]
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .map(ToString::to_string)
        .collect()
}

/// First banned word contained in `text`, compared case-insensitively.
#[must_use]
pub fn find_banned_word<'a>(text: &str, banned_words: &'a [String]) -> Option<&'a str> {
    let haystack = text.to_lowercase();
    banned_words
        .iter()
        .map(String::as_str)
        .filter(|word| !word.trim().is_empty())
        .find(|word| haystack.contains(&word.to_lowercase()))
}

/// Validate a draft and produce the request body.
///
/// # Errors
///
/// Returns every field problem found plus the banned-word message when applicable.
pub fn validate_post(
    draft: &PostDraft,
    banned_words: &[String],
    intent: FormIntent,
) -> Result<CreatePost, FormErrors> {
    let title = draft.title.trim();
    let body = draft.body.trim();
    let tags = normalize_tags(&draft.tags);
    let mut errors = FormErrors::default();

    let title_len = title.chars().count();
    if title_len < TITLE_MIN_CHARS {
        errors.title = Some(format!(
            "Title must be at least {TITLE_MIN_CHARS} characters."
        ));
    } else if title_len > TITLE_MAX_CHARS {
        errors.title = Some(format!(
            "Title must be at most {TITLE_MAX_CHARS} characters."
        ));
    }

    if body.is_empty() {
        errors.body = Some("Content is required.".to_string());
    } else if body.chars().count() > BODY_MAX_CHARS {
        errors.body = Some(format!(
            "Content must be at most {BODY_MAX_CHARS} characters."
        ));
    }

    if tags.len() > MAX_TAGS {
        errors.tags = Some(format!("Use at most {MAX_TAGS} tags."));
    } else if let Some(tag) = tags.iter().find(|tag| tag.chars().count() > TAG_MAX_CHARS) {
        errors.tags = Some(format!(
            "Tag \"{tag}\" is longer than {TAG_MAX_CHARS} characters."
        ));
    }

    if let Some(word) = find_banned_word(&format!("{title} {body}"), banned_words) {
        errors.global = Some(format!(
            "{}: Contains banned word \"{word}\".",
            intent.banned_prefix()
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(CreatePost {
        title: title.to_string(),
        body: body.to_string(),
        category: draft.category,
        tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banned() -> Vec<String> {
        vec!["spam".to_string()]
    }

    fn draft(title: &str, body: &str, tags: &[&str]) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            body: body.to_string(),
            category: Category::Qna,
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn accepts_and_trims_valid_draft() {
        let post = validate_post(
            &draft("  Hello  ", " body ", &[" rust ", "Rust", "yew"]),
            &banned(),
            FormIntent::Create,
        )
        .expect("valid");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.body, "body");
        assert_eq!(post.tags, vec!["rust", "yew"]);
        assert_eq!(post.category, Category::Qna);
    }

    #[test]
    fn title_bounds_are_enforced() {
        let short = validate_post(&draft("a", "body", &[]), &[], FormIntent::Create)
            .expect_err("too short");
        assert!(short.title.is_some());

        let long = "x".repeat(TITLE_MAX_CHARS + 1);
        let long = validate_post(&draft(&long, "body", &[]), &[], FormIntent::Create)
            .expect_err("too long");
        assert!(long.title.is_some());

        let exact = "é".repeat(TITLE_MAX_CHARS);
        assert!(validate_post(&draft(&exact, "body", &[]), &[], FormIntent::Create).is_ok());
    }

    #[test]
    fn body_and_tag_limits_are_enforced() {
        let errors = validate_post(
            &draft("Title", "   ", &["a", "b", "c", "d", "e", "f"]),
            &[],
            FormIntent::Create,
        )
        .expect_err("invalid");
        assert!(errors.body.is_some());
        assert!(errors.tags.is_some());

        let long_tag = "t".repeat(TAG_MAX_CHARS + 1);
        let errors = validate_post(&draft("Title", "body", &[&long_tag]), &[], FormIntent::Create)
            .expect_err("tag too long");
        assert!(errors.tags.is_some());
    }

    #[test]
    fn banned_words_block_with_global_message() {
        let errors = validate_post(&draft("Buy SPAM now", "body", &[]), &banned(), FormIntent::Update)
            .expect_err("banned");
        assert_eq!(
            errors.global.as_deref(),
            Some("Failed to update: Contains banned word \"spam\".")
        );
        assert!(errors.title.is_none());
    }

    #[test]
    fn tag_input_parsing_drops_blanks() {
        assert_eq!(parse_tag_input(" a, ,b ,"), vec!["a", "b"]);
        assert_eq!(normalize_tags(&["A".into(), "a".into()]), vec!["A"]);
    }
}
