//! Form and table helpers for the board views.

use board_api_models::{Category, Post};

use crate::core::query::{ListQuery, SortField, SortOrder};
use crate::core::validation::{PostDraft, parse_tag_input};

/// Editable form fields, as bound to the inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostForm {
    /// Title input.
    pub title: String,
    /// Body textarea.
    pub body: String,
    /// Category select.
    pub category: Category,
    /// Comma-separated tags input.
    pub tags_raw: String,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            category: Category::Free,
            tags_raw: String::new(),
        }
    }
}

impl PostForm {
    /// Prefill from an existing post.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            body: post.body.clone(),
            category: post.category,
            tags_raw: post.tags.join(", "),
        }
    }

    /// Draft handed to validation.
    #[must_use]
    pub fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            body: self.body.clone(),
            category: self.category,
            tags: parse_tag_input(&self.tags_raw),
        }
    }
}

/// Arrow shown next to a sortable column header.
#[must_use]
pub fn sort_indicator(query: &ListQuery, field: SortField) -> &'static str {
    if query.sort != field {
        return "";
    }
    match query.order {
        SortOrder::Asc => "▲",
        SortOrder::Desc => "▼",
    }
}

/// `aria-sort` value for a column header.
#[must_use]
pub fn aria_sort(query: &ListQuery, field: SortField) -> &'static str {
    if query.sort != field {
        return "none";
    }
    match query.order {
        SortOrder::Asc => "ascending",
        SortOrder::Desc => "descending",
    }
}

/// Query to navigate to once the debounced search text settles.
///
/// `latest` is the query as of the current render, so a category or sort
/// change made during the debounce window is kept. Returns `None` when the
/// text leaves the filters unchanged.
#[must_use]
pub fn search_commit(latest: &ListQuery, text: &str) -> Option<ListQuery> {
    let next = latest.with_search(text);
    (!next.same_filters(latest)).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn form_round_trips_post_fields() {
        let post = Post {
            id: "1".to_string(),
            user_id: "u".to_string(),
            title: "T".to_string(),
            body: "B".to_string(),
            category: Category::Qna,
            tags: vec!["a".to_string(), "b".to_string()],
            created_at: Utc::now(),
            user: None,
        };
        let form = PostForm::from_post(&post);
        assert_eq!(form.tags_raw, "a, b");
        let draft = form.to_draft();
        assert_eq!(draft.tags, vec!["a", "b"]);
        assert_eq!(draft.category, Category::Qna);
    }

    #[test]
    fn indicator_tracks_active_column() {
        let query = ListQuery::default();
        assert_eq!(sort_indicator(&query, SortField::CreatedAt), "▼");
        assert_eq!(sort_indicator(&query, SortField::Title), "");
        assert_eq!(aria_sort(&query.toggle_sort(SortField::Title), SortField::Title), "ascending");
    }

    #[test]
    fn search_commit_builds_on_latest_filters() {
        let latest = ListQuery::default()
            .with_category(Some(Category::Notice))
            .toggle_sort(SortField::Title);
        let next = search_commit(&latest, " rust ").expect("search changed");
        assert_eq!(next.search.as_deref(), Some("rust"));
        assert_eq!(next.category, Some(Category::Notice));
        assert_eq!(next.sort, SortField::Title);
        assert!(search_commit(&next, "rust").is_none());
    }
}
