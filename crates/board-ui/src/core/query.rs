//! List query state and its URL query-string form.
//!
//! # Design
//! - The URL is the source of truth; parsing never fails and falls back to defaults.
//! - Derivations (`with_*`) return a new query with the page reset to 1.
//! - The filter key excludes the page so scroll position never resets the list.

use board_api_models::Category;

use crate::core::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Column the list is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    /// Order by title.
    Title,
    /// Order by creation time.
    #[default]
    CreatedAt,
}

impl SortField {
    /// URL value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::CreatedAt => "createdAt",
        }
    }

    /// Parse a URL value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "title" => Some(Self::Title),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    /// Direction applied when this field becomes the active one.
    #[must_use]
    pub const fn initial_order(self) -> SortOrder {
        match self {
            Self::Title => SortOrder::Asc,
            Self::CreatedAt => SortOrder::Desc,
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

impl SortOrder {
    /// URL value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse a URL value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Everything that determines which posts the list shows, ignoring the page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilterKey {
    search: Option<String>,
    category: Option<Category>,
    sort: SortField,
    order: SortOrder,
    limit: u32,
}

/// Parameters of the post list, mirrored in the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// One-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Free-text search, never blank.
    pub search: Option<String>,
    /// Category filter.
    pub category: Option<Category>,
    /// Active sort column.
    pub sort: SortField,
    /// Active sort direction.
    pub order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: None,
            category: None,
            sort: SortField::default(),
            order: SortOrder::default(),
        }
    }
}

impl ListQuery {
    /// Defaults with a configured page size.
    #[must_use]
    pub fn with_page_size(limit: u32) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            ..Self::default()
        }
    }

    /// Parse a query string (with or without the leading `?`).
    ///
    /// Unknown keys are ignored and malformed values keep their defaults.
    #[must_use]
    pub fn from_query_string(raw: &str) -> Self {
        Self::parse_over(Self::default(), raw)
    }

    /// Parse a query string, falling back to the fields of `base`.
    #[must_use]
    pub fn parse_over(base: Self, raw: &str) -> Self {
        let mut query = base;
        for (key, value) in parse_pairs(raw) {
            match key.as_str() {
                "page" => {
                    if let Some(page) = value.parse::<u32>().ok().filter(|page| *page >= 1) {
                        query.page = page;
                    }
                }
                "limit" => {
                    if let Ok(limit) = value.parse::<u32>() {
                        query.limit = limit.clamp(1, MAX_PAGE_SIZE);
                    }
                }
                "search" => query.search = normalize_search(&value),
                "category" => query.category = Category::parse(&value),
                "sort" => query.sort = SortField::parse(&value).unwrap_or_default(),
                "order" => query.order = SortOrder::parse(&value).unwrap_or_default(),
                _ => {}
            }
        }
        query
    }

    /// Key/value pairs in URL order; absent filters are omitted.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        pairs.push(("sort", self.sort.as_str().to_string()));
        pairs.push(("order", self.order.as_str().to_string()));
        pairs
    }

    /// Filter key used to decide whether the list must be rebuilt.
    #[must_use]
    pub fn filter_key(&self) -> FilterKey {
        FilterKey {
            search: self.search.clone(),
            category: self.category,
            sort: self.sort,
            order: self.order,
            limit: self.limit,
        }
    }

    /// Whether both queries select the same posts in the same order.
    #[must_use]
    pub fn same_filters(&self, other: &Self) -> bool {
        self.filter_key() == other.filter_key()
    }

    /// Query with a new search term.
    #[must_use]
    pub fn with_search(&self, text: &str) -> Self {
        Self {
            page: 1,
            search: normalize_search(text),
            ..self.clone()
        }
    }

    /// Query with a new category filter.
    #[must_use]
    pub fn with_category(&self, category: Option<Category>) -> Self {
        Self {
            page: 1,
            category,
            ..self.clone()
        }
    }

    /// Query sorted by `field`; re-selecting the active field flips its direction.
    #[must_use]
    pub fn toggle_sort(&self, field: SortField) -> Self {
        let order = if self.sort == field {
            self.order.flipped()
        } else {
            field.initial_order()
        };
        Self {
            page: 1,
            sort: field,
            order,
            ..self.clone()
        }
    }

    /// Query with search and category cleared.
    #[must_use]
    pub fn reset_filters(&self) -> Self {
        Self {
            page: 1,
            search: None,
            category: None,
            ..self.clone()
        }
    }
}

/// Encode pairs as `k=v&k=v` with percent-encoded values.
#[must_use]
pub fn encode_pairs(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a form-encoded query string (with or without the leading `?`).
///
/// `+` decodes to a space, matching how the router serializes queries.
#[must_use]
pub fn parse_pairs(raw: &str) -> Vec<(String, String)> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// First decoded value of `key` in `raw`.
#[must_use]
pub fn query_param(raw: &str, key: &str) -> Option<String> {
    parse_pairs(raw)
        .into_iter()
        .find_map(|(name, value)| (name == key).then_some(value))
}

/// Split an in-app `path?query` target into its path and decoded pairs.
#[must_use]
pub fn split_target(target: &str) -> (&str, Vec<(String, String)>) {
    target
        .split_once('?')
        .map_or((target, Vec::new()), |(path, query)| (path, parse_pairs(query)))
}

fn normalize_search(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_uses_defaults() {
        let query = ListQuery::from_query_string("");
        assert_eq!(query, ListQuery::default());
        assert_eq!(query.limit, 20);
        assert_eq!(query.sort, SortField::CreatedAt);
        assert_eq!(query.order, SortOrder::Desc);
    }

    #[test]
    fn parses_and_clamps_values() {
        let query = ListQuery::from_query_string(
            "?page=3&limit=500&search=rust%20tips&category=qna&sort=title&order=asc&x=1",
        );
        assert_eq!(query.page, 3);
        assert_eq!(query.limit, MAX_PAGE_SIZE);
        assert_eq!(query.search.as_deref(), Some("rust tips"));
        assert_eq!(query.category, Some(Category::Qna));
        assert_eq!(query.sort, SortField::Title);
        assert_eq!(query.order, SortOrder::Asc);
    }

    #[test]
    fn malformed_values_fall_back() {
        let query =
            ListQuery::from_query_string("page=0&limit=abc&category=NOPE&sort=views&order=up&search=+");
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn query_string_round_trips() {
        let query = ListQuery {
            page: 2,
            search: Some("a&b c".to_string()),
            category: Some(Category::Free),
            ..ListQuery::default()
        };
        let encoded = encode_pairs(&query.to_pairs());
        assert_eq!(
            encoded,
            "page=2&limit=20&search=a%26b%20c&category=FREE&sort=createdAt&order=desc"
        );
        assert_eq!(ListQuery::from_query_string(&encoded), query);
    }

    #[test]
    fn plus_and_percent_both_decode_to_spaces() {
        assert_eq!(
            ListQuery::from_query_string("search=rust+tips").search.as_deref(),
            Some("rust tips")
        );
        assert_eq!(
            query_param("?returnTo=%2Fposts%3Fsearch%3Drust%2Btips&x=1", "returnTo").as_deref(),
            Some("/posts?search=rust+tips")
        );
        assert_eq!(query_param("a=1", "returnTo"), None);
    }

    #[test]
    fn split_target_decodes_query_pairs() {
        let (path, pairs) = split_target("/posts?search=rust+tips&category=QNA");
        assert_eq!(path, "/posts");
        assert_eq!(
            pairs,
            [
                ("search".to_string(), "rust tips".to_string()),
                ("category".to_string(), "QNA".to_string()),
            ]
        );
        assert_eq!(split_target("/dashboard"), ("/dashboard", Vec::new()));
    }

    #[test]
    fn configured_page_size_is_the_fallback_limit() {
        let base = ListQuery::with_page_size(50);
        assert_eq!(ListQuery::parse_over(base.clone(), "").limit, 50);
        assert_eq!(ListQuery::parse_over(base, "limit=10").limit, 10);
        assert_eq!(ListQuery::with_page_size(0).limit, 1);
        assert_eq!(ListQuery::with_page_size(1000).limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn derivations_reset_page() {
        let query = ListQuery {
            page: 4,
            ..ListQuery::default()
        };
        assert_eq!(query.with_search("  hi ").page, 1);
        assert_eq!(query.with_search("   ").search, None);
        assert_eq!(query.with_category(Some(Category::Notice)).page, 1);
        assert_eq!(query.reset_filters().page, 1);
    }

    #[test]
    fn toggle_sort_flips_active_and_seeds_new_field() {
        let query = ListQuery::default();
        let flipped = query.toggle_sort(SortField::CreatedAt);
        assert_eq!(flipped.order, SortOrder::Asc);

        let by_title = flipped.toggle_sort(SortField::Title);
        assert_eq!(by_title.sort, SortField::Title);
        assert_eq!(by_title.order, SortOrder::Asc);
        assert_eq!(by_title.toggle_sort(SortField::Title).order, SortOrder::Desc);
    }

    #[test]
    fn page_is_not_part_of_filter_key() {
        let first = ListQuery::default();
        let later = ListQuery {
            page: 9,
            ..ListQuery::default()
        };
        assert!(first.same_filters(&later));
        assert!(!first.same_filters(&first.with_search("x")));
    }
}
