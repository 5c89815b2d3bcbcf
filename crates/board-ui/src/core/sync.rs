//! Post list synchronizer.
//!
//! # Design
//! - The displayed list never holds two posts with the same id.
//! - Each fetch is tagged with a generation; responses from an older generation are dropped.
//! - The next page always comes from the server continuation, never from the item count.
//! - Filter changes rebuild the list from page 1; a page-only change never does.
//! - After a failed fetch nothing is requested again until `retry` is called.

use std::collections::HashSet;

use board_api_models::{PageCursor, Post, PostListResponse};

use crate::core::logic::build_posts_path;
use crate::core::query::{ListQuery, SortField};

/// A fetch the caller should perform for the synchronizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Generation the response must be delivered under.
    pub generation: u64,
    /// Query in force when the request was issued.
    pub query: ListQuery,
    /// Server continuation; `None` for a first page.
    pub cursor: Option<PageCursor>,
}

impl FetchRequest {
    /// Request path relative to the API origin.
    #[must_use]
    pub fn path(&self) -> String {
        build_posts_path(&self.query, self.cursor.as_ref())
    }

    /// Whether this request (re)builds the list.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.cursor.is_none()
    }
}

/// Loading state shown underneath the list.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ListStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last page landed and more are available.
    Ready,
    /// The server reported no further pages.
    Exhausted,
    /// The last fetch failed; items already shown are kept.
    Failed(String),
}

/// Result of delivering a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The response belonged to an older generation and was dropped.
    Stale,
    /// New posts were appended.
    Appended {
        /// Posts added to the list.
        added: usize,
        /// Posts already present and therefore ignored.
        skipped: usize,
    },
}

/// Incrementally loaded, de-duplicated post list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListSync {
    query: ListQuery,
    items: Vec<Post>,
    ids: HashSet<String>,
    generation: u64,
    in_flight: bool,
    loaded: bool,
    continuation: Option<PageCursor>,
    status: ListStatus,
}

impl Default for ListSync {
    fn default() -> Self {
        Self::new(ListQuery::default())
    }
}

impl ListSync {
    /// Empty synchronizer for `query`.
    #[must_use]
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            items: Vec::new(),
            ids: HashSet::new(),
            generation: 0,
            in_flight: false,
            loaded: false,
            continuation: None,
            status: ListStatus::Idle,
        }
    }

    /// Adopt a query read from the URL.
    ///
    /// Returns a first-page request when the filters changed or nothing has been
    /// loaded yet; otherwise only the recorded page is updated.
    pub fn apply_query(&mut self, query: ListQuery) -> Option<FetchRequest> {
        if self.query.same_filters(&query) && (self.loaded || self.in_flight) {
            self.query.page = query.page;
            return None;
        }
        self.query = query;
        Some(self.reset())
    }

    /// Rebuild the list from page 1 of the current query.
    pub fn refresh(&mut self) -> FetchRequest {
        self.reset()
    }

    /// Mark the list as outdated so the next [`Self::apply_query`] refetches.
    pub const fn invalidate(&mut self) {
        self.loaded = false;
    }

    /// Request the next page after a scroll trigger.
    ///
    /// Returns `None` while a fetch is in flight, before the first page landed,
    /// after a failure, or when the server reported no continuation.
    pub fn request_next(&mut self) -> Option<FetchRequest> {
        if self.in_flight || !self.loaded || self.is_failed() {
            return None;
        }
        self.continue_from_cursor()
    }

    /// Re-issue the fetch that failed, on explicit user request.
    ///
    /// A failed first page is rebuilt from scratch; a failed continuation is
    /// requested again with the same cursor. Returns `None` unless the list is
    /// in the failed state.
    pub fn retry(&mut self) -> Option<FetchRequest> {
        if !self.is_failed() {
            return None;
        }
        tracing::debug!(generation = self.generation, "retrying failed fetch");
        if self.loaded {
            self.continue_from_cursor()
        } else {
            Some(self.reset())
        }
    }

    /// Deliver a response issued under `generation`.
    pub fn receive(&mut self, generation: u64, response: PostListResponse) -> MergeOutcome {
        if generation != self.generation {
            tracing::warn!(
                generation,
                current = self.generation,
                "dropping stale list response"
            );
            return MergeOutcome::Stale;
        }
        let mut added = 0;
        let mut skipped = 0;
        for post in response.items {
            if self.ids.insert(post.id.clone()) {
                self.items.push(post);
                added += 1;
            } else {
                skipped += 1;
            }
        }
        self.in_flight = false;
        self.loaded = true;
        self.continuation = response.next_cursor;
        self.status = if self.continuation.is_some() {
            ListStatus::Ready
        } else {
            ListStatus::Exhausted
        };
        tracing::debug!(generation, added, skipped, total = self.items.len(), "merged page");
        MergeOutcome::Appended { added, skipped }
    }

    /// Record a failed fetch for `generation`; stale failures are ignored.
    pub fn fail(&mut self, generation: u64, message: impl Into<String>) {
        if generation != self.generation {
            return;
        }
        let message = message.into();
        tracing::warn!(generation, %message, "list fetch failed");
        self.in_flight = false;
        self.status = ListStatus::Failed(message);
    }

    /// Drop a post from the list.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.ids.remove(id) {
            return false;
        }
        self.items.retain(|post| post.id != id);
        true
    }

    /// Replace a post in place when it is listed.
    pub fn upsert(&mut self, post: &Post) {
        if let Some(slot) = self.items.iter_mut().find(|item| item.id == post.id) {
            slot.clone_from(post);
        }
    }

    /// Query for toggling the sort column.
    #[must_use]
    pub fn toggle_sort(&self, field: SortField) -> ListQuery {
        self.query.toggle_sort(field)
    }

    /// Query for a category change.
    #[must_use]
    pub fn with_category(&self, category: Option<board_api_models::Category>) -> ListQuery {
        self.query.with_category(category)
    }

    /// Query for a committed search term.
    #[must_use]
    pub fn with_search(&self, text: &str) -> ListQuery {
        self.query.with_search(text)
    }

    /// Current query.
    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Displayed posts in arrival order.
    #[must_use]
    pub fn items(&self) -> &[Post] {
        &self.items
    }

    /// Current generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Loading status.
    #[must_use]
    pub const fn status(&self) -> &ListStatus {
        &self.status
    }

    /// Whether a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Whether the server reported more pages.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.continuation.is_some()
    }

    /// Whether the last fetch failed and is waiting for a retry.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, ListStatus::Failed(_))
    }

    fn continue_from_cursor(&mut self) -> Option<FetchRequest> {
        let cursor = self.continuation.clone()?;
        self.in_flight = true;
        self.status = ListStatus::Loading;
        tracing::debug!(generation = self.generation, ?cursor, "requesting next page");
        Some(FetchRequest {
            generation: self.generation,
            query: self.query.clone(),
            cursor: Some(cursor),
        })
    }

    fn reset(&mut self) -> FetchRequest {
        self.query.page = 1;
        self.items.clear();
        self.ids.clear();
        self.continuation = None;
        self.loaded = false;
        self.in_flight = true;
        self.generation += 1;
        self.status = ListStatus::Loading;
        tracing::debug!(generation = self.generation, "rebuilding list");
        FetchRequest {
            generation: self.generation,
            query: self.query.clone(),
            cursor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_api_models::Category;
    use chrono::Utc;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            user_id: "u1".to_string(),
            title: format!("post {id}"),
            body: "body".to_string(),
            category: Category::Free,
            tags: Vec::new(),
            created_at: Utc::now(),
            user: None,
        }
    }

    fn page(ids: &[&str], next: Option<PageCursor>) -> PostListResponse {
        PostListResponse {
            items: ids.iter().map(|id| post(id)).collect(),
            prev_cursor: None,
            next_cursor: next,
        }
    }

    #[test]
    fn first_apply_fetches_page_one() {
        let mut sync = ListSync::default();
        let request = sync
            .apply_query(ListQuery {
                page: 3,
                ..ListQuery::default()
            })
            .expect("initial fetch");
        assert!(request.is_first_page());
        assert_eq!(request.query.page, 1);
        assert_eq!(request.generation, 1);
        assert!(sync.is_loading());
    }

    #[test]
    fn next_page_uses_server_continuation() {
        let mut sync = ListSync::default();
        let first = sync.refresh();
        sync.receive(first.generation, page(&["1", "2"], Some(PageCursor::Page(2))));

        let next = sync.request_next().expect("more pages");
        assert_eq!(next.cursor, Some(PageCursor::Page(2)));
        assert!(next.path().contains("page=2"));
        assert!(sync.request_next().is_none(), "in-flight guard");

        sync.receive(next.generation, page(&["2", "3"], None));
        assert_eq!(sync.items().len(), 3);
        assert_eq!(sync.status(), &ListStatus::Exhausted);
        assert!(sync.request_next().is_none());
    }

    #[test]
    fn request_next_waits_for_first_page() {
        let mut sync = ListSync::default();
        assert!(sync.request_next().is_none());
        let _ = sync.refresh();
        assert!(sync.request_next().is_none());
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut sync = ListSync::default();
        let old = sync.refresh();
        let new = sync
            .apply_query(ListQuery::default().with_category(Some(Category::Qna)))
            .expect("filter change");
        assert_eq!(
            sync.receive(old.generation, page(&["x"], None)),
            MergeOutcome::Stale
        );
        assert!(sync.items().is_empty());
        assert_eq!(
            sync.receive(new.generation, page(&["y"], None)),
            MergeOutcome::Appended {
                added: 1,
                skipped: 0
            }
        );
    }

    #[test]
    fn page_only_change_keeps_items() {
        let mut sync = ListSync::default();
        let first = sync.refresh();
        sync.receive(first.generation, page(&["1"], Some(PageCursor::Page(2))));
        let same = ListQuery {
            page: 2,
            ..ListQuery::default()
        };
        assert!(sync.apply_query(same).is_none());
        assert_eq!(sync.items().len(), 1);
        assert_eq!(sync.query().page, 2);
    }

    #[test]
    fn failure_keeps_items_and_ignores_stale_generations() {
        let mut sync = ListSync::default();
        let first = sync.refresh();
        sync.receive(first.generation, page(&["1"], Some(PageCursor::Page(2))));
        let next = sync.request_next().expect("next");
        sync.fail(next.generation - 1, "old");
        assert!(sync.is_loading());
        sync.fail(next.generation, "boom");
        assert!(!sync.is_loading());
        assert_eq!(sync.status(), &ListStatus::Failed("boom".to_string()));
        assert_eq!(sync.items().len(), 1);
    }

    #[test]
    fn failed_next_page_waits_for_retry() {
        let mut sync = ListSync::default();
        let first = sync.refresh();
        sync.receive(first.generation, page(&["1"], Some(PageCursor::Page(2))));
        let next = sync.request_next().expect("next");
        sync.fail(next.generation, "offline");

        assert!(sync.has_more());
        assert!(!sync.is_loading());
        for _ in 0..3 {
            assert!(sync.request_next().is_none());
        }

        let again = sync.retry().expect("retry");
        assert_eq!(again.cursor, Some(PageCursor::Page(2)));
        assert_eq!(again.generation, next.generation);
        assert!(sync.is_loading());
        assert!(sync.retry().is_none());
        sync.receive(again.generation, page(&["2"], None));
        assert_eq!(sync.items().len(), 2);
    }

    #[test]
    fn failed_first_page_retries_from_scratch() {
        let mut sync = ListSync::default();
        let first = sync.refresh();
        sync.fail(first.generation, "offline");
        assert!(sync.request_next().is_none());

        let again = sync.retry().expect("retry");
        assert!(again.is_first_page());
        assert!(again.generation > first.generation);
    }

    #[test]
    fn remove_and_upsert_update_listed_posts() {
        let mut sync = ListSync::default();
        let first = sync.refresh();
        sync.receive(first.generation, page(&["1", "2"], None));
        let mut edited = post("2");
        edited.title = "edited".to_string();
        sync.upsert(&edited);
        assert_eq!(sync.items()[1].title, "edited");
        assert!(sync.remove("1"));
        assert!(!sync.remove("1"));
        assert_eq!(sync.items().len(), 1);
    }

    #[test]
    fn invalidate_forces_refetch_for_same_query() {
        let mut sync = ListSync::default();
        let first = sync.refresh();
        sync.receive(first.generation, page(&["1"], None));
        assert!(sync.apply_query(ListQuery::default()).is_none());
        sync.invalidate();
        assert!(sync.apply_query(ListQuery::default()).is_some());
    }
}
