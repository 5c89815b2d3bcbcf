//! Board state and pure transitions.

use std::collections::BTreeMap;

use board_api_models::Post;

use crate::core::sync::ListSync;

/// Board slice held in the app store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    /// Infinite-scroll list.
    pub list: ListSync,
    /// Posts fetched individually, keyed by id.
    pub details: BTreeMap<String, Post>,
}

/// Look up a post from the detail cache, then the list.
#[must_use]
pub fn find_post<'a>(state: &'a BoardState, id: &str) -> Option<&'a Post> {
    state
        .details
        .get(id)
        .or_else(|| state.list.items().iter().find(|post| post.id == id))
}

/// Record a freshly fetched or updated post.
pub fn store_post(state: &mut BoardState, post: Post) {
    state.list.upsert(&post);
    state.details.insert(post.id.clone(), post);
}

/// Forget a deleted post.
pub fn remove_post(state: &mut BoardState, id: &str) {
    state.list.remove(id);
    state.details.remove(id);
}

/// Record a newly created post; the list is rebuilt on its next visit.
pub fn record_created(state: &mut BoardState, post: Post) {
    state.list.invalidate();
    state.details.insert(post.id.clone(), post);
}
