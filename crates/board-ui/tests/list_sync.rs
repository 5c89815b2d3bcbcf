use board_api_models::{Category, PageCursor, Post, PostListResponse};
use board_ui::core::auth::{
    GuardDecision, MemorySessionStore, SessionStore, guard, persist_login, persist_logout,
    return_target,
};
use board_ui::core::config::DEFAULT_BANNED_WORDS;
use board_ui::core::query::{ListQuery, SortField, encode_pairs, query_param, split_target};
use board_ui::core::routes::Route;
use board_ui::core::sync::{ListStatus, ListSync, MergeOutcome};
use board_ui::core::validation::{FormIntent, PostDraft, validate_post};
use board_ui::features::board::logic::search_commit;
use chrono::Utc;

fn post(id: &str) -> Post {
    Post {
        id: id.to_string(),
        user_id: "author".to_string(),
        title: format!("post {id}"),
        body: "body".to_string(),
        category: Category::Free,
        tags: Vec::new(),
        created_at: Utc::now(),
        user: None,
    }
}

fn page(ids: &[&str], next: Option<u32>) -> PostListResponse {
    PostListResponse {
        items: ids.iter().map(|id| post(id)).collect(),
        prev_cursor: None,
        next_cursor: next.map(PageCursor::Page),
    }
}

fn banned() -> Vec<String> {
    DEFAULT_BANNED_WORDS.iter().map(ToString::to_string).collect()
}

#[test]
fn scrolling_through_overlapping_pages_keeps_ids_unique() {
    let mut list = ListSync::default();
    let first = list
        .apply_query(ListQuery::default())
        .expect("initial fetch");
    list.receive(first.generation, page(&["1", "2", "3"], Some(2)));

    let second = list.request_next().expect("second page");
    assert!(list.request_next().is_none(), "only one fetch in flight");
    let outcome = list.receive(second.generation, page(&["3", "4"], None));

    assert_eq!(outcome, MergeOutcome::Appended { added: 1, skipped: 1 });
    let ids: Vec<_> = list.items().iter().map(|post| post.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
    assert_eq!(list.status(), &ListStatus::Exhausted);
    assert!(list.request_next().is_none());
}

#[test]
fn failed_next_page_is_not_requested_again_until_retried() {
    let mut list = ListSync::default();
    let first = list
        .apply_query(ListQuery::default())
        .expect("initial fetch");
    list.receive(first.generation, page(&["1", "2"], Some(2)));
    let next = list.request_next().expect("next page");
    list.fail(next.generation, "Failed to load posts.");

    for _ in 0..5 {
        assert!(list.request_next().is_none(), "sentinel must not refetch");
    }
    assert_eq!(
        list.status(),
        &ListStatus::Failed("Failed to load posts.".to_string())
    );

    let retried = list.retry().expect("retry");
    assert_eq!(retried.cursor, Some(PageCursor::Page(2)));
    list.receive(retried.generation, page(&["3"], None));
    assert_eq!(list.items().len(), 3);
    assert_eq!(list.status(), &ListStatus::Exhausted);
}

#[test]
fn filter_change_restarts_from_page_one_and_drops_late_pages() {
    let mut list = ListSync::default();
    let first = list
        .apply_query(ListQuery::default())
        .expect("initial fetch");
    list.receive(first.generation, page(&["1", "2"], Some(2)));
    let next = list.request_next().expect("next page");

    let filtered = list.query().with_category(Some(Category::Notice));
    let refetch = list.apply_query(filtered).expect("filters changed");

    assert_eq!(refetch.query.page, 1);
    assert!(refetch.cursor.is_none());
    assert!(list.items().is_empty());
    assert_eq!(
        list.receive(next.generation, page(&["3"], None)),
        MergeOutcome::Stale
    );
    assert!(list.items().is_empty());

    list.receive(refetch.generation, page(&["9"], None));
    assert_eq!(list.items().len(), 1);
}

#[test]
fn search_text_resets_page() {
    let mut list = ListSync::new(ListQuery {
        page: 4,
        ..ListQuery::default()
    });
    let request = list
        .apply_query(list.query().with_search("  hello  "))
        .expect("search changed");
    assert_eq!(request.query.page, 1);
    assert_eq!(request.query.search.as_deref(), Some("hello"));
}

#[test]
fn title_length_bounds_block_submission() {
    for title in ["a".to_string(), "x".repeat(81)] {
        let draft = PostDraft {
            title,
            body: "hello".to_string(),
            ..PostDraft::default()
        };
        let errors = validate_post(&draft, &banned(), FormIntent::Create).expect_err("invalid");
        assert!(errors.title.is_some());
    }
}

#[test]
fn case_variant_tags_collapse() {
    let draft = PostDraft {
        title: "Hello".to_string(),
        body: "World".to_string(),
        tags: vec!["a".to_string(), "A".to_string()],
        ..PostDraft::default()
    };
    let body = validate_post(&draft, &banned(), FormIntent::Create).expect("valid");
    assert_eq!(body.tags, ["a"]);
}

#[test]
fn banned_words_match_in_any_case() {
    let draft = PostDraft {
        title: "Big CaSiNo night".to_string(),
        body: "come along".to_string(),
        ..PostDraft::default()
    };
    let errors = validate_post(&draft, &banned(), FormIntent::Update).expect_err("banned");
    assert_eq!(
        errors.global.as_deref(),
        Some("Failed to update: Contains banned word \"casino\".")
    );
    assert!(errors.title.is_none());
}

#[test]
fn logout_sends_protected_routes_to_login_with_return_path() {
    let store = MemorySessionStore::default();
    let mut session = persist_login(&store, "token", None);
    assert!(store.load().is_authenticated());
    assert_eq!(
        guard(&Route::Dashboard, "/dashboard", &session),
        GuardDecision::Allow
    );

    persist_logout(&store, &mut session);
    assert!(!store.load().is_authenticated());
    assert_eq!(
        guard(&Route::Posts, "/posts?category=NOTICE", &session),
        GuardDecision::RedirectToLogin {
            return_to: "/posts?category=NOTICE".to_string()
        }
    );
    assert_eq!(guard(&Route::Login, "/auth/login", &session), GuardDecision::Allow);
}

#[test]
fn return_path_keeps_plus_encoded_search() {
    let session = MemorySessionStore::default().load();
    let requested = "/posts?search=rust+tips&category=QNA";
    let GuardDecision::RedirectToLogin { return_to } = guard(&Route::Posts, requested, &session)
    else {
        panic!("signed-out visitor must be redirected");
    };

    let login_query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("returnTo", &return_to)
        .finish();
    let decoded = query_param(&format!("?{login_query}"), "returnTo");
    let target = return_target(decoded.as_deref());
    assert_eq!(target, requested);

    let (path, pairs) = split_target(&target);
    assert_eq!(path, "/posts");
    let pairs: Vec<(&str, String)> = pairs
        .iter()
        .map(|(key, value)| (key.as_str(), value.clone()))
        .collect();
    let query = ListQuery::from_query_string(&encode_pairs(&pairs));
    assert_eq!(query.search.as_deref(), Some("rust tips"));
    assert_eq!(query.category, Some(Category::Qna));
}

#[test]
fn settled_search_keeps_filters_chosen_while_typing() {
    let when_typed = ListQuery::default();
    let latest = when_typed
        .with_category(Some(Category::Notice))
        .toggle_sort(SortField::Title);

    let next = search_commit(&latest, "release").expect("search changed");
    assert_eq!(next.search.as_deref(), Some("release"));
    assert_eq!(next.category, Some(Category::Notice));
    assert_eq!(next.sort, SortField::Title);
    assert_eq!(next.page, 1);
}
