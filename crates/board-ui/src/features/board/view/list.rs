use std::rc::Rc;

use board_api_models::Post;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use super::toolbar::BoardToolbar;
use crate::app::api::ApiCtx;
use crate::components::scroll_sentinel::ScrollSentinel;
use crate::core::config::BoardConfig;
use crate::core::logic::{author_label, category_badge_class, category_label, format_created_at};
use crate::core::query::{ListQuery, SortField};
use crate::core::routes::Route;
use crate::core::store::AppStore;
use crate::core::sync::ListStatus;
use crate::features::board::api::drive_list;
use crate::features::board::logic::{aria_sort, sort_indicator};

/// Post table with URL-driven filters and infinite scroll.
#[function_component(PostListPage)]
pub(crate) fn post_list_page() -> Html {
    let api = use_context::<ApiCtx>();
    let config = use_context::<Rc<BoardConfig>>().unwrap_or_default();
    let navigator = use_navigator();
    let location = use_location();
    let list = use_selector(|store: &AppStore| store.board.list.clone());

    let url_query = {
        let base = ListQuery::with_page_size(config.page_size);
        match &location {
            Some(location) => ListQuery::parse_over(base, location.query_str()),
            None => base,
        }
    };

    {
        let api = api.clone();
        use_effect_with_deps(
            move |query: &ListQuery| {
                if let Some(api) = api {
                    let query = query.clone();
                    drive_list(&api, move |store| store.board.list.apply_query(query));
                }
                || ()
            },
            url_query,
        );
    }

    let on_change = Callback::from(move |next: ListQuery| {
        if let Some(navigator) = &navigator {
            if let Err(err) = navigator.push_with_query(&Route::Posts, &next.to_pairs()) {
                tracing::warn!(error = %err, "failed to update list query");
            }
        }
    });

    let on_sort = {
        let on_change = on_change.clone();
        let query = list.query().clone();
        move |field: SortField| {
            let on_change = on_change.clone();
            let next = query.toggle_sort(field);
            Callback::from(move |_: MouseEvent| on_change.emit(next.clone()))
        }
    };

    let on_visible = {
        let api = api.clone();
        Callback::from(move |()| {
            if let Some(api) = &api {
                drive_list(api, |store| store.board.list.request_next());
            }
        })
    };
    let on_retry = Callback::from(move |_: MouseEvent| {
        if let Some(api) = &api {
            drive_list(api, |store| store.board.list.retry());
        }
    });

    let query = list.query().clone();
    let items = list.items();
    let sortable = |field: SortField, label: &'static str| {
        html! {
            <th aria-sort={aria_sort(&query, field)}>
                <button type="button" class="sort" onclick={on_sort(field)}>
                    {label}{" "}{sort_indicator(&query, field)}
                </button>
            </th>
        }
    };

    let footer = match list.status() {
        ListStatus::Idle | ListStatus::Ready => html! {},
        ListStatus::Loading => html! { <p class="list-status" aria-busy="true">{"Loading…"}</p> },
        ListStatus::Exhausted if items.is_empty() => {
            html! { <p class="list-status">{"No posts found."}</p> }
        }
        ListStatus::Exhausted => html! { <p class="list-status muted">{"No more posts"}</p> },
        ListStatus::Failed(message) => html! {
            <div class="list-status list-error" role="alert">
                <p>{message.clone()}</p>
                <button type="button" onclick={on_retry}>{"Retry"}</button>
            </div>
        },
    };

    html! {
        <section class="board-page">
            <header class="page-header">
                <h2>{"Board"}</h2>
                <p class="muted">{"Browse, search and filter posts."}</p>
            </header>
            <BoardToolbar
                query={query.clone()}
                debounce_ms={config.search_debounce_ms}
                {on_change}
            />
            <table class="post-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        {sortable(SortField::Title, "Title")}
                        <th>{"Category"}</th>
                        <th>{"Author"}</th>
                        {sortable(SortField::CreatedAt, "Date")}
                        <th>{"Tags"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for items.iter().map(render_row)}
                </tbody>
            </table>
            {footer}
            <ScrollSentinel
                on_visible={on_visible}
                disabled={!list.has_more() || list.is_loading() || list.is_failed()}
                epoch={items.len()}
            />
        </section>
    }
}

fn render_row(post: &Post) -> Html {
    let id = post.id.clone();
    html! {
        <tr key={post.id.clone()}>
            <td class="mono">{post.id.clone()}</td>
            <td>
                <Link<Route> to={Route::PostDetail { id }}>{post.title.clone()}</Link<Route>>
            </td>
            <td>
                <span class={classes!("badge", category_badge_class(post.category))}>
                    {category_label(post.category)}
                </span>
            </td>
            <td>{author_label(post).to_string()}</td>
            <td>{format_created_at(&post.created_at)}</td>
            <td class="tags">
                {for post.tags.iter().map(|tag| html! { <span class="tag">{tag.clone()}</span> })}
            </td>
        </tr>
    }
}
