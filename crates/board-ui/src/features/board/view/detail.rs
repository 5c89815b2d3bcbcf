use board_api_models::Post;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector, use_selector_with_deps};

use crate::app::api::ApiCtx;
use crate::app::session::{handle_unauthorized, push_toast};
use crate::core::logic::{author_label, category_badge_class, category_label, format_created_at};
use crate::core::routes::Route;
use crate::core::store::AppStore;
use crate::features::board::actions::{PostAction, delete_prompt, failure_fallback, success_message};
use crate::features::board::state::{find_post, remove_post, store_post};
use crate::models::ToastKind;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Fetch {
    Loading,
    Done,
    Missing,
    Failed(String),
}

#[derive(Properties, PartialEq, Eq)]
pub(crate) struct PostDetailProps {
    pub id: String,
}

/// Single post with author-only actions.
#[function_component(PostDetailPage)]
pub(crate) fn post_detail_page(props: &PostDetailProps) -> Html {
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let fetch = use_state(|| Fetch::Loading);
    let deleting = use_state(|| false);
    let session = use_selector(|store: &AppStore| store.auth.session.clone());
    let post = use_selector_with_deps(
        |store: &AppStore, id: &String| find_post(&store.board, id).cloned(),
        props.id.clone(),
    );

    {
        let api = api.clone();
        let fetch = fetch.clone();
        use_effect_with_deps(
            move |id: &String| {
                if let Some(api) = api {
                    fetch.set(Fetch::Loading);
                    let id = id.clone();
                    spawn_local(async move {
                        match api.client.fetch_post(&id).await {
                            Ok(post) => {
                                Dispatch::<AppStore>::new()
                                    .reduce_mut(|store| store_post(&mut store.board, post));
                                fetch.set(Fetch::Done);
                            }
                            Err(err) if err.status() == Some(404) => fetch.set(Fetch::Missing),
                            Err(err) => {
                                if !handle_unauthorized(&api, &err) {
                                    tracing::warn!(error = %err, post = %id, "failed to load post");
                                    fetch.set(Fetch::Failed(err.user_message("Failed to load post.")));
                                }
                            }
                        }
                    });
                }
                || ()
            },
            props.id.clone(),
        );
    }

    let Some(post) = (*post).clone() else {
        return match &*fetch {
            Fetch::Loading | Fetch::Done => html! { <p class="list-status">{"Loading…"}</p> },
            Fetch::Missing => html! {
                <section class="post-detail">
                    <p class="list-status">{"Post not found."}</p>
                    <Link<Route> to={Route::Posts}>{"Back to board"}</Link<Route>>
                </section>
            },
            Fetch::Failed(message) => html! {
                <section class="post-detail">
                    <p class="list-status list-error" role="alert">{message.clone()}</p>
                    <Link<Route> to={Route::Posts}>{"Back to board"}</Link<Route>>
                </section>
            },
        };
    };

    let on_delete = {
        let deleting = deleting.clone();
        let post = post.clone();
        Callback::from(move |_: MouseEvent| {
            if *deleting || !gloo::dialogs::confirm(&delete_prompt(&post.title)) {
                return;
            }
            let (Some(api), Some(navigator)) = (api.clone(), navigator.clone()) else {
                return;
            };
            deleting.set(true);
            let deleting = deleting.clone();
            let post = post.clone();
            spawn_local(async move {
                let action = PostAction::Delete {
                    id: post.id.clone(),
                };
                match api.client.delete_post(&post.id).await {
                    Ok(()) => {
                        tracing::info!(post = %post.id, "post deleted");
                        Dispatch::<AppStore>::new()
                            .reduce_mut(|store| remove_post(&mut store.board, &post.id));
                        push_toast(ToastKind::Success, success_message(&action, &post.title));
                        navigator.push(&Route::Posts);
                    }
                    Err(err) => {
                        deleting.set(false);
                        if !handle_unauthorized(&api, &err) {
                            push_toast(ToastKind::Error, err.user_message(failure_fallback(&action)));
                        }
                    }
                }
            });
        })
    };

    let is_author = session.is_author(&post.user_id);
    html! {
        <article class="post-detail">
            <header class="page-header">
                <span class={classes!("badge", category_badge_class(post.category))}>
                    {category_label(post.category)}
                </span>
                <h2>{post.title.clone()}</h2>
                <p class="muted">
                    {author_label(&post).to_string()}{" · "}{format_created_at(&post.created_at)}
                </p>
            </header>
            <div class="post-body">{render_body(&post)}</div>
            if !post.tags.is_empty() {
                <ul class="tags">
                    {for post.tags.iter().map(|tag| html! { <li class="tag">{tag.clone()}</li> })}
                </ul>
            }
            <footer class="post-actions">
                <Link<Route> to={Route::Posts}>{"Back to board"}</Link<Route>>
                if is_author {
                    <Link<Route> classes={classes!("button")} to={Route::EditPost { id: post.id.clone() }}>
                        {"Edit"}
                    </Link<Route>>
                    <button type="button" class="danger" disabled={*deleting} onclick={on_delete}>
                        { if *deleting { "Deleting…" } else { "Delete" } }
                    </button>
                }
            </footer>
        </article>
    }
}

fn render_body(post: &Post) -> Html {
    html! {
        <>
            {for post.body.lines().map(|line| html! { <p>{line.to_string()}</p> })}
        </>
    }
}
