use std::rc::Rc;

use board_api_models::{Category, UpdatePost};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector, use_selector_with_deps};

use crate::app::api::ApiCtx;
use crate::app::session::{handle_unauthorized, push_toast};
use crate::core::config::BoardConfig;
use crate::core::logic::category_label;
use crate::core::routes::Route;
use crate::core::store::AppStore;
use crate::core::validation::{FormErrors, FormIntent, validate_post};
use crate::features::board::actions::{PostAction, success_message};
use crate::features::board::logic::PostForm;
use crate::features::board::state::{find_post, record_created, store_post};
use crate::models::ToastKind;

/// Which post the form writes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    const fn intent(&self) -> FormIntent {
        match self {
            Self::Create => FormIntent::Create,
            Self::Edit { .. } => FormIntent::Update,
        }
    }

    fn edit_id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit { id } => Some(id.as_str()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Prefill {
    Ready,
    Loading,
    Missing,
    Failed(String),
}

#[derive(Properties, PartialEq, Eq)]
pub(crate) struct PostFormProps {
    pub mode: FormMode,
}

/// Create or edit a post.
#[function_component(PostFormPage)]
pub(crate) fn post_form_page(props: &PostFormProps) -> Html {
    let api = use_context::<ApiCtx>();
    let config = use_context::<Rc<BoardConfig>>().unwrap_or_default();
    let navigator = use_navigator();
    let form = use_state(PostForm::default);
    let errors = use_state(FormErrors::default);
    let submitting = use_state(|| false);
    let prefill = use_state(|| Prefill::Ready);
    let session = use_selector(|store: &AppStore| store.auth.session.clone());
    let existing = use_selector_with_deps(
        |store: &AppStore, mode: &FormMode| {
            mode.edit_id()
                .and_then(|id| find_post(&store.board, id))
                .cloned()
        },
        props.mode.clone(),
    );

    {
        let api = api.clone();
        let form = form.clone();
        let errors = errors.clone();
        let prefill = prefill.clone();
        use_effect_with_deps(
            move |mode: &FormMode| {
                errors.set(FormErrors::default());
                match mode.edit_id() {
                    None => {
                        form.set(PostForm::default());
                        prefill.set(Prefill::Ready);
                    }
                    Some(id) => {
                        let cached = find_post(&Dispatch::<AppStore>::new().get().board, id)
                            .map(PostForm::from_post);
                        if let Some(cached) = cached {
                            form.set(cached);
                            prefill.set(Prefill::Ready);
                        } else if let Some(api) = api {
                            prefill.set(Prefill::Loading);
                            let id = id.to_string();
                            spawn_local(async move {
                                match api.client.fetch_post(&id).await {
                                    Ok(post) => {
                                        form.set(PostForm::from_post(&post));
                                        Dispatch::<AppStore>::new()
                                            .reduce_mut(|store| store_post(&mut store.board, post));
                                        prefill.set(Prefill::Ready);
                                    }
                                    Err(err) if err.status() == Some(404) => {
                                        prefill.set(Prefill::Missing);
                                    }
                                    Err(err) => {
                                        if !handle_unauthorized(&api, &err) {
                                            prefill.set(Prefill::Failed(
                                                err.user_message("Failed to load post."),
                                            ));
                                        }
                                    }
                                }
                            });
                        }
                    }
                }
                || ()
            },
            props.mode.clone(),
        );
    }

    match &*prefill {
        Prefill::Ready => {}
        Prefill::Loading => return html! { <p class="list-status">{"Loading…"}</p> },
        Prefill::Missing => return html! { <p class="list-status">{"Post not found."}</p> },
        Prefill::Failed(message) => {
            return html! { <p class="list-status list-error" role="alert">{message.clone()}</p> };
        }
    }
    if let Some(post) = (*existing)
        .as_ref()
        .filter(|post| !session.is_author(&post.user_id))
    {
        return html! {
            <section class="post-form">
                <p class="form-error" role="alert">{"You can only edit your own posts."}</p>
                <Link<Route> to={Route::PostDetail { id: post.id.clone() }}>{"Back to post"}</Link<Route>>
            </section>
        };
    }

    let on_title = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(PostForm {
                    title: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };
    let on_body = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                form.set(PostForm {
                    body: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };
    let on_category = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let category = event
                .target_dyn_into::<HtmlSelectElement>()
                .and_then(|select| Category::parse(&select.value()));
            if let Some(category) = category {
                form.set(PostForm {
                    category,
                    ..(*form).clone()
                });
            }
        })
    };
    let on_tags = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(PostForm {
                    tags_raw: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let mode = props.mode.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            let intent = mode.intent();
            let body = match validate_post(&form.to_draft(), &config.banned_words, intent) {
                Ok(body) => body,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            let (Some(api), Some(navigator)) = (api.clone(), navigator.clone()) else {
                return;
            };
            errors.set(FormErrors::default());
            submitting.set(true);
            let errors = errors.clone();
            let submitting = submitting.clone();
            let mode = mode.clone();
            spawn_local(async move {
                let (action, result) = match &mode {
                    FormMode::Create => (PostAction::Create, api.client.create_post(&body).await),
                    FormMode::Edit { id } => (
                        PostAction::Update { id: id.clone() },
                        api.client.update_post(id, &UpdatePost::from(body)).await,
                    ),
                };
                submitting.set(false);
                match result {
                    Ok(post) => {
                        tracing::info!(post = %post.id, ?action, "post saved");
                        let message = success_message(&action, &post.title);
                        Dispatch::<AppStore>::new().reduce_mut(|store| match action {
                            PostAction::Create => record_created(&mut store.board, post),
                            PostAction::Update { .. } | PostAction::Delete { .. } => {
                                store_post(&mut store.board, post);
                            }
                        });
                        push_toast(ToastKind::Success, message);
                        navigator.push(&Route::Posts);
                    }
                    Err(err) => {
                        if !handle_unauthorized(&api, &err) {
                            tracing::warn!(error = %err, "post submission rejected");
                            errors.set(FormErrors::global(
                                err.user_message(intent.fallback_message()),
                            ));
                        }
                    }
                }
            });
        })
    };

    let (heading, submit_label) = match props.mode {
        FormMode::Create => ("New post", "Publish"),
        FormMode::Edit { .. } => ("Edit post", "Save changes"),
    };
    let cancel_route = props
        .mode
        .edit_id()
        .map_or(Route::Posts, |id| Route::PostDetail { id: id.to_string() });
    let field_error = |message: Option<&str>| {
        message.map_or_else(Html::default, |message| html! { <p class="field-error">{message.to_string()}</p> })
    };

    html! {
        <section class="post-form">
            <header class="page-header">
                <h2>{heading}</h2>
            </header>
            <form onsubmit={on_submit} novalidate={true}>
                if let Some(message) = errors.global.clone() {
                    <p class="form-error" role="alert">{message}</p>
                }
                <label>
                    <span>{"Title"}</span>
                    <input type="text" value={form.title.clone()} oninput={on_title} />
                </label>
                {field_error(errors.title.as_deref())}
                <label>
                    <span>{"Category"}</span>
                    <select onchange={on_category}>
                        {for Category::ALL.into_iter().map(|category| html! {
                            <option value={category.as_str()} selected={form.category == category}>
                                {category_label(category)}
                            </option>
                        })}
                    </select>
                </label>
                <label>
                    <span>{"Content"}</span>
                    <textarea rows="10" value={form.body.clone()} oninput={on_body} />
                </label>
                {field_error(errors.body.as_deref())}
                <label>
                    <span>{"Tags"}</span>
                    <input
                        type="text"
                        placeholder="comma, separated, tags"
                        value={form.tags_raw.clone()}
                        oninput={on_tags}
                    />
                </label>
                {field_error(errors.tags.as_deref())}
                <div class="form-actions">
                    <Link<Route> to={cancel_route}>{"Cancel"}</Link<Route>>
                    <button type="submit" class="primary" disabled={*submitting}>
                        { if *submitting { "Saving…" } else { submit_label } }
                    </button>
                </div>
            </form>
        </section>
    }
}
