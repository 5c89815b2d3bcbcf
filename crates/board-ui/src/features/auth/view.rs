//! Sign-in screen.

use board_api_models::LoginRequest;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::api::ApiCtx;
use crate::app::routes::{RETURN_TO_PARAM, navigate_to_path};
use crate::app::session::sign_in;
use crate::core::auth::{LOGIN_FAILED, check_credentials, return_target};
use crate::core::query::query_param;
use crate::core::store::AppStore;

/// Email/password form; on success navigates to the recorded return path.
#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let location = use_location();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let authenticated = use_selector(|store: &AppStore| store.auth.session.is_authenticated());
    let busy = use_selector(|store: &AppStore| store.auth.login_busy);
    let error = use_selector(|store: &AppStore| store.auth.login_error.clone());

    let target = location.and_then(|location| query_param(location.query_str(), RETURN_TO_PARAM));
    let target = return_target(target.as_deref());

    {
        use_effect_with_deps(
            move |authenticated: &bool| {
                if let (true, Some(navigator)) = (*authenticated, navigator) {
                    navigate_to_path(&navigator, &target);
                }
                || ()
            },
            *authenticated,
        );
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let dispatch = Dispatch::<AppStore>::new();
            if let Err(message) = check_credentials(&email, &password) {
                dispatch.reduce_mut(|store| store.auth.login_error = Some(message.to_string()));
                return;
            }
            let Some(api) = api.clone() else {
                return;
            };
            dispatch.reduce_mut(|store| {
                store.auth.login_busy = true;
                store.auth.login_error = None;
            });
            let body = LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            spawn_local(async move {
                match api.client.login(&body).await {
                    Ok(response) => sign_in(&api, response),
                    Err(err) => {
                        tracing::warn!(error = %err, "sign-in rejected");
                        let message = err.user_message(LOGIN_FAILED);
                        dispatch.reduce_mut(|store| {
                            store.auth.login_busy = false;
                            store.auth.login_error = Some(message);
                        });
                    }
                }
            });
        })
    };

    html! {
        <div class="login-page">
            <form class="login-card" onsubmit={on_submit} novalidate={true}>
                <h1>{"Sign in"}</h1>
                <p class="muted">{"Enter your email and password to access the board."}</p>
                if let Some(message) = (*error).clone() {
                    <p class="form-error" role="alert">{message}</p>
                }
                <label>
                    <span>{"Email"}</span>
                    <input type="email" autocomplete="username" value={(*email).clone()} oninput={on_email} />
                </label>
                <label>
                    <span>{"Password"}</span>
                    <input type="password" autocomplete="current-password" value={(*password).clone()} oninput={on_password} />
                </label>
                <button type="submit" class="primary" disabled={*busy}>
                    { if *busy { "Signing in…" } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}
