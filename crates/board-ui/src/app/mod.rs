//! Root component, providers and boot sequence.
//!
//! # Design
//! - Configuration, logging and the persisted session are resolved before the
//!   first render so the route guard never sees a half-restored session.
//! - Shared services travel through contexts; shared state lives in the yewdux store.

pub(crate) mod api;
mod preferences;
pub(crate) mod routes;
pub(crate) mod session;

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

use crate::app::api::ApiCtx;
use crate::app::preferences::{LocalSessionStore, load_config};
use crate::components::toast::ToastHost;
use crate::core::auth::SessionStore;
use crate::core::config::BoardConfig;
use crate::core::routes::Route;
use crate::core::store::{AppStore, AuthSlice};
use crate::telemetry;

#[derive(Properties, PartialEq)]
struct BoardAppProps {
    config: Rc<BoardConfig>,
    api: ApiCtx,
}

#[function_component(BoardApp)]
fn board_app(props: &BoardAppProps) -> Html {
    html! {
        <ContextProvider<ApiCtx> context={props.api.clone()}>
            <ContextProvider<Rc<BoardConfig>> context={props.config.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={routes::switch} />
                    <ToastHost />
                </BrowserRouter>
            </ContextProvider<Rc<BoardConfig>>>
        </ContextProvider<ApiCtx>>
    }
}

/// Entrypoint for the wasm32 target.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = load_config();
    if let Err(err) = telemetry::init_logging(config.log_level) {
        gloo::console::warn!(err.to_string());
    }

    let session = LocalSessionStore.load();
    let api = ApiCtx::for_session(config.api_base_url.clone(), &session);
    tracing::info!(
        api = %config.api_base_url,
        signed_in = session.is_authenticated(),
        "starting board ui"
    );
    Dispatch::<AppStore>::new().reduce_mut(move |store| {
        store.auth = AuthSlice::with_session(session);
    });

    let props = BoardAppProps {
        config: Rc::new(config),
        api,
    };
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<BoardApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<BoardApp>::with_props(props).render();
    }
}
