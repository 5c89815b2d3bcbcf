//! Authenticated layout and fallback pages.

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::api::ApiCtx;
use crate::app::session::sign_out;
use crate::core::routes::Route;
use crate::core::store::AppStore;

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let email = use_selector(|store: &AppStore| {
        store
            .auth
            .session
            .user()
            .map(|user| user.email.clone())
            .filter(|email| !email.is_empty())
    });

    let on_sign_out = Callback::from(move |_| {
        if let Some(api) = &api {
            sign_out(api);
        }
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    let nav_class = |active: bool| classes!("nav-link", active.then_some("active"));
    let on_board = matches!(
        route,
        Some(Route::Posts | Route::NewPost | Route::PostDetail { .. } | Route::EditPost { .. })
    );
    let on_dashboard = matches!(route, Some(Route::Dashboard));

    html! {
        <div class="app-shell">
            <header class="app-header">
                <Link<Route> to={Route::Posts} classes={classes!("brand")}>{"Board"}</Link<Route>>
                <nav class="app-nav">
                    <Link<Route> to={Route::Posts} classes={nav_class(on_board)}>{"Board"}</Link<Route>>
                    <Link<Route> to={Route::Dashboard} classes={nav_class(on_dashboard)}>{"Dashboard"}</Link<Route>>
                </nav>
                <div class="app-user">
                    if let Some(email) = (*email).clone() {
                        <span class="user-email">{email}</span>
                    }
                    <button class="ghost" onclick={on_sign_out}>{"Sign out"}</button>
                </div>
            </header>
            <main class="app-main">
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <div class="error-page">
            <h1>{"Oops!"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Posts}>{"Back to the board"}</Link<Route>>
        </div>
    }
}
