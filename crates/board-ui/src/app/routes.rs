//! Route switch and the protected-route wrapper.

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::components::shell::{AppShell, NotFoundPage};
use crate::core::auth::{GuardDecision, guard};
use crate::core::query::split_target;
use crate::core::routes::Route;
use crate::core::store::AppStore;
use crate::features::auth::view::LoginPage;
use crate::features::board::view::{FormMode, PostDetailPage, PostFormPage, PostListPage};
use crate::features::dashboard::view::DashboardPage;

pub(crate) const RETURN_TO_PARAM: &str = "returnTo";

/// Navigate to an in-app `path?query` string, replacing the current entry.
pub(crate) fn navigate_to_path(navigator: &Navigator, target: &str) {
    let (path, pairs) = split_target(target);
    let route = Route::recognize(path).unwrap_or(Route::Posts);
    let result = if pairs.is_empty() {
        navigator.replace(&route);
        Ok(())
    } else {
        navigator.replace_with_query(&route, &pairs)
    };
    if let Err(err) = result {
        tracing::warn!(error = %err, target, "navigation failed");
    }
}

pub(crate) fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Home => html! { <Redirect<Route> to={Route::Posts} /> },
        Route::NotFound => html! { <NotFoundPage /> },
        protected => {
            let page = protected_page(&protected);
            html! {
                <RequireAuth route={protected}>
                    <AppShell>{page}</AppShell>
                </RequireAuth>
            }
        }
    }
}

fn protected_page(route: &Route) -> Html {
    match route {
        Route::Posts => html! { <PostListPage /> },
        Route::NewPost => html! { <PostFormPage mode={FormMode::Create} /> },
        Route::PostDetail { id } => html! { <PostDetailPage id={id.clone()} /> },
        Route::EditPost { id } => html! { <PostFormPage mode={FormMode::Edit { id: id.clone() }} /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Login | Route::Home | Route::NotFound => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RequireAuthProps {
    pub route: Route,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RequireAuth)]
pub(crate) fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_selector(|store: &AppStore| store.auth.session.clone());
    let location = use_location();
    let navigator = use_navigator();
    let requested = location.map_or_else(
        || props.route.to_path(),
        |location| {
            let query = location.query_str().trim_start_matches('?');
            if query.is_empty() {
                location.path().to_string()
            } else {
                format!("{}?{query}", location.path())
            }
        },
    );
    let decision = guard(&props.route, &requested, &session);

    {
        let decision = decision.clone();
        use_effect_with_deps(
            move |decision| {
                if let (GuardDecision::RedirectToLogin { return_to }, Some(navigator)) =
                    (decision, navigator)
                {
                    let query = vec![(RETURN_TO_PARAM, return_to.clone())];
                    if let Err(err) = navigator.replace_with_query(&Route::Login, &query) {
                        tracing::warn!(error = %err, "login redirect failed");
                    }
                }
                || ()
            },
            decision,
        );
    }

    match decision {
        GuardDecision::Allow => html! { <>{ for props.children.iter() }</> },
        GuardDecision::RedirectToLogin { .. } => html! {},
    }
}
