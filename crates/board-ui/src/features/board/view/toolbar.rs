use board_api_models::Category;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::search_input::SearchInput;
use crate::core::logic::category_label;
use crate::core::query::ListQuery;
use crate::core::routes::Route;
use crate::features::board::logic::search_commit;

#[derive(Properties, PartialEq)]
pub(super) struct BoardToolbarProps {
    pub query: ListQuery,
    pub debounce_ms: u32,
    pub on_change: Callback<ListQuery>,
}

#[function_component(BoardToolbar)]
pub(super) fn board_toolbar(props: &BoardToolbarProps) -> Html {
    let latest = use_mut_ref(|| props.query.clone());
    latest.replace(props.query.clone());
    let on_search = {
        let on_change = props.on_change.clone();
        Callback::from(move |text: String| {
            if let Some(next) = search_commit(&latest.borrow(), &text) {
                on_change.emit(next);
            }
        })
    };
    let category_button = |category: Option<Category>| {
        let active = props.query.category == category;
        let label = category.map_or("All", category_label);
        let query = props.query.clone();
        let on_change = props.on_change.clone();
        let onclick = Callback::from(move |_| {
            if query.category != category {
                on_change.emit(query.with_category(category));
            }
        });
        html! {
            <button type="button" class={classes!("chip", active.then_some("active"))}
                aria-pressed={active.to_string()} {onclick}>
                {label}
            </button>
        }
    };
    let on_reset = {
        let query = props.query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(query.reset_filters()))
    };
    let filtered = props.query.search.is_some() || props.query.category.is_some();

    html! {
        <div class="board-toolbar">
            <SearchInput
                value={AttrValue::from(props.query.search.clone().unwrap_or_default())}
                placeholder={AttrValue::from("Search posts…")}
                debounce_ms={props.debounce_ms}
                {on_search}
            />
            <div class="category-filter" role="group" aria-label="Category">
                {category_button(None)}
                {for Category::ALL.into_iter().map(|category| category_button(Some(category)))}
            </div>
            if filtered {
                <button type="button" class="ghost" onclick={on_reset}>{"Reset"}</button>
            }
            <Link<Route> to={Route::NewPost} classes={classes!("button", "primary")}>{"New post"}</Link<Route>>
        </div>
    }
}
