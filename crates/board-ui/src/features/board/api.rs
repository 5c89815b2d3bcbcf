//! Async glue between the board store and the REST client.

use yew::platform::spawn_local;
use yewdux::prelude::Dispatch;

use crate::app::api::ApiCtx;
use crate::app::session::handle_unauthorized;
use crate::core::store::AppStore;
use crate::core::sync::FetchRequest;

const LIST_FAILED: &str = "Failed to load posts.";

/// Apply `step` to the synchronizer and run the fetch it asks for, if any.
pub(crate) fn drive_list<F>(api: &ApiCtx, step: F)
where
    F: FnOnce(&mut AppStore) -> Option<FetchRequest>,
{
    let mut request = None;
    Dispatch::<AppStore>::new().reduce_mut(|store| {
        request = step(store);
    });
    if let Some(request) = request {
        load_page(api.clone(), request);
    }
}

fn load_page(api: ApiCtx, request: FetchRequest) {
    spawn_local(async move {
        let dispatch = Dispatch::<AppStore>::new();
        match api.client.list_posts(&request).await {
            Ok(response) => dispatch.reduce_mut(|store| {
                store.board.list.receive(request.generation, response);
            }),
            Err(err) => {
                if handle_unauthorized(&api, &err) {
                    return;
                }
                let message = err.user_message(LIST_FAILED);
                dispatch.reduce_mut(|store| {
                    store.board.list.fail(request.generation, message);
                });
            }
        }
    });
}
