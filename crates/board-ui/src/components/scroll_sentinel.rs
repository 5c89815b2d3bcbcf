//! Infinite-scroll trigger backed by an `IntersectionObserver`.
//!
//! # Design
//! - The observer is rebuilt whenever `epoch` changes, so a sentinel that is
//!   still on screen after a page lands fires again.
//! - Observing stops while `disabled` is set.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ScrollSentinelProps {
    pub on_visible: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub epoch: usize,
}

#[function_component(ScrollSentinel)]
pub(crate) fn scroll_sentinel(props: &ScrollSentinelProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        let on_visible = props.on_visible.clone();
        use_effect_with_deps(
            move |(disabled, _epoch): &(bool, usize)| {
                let handler = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
                    move |entries: Array, _observer: IntersectionObserver| {
                        let visible = entries
                            .iter()
                            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                            .any(|entry| entry.is_intersecting());
                        if visible {
                            on_visible.emit(());
                        }
                    },
                )
                    as Box<dyn FnMut(Array, IntersectionObserver)>);

                let target = if *disabled {
                    None
                } else {
                    node.cast::<Element>()
                };
                let observer = target.and_then(|element| {
                    let init = IntersectionObserverInit::new();
                    init.set_root_margin("200px");
                    match IntersectionObserver::new_with_options(
                        handler.as_ref().unchecked_ref(),
                        &init,
                    ) {
                        Ok(created) => {
                            created.observe(&element);
                            Some(created)
                        }
                        Err(err) => {
                            tracing::warn!(error = ?err, "intersection observer unavailable");
                            None
                        }
                    }
                });

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(handler);
                }
            },
            (props.disabled, props.epoch),
        );
    }

    html! { <div ref={node} class="scroll-sentinel" aria-hidden="true"></div> }
}
