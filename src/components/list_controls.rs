//! List Controls Component
//!
//! Sort mode select and the "Clear All" button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::SortMode;
use crate::store::{Action, AppStateStoreFields};

#[component]
pub fn ListControls() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="actions">
            <select
                prop:value=move || store.sort_mode().get().as_value()
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<SortMode>() {
                        Ok(mode) => {
                            ctx.dispatch(Action::SetSortMode(mode));
                        }
                        Err(err) => tracing::warn!("sort select: {}", err),
                    }
                }
            >
                {SortMode::ALL.into_iter().map(|mode| view! {
                    <option value=mode.as_value()>{mode.label()}</option>
                }).collect_view()}
            </select>
            <button on:click=move |_| {
                ctx.dispatch(Action::ClearAll);
            }>"Clear All"</button>
        </div>
    }
}
