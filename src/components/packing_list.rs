//! Packing List Component
//!
//! Renders the sorted projection of the store and the list controls.

use leptos::prelude::*;

use crate::components::{ItemRow, ListControls};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_model::sorted_view;

#[component]
pub fn PackingList() -> impl IntoView {
    let store = use_app_store();

    let sorted_items = move || {
        let mode = store.sort_mode().get();
        store.items().with(|items| sorted_view(items.as_slice(), mode))
    };

    view! {
        <div class="list">
            <ul>
                <For
                    each=sorted_items
                    // packed is part of the key so the row re-renders when toggled
                    key=|item| (item.id, item.packed)
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>
            <ListControls />
        </div>
    }
}
