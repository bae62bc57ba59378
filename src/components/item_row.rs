//! Item Row Component
//!
//! One line of the list: packed checkbox, description, delete button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Item;
use crate::store::Action;

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let packed = item.packed;

    view! {
        <li class=move || if packed { "item packed" } else { "item" }>
            <input
                type="checkbox"
                prop:checked=packed
                on:change=move |_| {
                    ctx.dispatch(Action::Toggle(id));
                }
            />
            <span class="item-text">{format!("{} ({})", item.description, item.quantity)}</span>
            <button class="delete-btn" on:click=move |_| {
                ctx.dispatch(Action::Delete(id));
            }>"❌"</button>
        </li>
    }
}
