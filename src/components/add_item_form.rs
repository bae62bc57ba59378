//! Add Item Form Component
//!
//! Description input plus quantity select. Resets after a successful add.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Quantity;
use crate::store::Action;

#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let default_quantity = config.default_quantity();

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(default_quantity);

    let add_item = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let action = Action::Add {
            description: description.get_untracked(),
            quantity: quantity.get_untracked(),
        };
        if ctx.dispatch(action) {
            set_description.set(String::new());
            set_quantity.set(default_quantity);
        }
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>"What do you need to pack?"</h3>
            <select
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<Quantity>() {
                        Ok(q) => set_quantity.set(q),
                        Err(err) => tracing::warn!("quantity select: {}", err),
                    }
                }
            >
                {config.quantity_options.iter().map(|q| {
                    let value = q.to_string();
                    let label = value.clone();
                    view! { <option value=value>{label}</option> }
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Item..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
