use leptos::prelude::*;

use crate::context::use_app_context;

/// Page title
#[component]
pub fn Logo() -> impl IntoView {
    let title = use_app_context().config().title;
    view! { <h1 class="logo">{title}</h1> }
}
