use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_model::{stats, FooterMessage};

/// Read-only summary of how much is packed
#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_app_store();
    let message = move || store.items().with(|items| FooterMessage::from_stats(stats(items.as_slice())));

    view! {
        <footer class=move || if message() == FooterMessage::Complete { "stats complete" } else { "stats" }>
            <em>{move || message().text()}</em>
        </footer>
    }
}
