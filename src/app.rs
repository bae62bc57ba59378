//! Packing List App
//!
//! Top-level controller: owns the state store and provides it to the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, Logo, PackingList, StatsFooter};
use crate::config::AppConfig;
use crate::confirm::BrowserConfirm;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let seed = config.seed().unwrap_or_else(|err| {
        tracing::warn!("ignoring seed items: {}", err);
        Vec::new()
    });
    tracing::info!("starting with {} items", seed.len());

    let store = Store::new(AppState::new(seed));
    provide_context(store);
    provide_context(AppContext::new(store, BrowserConfirm, config));

    view! {
        <div class="app">
            <Logo />
            <AddItemForm />
            <PackingList />
            <StatsFooter />
        </div>
    }
}
