//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::confirm::ConfirmProvider;
use crate::store::{self, Action, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// State owned by the `App` component
    pub store: AppStore,
    /// Asked before destructive actions
    confirm: StoredValue<Arc<dyn ConfirmProvider + Send + Sync>>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, confirm: impl ConfirmProvider + Send + Sync + 'static, config: AppConfig) -> Self {
        let confirm: Arc<dyn ConfirmProvider + Send + Sync> = Arc::new(confirm);
        Self {
            store,
            confirm: StoredValue::new(confirm),
            config: StoredValue::new(config),
        }
    }

    /// Apply a user action. Returns whether state changed.
    pub fn dispatch(&self, action: Action) -> bool {
        let confirm = self.confirm.get_value();
        store::dispatch(&self.store, action, confirm.as_ref())
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
