//! Confirmation Capability
//!
//! Destructive actions ask a `ConfirmProvider` before running, so the store
//! never talks to the browser directly.

/// Answers a yes/no question on behalf of the user
pub trait ConfirmProvider {
    fn confirm(&self, message: &str) -> bool;
}

/// Uses the browser's `window.confirm` dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl ConfirmProvider for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        match leptos::prelude::window().confirm_with_message(message) {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!("confirm dialog unavailable: {:?}", err);
                false
            }
        }
    }
}
