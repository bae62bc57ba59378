//! Global Application State Store
//!
//! The item list is an immutable value: every operation builds a new list and
//! leaves the old one untouched. The reactive `AppStore` wraps it for the UI.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::confirm::ConfirmProvider;
use crate::models::{Item, ItemId, Quantity, SortMode};

pub const CLEAR_PROMPT: &str = "Are you sure you want to delete all items?";

/// Ordered, immutable collection of items in input order
#[derive(Clone, Debug, Default)]
pub struct ItemList {
    items: Arc<[Item]>,
}

impl PartialEq for ItemList {
    fn eq(&self, other: &Self) -> bool {
        self.items[..] == other.items[..]
    }
}

impl From<Vec<Item>> for ItemList {
    fn from(items: Vec<Item>) -> Self {
        Self { items: items.into() }
    }
}

impl ItemList {
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// True when both lists share storage, i.e. nothing changed between them
    pub fn same_as(&self, other: &ItemList) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Id for the next item: one past the largest id in use
    pub fn next_id(&self) -> ItemId {
        let max = self.items.iter().map(|item| item.id.0).max().unwrap_or(0);
        ItemId(max + 1)
    }

    /// Append a new unpacked item. Blank descriptions leave the list as is.
    pub fn add(&self, description: &str, quantity: Quantity) -> (ItemList, Option<Item>) {
        match Item::new(self.next_id(), description, quantity) {
            Ok(item) => {
                tracing::debug!("add item #{} {:?} x{}", item.id, item.description, item.quantity);
                let items: Vec<Item> = self.iter().cloned().chain(std::iter::once(item.clone())).collect();
                (items.into(), Some(item))
            }
            Err(err) => {
                tracing::debug!("add rejected: {}", err);
                (self.clone(), None)
            }
        }
    }

    /// Flip the packed flag of `id`. Unknown ids are ignored.
    pub fn toggle(&self, id: ItemId) -> ItemList {
        if self.get(id).is_none() {
            tracing::debug!("toggle: no item #{}", id);
            return self.clone();
        }
        self.items
            .iter()
            .map(|item| if item.id == id { item.toggled() } else { item.clone() })
            .collect::<Vec<_>>()
            .into()
    }

    /// Remove `id`. Unknown ids are ignored.
    pub fn delete(&self, id: ItemId) -> ItemList {
        if self.get(id).is_none() {
            tracing::debug!("delete: no item #{}", id);
            return self.clone();
        }
        self.items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect::<Vec<_>>()
            .into()
    }

    /// Empty the list, but only if the user agrees
    pub fn clear(&self, confirm: &dyn ConfirmProvider) -> ItemList {
        if !confirm.confirm(CLEAR_PROMPT) {
            tracing::debug!("clear cancelled");
            return self.clone();
        }
        if self.is_empty() {
            return self.clone();
        }
        tracing::info!("cleared {} items", self.len());
        ItemList::default()
    }
}

/// Everything the user can do to the list
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Add { description: String, quantity: Quantity },
    Toggle(ItemId),
    Delete(ItemId),
    ClearAll,
    SetSortMode(SortMode),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Items in input order
    pub items: ItemList,
    /// Current display ordering
    pub sort_mode: SortMode,
}

impl AppState {
    pub fn new(seed: Vec<Item>) -> Self {
        Self {
            items: seed.into(),
            sort_mode: SortMode::default(),
        }
    }
}

/// Single state-update entry point
pub fn reduce(state: &AppState, action: Action, confirm: &dyn ConfirmProvider) -> AppState {
    match action {
        Action::Add { description, quantity } => AppState {
            items: state.items.add(&description, quantity).0,
            ..state.clone()
        },
        Action::Toggle(id) => AppState {
            items: state.items.toggle(id),
            ..state.clone()
        },
        Action::Delete(id) => AppState {
            items: state.items.delete(id),
            ..state.clone()
        },
        Action::ClearAll => AppState {
            items: state.items.clear(confirm),
            ..state.clone()
        },
        Action::SetSortMode(sort_mode) => AppState {
            sort_mode,
            ..state.clone()
        },
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Run `action` against the store, writing back only the fields that changed.
/// Returns whether anything changed.
pub fn dispatch(store: &AppStore, action: Action, confirm: &dyn ConfirmProvider) -> bool {
    let current = store.get_untracked();
    let next = reduce(&current, action, confirm);

    let items_changed = !next.items.same_as(&current.items);
    let sort_changed = next.sort_mode != current.sort_mode;

    if items_changed {
        *store.items().write() = next.items;
    }
    if sort_changed {
        *store.sort_mode().write() = next.sort_mode;
    }
    items_changed || sort_changed
}
