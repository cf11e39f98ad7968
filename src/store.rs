//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ItemSummary, User};

/// State shared across pages; everything else is page-local
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Found items shown on the list page, replaced on every refetch
    pub items: Vec<ItemSummary>,
    /// Logged-in user, if any
    pub user: Option<User>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the item list wholesale
pub fn store_set_items(store: &AppStore, items: Vec<ItemSummary>) {
    *store.items().write() = items;
}

pub fn store_set_user(store: &AppStore, user: Option<User>) {
    *store.user().write() = user;
}
