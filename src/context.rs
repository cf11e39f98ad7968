//! Application Context
//!
//! Services the composition root hands to every page via the Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::gateway::ItemGateway;
use crate::models::User;
use crate::router::Router;
use crate::storage;
use crate::store::{store_set_user, AppStateStoreFields, AppStore};

/// Authenticated user and the persisted bearer token
#[derive(Clone, Copy)]
pub struct Session {
    store: AppStore,
}

impl Session {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.user().get()
    }

    pub fn login(&self, user: User) {
        log::info!("signed in as {}", user.email);
        store_set_user(&self.store, Some(user));
    }

    /// Persist a freshly issued token
    pub fn remember_token(&self, token: &str) {
        storage::save_token(token);
    }

    pub fn token(&self) -> Option<String> {
        storage::load_token()
    }

    pub fn logout(&self) {
        storage::clear_token();
        store_set_user(&self.store, None);
    }
}

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: AppConfig,
    pub gateway: ItemGateway,
    pub session: Session,
    pub router: Router,
}

impl AppContext {
    pub fn new(config: AppConfig, store: AppStore, router: Router) -> Self {
        let session = Session::new(store);
        Self {
            config,
            gateway: ItemGateway::new(config, store, session),
            session,
            router,
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
