//! Token Storage
//!
//! The bearer token is the only value persisted in `localStorage`.

use web_sys::Storage;

use crate::config::TOKEN_KEY;

fn local_storage() -> Option<Storage> {
    match web_sys::window().map(|w| w.local_storage()) {
        Some(Ok(storage)) => storage,
        Some(Err(err)) => {
            log::warn!("localStorage unavailable: {:?}", err);
            None
        }
        None => None,
    }
}

pub fn load_token() -> Option<String> {
    local_storage()
        .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        .filter(|t| !t.is_empty())
}

pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        if let Err(err) = storage.set_item(TOKEN_KEY, token) {
            log::error!("failed to persist token: {:?}", err);
        }
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
