//! Browser Storage
//!
//! `localStorage` / `sessionStorage` behind the core `KeyValueStore` trait.
//! Handles are created on demand: `web_sys::Storage` cannot live in
//! reactive context.

use hub_core::{Hub, KeyValueStore, SystemClock};

/// Web storage handle; missing storage turns every call into a no-op
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[Storage] localStorage unavailable, nothing will persist");
        }
        Self { storage }
    }

    pub fn session() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[Storage] sessionStorage unavailable");
        }
        Self { storage }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::error!("[Storage] failed to write {}: {:?}", key, e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.remove_item(key) {
                log::error!("[Storage] failed to remove {}: {:?}", key, e);
            }
        }
    }
}

/// Run `f` against a hub backed by browser storage and the system clock
pub fn with_hub<R>(f: impl FnOnce(Hub<'_>) -> R) -> R {
    let local = BrowserStore::local();
    let session = BrowserStore::session();
    let clock = SystemClock;
    f(Hub::new(&local, &session, &clock))
}
