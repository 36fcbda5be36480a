//! List Repository
//!
//! Reads and writes whole lists under their storage keys and keeps the
//! "last updated" label in step with every save.

use crate::domain::{ListItem, ListType};

use super::clock::Clock;
use super::store::KeyValueStore;

pub const NEVER_UPDATED: &str = "Never";

/// Persistence for `ListType`-identified lists
#[derive(Clone, Copy)]
pub struct ListRepository<'a> {
    store: &'a dyn KeyValueStore,
    clock: &'a dyn Clock,
}

impl<'a> ListRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Load a list; an absent entry is an empty list.
    pub fn load(&self, list: ListType) -> Vec<ListItem> {
        let Some(raw) = self.store.get(list.storage_key()) else {
            return Vec::new();
        };
        match ListItem::decode_list(list, &raw) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("[ListRepository] {} holds unreadable data, treating as empty: {}", list.storage_key(), e);
                Vec::new()
            }
        }
    }

    /// Persist a list and stamp its last-updated key.
    pub fn save(&self, list: ListType, items: &[ListItem]) {
        match ListItem::encode_list(items) {
            Ok(json) => {
                self.store.set(list.storage_key(), &json);
                self.store.set(list.last_updated_key(), &self.clock.now_label());
                log::debug!("[ListRepository] saved {} ({} items)", list, items.len());
            }
            Err(e) => log::warn!("[ListRepository] failed to encode {}: {}", list, e),
        }
    }

    pub fn last_updated(&self, list: ListType) -> String {
        self.store
            .get(list.last_updated_key())
            .unwrap_or_else(|| NEVER_UPDATED.to_string())
    }
}
