//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. List contents
//! are not mirrored here: cards read them from storage, keyed on
//! `revision`.

use hub_core::{ListType, Page, Theme};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct HubState {
    /// Page being shown
    pub page: Page,
    pub theme: Theme,
    /// Bumped after stored data changes (increment to trigger re-render)
    pub revision: u32,
}

impl HubState {
    pub fn new(page: Page, theme: Theme) -> Self {
        Self { page, theme, revision: 0 }
    }
}

/// Type alias for the store
pub type HubStore = Store<HubState>;

/// Get the hub store from context
pub fn use_hub_store() -> HubStore {
    expect_context::<HubStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mark lists as changed so their cards re-read storage
pub fn store_touch(store: &HubStore, lists: &[ListType]) {
    if lists.is_empty() {
        return;
    }
    log::debug!("[Store] re-render {:?}", lists);
    *store.revision().write() += 1;
}

/// Mark everything as changed
pub fn store_refresh(store: &HubStore) {
    *store.revision().write() += 1;
}
