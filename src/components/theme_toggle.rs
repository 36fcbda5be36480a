//! Theme Toggle Component

use leptos::prelude::*;

use crate::storage::BrowserStore;
use crate::store::{use_hub_store, HubStateStoreFields};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_hub_store();

    let toggle = move |_| {
        let next = store.theme().get_untracked().toggled();
        next.save(&BrowserStore::local());
        *store.theme().write() = next;
    };

    view! {
        <button class="theme-toggle" title="Toggle theme" on:click=toggle>
            {move || if store.theme().get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
