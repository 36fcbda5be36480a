//! Pages
//!
//! The page selected from the location decides which cards render.

use hub_core::{ListType, Page};
use leptos::prelude::*;

use crate::components::{DataTransfer, ListCard, VaultPanel};
use crate::storage::with_hub;
use crate::store::{use_hub_store, HubStateStoreFields};

#[component]
pub fn PageView() -> impl IntoView {
    let store = use_hub_store();

    move || match store.page().get() {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Vault => view! { <VaultPanel /> }.into_any(),
        page => view! { <ListPage lists=page.lists() /> }.into_any(),
    }
}

#[component]
fn ListPage(lists: &'static [ListType]) -> impl IntoView {
    view! {
        <div class="card-grid">
            {lists.iter().map(|&list| view! { <ListCard list=list /> }).collect_view()}
        </div>
    }
}

/// Counts per list and the backup controls
#[component]
fn HomePage() -> impl IntoView {
    let store = use_hub_store();

    let summary = Memo::new(move |_| {
        let _ = store.revision().get();
        with_hub(|hub| {
            let lists = hub.lists();
            Page::summary_lists()
                .into_iter()
                .map(|list| (list.title(), lists.items(list).len()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <section class="hero">
            <h1>"My Hub"</h1>
            <p>"Projects, anime, bookmarks and a private vault, kept in this browser."</p>
        </section>
        <div class="card summary">
            <h3>"At a Glance"</h3>
            <ul class="item-list">
                {move || summary.get().into_iter().map(|(title, count)| view! {
                    <li>
                        <span class="item-text">{title}</span>
                        <span class="item-count">{count}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
        <DataTransfer />
    }
}
