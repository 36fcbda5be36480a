//! My Hub Frontend App
//!
//! Navigation, page switch, theme and the shared confirmation overlay.

use hub_core::{Page, Theme};
use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ConfirmContext, ConfirmModal, DragRow, ThemeToggle};
use crate::dom;
use crate::pages::PageView;
use crate::storage::{with_hub, BrowserStore};
use crate::store::{store_touch, HubState, HubStateStoreFields};

use leptos_dragdrop::*;

#[component]
pub fn App() -> impl IntoView {
    let theme = Theme::load(&BrowserStore::local(), dom::prefers_dark());
    let store = Store::new(HubState::new(dom::current_page(), theme));

    // Provide context to all children
    provide_context(store);
    provide_context(ConfirmContext::new());

    // One DnD state for every card; rows of other lists reject drops
    let dnd = create_dnd_signals::<DragRow>();
    provide_context(dnd);
    bind_global_mouseup(dnd, move |dragged: DragRow, target: DragRow| {
        log::debug!("[DND] drop \"{}\" onto \"{}\" in {}", dragged.item.name(), target.item.name(), target.list);
        let affected = with_hub(|hub| {
            hub.lists().reorder(dragged.list, &dragged.item, target.list, &target.item)
        });
        if let Some(affected) = affected {
            store_touch(&store, &affected);
        }
    });

    Effect::new(move |_| dom::apply_theme(store.theme().get()));

    let nav = window_event_listener(ev::hashchange, move |_| {
        let page = dom::current_page();
        log::debug!("[App] navigate to {}", page);
        *store.page().write() = page;
    });
    on_cleanup(move || nav.remove());

    view! {
        <header class="navbar">
            <a class="logo" href=Page::Home.href()>"My Hub"</a>
            <nav class="nav-links">
                {Page::ALL.iter().map(|page| view! {
                    <a href=page.href()>{page.title()}</a>
                }).collect_view()}
            </nav>
            <ThemeToggle />
        </header>

        <main class="container">
            <PageView />
        </main>

        <ConfirmModal />
    }
}
