//! List Card Component
//!
//! Heading with count, add form, rows, view more/less, clear and the
//! last-updated footer for one list.

use hub_core::{
    BookmarkOperations, ConfirmRequest, HubError, InputField, ItemKind, ListType, ListView,
    ValidationError,
};
use leptos::prelude::*;

use crate::components::confirm_modal::use_confirm;
use crate::components::ListRow;
use crate::storage::with_hub;
use crate::store::{store_touch, use_hub_store, HubStateStoreFields};
use crate::timing::FieldFlash;

#[component]
pub fn ListCard(list: ListType) -> impl IntoView {
    let store = use_hub_store();
    let confirm = use_confirm();
    let flash = FieldFlash::new();
    let is_bookmark = list.kind() == ItemKind::Bookmark;

    // Expanded state is per card and survives re-renders
    let (expanded, set_expanded) = signal(false);
    let name = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let name_ref = NodeRef::<leptos::html::Input>::new();

    let card = Memo::new(move |_| -> ListView {
        let _ = store.revision().get();
        with_hub(|hub| hub.lists().view(list, expanded.get()))
    });

    let add = move || {
        let result = with_hub(|hub| {
            let lists = hub.lists();
            if is_bookmark {
                lists.add_bookmark(list, &name.get_untracked(), &url.get_untracked())
            } else {
                lists.add(list, &name.get_untracked())
            }
        });
        match result {
            Ok(affected) => {
                name.set(String::new());
                url.set(String::new());
                store_touch(&store, &affected);
                if let Some(input) = name_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
            Err(HubError::Validation(ValidationError::Blank(fields))) => flash.flag(fields),
            Err(HubError::Duplicate(dup)) => {
                confirm.request(store, ConfirmRequest::duplicate(dup));
                let mut fields = vec![InputField::Name];
                if is_bookmark { fields.push(InputField::Url); }
                flash.flag(fields);
            }
            Err(e) => log::warn!("[ListCard] add to {} failed: {}", list, e),
        }
    };

    let on_enter = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            add();
        }
    };

    let placeholder = if is_bookmark {
        "Bookmark name...".to_string()
    } else {
        format!("Add {}...", list.item_noun().to_lowercase())
    };

    view! {
        <div class="card">
            <h3>{move || card.with(|c| c.title.clone())}</h3>

            <div class="input-group">
                <input
                    type="text"
                    id=format!("{}-input", list.tag())
                    node_ref=name_ref
                    placeholder=placeholder
                    class=move || flash.class("list-input", InputField::Name)
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                    on:keydown=on_enter
                />
                <Show when=move || is_bookmark>
                    <input
                        type="text"
                        placeholder="https://..."
                        class=move || flash.class("list-input", InputField::Url)
                        prop:value=move || url.get()
                        on:input=move |ev| url.set(event_target_value(&ev))
                        on:keydown=on_enter
                    />
                </Show>
                <button on:click=move |_| add()>"Add"</button>
            </div>

            <ul class="item-list" id=format!("{}-list", list.tag())>
                <Show when=move || card.with(|c| c.empty_message.is_some())>
                    <li class="empty-message">
                        {move || card.with(|c| c.empty_message.unwrap_or_default())}
                    </li>
                </Show>
                <For
                    each=move || card.with(|c| c.items.clone().into_iter().enumerate().collect::<Vec<_>>())
                    key=|(index, item)| (*index, item.clone())
                    children=move |(_, item)| view! { <ListRow list=list item=item /> }
                />
            </ul>

            <Show when=move || card.with(|c| c.show_toggle)>
                <button class="view-more" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                    {move || card.with(|c| c.toggle_label)}
                </button>
            </Show>

            <div class="card-footer">
                <button
                    class="clear-btn"
                    on:click=move |_| confirm.request(store, ConfirmRequest::clear_list(list))
                >
                    "Clear All"
                </button>
                <span class="last-updated">{move || card.with(|c| c.last_updated.clone())}</span>
            </div>
        </div>
    }
}
