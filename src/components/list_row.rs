//! List Row Component
//!
//! One item of a list card: display mode with drag handlers, or inline
//! edit mode.

use hub_core::{
    BookmarkOperations, ConfirmRequest, HubError, InputField, ItemKind, ListItem, ListType,
    ValidationError,
};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::confirm_modal::use_confirm;
use crate::storage::with_hub;
use crate::store::{store_touch, use_hub_store};
use crate::timing::FieldFlash;

/// Drag identity of a row; rows only accept drops from their own list
#[derive(Clone, Debug, PartialEq)]
pub struct DragRow {
    pub list: ListType,
    pub item: ListItem,
}

impl DragKey for DragRow {
    fn same_group(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

/// DnD signals shared by every card on the page
pub fn use_row_dnd() -> DndSignals<DragRow> {
    expect_context::<DndSignals<DragRow>>()
}

#[component]
pub fn ListRow(list: ListType, item: ListItem) -> impl IntoView {
    let editing = RwSignal::new(false);

    let display = {
        let item = item.clone();
        move || view! { <RowDisplay list=list item=item.clone() editing=editing /> }
    };
    let editor = move || view! { <RowEditor list=list item=item.clone() editing=editing /> };

    move || {
        if editing.get() {
            editor().into_any()
        } else {
            display().into_any()
        }
    }
}

#[component]
fn RowDisplay(list: ListType, item: ListItem, editing: RwSignal<bool>) -> impl IntoView {
    let store = use_hub_store();
    let confirm = use_confirm();
    let dnd = use_row_dnd();

    let key = DragRow { list, item: item.clone() };
    let on_mousedown = make_on_mousedown(dnd, key.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, key.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let row_class = {
        let key = key.clone();
        move || {
            let mut c = String::from("list-item");
            if dnd.is_dragging(&key) { c.push_str(" dragging"); }
            if dnd.is_drop_target(&key) { c.push_str(" drag-over"); }
            c
        }
    };

    let name = item.name().to_string();
    let completed = item.completed();

    let checkbox = (list.kind() == ItemKind::Anime).then(|| {
        let name = name.clone();
        view! {
            <input
                type="checkbox"
                class="item-checkbox"
                prop:checked=completed
                on:change=move |_| {
                    match with_hub(|hub| hub.lists().toggle_completion(&name, list)) {
                        Ok(affected) => store_touch(&store, &affected),
                        Err(e) => log::warn!("[ListRow] toggle failed: {}", e),
                    }
                }
            />
        }
    });

    let text = match item.url() {
        Some(url) => view! {
            <a href=url.to_string() target="_blank">{name.clone()}</a>
        }.into_any(),
        None => name.clone().into_any(),
    };

    let on_delete = {
        let item = item.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            confirm.request(store, ConfirmRequest::delete_item(list, item.clone()));
        }
    };

    view! {
        <li
            class=row_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {checkbox}
            <span class=if completed { "item-text completed-item-text" } else { "item-text" }>
                {text}
            </span>
            <div class="item-actions">
                <button
                    class="action-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        editing.set(true);
                    }
                >
                    "Edit"
                </button>
                <button class="action-btn" on:click=on_delete>"Delete"</button>
            </div>
        </li>
    }
}

#[component]
fn RowEditor(list: ListType, item: ListItem, editing: RwSignal<bool>) -> impl IntoView {
    let store = use_hub_store();
    let confirm = use_confirm();
    let flash = FieldFlash::new();
    let is_bookmark = list.kind() == ItemKind::Bookmark;

    let name = RwSignal::new(item.name().to_string());
    let url = RwSignal::new(item.url().unwrap_or_default().to_string());
    let name_ref = NodeRef::<leptos::html::Input>::new();

    // focus once mounted
    Effect::new(move |_| {
        if let Some(input) = name_ref.get() {
            let _ = input.focus();
        }
    });

    let save = move |_| {
        let result = with_hub(|hub| {
            let lists = hub.lists();
            if is_bookmark {
                lists.edit_bookmark(list, &item, &name.get_untracked(), &url.get_untracked())
            } else {
                lists.edit(list, &item, &name.get_untracked())
            }
        });
        match result {
            Ok(affected) => {
                editing.set(false);
                store_touch(&store, &affected);
            }
            Err(HubError::Validation(ValidationError::Blank(fields))) => flash.flag(fields),
            Err(HubError::Duplicate(dup)) => {
                confirm.request(store, ConfirmRequest::duplicate(dup));
                let mut fields = vec![InputField::Name];
                if is_bookmark { fields.push(InputField::Url); }
                flash.flag(fields);
            }
            Err(e) => {
                log::warn!("[ListRow] edit failed: {}", e);
                editing.set(false);
                store_touch(&store, &[list]);
            }
        }
    };

    view! {
        <li class="list-item editing-item">
            <input
                type="text"
                node_ref=name_ref
                class=move || flash.class("edit-input", InputField::Name)
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <Show when=move || is_bookmark>
                <input
                    type="text"
                    class=move || flash.class("edit-input", InputField::Url)
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
            </Show>
            <div class="item-actions">
                <button on:click=save>"Save"</button>
                <button on:click=move |_| editing.set(false)>"Cancel"</button>
            </div>
        </li>
    }
}
