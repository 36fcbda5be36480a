//! Confirmation Modal Component
//!
//! Shared overlay for every destructive or informational prompt. Requests
//! go through `ConfirmContext`; without a mounted overlay they fall back to
//! the browser's native confirm.

use hub_core::{ConfirmAction, ConfirmDialog, ConfirmRequest, HubError, Outcome};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::dom;
use crate::storage::with_hub;
use crate::store::{store_refresh, store_touch, use_hub_store, HubStore};

const IMPORT_OK: &str = "Data imported successfully! The page will now refresh.";
const IMPORT_FAILED: &str = "Failed to import data. Please ensure it's a valid JSON file.";

/// Pending confirmation, provided via context
#[derive(Clone, Copy)]
pub struct ConfirmContext {
    dialog: RwSignal<ConfirmDialog>,
    host_mounted: RwSignal<bool>,
    /// Backup file waiting for the import confirmation
    picked: StoredValue<Option<web_sys::File>, LocalStorage>,
}

impl ConfirmContext {
    pub fn new() -> Self {
        Self {
            dialog: RwSignal::new(ConfirmDialog::new()),
            host_mounted: RwSignal::new(false),
            picked: StoredValue::new_local(None),
        }
    }

    /// Ask for confirmation; a newer request replaces a pending one.
    pub fn request(&self, store: HubStore, request: ConfirmRequest) {
        if !self.host_mounted.get_untracked() {
            if dom::native_confirm(&request.message) {
                self.run(store, request.action);
            }
            return;
        }
        self.dialog.update(|dialog| {
            dialog.show(request);
        });
    }

    /// Hold `file` and ask whether to import it; it is read only once accepted.
    pub fn request_import(&self, store: HubStore, file: web_sys::File) {
        self.picked.set_value(Some(file));
        self.request(store, ConfirmRequest::import());
    }

    fn accept(&self, store: HubStore) {
        let mut action = None;
        self.dialog.update(|d| action = d.confirm());
        if let Some(action) = action {
            self.run(store, action);
        }
    }

    fn dismiss(&self) {
        self.dialog.update(|d| d.cancel());
        self.picked.set_value(None);
    }

    /// Execute a confirmed action and apply its outcome to the page
    fn run(&self, store: HubStore, action: ConfirmAction) {
        match with_hub(|hub| hub.run(action)) {
            Ok(Outcome::ReadPickedFile) => self.read_picked(store),
            Ok(outcome) => apply_outcome(store, outcome),
            Err(HubError::ImportParse(e)) => {
                log::error!("[Confirm] import error: {}", e);
                dom::alert(IMPORT_FAILED);
            }
            Err(e) => log::warn!("[Confirm] action failed: {}", e),
        }
    }

    fn read_picked(&self, store: HubStore) {
        let mut picked = None;
        self.picked.update_value(|p| picked = p.take());
        let Some(file) = picked else {
            log::warn!("[Confirm] import accepted but no file is waiting");
            return;
        };

        let ctx = *self;
        spawn_local(async move {
            match JsFuture::from(file.text()).await {
                Ok(text) => {
                    let contents = text.as_string().unwrap_or_default();
                    log::debug!("[Confirm] read {} ({} bytes)", file.name(), contents.len());
                    ctx.run(store, ConfirmAction::Import { contents });
                }
                Err(e) => {
                    log::error!("[Confirm] could not read {}: {:?}", file.name(), e);
                    dom::alert(IMPORT_FAILED);
                }
            }
        });
    }
}

pub fn use_confirm() -> ConfirmContext {
    expect_context::<ConfirmContext>()
}

fn apply_outcome(store: HubStore, outcome: Outcome) {
    match outcome {
        Outcome::Nothing | Outcome::ReadPickedFile => {}
        Outcome::Rerender(lists) => store_touch(&store, &lists),
        Outcome::VaultReset => store_refresh(&store),
        Outcome::Reload(summary) => {
            log::info!("[Confirm] import applied {} keys", summary.applied);
            dom::alert(IMPORT_OK);
            dom::reload_page();
        }
    }
}

/// Overlay host; mount once per page
#[component]
pub fn ConfirmModal() -> impl IntoView {
    let confirm = use_confirm();
    let store = use_hub_store();

    confirm.host_mounted.set(true);
    on_cleanup(move || confirm.host_mounted.set(false));

    let is_open = move || confirm.dialog.with(ConfirmDialog::is_open);
    let field = move |pick: fn(&ConfirmRequest) -> &String| {
        confirm.dialog.with(|d| d.pending().map(|r| pick(r).clone()).unwrap_or_default())
    };

    view! {
        <div class=move || if is_open() { "modal-overlay active" } else { "modal-overlay" }>
            <div class="modal-content">
                <h3>{move || field(|r| &r.title)}</h3>
                <p>{move || field(|r| &r.message)}</p>
                <div class="modal-actions">
                    <button class="modal-btn confirm-btn" on:click=move |_| confirm.accept(store)>
                        {move || field(|r| &r.ok_label)}
                    </button>
                    <button
                        class="modal-btn cancel-btn"
                        on:click=move |_| confirm.dismiss()
                    >
                        {move || field(|r| &r.cancel_label)}
                    </button>
                </div>
            </div>
        </div>
    }
}
