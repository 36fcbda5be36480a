//! Data Transfer Component
//!
//! Export and import buttons of the home page.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::components::confirm_modal::use_confirm;
use crate::dom;
use crate::storage::with_hub;
use crate::store::use_hub_store;

const EXPORT_OK: &str = "Data exported successfully!";

#[component]
pub fn DataTransfer() -> impl IntoView {
    let store = use_hub_store();
    let confirm = use_confirm();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_file_picked = move |_| {
        let Some(input) = file_ref.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // clear the picker so the same file can be chosen again
        input.set_value("");

        log::debug!("[Transfer] picked {}", file.name());
        confirm.request_import(store, file);
    };

    view! {
        <div class="card data-transfer">
            <h3>"Backup"</h3>
            <div class="data-actions">
                <button on:click=move |_| export_data()>"Export Data"</button>
                <button on:click=move |_| {
                    if let Some(input) = file_ref.get_untracked() {
                        input.click();
                    }
                }>
                    "Import Data"
                </button>
                <input
                    type="file"
                    accept=".json,application/json"
                    style="display: none;"
                    node_ref=file_ref
                    on:change=on_file_picked
                />
            </div>
        </div>
    }
}

/// Trigger the download; success is reported once it has been handed to the browser.
fn export_data() {
    let (json, filename) = with_hub(|hub| (hub.export_json(), hub.export_filename()));
    match download(&filename, &json) {
        Ok(()) => log::info!("[Transfer] exported {}", filename),
        Err(e) => log::error!("[Transfer] download of {} failed: {:?}", filename, e),
    }
    dom::alert(EXPORT_OK);
}

/// Save `contents` through a temporary download link
fn download(filename: &str, contents: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)
}
