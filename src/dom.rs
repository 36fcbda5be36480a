//! Window Helpers
//!
//! Thin wrappers over `web_sys::Window` calls whose failures are only
//! worth a log line.

use hub_core::{Page, Theme};

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.alert_with_message(message) {
            log::warn!("[Dom] alert failed: {:?}", e);
        }
    }
}

/// Blocking native confirmation
pub fn native_confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn reload_page() {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().reload() {
            log::error!("[Dom] reload failed: {:?}", e);
        }
    }
}

pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Toggle the `dark` class on `<body>`
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    if let Err(e) = body.class_list().toggle_with_force("dark", theme.is_dark()) {
        log::warn!("[Dom] failed to apply theme: {:?}", e);
    }
}

pub fn current_page() -> Page {
    let Some(win) = web_sys::window() else {
        return Page::default();
    };
    let location = win.location();
    let pathname = location.pathname().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    Page::from_location(&pathname, &hash)
}
