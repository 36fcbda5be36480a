//! Confirmation Requests
//!
//! A confirmation carries its wording and the action to run when accepted.
//! Actions are plain data so they can wait in UI state and be executed by
//! `Hub::run`.

use crate::domain::{capitalize, DuplicateEntry, ItemKind, ListItem, ListType};

/// Work to perform once the user confirms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Informational dialog, nothing to run
    Dismiss,
    DeleteItem { list: ListType, item: ListItem },
    ClearList(ListType),
    /// Read the backup file the user picked, then import it
    ImportPicked,
    /// Overwrite stored data with an exported document
    Import { contents: String },
    ResetVault,
}

/// Everything the confirmation overlay needs to render one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub ok_label: String,
    pub cancel_label: String,
    pub action: ConfirmAction,
}

impl ConfirmRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>, action: ConfirmAction) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ok_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            action,
        }
    }

    pub fn with_labels(mut self, ok: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.ok_label = ok.into();
        self.cancel_label = cancel.into();
        self
    }

    pub fn delete_item(list: ListType, item: ListItem) -> Self {
        let title = format!("Delete {}", list.item_noun());
        let message = format!("Are you sure you want to delete \"{}\"?", item.name());
        Self::new(title, message, ConfirmAction::DeleteItem { list, item }).with_labels("Delete", "Cancel")
    }

    pub fn clear_list(list: ListType) -> Self {
        let label = list.short_label();
        let (title, message) = match list.kind() {
            ItemKind::Bookmark => (
                format!("Clear All {} Bookmarks", capitalize(label)),
                format!("Are you sure you want to clear all {label} bookmarks? This action cannot be undone."),
            ),
            _ => (
                format!("Clear All {}", capitalize(label)),
                format!(
                    "Are you sure you want to clear all items from the {label} list? This action cannot be undone."
                ),
            ),
        };
        Self::new(title, message, ConfirmAction::ClearList(list)).with_labels("Yes, Clear All", "No, Keep It")
    }

    /// Informational duplicate notice (OK and Dismiss both just close)
    pub fn duplicate(entry: DuplicateEntry) -> Self {
        Self::new(entry.title(), entry.message(), ConfirmAction::Dismiss).with_labels("OK", "Dismiss")
    }

    /// Asked before the picked file is even read
    pub fn import() -> Self {
        Self::new(
            "Confirm Data Import",
            "Importing data will overwrite all your existing lists and bookmarks. Are you sure you want to proceed?",
            ConfirmAction::ImportPicked,
        )
        .with_labels("Yes, Overwrite", "No, Cancel")
    }

    pub fn reset_vault() -> Self {
        Self::new(
            "Reset Vault and Data",
            "This will permanently delete ALL your vault notes and links and require you to set a new password. This action cannot be undone. Are you sure you want to proceed?",
            ConfirmAction::ResetVault,
        )
        .with_labels("Yes, Delete & Reset", "No, Go Back")
    }
}

/// Single-slot confirmation state.
///
/// A new request replaces a pending one (last call wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmDialog {
    pending: Option<ConfirmRequest>,
}

impl ConfirmDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `request`, returning whatever it displaced.
    pub fn show(&mut self, request: ConfirmRequest) -> Option<ConfirmRequest> {
        let displaced = self.pending.replace(request);
        if let Some(old) = &displaced {
            log::debug!("[Confirm] \"{}\" replaced by a newer prompt", old.title);
        }
        displaced
    }

    pub fn pending(&self) -> Option<&ConfirmRequest> {
        self.pending.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Close and hand back the action to run
    pub fn confirm(&mut self) -> Option<ConfirmAction> {
        self.pending.take().map(|request| request.action)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
