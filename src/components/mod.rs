//! UI Components
//!
//! Reusable Leptos components.

mod confirm_modal;
mod data_transfer;
mod list_card;
mod list_row;
mod theme_toggle;
mod vault_panel;

pub use confirm_modal::{ConfirmContext, ConfirmModal};
pub use data_transfer::DataTransfer;
pub use list_card::ListCard;
pub use list_row::{DragRow, ListRow};
pub use theme_toggle::ThemeToggle;
pub use vault_panel::VaultPanel;
