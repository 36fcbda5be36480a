//! My Hub Core
//!
//! Platform-free logic behind the My Hub dashboard: list storage and
//! editing, bookmarks, the vault password gate, confirmation prompts and
//! export/import. Everything runs against the `KeyValueStore` seam so it
//! can be driven by browser storage or by `MemoryStore` in tests.

pub mod confirm;
pub mod domain;
pub mod engine;
pub mod hub;
pub mod page;
pub mod repository;
pub mod theme;
pub mod transfer;
pub mod vault;

pub use confirm::{ConfirmAction, ConfirmDialog, ConfirmRequest};
pub use domain::{
    DuplicateEntry, HubError, HubResult, InputField, ItemKind, ListItem, ListType, ValidationError,
};
pub use engine::{BookmarkOperations, ListEngine, ListView, VISIBLE_CAP};
pub use hub::{Hub, Outcome};
pub use page::Page;
pub use repository::{Clock, FixedClock, KeyValueStore, MemoryStore, SystemClock};
pub use theme::Theme;
pub use transfer::ImportSummary;
pub use vault::{VaultError, VaultGate, VaultState};
