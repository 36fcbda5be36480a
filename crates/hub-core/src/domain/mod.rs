//! Domain Layer
//!
//! List types, items and errors. No storage or UI concerns here.

mod error;
mod item;
mod list_type;

pub use error::{DuplicateEntry, HubError, HubResult, InputField, ValidationError};
pub use item::ListItem;
pub use list_type::{ItemKind, ListType};

pub(crate) use list_type::capitalize;
