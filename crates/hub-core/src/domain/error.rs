//! Domain Errors
//!
//! Every error is recovered locally by the action that raised it; none of
//! them are fatal to the page.

use std::fmt;

use thiserror::Error;

use super::list_type::{ItemKind, ListType};

/// Common result type for hub operations
pub type HubResult<T> = Result<T, HubError>;

/// Input field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Name,
    Url,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Name => f.write_str("name"),
            InputField::Url => f.write_str("url"),
        }
    }
}

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field is empty: {}", join_fields(.0))]
    Blank(Vec<InputField>),
    #[error("Please fill in both password fields.")]
    PasswordMissing,
    #[error("Password must be at least 4 characters long.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

impl ValidationError {
    pub fn flags(&self, field: InputField) -> bool {
        matches!(self, ValidationError::Blank(fields) if fields.contains(&field))
    }
}

fn join_fields(fields: &[InputField]) -> String {
    fields.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// A rejected insert or rename that would collide with an existing item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateEntry {
    pub list: ListType,
    pub during_edit: bool,
}

impl DuplicateEntry {
    pub fn title(&self) -> &'static str {
        match self.list.kind() {
            ItemKind::Bookmark => "Duplicate Bookmark",
            _ => "Duplicate Entry",
        }
    }

    pub fn message(&self) -> &'static str {
        match (self.list.kind(), self.during_edit) {
            (ItemKind::Bookmark, _) => "A bookmark with this name and URL already exists!",
            (_, true) => "An item with this name already exists!",
            (_, false) => "This item already exists in the list!",
        }
    }
}

/// Hub-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{}", .0.message())]
    Duplicate(DuplicateEntry),
    #[error("\"{name}\" is not in the {list} list")]
    NotFound { list: ListType, name: String },
    #[error("items of the {0} list cannot change completion status")]
    InvalidMove(ListType),
    #[error("Failed to import data: {0}")]
    ImportParse(String),
    #[error("unknown list type: {0}")]
    UnknownListType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_wording() {
        let add = DuplicateEntry { list: ListType::Projects, during_edit: false };
        assert_eq!(add.title(), "Duplicate Entry");
        assert_eq!(HubError::Duplicate(add).to_string(), "This item already exists in the list!");

        let edit = DuplicateEntry { list: ListType::Watching, during_edit: true };
        assert_eq!(edit.message(), "An item with this name already exists!");

        let bookmark = DuplicateEntry { list: ListType::BookmarksTools, during_edit: true };
        assert_eq!(bookmark.title(), "Duplicate Bookmark");
    }

    #[test]
    fn test_blank_flags_fields() {
        let err = ValidationError::Blank(vec![InputField::Url]);
        assert!(err.flags(InputField::Url));
        assert!(!err.flags(InputField::Name));
        assert_eq!(err.to_string(), "required field is empty: url");
    }
}
