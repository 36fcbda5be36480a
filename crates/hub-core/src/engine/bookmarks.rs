//! Bookmark Operations
//!
//! Bookmark lists hold `{name, url}` pairs. Adding and editing take both
//! fields; duplicates are detected on the pair. Delete, clear, reorder and
//! view go through the generic engine unchanged.

use crate::domain::{HubResult, ItemKind, ListItem, ListType};

use super::lists::ListEngine;

/// Extension for bookmark lists
pub trait BookmarkOperations {
    /// Append a bookmark built from raw name/url input
    fn add_bookmark(&self, list: ListType, name: &str, url: &str) -> HubResult<Vec<ListType>>;

    /// Replace `original` with a new name/url pair
    fn edit_bookmark(
        &self,
        list: ListType,
        original: &ListItem,
        name: &str,
        url: &str,
    ) -> HubResult<Vec<ListType>>;
}

impl BookmarkOperations for ListEngine<'_> {
    fn add_bookmark(&self, list: ListType, name: &str, url: &str) -> HubResult<Vec<ListType>> {
        debug_assert_eq!(list.kind(), ItemKind::Bookmark);
        self.add_entry(list, name, Some(url))
    }

    fn edit_bookmark(
        &self,
        list: ListType,
        original: &ListItem,
        name: &str,
        url: &str,
    ) -> HubResult<Vec<ListType>> {
        debug_assert_eq!(list.kind(), ItemKind::Bookmark);
        self.edit_entry(list, original, name, Some(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DuplicateEntry, HubError, InputField, ValidationError};
    use crate::repository::{FixedClock, KeyValueStore, MemoryStore};

    const TOOLS: ListType = ListType::BookmarksTools;

    fn clock() -> FixedClock {
        FixedClock::new("Jun 5, 2025, 3:04 PM", "2025-06-05")
    }

    #[test]
    fn test_add_bookmark_stores_pair() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);

        engine.add_bookmark(TOOLS, " Docs ", " https://docs.rs ").unwrap();

        assert_eq!(engine.items(TOOLS), vec![ListItem::bookmark("Docs", "https://docs.rs")]);
        assert_eq!(
            store.get("bookmarks_tools_lastUpdated").as_deref(),
            Some("Jun 5, 2025, 3:04 PM")
        );
    }

    #[test]
    fn test_blank_fields_are_flagged_together() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);

        let err = engine.add_bookmark(TOOLS, "", "  ").unwrap_err();
        assert_eq!(
            err,
            HubError::Validation(ValidationError::Blank(vec![InputField::Name, InputField::Url]))
        );
    }

    #[test]
    fn test_duplicate_detection_uses_name_and_url() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        engine.add_bookmark(TOOLS, "Docs", "https://a").unwrap();

        // same name, different url is fine
        engine.add_bookmark(TOOLS, "Docs", "https://b").unwrap();

        let err = engine.add_bookmark(TOOLS, "Docs", "https://a").unwrap_err();
        assert_eq!(err, HubError::Duplicate(DuplicateEntry { list: TOOLS, during_edit: false }));
        assert_eq!(engine.items(TOOLS).len(), 2);
    }

    #[test]
    fn test_edit_bookmark_replaces_matching_pair_only() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        engine.add_bookmark(TOOLS, "Docs", "https://a").unwrap();
        engine.add_bookmark(TOOLS, "Docs", "https://b").unwrap();

        engine
            .edit_bookmark(TOOLS, &ListItem::bookmark("Docs", "https://b"), "Docs B", "https://b")
            .unwrap();

        assert_eq!(
            engine.items(TOOLS),
            vec![ListItem::bookmark("Docs", "https://a"), ListItem::bookmark("Docs B", "https://b")]
        );
    }

    #[test]
    fn test_edit_bookmark_rejects_existing_pair() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        engine.add_bookmark(TOOLS, "A", "https://a").unwrap();
        engine.add_bookmark(TOOLS, "B", "https://b").unwrap();

        let err = engine
            .edit_bookmark(TOOLS, &ListItem::bookmark("B", "https://b"), "A", "https://a")
            .unwrap_err();
        assert!(matches!(err, HubError::Duplicate(_)));

        // unchanged pair saves without complaint
        assert!(engine
            .edit_bookmark(TOOLS, &ListItem::bookmark("B", "https://b"), "B", "https://b")
            .is_ok());
    }

    #[test]
    fn test_delete_and_reorder_use_pair_identity() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        engine.add_bookmark(TOOLS, "Docs", "https://a").unwrap();
        engine.add_bookmark(TOOLS, "Docs", "https://b").unwrap();
        engine.add_bookmark(TOOLS, "Crates", "https://c").unwrap();

        engine
            .reorder(TOOLS, &ListItem::bookmark("Crates", "https://c"), TOOLS, &ListItem::bookmark("Docs", "https://a"))
            .unwrap();
        engine.delete(TOOLS, &ListItem::bookmark("Docs", "https://b"));

        assert_eq!(
            engine.items(TOOLS),
            vec![ListItem::bookmark("Crates", "https://c"), ListItem::bookmark("Docs", "https://a")]
        );
    }

    #[test]
    fn test_bookmark_lists_do_not_share_entries() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);
        let (tools, fun) = (TOOLS, ListType::BookmarksEntertainment);

        engine.add_bookmark(tools, "X", "https://x").unwrap();
        engine.add_bookmark(fun, "X", "https://x").unwrap();

        assert_eq!(engine.view(fun, false).title, "Entertainment (1)");
    }

    #[test]
    fn test_generic_add_on_bookmark_list_requires_url() {
        let store = MemoryStore::new();
        let clock = clock();
        let engine = ListEngine::new(&store, &clock);

        let err = engine.add(TOOLS, "Docs").unwrap_err();
        assert_eq!(err, HubError::Validation(ValidationError::Blank(vec![InputField::Url])));
    }
}
