//! Export / Import
//!
//! Moves the known storage keys to and from a single JSON document.
//! Import is a true overwrite: every known key is removed before the
//! document's recognized keys are written back.

use serde_json::{Map, Value};

use crate::domain::{HubError, HubResult};
use crate::repository::KeyValueStore;

/// Storage keys covered by export and import
pub const EXPORT_KEYS: [&str; 16] = [
    "watchingList",
    "watchingLastUpdated",
    "completedList",
    "completedLastUpdated",
    "projectsList",
    "projectsLastUpdated",
    "upcomingList",
    "upcomingLastUpdated",
    "accountsList",
    "accountsLastUpdated",
    "notesList",
    "notesLastUpdated",
    "bookmarks_tools",
    "bookmarks_tools_lastUpdated",
    "bookmarks_entertainment",
    "bookmarks_entertainment_lastUpdated",
];

pub const EXPORT_FILE_PREFIX: &str = "my_hub_data_";

/// Result of a successful import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    /// Recognized keys written
    pub applied: usize,
    /// Keys in the document that were skipped
    pub ignored: usize,
}

/// Collect every present key; values that parse as JSON are embedded as
/// JSON, anything else as a plain string.
pub fn export_document(store: &dyn KeyValueStore) -> Map<String, Value> {
    EXPORT_KEYS
        .iter()
        .filter_map(|&key| {
            let raw = store.get(key)?;
            let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
            Some((key.to_string(), value))
        })
        .collect()
}

/// Export document as pretty-printed JSON (2-space indent)
pub fn export_json(store: &dyn KeyValueStore) -> String {
    format!("{:#}", Value::Object(export_document(store)))
}

/// `my_hub_data_<date>.json`
pub fn export_filename(date: &str) -> String {
    format!("{EXPORT_FILE_PREFIX}{date}.json")
}

/// Replace stored data with the contents of an exported document.
///
/// Nothing is touched unless `contents` parses as a JSON object.
pub fn import_json(store: &dyn KeyValueStore, contents: &str) -> HubResult<ImportSummary> {
    let document: Value =
        serde_json::from_str(contents).map_err(|e| HubError::ImportParse(e.to_string()))?;
    let Value::Object(entries) = document else {
        return Err(HubError::ImportParse("expected a JSON object at the top level".to_string()));
    };

    for key in EXPORT_KEYS {
        store.remove(key);
    }

    let mut summary = ImportSummary::default();
    for (key, value) in entries {
        if !EXPORT_KEYS.contains(&key.as_str()) {
            log::warn!("[Transfer] ignoring unknown key {key}");
            summary.ignored += 1;
            continue;
        }
        let raw = match value {
            Value::String(s) => s,
            other => other.to_string(),
        };
        store.set(&key, &raw);
        summary.applied += 1;
    }

    log::info!("[Transfer] imported {} keys ({} ignored)", summary.applied, summary.ignored);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ListType;
    use crate::repository::MemoryStore;

    #[test]
    fn test_export_keys_match_list_storage() {
        let from_lists: Vec<&str> = [
            ListType::Watching,
            ListType::Completed,
            ListType::Projects,
            ListType::Upcoming,
            ListType::Accounts,
            ListType::Notes,
            ListType::BookmarksTools,
            ListType::BookmarksEntertainment,
        ]
        .iter()
        .flat_map(|t| [t.storage_key(), t.last_updated_key()])
        .collect();
        assert_eq!(from_lists, EXPORT_KEYS.to_vec());
    }

    #[test]
    fn test_export_parses_json_and_keeps_raw_strings() {
        let store = MemoryStore::with_entries([
            ("projectsList", r#"["A","B"]"#),
            ("projectsLastUpdated", "Jun 5, 2025, 3:04 PM"),
            ("VAULT_PASSWORD", "secret"),
        ]);

        let doc = export_document(&store);

        assert_eq!(doc.len(), 2);
        assert_eq!(doc["projectsList"], serde_json::json!(["A", "B"]));
        assert_eq!(doc["projectsLastUpdated"], Value::String("Jun 5, 2025, 3:04 PM".into()));
        assert!(!doc.contains_key("VAULT_PASSWORD"));
    }

    #[test]
    fn test_export_json_is_indented() {
        let store = MemoryStore::with_entries([("notesList", "[]")]);
        assert_eq!(export_json(&store), "{\n  \"notesList\": []\n}");
    }

    #[test]
    fn test_export_json_nests_lists_and_keeps_labels_as_strings() {
        let store = MemoryStore::with_entries([
            ("projectsList", r#"["a"]"#),
            ("projectsLastUpdated", "Jun 5, 2025, 3:04 PM"),
        ]);
        assert_eq!(
            export_json(&store),
            "{\n  \"projectsLastUpdated\": \"Jun 5, 2025, 3:04 PM\",\n  \"projectsList\": [\n    \"a\"\n  ]\n}"
        );
    }

    #[test]
    fn test_filename() {
        assert_eq!(export_filename("2025-06-05"), "my_hub_data_2025-06-05.json");
    }

    #[test]
    fn test_import_overwrites_known_keys() {
        let store = MemoryStore::with_entries([
            ("projectsList", r#"["old"]"#),
            ("upcomingList", r#"["gone after import"]"#),
            ("theme", "dark"),
        ]);

        let summary = import_json(
            &store,
            r#"{"projectsList":["new"],"projectsLastUpdated":"Jun 5, 2025, 3:04 PM","mystery":1}"#,
        )
        .unwrap();

        assert_eq!(summary, ImportSummary { applied: 2, ignored: 1 });
        assert_eq!(store.get("projectsList").as_deref(), Some(r#"["new"]"#));
        assert_eq!(store.get("projectsLastUpdated").as_deref(), Some("Jun 5, 2025, 3:04 PM"));
        assert!(store.get("upcomingList").is_none());
        assert!(store.get("mystery").is_none());
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_import_parse_failure_changes_nothing() {
        let store = MemoryStore::with_entries([("projectsList", r#"["keep"]"#)]);

        assert!(matches!(import_json(&store, "{not json"), Err(HubError::ImportParse(_))));
        assert!(matches!(import_json(&store, "[1,2]"), Err(HubError::ImportParse(_))));
        assert_eq!(store.get("projectsList").as_deref(), Some(r#"["keep"]"#));
    }
}
